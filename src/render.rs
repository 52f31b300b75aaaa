//! Legal Draft Renderer
//!
//! Drafts arrive either as plain text or as a JSON object keyed by section
//! name. JSON drafts are laid out as display text, section by section;
//! anything else is shown as-is.

use serde_json::{Map, Value};

/// Top-level sections in display order, after the party blocks
const BODY_SECTIONS: &[&str] = &[
    "to",
    "Honorable",
    "JUDGES",
    "Honorable_Court",
    "Petition_of",
    "Petitioner_Abovenamed",
    "Respectfully",
];

const PARTY_FIELDS: &[&str] = &["name", "father_name", "age", "residence"];

const ADVOCATE_FIELDS: &[&str] = &[
    "Petition_drawn",
    "Advocate_name",
    "Advocate_address",
    "Advocate_contact",
    "Advocate_email",
];

const POINT_COUNT: usize = 13;
const PRAYER_POINT_COUNT: usize = 6;

/// Lay out a draft for display
///
/// Returns `text` unchanged when it is not a JSON object.
pub fn render_legal_document(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => render_sections(&fields).join("\n\n"),
        Ok(_) => text.to_string(),
        Err(e) => {
            log::debug!("draft is not structured JSON ({}), showing raw text", e);
            text.to_string()
        }
    }
}

fn render_sections(data: &Map<String, Value>) -> Vec<String> {
    let mut sections = Vec::new();

    sections.extend(field(data, "Case").map(|s| s.to_uppercase()));
    sections.extend(field(data, "court").map(|s| s.to_uppercase()));
    sections.extend(field(data, "petition_no"));
    sections.extend(block(data, "petitioner", PARTY_FIELDS));
    sections.extend(field(data, "Versus"));
    sections.extend(block(data, "respondent", PARTY_FIELDS));
    sections.extend(field(data, "act").map(|act| format!("Under {}", act)));
    sections.push("AND".to_string());
    sections.extend(field(data, "FamilyCourtsAct"));
    sections.push("AND".to_string());
    sections.extend(field(data, "Divorce"));

    for key in BODY_SECTIONS {
        sections.extend(field(data, key));
    }

    for n in 1..=POINT_COUNT {
        sections.extend(field(data, &format!("Point_{}", n)));
    }

    sections.extend(prayer(data));
    sections.extend(block(data, "Advocate_details", ADVOCATE_FIELDS));

    if let Some(Value::Object(verification)) = data.get("verification") {
        sections.extend(field(verification, "verification_text"));
    }

    sections
}

/// Non-empty display text of `key`
fn field(data: &Map<String, Value>, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Nested object rendered one field per line
fn block(data: &Map<String, Value>, key: &str, fields: &[&str]) -> Option<String> {
    let Some(Value::Object(nested)) = data.get(key) else {
        return None;
    };

    let lines: Vec<String> = fields.iter().filter_map(|f| field(nested, f)).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn prayer(data: &Map<String, Value>) -> Option<String> {
    let Some(Value::Object(prayer)) = data.get("Prayer") else {
        return None;
    };

    let lines: Vec<String> = std::iter::once("prayer_heading".to_string())
        .chain((1..=PRAYER_POINT_COUNT).map(|n| format!("prayer_point_{}", n)))
        .filter_map(|key| field(prayer, &key))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
