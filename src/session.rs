//! Fill Session
//!
//! Walks a draft blank by blank: prompt with the blank's context, take an
//! answer, splice it in, re-scan, repeat until nothing is left. Every step
//! is recorded in a bot/user transcript.

use serde::Serialize;

use crate::error::{DraftError, Result};
use crate::placeholder::{Document, Placeholder, DEFAULT_CONTEXT_RADIUS};

pub const COMPLETE_ON_OPEN: &str = "All fields have been filled. Document is complete!";
pub const COMPLETE_AFTER_FILL: &str =
    "All missing information has been filled! The document is now complete.";

/// Who wrote a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Bot,
    User,
}

/// One line of the session transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub speaker: Speaker,
    pub content: String,
}

impl Message {
    fn bot(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            content: content.into(),
        }
    }
}

/// How whitespace-only answers are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    /// Refuse them with [`DraftError::EmptyAnswer`]
    #[default]
    RejectBlank,
    /// Splice them in like any other answer
    AcceptAny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub context_radius: usize,
    pub answer_policy: AnswerPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            answer_policy: AnswerPolicy::default(),
        }
    }
}

/// Outcome of an accepted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Another blank is waiting
    Next(Placeholder),
    /// The draft has no blanks left
    Complete,
}

/// Prompt shown for a blank
pub fn prompt_for(placeholder: &Placeholder) -> String {
    format!(
        "Please fill in the following information:\n\n\"{}\"\n\nCurrent blank: {}",
        placeholder.context, placeholder.raw_marker
    )
}

/// Sequential fill of one draft
#[derive(Debug, Clone)]
pub struct FillSession {
    document: Document,
    placeholders: Vec<Placeholder>,
    transcript: Vec<Message>,
    policy: AnswerPolicy,
    answered: usize,
}

impl FillSession {
    pub fn new(draft: impl Into<String>, options: SessionOptions) -> Self {
        let document = Document::new(draft).with_context_radius(options.context_radius);
        let placeholders = document.placeholders();

        let opening = match placeholders.first() {
            Some(first) => Message::bot(prompt_for(first)),
            None => Message::bot(COMPLETE_ON_OPEN),
        };

        log::info!("fill session opened with {} blank(s)", placeholders.len());

        Self {
            document,
            placeholders,
            transcript: vec![opening],
            policy: options.answer_policy,
            answered: 0,
        }
    }

    /// Blank the next answer will fill
    pub fn current(&self) -> Option<&Placeholder> {
        self.placeholders.first()
    }

    /// Blanks remaining, from the latest scan
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Number of answers accepted so far
    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn is_complete(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Fill the current blank with `answer`
    ///
    /// A rejected answer leaves the session untouched.
    pub fn submit(&mut self, answer: &str) -> Result<Step> {
        let current = self.current().ok_or(DraftError::SessionComplete)?;

        if self.policy == AnswerPolicy::RejectBlank && answer.trim().is_empty() {
            log::debug!("rejected blank answer for blank #{}", current.id);
            return Err(DraftError::EmptyAnswer);
        }

        let next_document = self.document.replace(current, answer)?;

        self.transcript.push(Message::user(answer));
        self.document = next_document;
        self.placeholders = self.document.placeholders();
        self.answered += 1;

        self.transcript.push(Message::bot(format!(
            "Thank you! I've updated the document with: \"{}\"",
            answer
        )));

        match self.placeholders.first() {
            Some(next) => {
                self.transcript.push(Message::bot(prompt_for(next)));
                Ok(Step::Next(next.clone()))
            }
            None => {
                log::info!("fill session complete after {} answer(s)", self.answered);
                self.transcript.push(Message::bot(COMPLETE_AFTER_FILL));
                Ok(Step::Complete)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_prompt_names_first_blank() {
        let session = FillSession::new("Name: ____.", SessionOptions::default());

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].speaker, Speaker::Bot);
        assert_eq!(
            session.transcript()[0].content,
            "Please fill in the following information:\n\n\"Name: ____.\"\n\nCurrent blank: ____"
        );
    }

    #[test]
    fn test_opening_without_blanks() {
        let session = FillSession::new("Nothing to fill.", SessionOptions::default());

        assert!(session.is_complete());
        assert_eq!(session.transcript()[0].content, COMPLETE_ON_OPEN);
    }

    #[test]
    fn test_blank_answer_is_rejected_by_default() {
        let mut session = FillSession::new("Name: ____", SessionOptions::default());

        assert_eq!(session.submit("   "), Err(DraftError::EmptyAnswer));
        assert_eq!(session.document().text(), "Name: ____");
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn test_blank_answer_accepted_when_allowed() {
        let options = SessionOptions {
            answer_policy: AnswerPolicy::AcceptAny,
            ..SessionOptions::default()
        };
        let mut session = FillSession::new("[____]", options);

        assert_eq!(session.submit(""), Ok(Step::Complete));
        assert_eq!(session.document().text(), "[]");
    }

    #[test]
    fn test_submit_after_completion() {
        let mut session = FillSession::new("done", SessionOptions::default());
        assert_eq!(session.submit("x"), Err(DraftError::SessionComplete));
    }

    #[test]
    fn test_transcript_after_answer() {
        let mut session = FillSession::new("A ___ B ___", SessionOptions::default());

        let step = session.submit("one").expect("submit");
        let Step::Next(next) = step else {
            panic!("expected another blank");
        };
        assert_eq!(next.id, 1);
        assert_eq!(next.start_offset, 8);

        let contents: Vec<_> = session
            .transcript()
            .iter()
            .map(|m| (m.speaker, m.content.as_str()))
            .collect();
        assert_eq!(contents[1], (Speaker::User, "one"));
        assert_eq!(
            contents[2],
            (Speaker::Bot, "Thank you! I've updated the document with: \"one\"")
        );
        assert!(contents[3].1.ends_with("Current blank: ___"));
    }
}
