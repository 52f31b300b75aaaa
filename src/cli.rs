//! Command-line front end: scan, fill and render drafts stored in files.
//!
//! The LSP stays the default mode; these commands cover terminal use where
//! answers arrive on stdin.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{Command, Config};
use crate::error::DraftError;
use crate::placeholder::{scan_with_radius, Document};
use crate::render::render_legal_document;
use crate::session::{FillSession, SessionOptions, Speaker};
use crate::validation::review_blanks;

/// Run a non-server command
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::Serve => bail!("the language server is started by the binary, not the CLI runner"),
        Command::Scan { file, json } => {
            let text = read_draft(file)?;
            write_scan_report(&text, config.context_radius, *json, &mut out)
        }
        Command::Fill {
            file,
            output,
            render,
        } => {
            let text = read_draft(file)?;
            let stdin = io::stdin();
            let stderr = io::stderr();

            let document = fill_interactive(
                text,
                config.session_options(),
                stdin.lock(),
                &mut stderr.lock(),
            )?;

            let finished = if *render {
                render_legal_document(document.text())
            } else {
                document.into_text()
            };

            match output {
                Some(path) => fs::write(path, finished)
                    .with_context(|| format!("writing {}", path.display())),
                None => out.write_all(finished.as_bytes()).context("writing draft to stdout"),
            }
        }
        Command::Render { file } => {
            let text = read_draft(file)?;
            writeln!(out, "{}", render_legal_document(&text)).context("writing rendered draft")
        }
    }
}

fn read_draft(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading draft {}", path.display()))
}

/// List the blanks of `text`, as a table or as JSON
pub fn write_scan_report<W: Write>(text: &str, radius: usize, json: bool, out: &mut W) -> Result<()> {
    let blanks = scan_with_radius(text, radius);

    if json {
        serde_json::to_writer_pretty(&mut *out, &blanks).context("serializing blanks")?;
        writeln!(out)?;
        return Ok(());
    }

    if blanks.is_empty() {
        writeln!(out, "No blanks found.")?;
        return Ok(());
    }

    let review = review_blanks(text, &blanks);
    for (blank, diagnostic) in blanks.iter().zip(&review.diagnostics) {
        let context = blank.context.split_whitespace().collect::<Vec<_>>().join(" ");
        writeln!(
            out,
            "#{:<3} {}:{:<4} {:<12} {}",
            blank.id,
            diagnostic.line,
            diagnostic.column + 1,
            blank.raw_marker,
            context
        )?;
    }
    writeln!(out, "{} blank(s)", blanks.len())?;

    Ok(())
}

/// Drive a [`FillSession`] from line-oriented `input`
///
/// Bot messages are written to `prompts` as they appear. Blank answers
/// rejected by the answer policy are re-asked. Fails if `input` ends before
/// every blank is filled.
pub fn fill_interactive<R, W>(
    draft: String,
    options: SessionOptions,
    input: R,
    prompts: &mut W,
) -> Result<Document>
where
    R: BufRead,
    W: Write,
{
    let mut session = FillSession::new(draft, options);
    let mut shown = 0;
    let mut lines = input.lines();

    loop {
        for message in &session.transcript()[shown..] {
            if message.speaker == Speaker::Bot {
                writeln!(prompts, "{}\n", message.content)?;
            }
        }
        shown = session.transcript().len();

        if session.is_complete() {
            break;
        }

        let Some(line) = lines.next() else {
            bail!(
                "input ended with {} blank(s) left to fill",
                session.placeholders().len()
            );
        };
        let answer = line.context("reading answer")?;

        match session.submit(answer.trim_end_matches('\r')) {
            Ok(_) => {}
            Err(DraftError::EmptyAnswer) => {
                writeln!(prompts, "Please type a value for this blank.\n")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(session.into_document())
}
