//! Line-oriented front end for [`Session`](crate::session::Session).
//!
//! ## Input Commands
//!
//! | Line | Events |
//! |------|--------|
//! | `WSN001` | `Changed("WSN001")`, `Generate` |
//! | `?bulb` | `Changed("bulb")` (suggestions only) |
//! | `:2` | `Pick(1)` (second listed suggestion) |
//! | `:download [path]` | `Download(path)` |
//! | `:print` | `Print` |
//! | `:quit` | `Quit` |
//!
//! Blank lines are skipped. End of input ends the session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::catalog::ResolvedProduct;
use crate::session::{InputEvent, InputSource, StatusKind, StatusSink, SuggestionSink};

/// Reads events from a line stream, optionally writing a prompt first.
pub struct TerminalInput<R: BufRead> {
    reader: R,
    prompt: Option<String>,
    pending: VecDeque<InputEvent>,
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt: None,
            pending: VecDeque::new(),
        }
    }

    /// Print `prompt` on stderr before every read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    fn show_prompt(&self) {
        if let Some(prompt) = &self.prompt {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "{}", prompt);
            let _ = stderr.flush();
        }
    }
}

/// Translate one input line into events.
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    if let Some(query) = line.strip_prefix('?') {
        return vec![InputEvent::Changed(query.to_string())];
    }

    if let Some(command) = line.strip_prefix(':') {
        let mut parts = command.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());
        if let Ok(n) = name.parse::<usize>() {
            if n > 0 {
                return vec![InputEvent::Pick(n - 1)];
            }
        }
        return match name {
            "download" | "d" => vec![InputEvent::Download(arg.map(PathBuf::from))],
            "print" | "p" => vec![InputEvent::Print],
            "quit" | "q" => vec![InputEvent::Quit],
            _ => {
                tracing::warn!(command = name, "unknown command");
                Vec::new()
            }
        };
    }

    vec![InputEvent::Changed(line.to_string()), InputEvent::Generate]
}

impl<R: BufRead> InputSource for TerminalInput<R> {
    fn next_event(&mut self) -> Option<InputEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            self.show_prompt();
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self.pending.extend(parse_line(&line)),
                Err(e) => {
                    tracing::error!(error = %e, "failed to read input");
                    return None;
                }
            }
        }
    }
}

/// Writes the suggestion list as a numbered table.
pub struct TerminalSuggestions<W: Write> {
    out: W,
}

impl<W: Write> TerminalSuggestions<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SuggestionSink for TerminalSuggestions<W> {
    fn show(&mut self, items: &[ResolvedProduct]) {
        for (n, item) in items.iter().enumerate() {
            let _ = writeln!(
                self.out,
                "  {}. {:<8} {:<9} {}",
                n + 1,
                item.wsn,
                item.record.wid,
                item.record.title
            );
        }
    }

    fn hide(&mut self) {}
}

/// Writes one status message per line.
pub struct TerminalStatus<W: Write> {
    out: W,
}

impl<W: Write> TerminalStatus<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusSink for TerminalStatus<W> {
    fn status(&mut self, kind: StatusKind, message: &str) {
        let tag = match kind {
            StatusKind::Info => "info",
            StatusKind::Success => "ok",
            StatusKind::Error => "error",
        };
        let _ = writeln!(self.out, "[{}] {}", tag, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_parse_code_line() {
        assert_eq!(
            parse_line("  wsn001 \n"),
            vec![InputEvent::Changed("wsn001".to_string()), InputEvent::Generate]
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("?bulb"), vec![InputEvent::Changed("bulb".to_string())]);
        assert_eq!(parse_line(":download"), vec![InputEvent::Download(None)]);
        assert_eq!(
            parse_line(":download  out/label.png "),
            vec![InputEvent::Download(Some(PathBuf::from("out/label.png")))]
        );
        assert_eq!(parse_line(":print"), vec![InputEvent::Print]);
        assert_eq!(parse_line(":q"), vec![InputEvent::Quit]);
        assert_eq!(parse_line(":3"), vec![InputEvent::Pick(2)]);
        assert!(parse_line(":0").is_empty());
        assert!(parse_line(":frobnicate").is_empty());
        assert!(parse_line("   ").is_empty());
    }

    #[test]
    fn test_input_skips_blank_lines_and_ends_at_eof() {
        let mut input = TerminalInput::new(Cursor::new("\n\nWSN002\n:print\n"));
        assert_eq!(input.next_event(), Some(InputEvent::Changed("WSN002".to_string())));
        assert_eq!(input.next_event(), Some(InputEvent::Generate));
        assert_eq!(input.next_event(), Some(InputEvent::Print));
        assert_eq!(input.next_event(), None);
    }

    #[test]
    fn test_suggestions_table() {
        let catalog = Catalog::sample();
        let mut sink = TerminalSuggestions::new(Vec::new());
        sink.show(&catalog.suggest("WSN005"));
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.starts_with("  1. WSN005   XIDJ65V   Flipkart"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_status_lines() {
        let mut sink = TerminalStatus::new(Vec::new());
        sink.status(StatusKind::Error, "No label to print");
        sink.status(StatusKind::Success, "Label generated successfully!");
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "[error] No label to print\n[ok] Label generated successfully!\n"
        );
    }

    #[test]
    fn test_session_picks_listed_suggestion() {
        use crate::export::PrintHandoff;
        use crate::fonts::FontSet;
        use crate::label::LabelRenderer;
        use crate::session::Session;
        use crate::PricetagError;
        use std::sync::Arc;

        struct NoPrinter;
        impl PrintHandoff for NoPrinter {
            fn print(&self, _: &[u8], _: &str) -> Result<(), PricetagError> {
                Ok(())
            }
        }

        let catalog = Catalog::sample();
        let mut session = Session::new(&catalog, LabelRenderer::default(), Arc::new(FontSet::bitmap()));
        let mut input = TerminalInput::new(Cursor::new("?bulb\n:2\n"));
        let mut suggestions = TerminalSuggestions::new(Vec::new());
        let mut status = TerminalStatus::new(Vec::new());

        session.run(&mut input, &mut suggestions, &mut status, &NoPrinter);

        let listed = String::from_utf8(suggestions.into_inner()).unwrap();
        assert!(listed.contains("  2. WSN002 "));
        let out = String::from_utf8(status.into_inner()).unwrap();
        assert!(out.starts_with("[info] WSN: WSN002 | WID: XI4DS29 |"));
        assert!(out.ends_with("[ok] Label generated successfully!\n"));
    }
}
