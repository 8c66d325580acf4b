//! # Scripted Interaction
//!
//! An in-memory [`Interaction`] that replays prepared answers and records
//! every prompt it was shown. It drives the interactive wizard without a
//! terminal.
//!
//! ```rust,ignore
//! let mut io = ScriptedInteraction::new()
//!     .answer("Post")      // model name
//!     .choose("title")     // field to include
//!     .choose("Text")      // field type
//!     .confirmed(false)      // rules?
//!     .confirmed(false)      // visibility?
//!     .confirmed(false)      // sortable?
//!     .confirmed(false);     // continue?
//! ```

use novagen_core::{EngineError, EngineResult, Interaction};
use std::collections::VecDeque;

/// One prepared answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Text(String),
    Choice(String),
    Confirm(bool),
}

/// One exchange, as the operator would have seen it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Ask(String),
    Choice { prompt: String, options: Vec<String> },
    Confirm(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Replays a fixed script of answers
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<ScriptedAnswer>,
    transcript: Vec<TranscriptEntry>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer to an `ask`
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(ScriptedAnswer::Text(text.into()));
        self
    }

    /// Queue an answer to a `choice`
    pub fn choose(mut self, option: impl Into<String>) -> Self {
        self.answers.push_back(ScriptedAnswer::Choice(option.into()));
        self
    }

    /// Queue an answer to a `confirm`
    pub fn confirmed(mut self, yes: bool) -> Self {
        self.answers.push_back(ScriptedAnswer::Confirm(yes));
        self
    }

    /// Everything shown so far
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Options offered by every `choice` whose prompt starts with `prefix`
    pub fn offered(&self, prefix: &str) -> Vec<&[String]> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Choice { prompt, options } if prompt.starts_with(prefix) => {
                    Some(options.as_slice())
                }
                _ => None,
            })
            .collect()
    }

    /// Number of tables displayed
    pub fn tables_shown(&self) -> usize {
        self.transcript
            .iter()
            .filter(|entry| matches!(entry, TranscriptEntry::Table { .. }))
            .count()
    }

    fn next(&mut self, prompt: &str) -> EngineResult<ScriptedAnswer> {
        self.answers
            .pop_front()
            .ok_or_else(|| EngineError::interaction(format!("no scripted answer for '{}'", prompt)))
    }
}

fn unexpected(prompt: &str, expected: &str, got: &ScriptedAnswer) -> EngineError {
    EngineError::interaction(format!(
        "expected {} answer for '{}', script has {:?}",
        expected, prompt, got
    ))
}

impl Interaction for ScriptedInteraction {
    fn ask(&mut self, prompt: &str) -> EngineResult<String> {
        self.transcript.push(TranscriptEntry::Ask(prompt.to_string()));
        match self.next(prompt)? {
            ScriptedAnswer::Text(text) => Ok(text),
            other => Err(unexpected(prompt, "a text", &other)),
        }
    }

    fn choice(&mut self, prompt: &str, options: &[String]) -> EngineResult<String> {
        self.transcript.push(TranscriptEntry::Choice {
            prompt: prompt.to_string(),
            options: options.to_vec(),
        });
        match self.next(prompt)? {
            ScriptedAnswer::Choice(option) if options.contains(&option) => Ok(option),
            ScriptedAnswer::Choice(option) => Err(EngineError::interaction(format!(
                "'{}' is not one of the options for '{}': {:?}",
                option, prompt, options
            ))),
            other => Err(unexpected(prompt, "a choice", &other)),
        }
    }

    fn confirm(&mut self, prompt: &str) -> EngineResult<bool> {
        self.transcript.push(TranscriptEntry::Confirm(prompt.to_string()));
        match self.next(prompt)? {
            ScriptedAnswer::Confirm(yes) => Ok(yes),
            other => Err(unexpected(prompt, "a confirm", &other)),
        }
    }

    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) -> EngineResult<()> {
        self.transcript.push(TranscriptEntry::Table {
            headers: headers.to_vec(),
            rows: rows.to_vec(),
        });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replays_in_order() {
        let mut io = ScriptedInteraction::new()
            .answer("Post")
            .choose("title")
            .confirmed(true);

        assert_eq!(io.ask("Model?").unwrap(), "Post");
        assert_eq!(io.choice("Field?", &options(&["id", "title"])).unwrap(), "title");
        assert!(io.confirm("Continue?").unwrap());
        assert_eq!(io.remaining(), 0);
        assert_eq!(io.transcript().len(), 3);
    }

    #[test]
    fn test_exhausted_script_fails() {
        let mut io = ScriptedInteraction::new();
        let err = io.confirm("Continue?").unwrap_err();
        assert!(err.to_string().contains("Continue?"));
    }

    #[test]
    fn test_wrong_answer_kind_fails() {
        let mut io = ScriptedInteraction::new().confirmed(true);
        assert!(io.ask("Model?").is_err());
    }

    #[test]
    fn test_choice_must_be_offered() {
        let mut io = ScriptedInteraction::new().choose("body");
        assert!(io.choice("Field?", &options(&["id", "title"])).is_err());
    }

    #[test]
    fn test_records_tables_and_offers() {
        let mut io = ScriptedInteraction::new().choose("Text");
        io.table(&options(&["Method"]), &[options(&["hideFromIndex"])])
            .unwrap();
        io.choice("These are the options", &options(&["Text", "Password"]))
            .unwrap();

        assert_eq!(io.tables_shown(), 1);
        assert_eq!(io.offered("These are")[0], options(&["Text", "Password"]).as_slice());
    }
}
