//! Terminal interaction
//!
//! [`TerminalInteraction`] answers the wizard's prompts from a real terminal
//! with dialoguer. Prompts and tables go to stderr so stdout only ever
//! carries the generated output.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use dialoguer::{Confirm, FuzzySelect, Input, theme::ColorfulTheme};
use novagen_core::{EngineError, EngineResult, Interaction};
use std::io::{self, IsTerminal};

/// Prompts the operator on the controlling terminal
pub struct TerminalInteraction {
    theme: ColorfulTheme,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn ensure_terminal(&self) -> EngineResult<()> {
        if io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(EngineError::interaction(
                "standard input is not a terminal; pass a MODEL to generate without prompts",
            ))
        }
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

fn read_failed(e: dialoguer::Error) -> EngineError {
    EngineError::interaction(format!("Failed to read input: {}", e))
}

impl Interaction for TerminalInteraction {
    fn ask(&mut self, prompt: &str) -> EngineResult<String> {
        self.ensure_terminal()?;
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(read_failed)
    }

    fn choice(&mut self, prompt: &str, options: &[String]) -> EngineResult<String> {
        if options.is_empty() {
            return Err(EngineError::interaction(format!(
                "nothing to choose from for '{}'",
                prompt
            )));
        }
        self.ensure_terminal()?;

        let selection = FuzzySelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(read_failed)?;

        Ok(options[selection].clone())
    }

    fn confirm(&mut self, prompt: &str) -> EngineResult<bool> {
        self.ensure_terminal()?;
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(read_failed)
    }

    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) -> EngineResult<()> {
        eprintln!("{}", render_table(headers, rows));
        Ok(())
    }
}

/// Build a display table
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers);
    for row in rows {
        table.add_row(row);
    }
    table
}
