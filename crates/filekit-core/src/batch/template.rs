//! Command templates: a program and arguments with an item placeholder.

use std::process::Command;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("command is empty")]
    EmptyCommand,
    #[error("placeholder must not be empty")]
    EmptyPlaceholder,
}

/// Program plus arguments. Each occurrence of the placeholder in any of them
/// is replaced by the current item; the command is never handed to a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    args: Vec<String>,
    placeholder: String,
}

impl CommandTemplate {
    pub fn new(argv: Vec<String>, placeholder: impl Into<String>) -> Result<Self, TemplateError> {
        let placeholder = placeholder.into();
        if placeholder.is_empty() {
            return Err(TemplateError::EmptyPlaceholder);
        }
        let mut argv = argv.into_iter();
        let program = argv
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or(TemplateError::EmptyCommand)?;
        Ok(Self {
            program,
            args: argv.collect(),
            placeholder,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn mentions_placeholder(&self) -> bool {
        self.program.contains(&self.placeholder)
            || self.args.iter().any(|a| a.contains(&self.placeholder))
    }

    /// Full argv for `item`. Without a placeholder anywhere, the item is
    /// appended as the last argument.
    pub fn render(&self, item: &str) -> Vec<String> {
        let mut argv: Vec<String> = std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| part.replace(&self.placeholder, item))
            .collect();
        if !self.mentions_placeholder() {
            argv.push(item.to_string());
        }
        argv
    }

    pub fn command(&self, item: &str) -> Command {
        let argv = self.render(item);
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);
        cmd
    }
}
