use std::collections::HashSet;
use std::env;
use std::rc::Rc;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Declaration, Schema};
use crate::interface::{Console, UserInterface};
use crate::printer::Printer;
use crate::scanner::progress::{Cursor, ScanProgress, ScanState};

/// Errors surfaced while constructing a [`Scanner`] from a [`Schema`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A name or negation spelling is claimed by more than one declaration.
    #[error("Cannot duplicate the name '{0}'.")]
    DuplicateName(String),

    /// A flag character is claimed by more than one declaration.
    #[error("Cannot duplicate the flag '{0}'.")]
    DuplicateFlag(char),
}

/// Errors reported while scanning a token vector.
///
/// No `ScanError` aborts the scan; each one is reported through the [`UserInterface`] and counted.
/// The count returned by [`Scanner::scan`] is the caller's sole failure signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A `--..` token matched no declared name or negation; it may be misspelled.
    #[error("invalid argument: \"{0}\"")]
    InvalidArgument(String),

    /// A flag cluster contained a character no declaration claims.
    #[error("invalid flag '{flag}' in argument \"{token}\"")]
    InvalidFlag {
        /// The full cluster token.
        token: String,
        /// The offending character.
        flag: char,
        /// The offending character's position within the token.
        position: usize,
    },

    /// The token vector ended while a keyword declaration was awaiting its value.
    #[error("expected an argument after \"{0}\"")]
    ExpectedArgumentAfter(String),

    /// A positional token arrived with no unconsumed positional declaration left.
    #[error("unexpected positional argument \"{0}\"")]
    UnexpectedArgument(String),
}

/// The scanning engine: owns a validated declaration table and runs scans against it.
///
/// The table is fixed at construction and shared across repeated scans; all per-scan state is created fresh by each [`scan`](Scanner::scan) call.
/// Scanning is strictly single-threaded and synchronous: each token is fully processed, including any handler invocation, before the next is considered.
pub struct Scanner<'ap> {
    declarations: Vec<Declaration<'ap>>,
    printer: Printer,
    interface: Rc<dyn UserInterface>,
}

impl<'ap> std::fmt::Debug for Scanner<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("declarations", &self.declarations)
            .finish()
    }
}

impl<'ap> Scanner<'ap> {
    /// Validate the schema and build a scanner reporting through [`Console`].
    pub fn new(schema: Schema<'ap>) -> Result<Self, ConfigError> {
        Self::with_interface(schema, Rc::new(Console::default()))
    }

    /// Validate the schema and build a scanner reporting through the given interface.
    pub fn with_interface(
        schema: Schema<'ap>,
        interface: Rc<dyn UserInterface>,
    ) -> Result<Self, ConfigError> {
        let declarations = schema.into_declarations();
        let mut names: HashSet<&'static str> = HashSet::default();
        let mut flags: HashSet<char> = HashSet::default();

        for declaration in &declarations {
            match declaration {
                Declaration::Unary(unary) => {
                    if !names.insert(unary.name()) {
                        return Err(ConfigError::DuplicateName(unary.name().to_string()));
                    }

                    if let Some(negation) = unary.negation_name() {
                        if !names.insert(negation) {
                            return Err(ConfigError::DuplicateName(negation.to_string()));
                        }
                    }

                    if let Some(flag) = unary.flag_character() {
                        if !flags.insert(flag) {
                            return Err(ConfigError::DuplicateFlag(flag));
                        }
                    }
                }
                Declaration::Keyword(keyword) => {
                    if !names.insert(keyword.name()) {
                        return Err(ConfigError::DuplicateName(keyword.name().to_string()));
                    }
                }
                Declaration::Positional(_) => {}
            }
        }

        let printer = Printer::new(
            declarations
                .iter()
                .filter_map(Declaration::description)
                .collect(),
        );

        Ok(Self {
            declarations,
            printer,
            interface,
        })
    }

    /// Scan a token vector once, left to right.
    ///
    /// Token index 0 is always skipped (assumed to be the program's own name).
    /// Slots are written and handlers invoked synchronously as tokens match; errors are reported as they occur and never stop the scan.
    /// Returns the total error count; any non-zero count means the parsed values must not be trusted.
    pub fn scan(&mut self, tokens: &[&str]) -> usize {
        let mut progress = ScanProgress::new(Rc::clone(&self.interface));

        for token in tokens.iter().skip(1) {
            self.step(&mut progress, token);
        }

        // The vector must not end while a keyword is still awaiting its value.
        if let ScanState::AwaitingValue { keyword, .. } =
            std::mem::replace(&mut progress.state, ScanState::Default)
        {
            progress.raise(ScanError::ExpectedArgumentAfter(keyword));
        }

        progress.errors()
    }

    /// Scan the process's own invocation arguments; see [`scan`](Scanner::scan).
    pub fn scan_env(&mut self) -> usize {
        let command_input: Vec<String> = env::args().collect();
        self.scan(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Print each declaration's help line, in declared order, through the interface.
    ///
    /// Read-only and idempotent: repeated calls over an unmodified scanner produce identical output and write to no slot.
    pub fn print_help(&self) {
        self.printer.print_help(&*self.interface);
    }

    fn step(&mut self, progress: &mut ScanProgress, token: &str) {
        match std::mem::replace(&mut progress.state, ScanState::Default) {
            ScanState::Default => {
                self.dispatch(progress, token);
            }
            ScanState::AwaitingValue { index, .. } => {
                // The current token, whatever it looks like, is the keyword's value.
                if let Declaration::Keyword(keyword) = &mut self.declarations[index] {
                    keyword.set(token);
                } else {
                    unreachable!("internal error - awaiting a value for a non-keyword declaration");
                }
            }
            ScanState::PositionalOnly => {
                progress.state = ScanState::PositionalOnly;
                self.assign_positional(progress, token);
            }
        }
    }

    fn dispatch(&mut self, progress: &mut ScanProgress, token: &str) {
        // Search the table in declared order, checking each declaration's name and then its negation.
        for (index, declaration) in self.declarations.iter_mut().enumerate() {
            match declaration {
                Declaration::Positional(_) => continue,
                Declaration::Unary(unary) => {
                    if unary.name() == token {
                        unary.set(token);
                        return;
                    }

                    if unary.negation_name() == Some(token) {
                        unary.clear();
                        return;
                    }
                }
                Declaration::Keyword(keyword) => {
                    if keyword.name() == token {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Keyword '{token}' matched; awaiting its value.");
                        }

                        progress.state = ScanState::AwaitingValue {
                            index,
                            keyword: token.to_string(),
                        };
                        return;
                    }
                }
            }
        }

        if token == "--" {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("'--' begins the positional-only region.");
            }

            progress.state = ScanState::PositionalOnly;
        } else if token.starts_with("--") {
            progress.raise(ScanError::InvalidArgument(token.to_string()));
        } else if token.len() >= 2 && token.starts_with('-') {
            self.expand_cluster(progress, token);
        } else {
            // Anything else, a lone '-' included, is positional.
            self.assign_positional(progress, token);
        }
    }

    fn expand_cluster(&mut self, progress: &mut ScanProgress, token: &str) {
        for (position, flag) in token.chars().enumerate().skip(1) {
            let matched = self
                .declarations
                .iter_mut()
                .find_map(|declaration| match declaration {
                    Declaration::Unary(unary) if unary.flag_character() == Some(flag) => {
                        Some(unary)
                    }
                    _ => None,
                });

            match matched {
                // Each matched flag receives the whole cluster token, not just its character.
                Some(unary) => unary.set(token),
                None => {
                    progress.raise(ScanError::InvalidFlag {
                        token: token.to_string(),
                        flag,
                        position,
                    });
                    // Suppress the remainder of this token's characters only.
                    break;
                }
            }
        }
    }

    fn assign_positional(&mut self, progress: &mut ScanProgress, token: &str) {
        let start = match progress.cursor {
            Cursor::Unstarted => 0,
            Cursor::At(index) => index,
            Cursor::Exhausted => {
                progress.raise(ScanError::UnexpectedArgument(token.to_string()));
                return;
            }
        };

        for index in start..self.declarations.len() {
            if let Declaration::Positional(positional) = &mut self.declarations[index] {
                // A slot-bearing positional consumes exactly one token; a slot-less one absorbs every remaining token.
                if progress.cursor == Cursor::At(index) && positional.bound() {
                    continue;
                }

                progress.cursor = Cursor::At(index);
                positional.set(token);
                return;
            }
        }

        // Pin the cursor so every subsequent positional token fails fast.
        progress.cursor = Cursor::Exhausted;
        progress.raise(ScanError::UnexpectedArgument(token.to_string()));
    }
}
