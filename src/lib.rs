//! `declarg` is a declarative command line argument scanner for Rust.
//!
//! Although other crates provide command line parser functionality, we have found they prioritize different concerns than those we are interested in.
//! We built `declarg` for programs that want to declare their accepted arguments as a single ordered table, hand the scanner mutable slots to fill in, and then simply ask "how many mistakes did the user make?".
//! Specifically, `declarg` attempts to prioritize the following design concerns:
//! * *Declarative setup*:
//! The program's accepted arguments are one chained [`Schema`] of declarations; there is no dispatch code to write.
//! * *Caller-owned storage*:
//! The scanner writes matched tokens into `Option<String>` slots owned by the caller.
//! It never allocates or frees the slots themselves, and program defaults are simply the slots' initial values.
//! * *Collect-all error semantics*:
//! Scanning never aborts on malformed input.
//! Every mistake is reported through the [`UserInterface`] seam, and the scan returns the total error count; any non-zero count means "do not proceed".
//! * *Injectable side effects*:
//! Declarations may carry `on_set`/`on_clear` closures which run synchronously as tokens match, always after the slot write.
//!
//! # Usage
//! ```
//! use declarg::{Keyword, Positional, Scanner, Schema, Unary};
//!
//! let mut verbose: Option<String> = None;
//! let mut key: Option<String> = Some("default".to_string());
//! let mut input: Option<String> = None;
//!
//! let schema = Schema::new()
//!     .add(
//!         Unary::new("--verbose")
//!             .flag('v')
//!             .negation("--quiet")
//!             .bind(&mut verbose),
//!     )
//!     .add(Keyword::new("--key").bind(&mut key))
//!     .add(Positional::new().bind(&mut input));
//!
//! let mut scanner = Scanner::new(schema).expect("the declarations must be unambiguous");
//! let errors = scanner.scan(&["program", "-v", "--key", "value", "data.txt"]);
//!
//! // Dropping the scanner releases the slot borrows.
//! drop(scanner);
//! assert_eq!(errors, 0);
//! assert_eq!(verbose.as_deref(), Some("-v"));
//! assert_eq!(key.as_deref(), Some("value"));
//! assert_eq!(input.as_deref(), Some("data.txt"));
//! ```
//!
//! A fuller program, including negations, a handler-only declaration, and the help flow:
//! ```no_run
#![doc = include_str!("../demos/demo_basic.rs")]
//! ```
//!
//! # Declarations
//! * [`Unary`]: a flag-like declaration with no following value.
//! Its canonical spelling (ex: `--verbose`) sets the slot to the matching token; an optional [`negation`](Unary::negation) spelling (ex: `--quiet`) clears the slot; an optional [`flag`](Unary::flag) character makes it usable inside a flag cluster (ex: `-xvz`).
//! * [`Keyword`]: a declaration which consumes the next token, whatever it looks like, as its value (ex: `--key value`).
//! * [`Positional`]: a declaration matched purely by left-to-right position among the non-option tokens.
//! A slot-less `Positional` absorbs every remaining positional token, invoking its handler each time.
//!
//! # Scan semantics
//! `declarg` scans the token vector once, left to right, skipping token index 0 (the program's own name).
//! * A token equal to a declared name (or negation) matches that declaration; the table is searched in declared order.
//! * `--` permanently switches the scan to positional-only assignment.
//! * Any other `--..` token is an `invalid argument` error (likely a misspelled name).
//! * Any other `-..` token of two or more characters is a flag cluster: each character after the `-` must be a declared flag, and each match writes the *whole* token into the flag's slot.
//! The first undeclared character is an `invalid flag` error and suppresses the remainder of that token only.
//! * A lone `-`, and anything not starting with `-`, is assigned to the next unconsumed `Positional` declaration; once the positionals are exhausted, every further positional token is an `unexpected positional argument` error.
//! * A `Keyword` name as the final token is an `expected an argument after` error, and its slot is left unmodified.
//!
//! Errors never stop the scan; they are counted and reported as they occur.
//! Inspect the count returned by [`Scanner::scan`] and exit early when it is non-zero.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events from the scanner internals.
#![deny(missing_docs)]
mod api;
mod interface;
mod printer;
mod scanner;

pub use api::*;
pub use interface::{Console, Discard, UserInterface};
pub use scanner::{ConfigError, ScanError, Scanner};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
