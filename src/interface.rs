use crate::scanner::ScanError;

/// The presentation seam between the scanner and a human.
///
/// The scanner itself never formats for a terminal; it hands help lines and scan errors to an implementation of this trait.
/// Implement it to redirect or capture the output (ex: for testing, or for a program with its own display conventions).
pub trait UserInterface {
    /// Display a help line.
    fn print(&self, message: String);

    /// Display a scan error.
    fn print_error(&self, error: ScanError);
}

/// The default interface: help lines to stdout, errors to stderr.
pub struct Console {}

impl Default for Console {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for Console {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ScanError) {
        eprintln!("error: {error}");
    }
}

/// An interface that swallows all output.
///
/// Scan errors still increment the scan's error count; only their display is suppressed.
pub struct Discard {}

impl Default for Discard {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for Discard {
    fn print(&self, _message: String) {
        // Do nothing.
    }

    fn print_error(&self, _error: ScanError) {
        // Do nothing.
    }
}

#[cfg(test)]
pub(crate) mod util {
    use super::UserInterface;
    use crate::scanner::ScanError;
    use std::cell::RefCell;

    pub(crate) struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<ScanError>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                messages: RefCell::new(Vec::default()),
                errors: RefCell::new(Vec::default()),
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, error: ScanError) {
            self.errors.borrow_mut().push(error);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }

        pub(crate) fn errors(&self) -> Vec<ScanError> {
            self.errors.borrow().clone()
        }

        pub(crate) fn message(&self) -> String {
            self.messages().join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::util::InMemoryInterface;
    use super::*;

    #[test]
    fn in_memory_captures() {
        // Setup
        let interface = InMemoryInterface::default();

        // Execute
        interface.print("abc".to_string());
        interface.print("123".to_string());
        interface.print_error(ScanError::InvalidArgument("--moot".to_string()));

        // Verify
        assert_eq!(interface.message(), "abc\n123");
        assert_eq!(
            interface.errors(),
            vec![ScanError::InvalidArgument("--moot".to_string())]
        );
    }
}
