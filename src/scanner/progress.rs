use std::rc::Rc;

use crate::interface::UserInterface;
use crate::scanner::ScanError;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ScanState {
    Default,
    AwaitingValue { index: usize, keyword: String },
    PositionalOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    Unstarted,
    At(usize),
    Exhausted,
}

// The per-scan state: created fresh by each `Scanner::scan` call and discarded on return.
pub(crate) struct ScanProgress {
    pub(crate) state: ScanState,
    pub(crate) cursor: Cursor,
    errors: usize,
    interface: Rc<dyn UserInterface>,
}

impl ScanProgress {
    pub(crate) fn new(interface: Rc<dyn UserInterface>) -> Self {
        Self {
            state: ScanState::Default,
            cursor: Cursor::Unstarted,
            errors: 0,
            interface,
        }
    }

    // The counter increments whether or not the interface displays the error.
    pub(crate) fn raise(&mut self, error: ScanError) {
        self.errors += 1;
        self.interface.print_error(error);
    }

    pub(crate) fn errors(&self) -> usize {
        self.errors
    }
}
