pub(crate) type Handler<'ap> = Box<dyn FnMut() + 'ap>;

/// A flag-like declaration with no following value: presence sets, negation clears.
///
/// The canonical spelling (ex: `"--verbose"`) writes the matching token into the bound slot.
/// An optional single-character flag makes the declaration usable inside a flag cluster (ex: `'v'` as in `-xvz`), in which case the *whole* cluster token is written.
/// An optional negation spelling (ex: `"--quiet"`) clears the slot instead.
pub struct Unary<'ap> {
    name: &'static str,
    flag: Option<char>,
    negation: Option<&'static str>,
    slot: Option<&'ap mut Option<String>>,
    on_set: Option<Handler<'ap>>,
    on_clear: Option<Handler<'ap>>,
    description: Option<&'static str>,
}

impl<'ap> Unary<'ap> {
    /// Create a unary declaration with the given canonical spelling.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            flag: None,
            negation: None,
            slot: None,
            on_set: None,
            on_clear: None,
            description: None,
        }
    }

    /// Allow this declaration inside a flag cluster via the given character.
    pub fn flag(mut self, flag: char) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Declare an alternate spelling that clears the slot rather than setting it.
    pub fn negation(mut self, negation: &'static str) -> Self {
        self.negation = Some(negation);
        self
    }

    /// Bind the caller-owned slot this declaration writes into.
    ///
    /// The slot's initial value serves as the program default; it is only touched when the declaration matches.
    pub fn bind(mut self, slot: &'ap mut Option<String>) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Invoke the closure each time this declaration matches, after the slot write.
    pub fn on_set(mut self, handler: impl FnMut() + 'ap) -> Self {
        self.on_set = Some(Box::new(handler));
        self
    }

    /// Invoke the closure each time the negation matches, after the slot clear.
    pub fn on_clear(mut self, handler: impl FnMut() + 'ap) -> Self {
        self.on_clear = Some(Box::new(handler));
        self
    }

    /// Document this declaration for the help listing.
    pub fn help(mut self, message: &'static str) -> Self {
        self.description = Some(message);
        self
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn flag_character(&self) -> Option<char> {
        self.flag
    }

    pub(crate) fn negation_name(&self) -> Option<&'static str> {
        self.negation
    }

    pub(crate) fn set(&mut self, token: &str) {
        if let Some(slot) = &mut self.slot {
            **slot = Some(token.to_string());
        }

        if let Some(handler) = &mut self.on_set {
            handler();
        }
    }

    pub(crate) fn clear(&mut self) {
        if let Some(slot) = &mut self.slot {
            **slot = None;
        }

        if let Some(handler) = &mut self.on_clear {
            handler();
        }
    }
}

/// A declaration which consumes the next token, whatever it looks like, as its value.
pub struct Keyword<'ap> {
    name: &'static str,
    slot: Option<&'ap mut Option<String>>,
    on_set: Option<Handler<'ap>>,
    description: Option<&'static str>,
}

impl<'ap> Keyword<'ap> {
    /// Create a keyword declaration with the given spelling (ex: `"--key"`).
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: None,
            on_set: None,
            description: None,
        }
    }

    /// Bind the caller-owned slot that receives the keyword's value.
    pub fn bind(mut self, slot: &'ap mut Option<String>) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Invoke the closure each time a value is consumed, after the slot write.
    pub fn on_set(mut self, handler: impl FnMut() + 'ap) -> Self {
        self.on_set = Some(Box::new(handler));
        self
    }

    /// Document this declaration for the help listing.
    pub fn help(mut self, message: &'static str) -> Self {
        self.description = Some(message);
        self
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn set(&mut self, value: &str) {
        if let Some(slot) = &mut self.slot {
            **slot = Some(value.to_string());
        }

        if let Some(handler) = &mut self.on_set {
            handler();
        }
    }
}

/// A declaration matched purely by left-to-right position among the non-option tokens.
///
/// A slot-bearing `Positional` consumes exactly one token over the life of a scan.
/// A slot-less `Positional` is a catch-all: it absorbs every remaining positional token, invoking its handler each time.
pub struct Positional<'ap> {
    slot: Option<&'ap mut Option<String>>,
    on_set: Option<Handler<'ap>>,
    description: Option<&'static str>,
}

impl<'ap> Positional<'ap> {
    /// Create a positional declaration.
    pub fn new() -> Self {
        Self {
            slot: None,
            on_set: None,
            description: None,
        }
    }

    /// Bind the caller-owned slot that receives the matched token.
    pub fn bind(mut self, slot: &'ap mut Option<String>) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Invoke the closure each time a token is assigned, after the slot write.
    pub fn on_set(mut self, handler: impl FnMut() + 'ap) -> Self {
        self.on_set = Some(Box::new(handler));
        self
    }

    /// Document this declaration for the help listing.
    pub fn help(mut self, message: &'static str) -> Self {
        self.description = Some(message);
        self
    }

    pub(crate) fn bound(&self) -> bool {
        self.slot.is_some()
    }

    pub(crate) fn set(&mut self, token: &str) {
        if let Some(slot) = &mut self.slot {
            **slot = Some(token.to_string());
        }

        if let Some(handler) = &mut self.on_set {
            handler();
        }
    }
}

impl<'ap> Default for Positional<'ap> {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry in a [`Schema`](crate::Schema): a unary, keyword, or positional declaration.
pub enum Declaration<'ap> {
    /// A flag-like declaration; see [`Unary`].
    Unary(Unary<'ap>),
    /// A value-consuming declaration; see [`Keyword`].
    Keyword(Keyword<'ap>),
    /// A position-matched declaration; see [`Positional`].
    Positional(Positional<'ap>),
}

impl<'ap> Declaration<'ap> {
    pub(crate) fn description(&self) -> Option<&'static str> {
        match self {
            Declaration::Unary(unary) => unary.description,
            Declaration::Keyword(keyword) => keyword.description,
            Declaration::Positional(positional) => positional.description,
        }
    }
}

impl<'ap> std::fmt::Debug for Declaration<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Declaration::Unary(unary) => f
                .debug_struct("Unary")
                .field("name", &unary.name)
                .field("flag", &unary.flag)
                .field("negation", &unary.negation)
                .finish(),
            Declaration::Keyword(keyword) => f
                .debug_struct("Keyword")
                .field("name", &keyword.name)
                .finish(),
            Declaration::Positional(positional) => f
                .debug_struct("Positional")
                .field("bound", &positional.bound())
                .finish(),
        }
    }
}

impl<'ap> From<Unary<'ap>> for Declaration<'ap> {
    fn from(value: Unary<'ap>) -> Self {
        Declaration::Unary(value)
    }
}

impl<'ap> From<Keyword<'ap>> for Declaration<'ap> {
    fn from(value: Keyword<'ap>) -> Self {
        Declaration::Keyword(value)
    }
}

impl<'ap> From<Positional<'ap>> for Declaration<'ap> {
    fn from(value: Positional<'ap>) -> Self {
        Declaration::Positional(value)
    }
}
