use crate::api::Declaration;

/// The ordered table of declarations a program accepts.
///
/// The order of `add` calls is the order the scanner searches for matches, and the left-to-right order positional tokens are assigned in.
/// A `Schema` carries no scan behavior; it is consumed by [`Scanner::new`](crate::Scanner::new).
pub struct Schema<'ap> {
    declarations: Vec<Declaration<'ap>>,
}

impl<'ap> Schema<'ap> {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self {
            declarations: Vec::default(),
        }
    }

    /// Append a declaration to the table.
    pub fn add(mut self, declaration: impl Into<Declaration<'ap>>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    pub(crate) fn into_declarations(self) -> Vec<Declaration<'ap>> {
        self.declarations
    }
}

impl<'ap> Default for Schema<'ap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ap> std::fmt::Debug for Schema<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.declarations.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Keyword, Positional, Unary};

    #[test]
    fn schema_preserves_order() {
        // Setup
        let schema = Schema::new()
            .add(Positional::new())
            .add(Unary::new("--verbose"))
            .add(Keyword::new("--key"));

        // Execute
        let declarations = schema.into_declarations();

        // Verify
        assert_eq!(declarations.len(), 3);
        assert_matches!(declarations[0], Declaration::Positional(_));
        assert_matches!(declarations[1], Declaration::Unary(_));
        assert_matches!(declarations[2], Declaration::Keyword(_));
    }

    #[test]
    fn schema_empty() {
        assert!(Schema::default().into_declarations().is_empty());
    }
}
