/// Static description of a GS1 Application Identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiDefinition {
    /// Numeric AI prefix (e.g. "01", "712")
    pub code: &'static str,
    /// Short display name
    pub name: &'static str,
    /// Longer human readable description
    pub description: &'static str,
    /// Total field length including the code itself, `None` for variable length
    pub length: Option<usize>,
}

impl AiDefinition {
    /// Define an AI whose field spans a fixed number of characters (code included)
    pub const fn fixed(
        code: &'static str,
        name: &'static str,
        description: &'static str,
        length: usize,
    ) -> Self {
        Self {
            code,
            name,
            description,
            length: Some(length),
        }
    }

    /// Define an AI terminated by the separator or end of input
    pub const fn variable(code: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            code,
            name,
            description,
            length: None,
        }
    }

    /// Check if this AI has a fixed field length
    pub fn is_fixed(&self) -> bool {
        self.length.is_some()
    }
}
