use crate::models::AiDefinition;

// Lookup is first-match in declaration order, so a shorter code must never
// precede a longer code it is a prefix of.
/// Known GS1 Application Identifiers
pub const AI_DEFINITIONS: &[AiDefinition] = &[
    AiDefinition::fixed("01", "GTIN", "Global Trade Item Number", 16),
    AiDefinition::variable("10", "Batch/Lot", "Batch or lot number"),
    AiDefinition::fixed("11", "Production date", "Production date (YYMMDD)", 8),
    AiDefinition::fixed("17", "Expiration date", "Expiration date (YYMMDD)", 8),
    AiDefinition::variable("21", "Serial number", "Serial number"),
    AiDefinition::variable(
        "712",
        "National code",
        "National Healthcare Reimbursement Number (NHRN)",
    ),
];

/// Read-only view over an ordered list of AI definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTable {
    entries: &'static [AiDefinition],
}

impl AiTable {
    /// Wrap a custom definition list
    pub const fn new(entries: &'static [AiDefinition]) -> Self {
        Self { entries }
    }

    /// The standard GS1 table
    pub const fn gs1() -> Self {
        Self::new(AI_DEFINITIONS)
    }

    /// All definitions in declaration order
    pub fn entries(&self) -> &'static [AiDefinition] {
        self.entries
    }

    /// First definition whose code is a prefix of `input`
    pub fn match_prefix(&self, input: &str) -> Option<&'static AiDefinition> {
        self.entries.iter().find(|def| input.starts_with(def.code))
    }

    /// Definition with exactly this code
    pub fn lookup(&self, code: &str) -> Option<&'static AiDefinition> {
        self.entries.iter().find(|def| def.code == code)
    }
}

impl Default for AiTable {
    fn default() -> Self {
        Self::gs1()
    }
}
