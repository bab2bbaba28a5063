/// Application Identifier definitions
pub mod ai;
/// Decoded fields and results
pub mod field;
/// Keyboard-wedge key events
pub mod key_event;
/// Symbology kinds
pub mod symbology;

pub use ai::AiDefinition;
pub use field::{ParsedField, ParsedResult, UNKNOWN};
pub use key_event::KeyEvent;
pub use symbology::Symbology;
