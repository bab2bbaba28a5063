//! Utility functions for payload handling
//!
//! - Char-boundary-safe slicing (prefix stripping, fixed-length spans)
//! - Keystroke translation for keyboard-wedge scanners

/// Keystroke translation
pub mod keys;
/// Char-boundary-safe slicing
pub mod text;
