//! Utility functions for amount parsing, text classification, and identifiers.
//!
//! - [`money`] - Dollar amount parsing into integer cents
//! - [`text`] - ASCII alphanumeric counting
//! - [`id_generator`] - Receipt identifier generation

pub mod id_generator;
pub mod money;
pub mod text;
