//! Lowering from the syntax tree to C++ text
//!
//! The tree is walked once; there is no intermediate representation.

pub mod codegen;

pub use codegen::{LoweringError, LoweringResult, ModuleTranslator};
