//! Parser tests
//!
//! Organized test modules:
//! - basic: expression parsing and precedence
//! - statements: simple and compound statements
//! - state: ParserState unit tests
//! - syntax_validation: rejected programs and error positions
//! - fuzz: property tests over generated expressions

mod basic;
mod syntax_validation;
