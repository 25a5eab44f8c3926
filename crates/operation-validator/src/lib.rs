#![doc = include_str!("../README.md")]

pub mod ast;
pub mod diagnostic;
pub mod parser;
pub mod report;
pub mod validation;
pub mod walker;

pub use self::ast::Document;
pub use self::diagnostic::Color;
pub use self::diagnostic::Diagnostics;
pub use self::parser::ParseError;
pub use self::parser::Parser;
pub use self::report::DiagnosticData;
pub use self::report::ExternalError;
pub use self::report::InternalError;
pub use self::report::Report;
pub use self::validation::OperationValidator;
pub use self::validation::Rule;
pub use self::validation::ValidationState;
pub use self::walker::Visitor;
pub use self::walker::WalkContext;
pub use self::walker::Walker;

/// Validates `operation` against the schema `definition` with every rule.
///
/// Builds a fresh [`OperationValidator`]; keep one around with
/// [`OperationValidator::default`] when validating many operations.
pub fn validate(operation: &Document, definition: &Document) -> Result<(), Report> {
    let mut report = Report::new();
    match OperationValidator::default().validate(operation, definition, Some(&mut report)) {
        ValidationState::Invalid => Err(report),
        ValidationState::Valid | ValidationState::Unknown => Ok(()),
    }
}
