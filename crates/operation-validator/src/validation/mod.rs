//! Operation validation: a [`Walker`] loaded with validation rules.
//!
//! Validation is fail-fast. The first rule that finds a problem records it
//! and stops the walk, so a [`Report`] normally holds a single error. Unused
//! variables are the exception: all unused variables of an operation are
//! reported together.

use crate::ast::Document;
use crate::report::Report;
use crate::walker::Walker;
use tracing::debug;
use tracing::instrument;

pub mod rules;

/// Outcome of [`OperationValidator::validate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationState {
    /// No validation has run
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Installs one validation rule: adds its visitor to the walker and
/// registers it for the hooks it needs.
pub type Rule = fn(&mut Walker);

/// Validates operation documents against a schema document.
///
/// [`OperationValidator::default`] runs every rule of [`rules`].
/// [`OperationValidator::new`] starts without rules, for callers composing
/// their own set:
///
/// ```rust
/// use operation_validator::validation::rules;
/// use operation_validator::{OperationValidator, Parser, ValidationState};
///
/// let schema = Parser::new().parse_schema("type Query { a: String }").unwrap();
/// let operation = Parser::new().parse_executable("query A { a } query A { a }").unwrap();
///
/// let mut validator = OperationValidator::new();
/// validator.register_rule(rules::operation_name_uniqueness);
/// assert_eq!(
///     validator.validate(&operation, &schema, None),
///     ValidationState::Invalid,
/// );
/// ```
///
/// Rules keep per-walk state, hence `validate` takes `&mut self`. Use one
/// validator per thread.
pub struct OperationValidator {
    walker: Walker,
}

impl OperationValidator {
    /// A validator without any rule.
    pub fn new() -> Self {
        Self {
            walker: Walker::new(),
        }
    }

    pub fn register_rule(&mut self, rule: Rule) {
        rule(&mut self.walker)
    }

    /// Walks `operation` with every registered rule, resolving types against
    /// `definition`.
    ///
    /// Errors are appended to `report` when given. The result is
    /// [`ValidationState::Invalid`] whenever the report holds errors after
    /// the walk, including errors it held before.
    #[instrument(skip_all)]
    pub fn validate(
        &mut self,
        operation: &Document,
        definition: &Document,
        report: Option<&mut Report>,
    ) -> ValidationState {
        let mut own_report = Report::new();
        let report = report.unwrap_or(&mut own_report);

        self.walker.walk(operation, definition, report);

        let state = if report.has_errors() {
            ValidationState::Invalid
        } else {
            ValidationState::Valid
        };
        debug!(
            ?state,
            external_errors = report.external_errors.len(),
            internal_errors = report.internal_errors.len(),
            "operation validated"
        );
        state
    }
}

impl Default for OperationValidator {
    /// A validator running the full rule catalog.
    fn default() -> Self {
        let mut validator = Self::new();
        for &rule in rules::ALL {
            validator.register_rule(rule);
        }
        validator
    }
}
