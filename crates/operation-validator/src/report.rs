//! The diagnostic sink filled during validation.
//!
//! A [`Report`] separates *external* errors, problems with the operation
//! document that the client should hear about, from *internal* errors, which
//! signal a broken invariant inside this crate or a malformed hand-built
//! [`Document`] and should be treated as bugs.

use crate::ast::ByteSlice;
use crate::ast::Document;
use crate::ast::LineColumn;
use crate::ast::NodeKind;
use crate::ast::Ref;
use std::fmt;
use thiserror::Error;

/// Errors collected while walking an operation document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub external_errors: Vec<ExternalError>,
    pub internal_errors: Vec<InternalError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.external_errors.is_empty() || !self.internal_errors.is_empty()
    }

    pub fn add_external_error(&mut self, error: ExternalError) {
        self.external_errors.push(error);
    }

    pub fn add_internal_error(&mut self, error: InternalError) {
        self.internal_errors.push(error);
    }

    /// Converts every external error to the GraphQL response error format.
    pub fn to_json(&self, operation: &Document) -> Vec<GraphQLError> {
        self.external_errors
            .iter()
            .map(|error| error.to_json(operation))
            .collect()
    }

    pub fn reset(&mut self) {
        self.external_errors.clear();
        self.internal_errors.clear();
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.external_errors {
            writeln!(f, "Error: {error}")?;
        }
        for error in &self.internal_errors {
            writeln!(f, "Internal error: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}

/// A problem with the operation document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{data}")]
pub struct ExternalError {
    /// Location in the operation document's input, when known
    pub span: Option<ByteSlice>,
    pub data: DiagnosticData,
}

impl ExternalError {
    pub fn new(span: Option<ByteSlice>, data: DiagnosticData) -> Self {
        Self { span, data }
    }

    pub fn code(&self) -> &'static str {
        self.data.code()
    }

    pub fn line_column(&self, operation: &Document) -> Option<LineColumn> {
        let span = self.span?;
        operation.input.line_column(span.start as usize)
    }

    pub fn to_json(&self, operation: &Document) -> GraphQLError {
        GraphQLError {
            message: self.data.to_string(),
            locations: self.line_column(operation).into_iter().collect(),
            extensions: ErrorExtensions {
                code: self.code(),
            },
        }
    }
}

impl From<DiagnosticData> for ExternalError {
    fn from(data: DiagnosticData) -> Self {
        Self { span: None, data }
    }
}

/// An error as it appears in the `errors` array of a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LineColumn>,
    pub extensions: ErrorExtensions,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorExtensions {
    pub code: &'static str,
}

/// Describes an operation in messages: its name, or that it is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationName(pub Option<String>);

impl OperationName {
    pub fn new(name: &str) -> Self {
        if name.is_empty() {
            Self(None)
        } else {
            Self(Some(name.to_owned()))
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => write!(f, "operation `{name}`"),
            None => f.write_str("anonymous operation"),
        }
    }
}

/// Structured data about a validation failure.
#[derive(Debug, Error, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiagnosticData {
    #[error("there can be only one operation named `{name}`")]
    OperationNameMustBeUnique { name: String },
    #[error("anonymous operation must be the only defined operation")]
    AnonymousOperationMustBeTheOnlyOperation,
    #[error("subscription {operation} must select exactly one top level field")]
    SubscriptionMustOnlyHaveOneRootSelection { operation: OperationName },
    #[error("the schema does not define a root type for `{operation_type}` operations")]
    OperationTypeUndefined { operation_type: &'static str },

    #[error("cannot query field `{field}` on type `{type_name}`")]
    FieldUndefinedOnType { field: String, type_name: String },
    #[error("cannot query field `{field}` on union `{union}`, only `__typename` can be selected")]
    FieldSelectionOnUnion { field: String, union: String },
    #[error("field `{field}` of type `{type_name}` must not have a selection set")]
    FieldSelectionOnLeaf { field: String, type_name: String },
    #[error("field `{field}` of type `{type_name}` must have a selection of subfields")]
    MissingFieldSelection { field: String, type_name: String },
    #[error("fields selected as `{left}` and `{right}` return objects of differing types and must have the same shape")]
    ResponseOfDifferingTypesMustBeOfSameShape { left: String, right: String },
    #[error("fields selected as `{response_key}` have mismatching types `{left}` and `{right}`")]
    TypesForFieldMismatch {
        response_key: String,
        left: String,
        right: String,
    },
    #[error("fields selected as `{response_key}` conflict because they select different fields or arguments")]
    DifferingFieldsOnPotentiallySameType { response_key: String },
    #[error("fields selected as `{response_key}` conflict because they return conflicting types `{left}` and `{right}`")]
    FieldsConflict {
        response_key: String,
        left: String,
        right: String,
    },

    #[error("the argument `{argument}` is not supported by `{node}`")]
    ArgumentNotDefinedOnNode { argument: String, node: String },
    #[error("value `{value}` does not satisfy type `{ty}`")]
    ValueDoesntSatisfyType { value: String, ty: String },
    #[error("the argument `{argument}` is provided multiple times")]
    ArgumentMustBeUnique { argument: String },
    #[error("the required argument `{argument}` is not provided on field `{field}`")]
    ArgumentRequiredOnField { argument: String, field: String },
    #[error("the argument `{argument}` on field `{field}` must not be null")]
    ArgumentOnFieldMustNotBeNull { argument: String, field: String },

    #[error("fragment spread `...{name}` forms a cycle")]
    FragmentSpreadFormsCycle { name: String },
    #[error("cannot find fragment `{name}` in this document")]
    FragmentUndefined { name: String },
    #[error("fragment `{name}` defined but not used")]
    FragmentDefinedButNotUsed { name: String },
    #[error("fragment `{name}` cannot condition on non composite type `{type_name}`")]
    FragmentDefinitionOnTypeDisallowed { name: String, type_name: String },
    #[error("there can be only one fragment named `{name}`")]
    FragmentDefinitionMustBeUnique { name: String },
    #[error("fragment `{name}` with type condition `{type_name}` cannot be applied to `{enclosing_type}`")]
    FragmentSpreadOnTypeMismatchEnclosingType {
        name: String,
        type_name: String,
        enclosing_type: String,
    },
    #[error("inline fragment cannot condition on non composite type `{type_name}`")]
    InlineFragmentOnTypeDisallowed { type_name: String },
    #[error("inline fragment with type condition `{type_name}` cannot be applied to `{enclosing_type}`")]
    InlineFragmentOnTypeMismatchEnclosingType {
        type_name: String,
        enclosing_type: String,
    },
    #[error("cannot find type `{type_name}` in the schema")]
    TypeUndefined { type_name: String },

    #[error("cannot find directive `@{name}` in the schema")]
    DirectiveUndefined { name: String },
    #[error("directive `@{name}` is not allowed on {location}")]
    DirectiveNotAllowedOnNode { name: String, location: String },
    #[error("directive `@{name}` can only be used once at this location")]
    DirectiveMustBeUniquePerLocation { name: String },

    #[error("the variable `${name}` is declared multiple times in {operation}")]
    VariableMustBeUnique {
        name: String,
        operation: OperationName,
    },
    #[error("variable `${name}` cannot be non-input type `{type_name}`")]
    VariableOfTypeIsNoValidInputValue { name: String, type_name: String },
    #[error("variable `${variable}` used by argument `{argument}` is not defined")]
    VariableNotDefinedOnArgument { variable: String, argument: String },
    #[error("variable `${variable}` is not defined by {operation}")]
    VariableNotDefinedOnOperation {
        variable: String,
        operation: OperationName,
    },
    #[error("variable `${variable}` is defined by {operation} but never used")]
    VariableDefinedButNeverUsed {
        variable: String,
        operation: OperationName,
    },
}

impl DiagnosticData {
    /// Stable machine readable identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OperationNameMustBeUnique { .. } => "OPERATION_NAME_MUST_BE_UNIQUE",
            Self::AnonymousOperationMustBeTheOnlyOperation => "LONE_ANONYMOUS_OPERATION",
            Self::SubscriptionMustOnlyHaveOneRootSelection { .. } => {
                "SUBSCRIPTION_SINGLE_ROOT_FIELD"
            }
            Self::OperationTypeUndefined { .. } => "OPERATION_TYPE_UNDEFINED",
            Self::FieldUndefinedOnType { .. } => "FIELD_UNDEFINED",
            Self::FieldSelectionOnUnion { .. } => "FIELD_SELECTION_ON_UNION",
            Self::FieldSelectionOnLeaf { .. } => "FIELD_SELECTION_ON_LEAF",
            Self::MissingFieldSelection { .. } => "MISSING_FIELD_SELECTION",
            Self::ResponseOfDifferingTypesMustBeOfSameShape { .. } => {
                "RESPONSE_SHAPE_MISMATCH"
            }
            Self::TypesForFieldMismatch { .. } => "FIELD_TYPES_MISMATCH",
            Self::DifferingFieldsOnPotentiallySameType { .. } => "DIFFERING_FIELDS",
            Self::FieldsConflict { .. } => "FIELDS_CONFLICT",
            Self::ArgumentNotDefinedOnNode { .. } => "ARGUMENT_UNDEFINED",
            Self::ValueDoesntSatisfyType { .. } => "INVALID_VALUE",
            Self::ArgumentMustBeUnique { .. } => "ARGUMENT_MUST_BE_UNIQUE",
            Self::ArgumentRequiredOnField { .. } => "ARGUMENT_REQUIRED",
            Self::ArgumentOnFieldMustNotBeNull { .. } => "ARGUMENT_MUST_NOT_BE_NULL",
            Self::FragmentSpreadFormsCycle { .. } => "FRAGMENT_SPREAD_FORMS_CYCLE",
            Self::FragmentUndefined { .. } => "FRAGMENT_UNDEFINED",
            Self::FragmentDefinedButNotUsed { .. } => "FRAGMENT_UNUSED",
            Self::FragmentDefinitionOnTypeDisallowed { .. } => "FRAGMENT_ON_NON_COMPOSITE_TYPE",
            Self::FragmentDefinitionMustBeUnique { .. } => "FRAGMENT_NAME_MUST_BE_UNIQUE",
            Self::FragmentSpreadOnTypeMismatchEnclosingType { .. } => {
                "FRAGMENT_SPREAD_IMPOSSIBLE"
            }
            Self::InlineFragmentOnTypeDisallowed { .. } => {
                "INLINE_FRAGMENT_ON_NON_COMPOSITE_TYPE"
            }
            Self::InlineFragmentOnTypeMismatchEnclosingType { .. } => {
                "INLINE_FRAGMENT_IMPOSSIBLE"
            }
            Self::TypeUndefined { .. } => "TYPE_UNDEFINED",
            Self::DirectiveUndefined { .. } => "DIRECTIVE_UNDEFINED",
            Self::DirectiveNotAllowedOnNode { .. } => "DIRECTIVE_INVALID_LOCATION",
            Self::DirectiveMustBeUniquePerLocation { .. } => "DIRECTIVE_MUST_BE_UNIQUE",
            Self::VariableMustBeUnique { .. } => "VARIABLE_MUST_BE_UNIQUE",
            Self::VariableOfTypeIsNoValidInputValue { .. } => "VARIABLE_NOT_INPUT_TYPE",
            Self::VariableNotDefinedOnArgument { .. } => "VARIABLE_UNDEFINED",
            Self::VariableNotDefinedOnOperation { .. } => "VARIABLE_UNDEFINED",
            Self::VariableDefinedButNeverUsed { .. } => "VARIABLE_UNUSED",
        }
    }

    /// Attaches a source location.
    pub fn at(self, span: ByteSlice) -> ExternalError {
        ExternalError::new(Some(span), self)
    }
}

/// Broken invariants: these are bugs, not problems with the operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InternalError {
    #[error("type ref {0} is out of bounds")]
    TypeRefOutOfBounds(Ref),
    #[error("{kind} ref {index} is out of bounds")]
    NodeOutOfBounds { kind: &'static str, index: Ref },
    #[error("selection of field `{field}` on enclosing type of kind {kind:?} is unhandled")]
    UnhandledEnclosingType { field: String, kind: NodeKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_operations_are_described() {
        let data = DiagnosticData::VariableDefinedButNeverUsed {
            variable: "id".into(),
            operation: OperationName::new(""),
        };
        assert_eq!(
            data.to_string(),
            "variable `$id` is defined by anonymous operation but never used"
        );
        let data = DiagnosticData::VariableDefinedButNeverUsed {
            variable: "id".into(),
            operation: OperationName::new("GetPet"),
        };
        assert_eq!(
            data.to_string(),
            "variable `$id` is defined by operation `GetPet` but never used"
        );
    }

    #[test]
    fn report_without_errors() {
        let mut report = Report::new();
        assert!(!report.has_errors());
        report.add_internal_error(InternalError::TypeRefOutOfBounds(3));
        assert!(report.has_errors());
        report.reset();
        assert!(!report.has_errors());
    }
}
