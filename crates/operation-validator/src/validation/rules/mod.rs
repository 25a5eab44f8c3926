//! The validation rules.
//!
//! Each rule is a [`Rule`] function installing a visitor on a
//! [`Walker`][crate::Walker]. [`ALL`] lists them in the order
//! [`OperationValidator::default`][crate::OperationValidator] registers them,
//! which decides the error reported when a document breaks several rules.

use super::Rule;

mod arguments;
mod directives;
mod field_selection_merging;
mod field_selections;
mod fragments;
mod operations;
mod values;
mod variables;

pub use self::arguments::argument_uniqueness;
pub use self::arguments::required_arguments;
pub use self::arguments::valid_arguments;
pub use self::directives::directives_are_defined;
pub use self::directives::directives_are_in_valid_locations;
pub use self::directives::directives_are_unique_per_location;
pub use self::field_selection_merging::field_selection_merging;
pub use self::field_selections::field_selections;
pub use self::fragments::fragments;
pub use self::operations::lone_anonymous_operation;
pub use self::operations::operation_name_uniqueness;
pub use self::operations::subscription_single_root_field;
pub use self::values::values;
pub use self::variables::all_variable_uses_defined;
pub use self::variables::all_variables_used;
pub use self::variables::variable_uniqueness;
pub use self::variables::variables_are_input_types;

/// Every rule, in registration order.
pub const ALL: &[Rule] = &[
    operation_name_uniqueness,
    lone_anonymous_operation,
    subscription_single_root_field,
    field_selections,
    field_selection_merging,
    valid_arguments,
    values,
    argument_uniqueness,
    required_arguments,
    fragments,
    directives_are_defined,
    directives_are_in_valid_locations,
    variable_uniqueness,
    directives_are_unique_per_location,
    variables_are_input_types,
    all_variable_uses_defined,
    all_variables_used,
];
