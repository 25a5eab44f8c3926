use crate::ast::Document;
use crate::ast::Ref;
use crate::report::DiagnosticData;
use crate::report::OperationName;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// An operation defines each variable once.
pub fn variable_uniqueness(walker: &mut Walker) {
    let id = walker.add_visitor(VariableUniqueness);
    walker.register_enter_variable_definition_visitor(id);
}

struct VariableUniqueness;

impl Visitor for VariableUniqueness {
    fn enter_variable_definition(&mut self, ctx: &mut WalkContext<'_>, variable_definition: Ref) {
        let operation = ctx.operation();
        let Some(root_operation) = ctx.root_operation() else {
            return;
        };
        let name = operation.variable_definition_name(variable_definition);
        let duplicated = operation.operation_definitions[root_operation]
            .variable_definitions
            .iter()
            .any(|&other| {
                other != variable_definition && operation.variable_definition_name(other) == name
            });
        if duplicated {
            ctx.stop_with_external_err(
                DiagnosticData::VariableMustBeUnique {
                    name: name.to_owned(),
                    operation: OperationName::new(
                        operation.operation_definition_name(root_operation),
                    ),
                }
                .at(operation.variable_definitions[variable_definition].span),
            );
        }
    }
}

/// Variables are declared with a scalar, enum or input object type.
pub fn variables_are_input_types(walker: &mut Walker) {
    let id = walker.add_visitor(VariablesAreInputTypes);
    walker.register_enter_variable_definition_visitor(id);
}

struct VariablesAreInputTypes;

impl Visitor for VariablesAreInputTypes {
    fn enter_variable_definition(&mut self, ctx: &mut WalkContext<'_>, variable_definition: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let variable = &operation.variable_definitions[variable_definition];
        let type_name = operation.resolve_type_name(variable.ty);
        let is_input_type = definition
            .type_definition_node(type_name)
            .is_some_and(|node| definition.node_is_input_type(node));
        if !is_input_type {
            ctx.stop_with_external_err(
                DiagnosticData::VariableOfTypeIsNoValidInputValue {
                    name: operation.byte_slice(variable.name).to_owned(),
                    type_name: type_name.to_owned(),
                }
                .at(variable.span),
            );
        }
    }
}

/// Variables used in an operation are defined by it.
///
/// Arguments are checked where they appear, fragment spreads for all the
/// variables the spread fragment uses. Fragment definitions are only checked
/// through their spreads.
pub fn all_variable_uses_defined(walker: &mut Walker) {
    let id = walker.add_visitor(AllVariableUsesDefined);
    walker.register_enter_argument_visitor(id);
    walker.register_enter_fragment_spread_visitor(id);
}

struct AllVariableUsesDefined;

impl Visitor for AllVariableUsesDefined {
    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, argument: Ref) {
        let operation = ctx.operation();
        let Some(root_operation) = ctx.root_operation() else {
            return;
        };
        let mut variables = Vec::new();
        operation.value_variable_names(operation.arguments[argument].value, &mut variables);
        let undefined = variables
            .into_iter()
            .find(|name| operation.variable_definition_by_name(root_operation, name).is_none());
        if let Some(variable) = undefined {
            ctx.stop_with_external_err(
                DiagnosticData::VariableNotDefinedOnArgument {
                    variable: variable.to_owned(),
                    argument: operation.argument_name(argument).to_owned(),
                }
                .at(operation.arguments[argument].span),
            );
        }
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, fragment_spread: Ref) {
        let operation = ctx.operation();
        let Some(root_operation) = ctx.root_operation() else {
            return;
        };
        let name = operation.fragment_spread_name(fragment_spread);
        let undefined = operation
            .fragment_variable_usages(name)
            .into_iter()
            .find(|name| operation.variable_definition_by_name(root_operation, name).is_none());
        if let Some(variable) = undefined {
            ctx.stop_with_external_err(
                DiagnosticData::VariableNotDefinedOnOperation {
                    variable: variable.to_owned(),
                    operation: OperationName::new(
                        operation.operation_definition_name(root_operation),
                    ),
                }
                .at(operation.fragment_spreads[fragment_spread].span),
            );
        }
    }
}

/// Every variable an operation defines is used, directly or by a fragment
/// it spreads.
///
/// All unused variables of the operation are reported before the walk
/// stops.
pub fn all_variables_used(walker: &mut Walker) {
    let id = walker.add_visitor(AllVariablesUsed::default());
    walker.register_enter_document_visitor(id);
    walker.register_enter_operation_visitor(id);
    walker.register_leave_operation_visitor(id);
    walker.register_enter_argument_visitor(id);
    walker.register_enter_fragment_spread_visitor(id);
}

#[derive(Default)]
struct AllVariablesUsed {
    /// Variable definitions of the current operation not used so far
    unused: Vec<Ref>,
}

impl AllVariablesUsed {
    fn mark_used<'a>(&mut self, operation: &Document, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.unused
                .retain(|&variable| operation.variable_definition_name(variable) != name);
        }
    }
}

impl Visitor for AllVariablesUsed {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.unused.clear();
    }

    fn enter_operation_definition(&mut self, ctx: &mut WalkContext<'_>, operation: Ref) {
        self.unused.clone_from(&ctx.operation().operation_definitions[operation].variable_definitions);
    }

    fn leave_operation_definition(&mut self, ctx: &mut WalkContext<'_>, operation: Ref) {
        if self.unused.is_empty() {
            return;
        }
        let document = ctx.operation();
        let operation_name = OperationName::new(document.operation_definition_name(operation));
        for variable in self.unused.drain(..) {
            ctx.add_external_error(
                DiagnosticData::VariableDefinedButNeverUsed {
                    variable: document.variable_definition_name(variable).to_owned(),
                    operation: operation_name.clone(),
                }
                .at(document.variable_definitions[variable].span),
            );
        }
        ctx.stop();
    }

    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, argument: Ref) {
        if self.unused.is_empty() || ctx.root_operation().is_none() {
            return;
        }
        let operation = ctx.operation();
        let mut variables = Vec::new();
        operation.value_variable_names(operation.arguments[argument].value, &mut variables);
        self.mark_used(operation, variables);
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, fragment_spread: Ref) {
        if self.unused.is_empty() || ctx.root_operation().is_none() {
            return;
        }
        let operation = ctx.operation();
        let name = operation.fragment_spread_name(fragment_spread);
        self.mark_used(operation, operation.fragment_variable_usages(name));
    }
}
