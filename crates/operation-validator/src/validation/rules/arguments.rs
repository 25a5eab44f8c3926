use super::values::literal_satisfies_named_type;
use crate::ast::operation_type_satisfies_definition_type;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::Type;
use crate::ast::ValueKind;
use crate::report::DiagnosticData;
use crate::report::InternalError;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Arguments are declared by their field or directive, and scalar, enum,
/// null and variable values fit the declared type.
///
/// List and object literals are checked by [`values`][super::values].
/// Variables not defined by the enclosing operation, and variables inside
/// fragment definitions, are left to the variable rules.
pub fn valid_arguments(walker: &mut Walker) {
    let id = walker.add_visitor(ValidArguments);
    walker.register_enter_argument_visitor(id);
}

struct ValidArguments;

impl Visitor for ValidArguments {
    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, argument: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let argument_span = operation.arguments[argument].span;

        let Some(input_value) = ctx.argument_input_value_definition(argument) else {
            ctx.stop_with_external_err(
                DiagnosticData::ArgumentNotDefinedOnNode {
                    argument: operation.argument_name(argument).to_owned(),
                    node: ctx.ancestor_name().to_owned(),
                }
                .at(argument_span),
            );
            return;
        };
        let Some(ty) = definition.input_value_definition_type(input_value) else {
            ctx.stop_with_internal_err(InternalError::NodeOutOfBounds {
                kind: NodeKind::InputValueDefinition.as_str(),
                index: input_value,
            });
            return;
        };
        let value = operation.arguments[argument].value;

        let satisfied = match value.kind {
            ValueKind::Variable => {
                let Some(root_operation) = ctx.root_operation() else {
                    return;
                };
                let name = operation.variable_value_name(value.index);
                let Some(variable) = operation.variable_definition_by_name(root_operation, name)
                else {
                    return;
                };
                let variable = &operation.variable_definitions[variable];
                let has_default_value = variable.default_value.is_some()
                    || definition.input_value_definition_has_default_value(input_value);
                operation_type_satisfies_definition_type(
                    operation,
                    variable.ty,
                    definition,
                    ty,
                    has_default_value,
                )
            }
            ValueKind::Null => Ok(!definition.type_is_non_null(ty)),
            ValueKind::Enum => {
                let enum_type = definition
                    .type_definition_node(definition.resolve_type_name(ty))
                    .filter(|node| node.kind == NodeKind::EnumTypeDefinition);
                Ok(enum_type.is_some_and(|node| {
                    definition.enum_type_definition_contains_enum_value(
                        node.index,
                        operation.enum_value_name(value.index),
                    )
                }))
            }
            ValueKind::Boolean | ValueKind::Integer | ValueKind::Float | ValueKind::String => {
                let named_type = match definition.type_at(ty) {
                    Ok(Type::NonNull(of_type)) => definition.type_at(*of_type),
                    other => other,
                };
                match named_type {
                    Ok(Type::Named(name)) => Ok(literal_satisfies_named_type(
                        definition,
                        definition.byte_slice(*name),
                        value.kind,
                    )),
                    // list types are checked by `values`
                    Ok(_) => return,
                    Err(err) => Err(err),
                }
            }
            ValueKind::List | ValueKind::Object => return,
        };

        match satisfied {
            Ok(true) => {}
            Ok(false) => {
                let printed = operation
                    .print_value(value)
                    .and_then(|value| Ok((value, definition.print_type(ty)?)));
                match printed {
                    Ok((value, ty)) => ctx.stop_with_external_err(
                        DiagnosticData::ValueDoesntSatisfyType { value, ty }.at(argument_span),
                    ),
                    Err(err) => ctx.stop_with_internal_err(err),
                }
            }
            Err(err) => ctx.stop_with_internal_err(err),
        }
    }
}

/// A field or directive receives each argument at most once.
pub fn argument_uniqueness(walker: &mut Walker) {
    let id = walker.add_visitor(ArgumentUniqueness);
    walker.register_enter_argument_visitor(id);
}

struct ArgumentUniqueness;

impl Visitor for ArgumentUniqueness {
    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, argument: Ref) {
        let operation = ctx.operation();
        let Some(parent) = ctx.parent() else {
            return;
        };
        let name = operation.argument_name(argument);
        let duplicate = operation
            .arguments_after(parent, argument)
            .iter()
            .copied()
            .find(|&other| operation.argument_name(other) == name);
        if let Some(duplicate) = duplicate {
            ctx.stop_with_external_err(
                DiagnosticData::ArgumentMustBeUnique {
                    argument: name.to_owned(),
                }
                .at(operation.arguments[duplicate].span),
            );
        }
    }
}

/// Non-null arguments without default value are provided, and not as a
/// `null` literal.
pub fn required_arguments(walker: &mut Walker) {
    let id = walker.add_visitor(RequiredArguments);
    walker.register_enter_field_visitor(id);
}

struct RequiredArguments;

impl Visitor for RequiredArguments {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, field: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let field_name = operation.field_name(field);
        let argument_definitions =
            definition.node_field_definition_arguments(ctx.enclosing_type_definition(), field_name);

        for &input_value in argument_definitions {
            if definition.input_value_definition_argument_is_optional(input_value) {
                continue;
            }
            let name = definition.input_value_definition_name(input_value);
            let Some(argument) = operation.field_argument(field, name) else {
                ctx.stop_with_external_err(
                    DiagnosticData::ArgumentRequiredOnField {
                        argument: name.to_owned(),
                        field: field_name.to_owned(),
                    }
                    .at(operation.fields[field].span),
                );
                return;
            };
            if operation.arguments[argument].value.kind == ValueKind::Null {
                ctx.stop_with_external_err(
                    DiagnosticData::ArgumentOnFieldMustNotBeNull {
                        argument: name.to_owned(),
                        field: field_name.to_owned(),
                    }
                    .at(operation.arguments[argument].span),
                );
                return;
            }
        }
    }
}
