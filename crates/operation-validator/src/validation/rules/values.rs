use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::report::DiagnosticData;
use crate::report::InternalError;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Argument values, including nested list and object literals, fit the
/// declared input type.
///
/// An argument given as a variable is checked through the variable's
/// default value, when it has one. Variables nested inside literals are
/// accepted here and checked by the variable rules.
pub fn values(walker: &mut Walker) {
    let id = walker.add_visitor(Values);
    walker.register_enter_argument_visitor(id);
}

struct Values;

impl Visitor for Values {
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

        let mut value = operation.arguments[argument].value;
        if value.kind == ValueKind::Variable {
            let Some(root_operation) = ctx.root_operation() else {
                return;
            };
            let name = operation.variable_value_name(value.index);
            let default_value = operation
                .variable_definition_by_name(root_operation, name)
                .and_then(|variable| operation.variable_definitions[variable].default_value);
            match default_value {
                Some(default_value) => value = default_value,
                None => return,
            }
        }

        let checker = ValueChecker {
            operation,
            definition,
        };
        let error = match checker.value_satisfies_type(value, ty) {
            Ok(true) => return,
            Ok(false) => operation.print_value(value).and_then(|value| {
                Ok(DiagnosticData::ValueDoesntSatisfyType {
                    value,
                    ty: definition.print_type(ty)?,
                })
            }),
            Err(err) => Err(err),
        };
        match error {
            Ok(error) => ctx.stop_with_external_err(error.at(argument_span)),
            Err(err) => ctx.stop_with_internal_err(err),
        }
    }
}

/// Checks operation values against schema types.
struct ValueChecker<'a> {
    operation: &'a Document,
    definition: &'a Document,
}

impl ValueChecker<'_> {
    fn value_satisfies_type(&self, value: Value, ty: Ref) -> Result<bool, InternalError> {
        if value.kind == ValueKind::Variable {
            return Ok(true);
        }
        match *self.definition.type_at(ty)? {
            Type::NonNull(of_type) => {
                if value.kind == ValueKind::Null {
                    return Ok(false);
                }
                match *self.definition.type_at(of_type)? {
                    Type::List(item_type) => self.value_satisfies_list_type(value, item_type, true),
                    _ => self.value_satisfies_type(value, of_type),
                }
            }
            _ if value.kind == ValueKind::Null => Ok(true),
            Type::Named(name) => {
                let name = self.definition.byte_slice(name);
                match self.definition.type_definition_node(name) {
                    Some(node) => self.value_satisfies_type_definition(value, node),
                    None => Ok(false),
                }
            }
            Type::List(item_type) => self.value_satisfies_list_type(value, item_type, false),
        }
    }

    /// `[T]!` additionally requires at least one item.
    fn value_satisfies_list_type(
        &self,
        value: Value,
        item_type: Ref,
        list_is_non_null: bool,
    ) -> Result<bool, InternalError> {
        if value.kind != ValueKind::List {
            return Ok(false);
        }
        let items = self.operation.list_value_items(value.index);
        if items.is_empty() && list_is_non_null {
            return Ok(false);
        }
        for &item in items {
            let Some(item) = self.operation.value_at(item) else {
                return Err(InternalError::NodeOutOfBounds {
                    kind: "Value",
                    index: item,
                });
            };
            if !self.value_satisfies_type(item, item_type)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn value_satisfies_type_definition(&self, value: Value, node: Node) -> Result<bool, InternalError> {
        Ok(match node.kind {
            NodeKind::EnumTypeDefinition => {
                value.kind == ValueKind::Enum
                    && self.definition.enum_type_definition_contains_enum_value(
                        node.index,
                        self.operation.enum_value_name(value.index),
                    )
            }
            NodeKind::ScalarTypeDefinition => {
                literal_satisfies_scalar(self.definition.node_name(node), value.kind)
            }
            NodeKind::InputObjectTypeDefinition => {
                return self.value_satisfies_input_object(value, node.index)
            }
            _ => false,
        })
    }

    fn value_satisfies_input_object(&self, value: Value, input_object: Ref) -> Result<bool, InternalError> {
        if value.kind != ValueKind::Object {
            return Ok(false);
        }
        let fields = self.operation.object_value_fields(value.index);
        let field_definitions = self.definition.input_object_type_definition_fields(input_object);

        for &field_definition in field_definitions {
            let name = self.definition.input_value_definition_name(field_definition);
            let field = fields
                .iter()
                .copied()
                .find(|&field| self.operation.object_field_name(field) == name);
            let satisfied = match field {
                Some(field) => {
                    let (Some(field), Some(ty)) = (
                        self.operation.object_fields.get(field),
                        self.definition.input_value_definition_type(field_definition),
                    ) else {
                        return Err(InternalError::NodeOutOfBounds {
                            kind: NodeKind::InputValueDefinition.as_str(),
                            index: field_definition,
                        });
                    };
                    self.value_satisfies_type(field.value, ty)?
                }
                None => self
                    .definition
                    .input_value_definition_argument_is_optional(field_definition),
            };
            if !satisfied {
                return Ok(false);
            }
        }

        let names: Vec<&str> = fields
            .iter()
            .map(|&field| self.operation.object_field_name(field))
            .collect();
        let all_declared = names.iter().all(|name| {
            self.definition
                .input_value_definition_by_name(field_definitions, name)
                .is_some()
        });
        let has_duplicates = names
            .iter()
            .enumerate()
            .any(|(i, name)| names[i + 1..].contains(name));
        Ok(all_declared && !has_duplicates)
    }
}

/// Whether a literal of `kind` is accepted by the type named `type_name`.
/// Only scalar types accept scalar literals.
pub(super) fn literal_satisfies_named_type(definition: &Document, type_name: &str, kind: ValueKind) -> bool {
    definition
        .type_definition_node(type_name)
        .is_some_and(|node| {
            node.kind == NodeKind::ScalarTypeDefinition && literal_satisfies_scalar(type_name, kind)
        })
}

/// Literal kinds accepted by the built-in scalars. Custom scalars accept
/// any literal.
fn literal_satisfies_scalar(scalar_name: &str, kind: ValueKind) -> bool {
    match scalar_name {
        "String" => kind == ValueKind::String,
        "ID" => matches!(kind, ValueKind::String | ValueKind::Integer),
        "Int" => kind == ValueKind::Integer,
        "Float" => matches!(kind, ValueKind::Integer | ValueKind::Float),
        "Boolean" => kind == ValueKind::Boolean,
        _ => !matches!(kind, ValueKind::Null | ValueKind::Variable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_coerce_to_floats_and_ids() {
        assert!(literal_satisfies_scalar("Float", ValueKind::Integer));
        assert!(literal_satisfies_scalar("ID", ValueKind::Integer));
        assert!(!literal_satisfies_scalar("Int", ValueKind::Float));
        assert!(!literal_satisfies_scalar("String", ValueKind::Integer));
    }

    #[test]
    fn custom_scalars_accept_any_literal() {
        assert!(literal_satisfies_scalar("DateTime", ValueKind::String));
        assert!(literal_satisfies_scalar("JSON", ValueKind::Object));
        assert!(!literal_satisfies_scalar("JSON", ValueKind::Null));
    }
}
