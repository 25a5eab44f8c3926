//! Definitions every schema has without declaring them.

use super::definitions::TYPENAME;
use super::push;
use super::ByteSlice;
use super::DirectiveDefinition;
use super::DirectiveLocation;
use super::DirectiveLocations;
use super::Document;
use super::FieldDefinition;
use super::InputValueDefinition;
use super::Node;
use super::NodeKind;
use super::ScalarTypeDefinition;
use super::StringValue;
use super::Value;
use super::ValueKind;

const BUILT_IN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

impl Document {
    /// Adds the built-in scalars and directives the schema does not define
    /// itself, the `__typename` meta field and default root operation types.
    pub(crate) fn add_schema_builtins(&mut self) {
        for scalar in BUILT_IN_SCALARS {
            if self.index.nodes.contains_key(scalar) {
                continue;
            }
            let name = self.input.append_str(scalar);
            let index = push(
                &mut self.scalar_type_definitions,
                ScalarTypeDefinition {
                    name,
                    directives: Vec::new(),
                },
            );
            self.index.nodes.insert(
                scalar.to_owned(),
                Node::new(NodeKind::ScalarTypeDefinition, index),
            );
        }

        let conditional_locations = [
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ];
        for directive in ["include", "skip"] {
            if self.index.directives.contains_key(directive) {
                continue;
            }
            let argument = self.add_builtin_input_value("if", "Boolean", true, None);
            self.add_builtin_directive(
                directive,
                vec![argument],
                conditional_locations.into_iter().collect(),
            );
        }

        if !self.index.directives.contains_key("deprecated") {
            let reason = self.input.append_str(DEFAULT_DEPRECATION_REASON);
            let reason = push(&mut self.string_values, StringValue { content: reason });
            let argument = self.add_builtin_input_value(
                "reason",
                "String",
                false,
                Some(Value::new(ValueKind::String, reason)),
            );
            self.add_builtin_directive(
                "deprecated",
                vec![argument],
                [DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue]
                    .into_iter()
                    .collect(),
            );
        }

        if self.index.typename_field_definition.is_none() {
            let name = self.input.append_str(TYPENAME);
            let ty = self.add_builtin_type("String", true);
            let field = push(
                &mut self.field_definitions,
                FieldDefinition {
                    name,
                    arguments: Vec::new(),
                    ty,
                    directives: Vec::new(),
                },
            );
            self.index.typename_field_definition = Some(field);
        }

        let roots = &self.root_operation_types;
        if roots.query.is_none() && roots.mutation.is_none() && roots.subscription.is_none() {
            self.root_operation_types.query = self.object_type_name_slice("Query");
            self.root_operation_types.mutation = self.object_type_name_slice("Mutation");
            self.root_operation_types.subscription = self.object_type_name_slice("Subscription");
        }
    }

    fn add_builtin_type(&mut self, name: &str, non_null: bool) -> usize {
        let name = self.input.append_str(name);
        let named = self.add_named_type(name);
        if non_null {
            self.add_non_null_type(named)
        } else {
            named
        }
    }

    fn add_builtin_input_value(
        &mut self,
        name: &str,
        type_name: &str,
        non_null: bool,
        default_value: Option<Value>,
    ) -> usize {
        let name = self.input.append_str(name);
        let ty = self.add_builtin_type(type_name, non_null);
        push(
            &mut self.input_value_definitions,
            InputValueDefinition {
                name,
                ty,
                default_value,
                directives: Vec::new(),
            },
        )
    }

    fn add_builtin_directive(
        &mut self,
        name: &str,
        arguments: Vec<usize>,
        locations: DirectiveLocations,
    ) {
        let name_slice = self.input.append_str(name);
        let index = push(
            &mut self.directive_definitions,
            DirectiveDefinition {
                name: name_slice,
                arguments,
                repeatable: false,
                locations,
            },
        );
        self.index.directives.insert(
            name.to_owned(),
            Node::new(NodeKind::DirectiveDefinition, index),
        );
    }

    fn object_type_name_slice(&self, name: &str) -> Option<ByteSlice> {
        let node = self.type_definition_node(name)?;
        if node.kind != NodeKind::ObjectTypeDefinition {
            return None;
        }
        self.object_type_definitions
            .get(node.index)
            .map(|def| def.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Type;

    #[test]
    fn builtins_do_not_shadow_schema_definitions() {
        let mut document = Document::new("");
        document.add_schema_builtins();
        let directive_count = document.directive_definitions.len();
        let scalar_count = document.scalar_type_definitions.len();
        document.add_schema_builtins();

        assert_eq!(scalar_count, 5);
        assert_eq!(directive_count, 3);
        assert_eq!(document.directive_definitions.len(), directive_count);
        assert_eq!(document.scalar_type_definitions.len(), scalar_count);
    }

    #[test]
    fn typename_is_non_null_string() {
        let mut document = Document::new("");
        document.add_schema_builtins();
        let field = document.index.typename_field_definition.unwrap();
        let ty = document.field_definition_type(field).unwrap();
        let Ok(Type::NonNull(named)) = document.type_at(ty).copied() else {
            panic!("expected a non null type");
        };
        assert_eq!(document.resolve_type_name(named), "String");
    }

    #[test]
    fn deprecated_reason_is_optional() {
        let mut document = Document::new("");
        document.add_schema_builtins();
        let deprecated = document.directive_definition_by_name("deprecated").unwrap();
        let reason = document.directive_definition_arguments(deprecated)[0];
        assert!(document.input_value_definition_argument_is_optional(reason));

        let skip = document.directive_definition_by_name("skip").unwrap();
        let condition = document.directive_definition_arguments(skip)[0];
        assert!(!document.input_value_definition_argument_is_optional(condition));
    }
}
