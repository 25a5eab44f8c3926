//! Lookups on definition (schema) documents.

use super::Document;
use super::Node;
use super::NodeKind;
use super::OperationType;
use super::Ref;

pub(crate) const TYPENAME: &str = "__typename";

impl Document {
    /// Type definition named `name`.
    pub fn type_definition_node(&self, name: &str) -> Option<Node> {
        self.index.nodes.get(name).copied()
    }

    /// Directive definition named `name`, without the leading `@`.
    pub fn directive_definition_by_name(&self, name: &str) -> Option<Ref> {
        self.index
            .directives
            .get(name)
            .filter(|node| node.kind == NodeKind::DirectiveDefinition)
            .map(|node| node.index)
    }

    /// The object type operations of `operation_type` start from.
    pub fn root_operation_type_node(&self, operation_type: OperationType) -> Option<Node> {
        let roots = &self.root_operation_types;
        let name = match operation_type {
            OperationType::Query => roots.query,
            OperationType::Mutation => roots.mutation,
            OperationType::Subscription => roots.subscription,
        }?;
        self.type_definition_node(self.byte_slice(name))
    }

    /// Fields of an object or interface type, empty for other nodes.
    pub fn node_field_definitions(&self, node: Node) -> &[Ref] {
        let fields = match node.kind {
            NodeKind::ObjectTypeDefinition => self
                .object_type_definitions
                .get(node.index)
                .map(|def| def.fields.as_slice()),
            NodeKind::InterfaceTypeDefinition => self
                .interface_type_definitions
                .get(node.index)
                .map(|def| def.fields.as_slice()),
            _ => None,
        };
        fields.unwrap_or_default()
    }

    /// Resolves `field_name` on the composite type `node`.
    ///
    /// `__typename` resolves on every object, interface and union type.
    pub fn node_field_definition_by_name(&self, node: Node, field_name: &str) -> Option<Ref> {
        if field_name == TYPENAME && self.node_is_composite(node) {
            return self.index.typename_field_definition;
        }
        self.node_field_definitions(node)
            .iter()
            .copied()
            .find(|&field| self.field_definition_name(field) == field_name)
    }

    pub fn field_definition_name(&self, field: Ref) -> &str {
        self.field_definitions
            .get(field)
            .map_or("", |def| self.byte_slice(def.name))
    }

    pub fn field_definition_type(&self, field: Ref) -> Option<Ref> {
        self.field_definitions.get(field).map(|def| def.ty)
    }

    pub fn field_definition_arguments(&self, field: Ref) -> &[Ref] {
        self.field_definitions
            .get(field)
            .map(|def| def.arguments.as_slice())
            .unwrap_or_default()
    }

    /// Node of the named type a field returns, [`Node::UNKNOWN`] when the
    /// schema does not define it.
    pub fn field_definition_type_node(&self, field: Ref) -> Node {
        self.field_definition_type(field)
            .and_then(|ty| self.type_definition_node(self.resolve_type_name(ty)))
            .unwrap_or(Node::UNKNOWN)
    }

    /// Argument definitions of `field_name` on `node`.
    pub fn node_field_definition_arguments(&self, node: Node, field_name: &str) -> &[Ref] {
        match self.node_field_definition_by_name(node, field_name) {
            Some(field) => self.field_definition_arguments(field),
            None => &[],
        }
    }

    pub fn input_value_definition_name(&self, input_value: Ref) -> &str {
        self.input_value_definitions
            .get(input_value)
            .map_or("", |def| self.byte_slice(def.name))
    }

    pub fn input_value_definition_type(&self, input_value: Ref) -> Option<Ref> {
        self.input_value_definitions
            .get(input_value)
            .map(|def| def.ty)
    }

    pub fn input_value_definition_has_default_value(&self, input_value: Ref) -> bool {
        self.input_value_definitions
            .get(input_value)
            .is_some_and(|def| def.default_value.is_some())
    }

    /// An argument or input field may be omitted when its type is nullable
    /// or it has a default value.
    pub fn input_value_definition_argument_is_optional(&self, input_value: Ref) -> bool {
        let Some(def) = self.input_value_definitions.get(input_value) else {
            return false;
        };
        !self.type_is_non_null(def.ty) || def.default_value.is_some()
    }

    pub fn input_value_definition_by_name(&self, definitions: &[Ref], name: &str) -> Option<Ref> {
        definitions
            .iter()
            .copied()
            .find(|&def| self.input_value_definition_name(def) == name)
    }

    /// Argument definitions of the directive definition `directive`.
    pub fn directive_definition_arguments(&self, directive: Ref) -> &[Ref] {
        self.directive_definitions
            .get(directive)
            .map(|def| def.arguments.as_slice())
            .unwrap_or_default()
    }

    pub fn input_object_type_definition_fields(&self, input_object: Ref) -> &[Ref] {
        self.input_object_type_definitions
            .get(input_object)
            .map(|def| def.fields.as_slice())
            .unwrap_or_default()
    }

    pub fn enum_type_definition_contains_enum_value(&self, enum_type: Ref, value: &str) -> bool {
        let Some(def) = self.enum_type_definitions.get(enum_type) else {
            return false;
        };
        def.values.iter().any(|&value_def| {
            self.enum_value_definitions
                .get(value_def)
                .is_some_and(|v| self.byte_slice(v.name) == value)
        })
    }

    pub fn node_is_composite(&self, node: Node) -> bool {
        matches!(
            node.kind,
            NodeKind::ObjectTypeDefinition
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::UnionTypeDefinition
        )
    }

    /// Scalars and enums: fields of these types have no sub-selections.
    pub fn node_is_leaf(&self, node: Node) -> bool {
        matches!(
            node.kind,
            NodeKind::ScalarTypeDefinition | NodeKind::EnumTypeDefinition
        )
    }

    pub fn node_is_input_type(&self, node: Node) -> bool {
        matches!(
            node.kind,
            NodeKind::ScalarTypeDefinition
                | NodeKind::EnumTypeDefinition
                | NodeKind::InputObjectTypeDefinition
        )
    }

    /// Whether a fragment with type condition `fragment_type` can apply
    /// inside a selection on `enclosing_type`: the two types must share at
    /// least one possible object type.
    pub fn node_fragment_is_allowed_on_node(&self, fragment_type: Node, enclosing_type: Node) -> bool {
        if fragment_type == enclosing_type {
            return true;
        }
        let fragment_possible_types = self.node_possible_types(fragment_type);
        let enclosing_possible_types = self.node_possible_types(enclosing_type);
        fragment_possible_types
            .iter()
            .any(|name| enclosing_possible_types.contains(name))
    }

    /// Names of the object types a value of the composite type `node` can
    /// have at runtime.
    pub fn node_possible_types(&self, node: Node) -> Vec<&str> {
        match node.kind {
            NodeKind::ObjectTypeDefinition => self
                .object_type_definitions
                .get(node.index)
                .map(|def| vec![self.byte_slice(def.name)])
                .unwrap_or_default(),
            NodeKind::UnionTypeDefinition => self
                .union_type_definitions
                .get(node.index)
                .map(|def| {
                    def.members
                        .iter()
                        .map(|&member| self.byte_slice(member))
                        .collect()
                })
                .unwrap_or_default(),
            NodeKind::InterfaceTypeDefinition => {
                let interface_name = self.node_name(node);
                self.object_type_definitions
                    .iter()
                    .filter(|def| {
                        def.implements_interfaces
                            .iter()
                            .any(|&implemented| self.byte_slice(implemented) == interface_name)
                    })
                    .map(|def| self.byte_slice(def.name))
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}
