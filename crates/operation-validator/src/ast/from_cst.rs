//! Lowering of an `apollo-parser` CST into an arena [`Document`].

use super::push;
use super::Argument;
use super::BooleanValue;
use super::ByteSlice;
use super::Directive;
use super::DirectiveDefinition;
use super::DirectiveLocation;
use super::Document;
use super::EnumTypeDefinition;
use super::EnumValue;
use super::EnumValueDefinition;
use super::Field;
use super::FieldDefinition;
use super::FloatValue;
use super::FragmentDefinition;
use super::FragmentSpread;
use super::InlineFragment;
use super::InputObjectTypeDefinition;
use super::InputValueDefinition;
use super::IntValue;
use super::InterfaceTypeDefinition;
use super::ListValue;
use super::Node;
use super::NodeKind;
use super::ObjectField;
use super::ObjectTypeDefinition;
use super::ObjectValue;
use super::OperationDefinition;
use super::OperationType;
use super::Ref;
use super::ScalarTypeDefinition;
use super::Selection;
use super::SelectionKind;
use super::SelectionSet;
use super::StringValue;
use super::UnionTypeDefinition;
use super::Value;
use super::ValueKind;
use super::VariableDefinition;
use super::VariableValue;
use apollo_parser::cst;
use apollo_parser::cst::CstNode;
use apollo_parser::SyntaxNode;
use apollo_parser::S;

impl Document {
    /// Lowers every definition of `document`. Type extensions are merged
    /// into the type they extend once all definitions are known.
    pub(crate) fn from_cst(source: &str, document: cst::Document) -> Self {
        let mut lowered = Document::new(source);
        let mut extensions = Vec::new();
        for definition in document.definitions() {
            use cst::Definition as C;
            match definition {
                C::SchemaExtension(_)
                | C::ScalarTypeExtension(_)
                | C::ObjectTypeExtension(_)
                | C::InterfaceTypeExtension(_)
                | C::UnionTypeExtension(_)
                | C::EnumTypeExtension(_)
                | C::InputObjectTypeExtension(_) => extensions.push(definition),
                definition => lowered.lower_definition(&definition),
            }
        }
        for extension in &extensions {
            lowered.lower_definition(extension);
        }
        lowered
    }

    /// Definitions with conversion errors are skipped: they have a
    /// corresponding syntax error.
    fn lower_definition(&mut self, definition: &cst::Definition) {
        use cst::Definition as C;
        match definition {
            C::OperationDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    let index = push(&mut self.operation_definitions, def);
                    self.root_nodes
                        .push(Node::new(NodeKind::OperationDefinition, index));
                }
            }
            C::FragmentDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    let index = push(&mut self.fragment_definitions, def);
                    self.root_nodes
                        .push(Node::new(NodeKind::FragmentDefinition, index));
                }
            }
            C::DirectiveDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    let name = self.byte_slice(def.name).to_owned();
                    let index = push(&mut self.directive_definitions, def);
                    self.index
                        .directives
                        .entry(name)
                        .or_insert(Node::new(NodeKind::DirectiveDefinition, index));
                }
            }
            C::SchemaDefinition(def) => {
                for root in def.root_operation_type_definitions() {
                    self.lower_root_operation_type(&root);
                }
            }
            C::SchemaExtension(def) => {
                for root in def.root_operation_type_definitions() {
                    self.lower_root_operation_type(&root);
                }
            }
            C::ScalarTypeDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_scalar_type(def);
                }
            }
            C::ScalarTypeExtension(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_scalar_type(def);
                }
            }
            C::ObjectTypeDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_object_type(def);
                }
            }
            C::ObjectTypeExtension(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_object_type(def);
                }
            }
            C::InterfaceTypeDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_interface_type(def);
                }
            }
            C::InterfaceTypeExtension(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_interface_type(def);
                }
            }
            C::UnionTypeDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_union_type(def);
                }
            }
            C::UnionTypeExtension(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_union_type(def);
                }
            }
            C::EnumTypeDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_enum_type(def);
                }
            }
            C::EnumTypeExtension(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_enum_type(def);
                }
            }
            C::InputObjectTypeDefinition(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_input_object_type(def);
                }
            }
            C::InputObjectTypeExtension(def) => {
                if let Some(def) = def.convert(self) {
                    self.add_input_object_type(def);
                }
            }
        }
    }

    fn lower_root_operation_type(&mut self, root: &cst::RootOperationTypeDefinition) {
        let Some(operation_type) = root.operation_type().and_then(|ty| ty.convert(self)) else {
            return;
        };
        let Some(name) = root
            .named_type()
            .and_then(|ty| ty.name())
            .and_then(|name| name.convert(self))
        else {
            return;
        };
        let roots = &mut self.root_operation_types;
        match operation_type {
            OperationType::Query => roots.query = Some(name),
            OperationType::Mutation => roots.mutation = Some(name),
            OperationType::Subscription => roots.subscription = Some(name),
        }
    }

    /// Index entry for the type named `name` if it has kind `kind`.
    fn existing_type(&self, name: ByteSlice, kind: NodeKind) -> Option<Ref> {
        self.type_definition_node(self.byte_slice(name))
            .filter(|node| node.kind == kind)
            .map(|node| node.index)
    }

    fn index_type(&mut self, name: ByteSlice, node: Node) {
        let name = self.byte_slice(name).to_owned();
        self.index.nodes.entry(name).or_insert(node);
    }

    fn add_scalar_type(&mut self, def: ScalarTypeDefinition) {
        match self.existing_type(def.name, NodeKind::ScalarTypeDefinition) {
            Some(index) => self.scalar_type_definitions[index]
                .directives
                .extend(def.directives),
            None => {
                let name = def.name;
                let index = push(&mut self.scalar_type_definitions, def);
                self.index_type(name, Node::new(NodeKind::ScalarTypeDefinition, index));
            }
        }
    }

    fn add_object_type(&mut self, def: ObjectTypeDefinition) {
        match self.existing_type(def.name, NodeKind::ObjectTypeDefinition) {
            Some(index) => {
                let existing = &mut self.object_type_definitions[index];
                existing
                    .implements_interfaces
                    .extend(def.implements_interfaces);
                existing.directives.extend(def.directives);
                existing.fields.extend(def.fields);
            }
            None => {
                let name = def.name;
                let index = push(&mut self.object_type_definitions, def);
                self.index_type(name, Node::new(NodeKind::ObjectTypeDefinition, index));
            }
        }
    }

    fn add_interface_type(&mut self, def: InterfaceTypeDefinition) {
        match self.existing_type(def.name, NodeKind::InterfaceTypeDefinition) {
            Some(index) => {
                let existing = &mut self.interface_type_definitions[index];
                existing
                    .implements_interfaces
                    .extend(def.implements_interfaces);
                existing.directives.extend(def.directives);
                existing.fields.extend(def.fields);
            }
            None => {
                let name = def.name;
                let index = push(&mut self.interface_type_definitions, def);
                self.index_type(name, Node::new(NodeKind::InterfaceTypeDefinition, index));
            }
        }
    }

    fn add_union_type(&mut self, def: UnionTypeDefinition) {
        match self.existing_type(def.name, NodeKind::UnionTypeDefinition) {
            Some(index) => {
                let existing = &mut self.union_type_definitions[index];
                existing.directives.extend(def.directives);
                existing.members.extend(def.members);
            }
            None => {
                let name = def.name;
                let index = push(&mut self.union_type_definitions, def);
                self.index_type(name, Node::new(NodeKind::UnionTypeDefinition, index));
            }
        }
    }

    fn add_enum_type(&mut self, def: EnumTypeDefinition) {
        match self.existing_type(def.name, NodeKind::EnumTypeDefinition) {
            Some(index) => {
                let existing = &mut self.enum_type_definitions[index];
                existing.directives.extend(def.directives);
                existing.values.extend(def.values);
            }
            None => {
                let name = def.name;
                let index = push(&mut self.enum_type_definitions, def);
                self.index_type(name, Node::new(NodeKind::EnumTypeDefinition, index));
            }
        }
    }

    fn add_input_object_type(&mut self, def: InputObjectTypeDefinition) {
        match self.existing_type(def.name, NodeKind::InputObjectTypeDefinition) {
            Some(index) => {
                let existing = &mut self.input_object_type_definitions[index];
                existing.directives.extend(def.directives);
                existing.fields.extend(def.fields);
            }
            None => {
                let name = def.name;
                let index = push(&mut self.input_object_type_definitions, def);
                self.index_type(name, Node::new(NodeKind::InputObjectTypeDefinition, index));
            }
        }
    }
}

/// Similar to `TryFrom`, but allocating into the document being built and
/// with an `Option` return type since the CST is fault tolerant.
trait Convert {
    type Target;
    fn convert(&self, document: &mut Document) -> Option<Self::Target>;
}

fn span(syntax: &SyntaxNode) -> ByteSlice {
    let range = syntax.text_range();
    ByteSlice::new(u32::from(range.start()), u32::from(range.end()))
}

/// Convert and collect, silently skipping entries with conversion errors
/// as they have corresponding parse errors in `SyntaxTree::errors`
fn collect<CstType, Target>(
    document: &mut Document,
    iter: impl IntoIterator<Item = CstType>,
) -> Vec<Target>
where
    CstType: Convert<Target = Target>,
{
    iter.into_iter()
        .filter_map(|value| value.convert(document))
        .collect()
}

fn collect_directives(document: &mut Document, directives: Option<cst::Directives>) -> Vec<Ref> {
    match directives {
        Some(directives) => collect(document, directives.directives()),
        None => Vec::new(),
    }
}

fn collect_arguments(document: &mut Document, arguments: Option<cst::Arguments>) -> Vec<Ref> {
    match arguments {
        Some(arguments) => collect(document, arguments.arguments()),
        None => Vec::new(),
    }
}

fn collect_input_values(
    document: &mut Document,
    definitions: Option<cst::ArgumentsDefinition>,
) -> Vec<Ref> {
    match definitions {
        Some(definitions) => collect(document, definitions.input_value_definitions()),
        None => Vec::new(),
    }
}

fn collect_named_types(
    document: &mut Document,
    named_types: impl IntoIterator<Item = cst::NamedType>,
) -> Vec<ByteSlice> {
    named_types
        .into_iter()
        .filter_map(|named| named.name()?.convert(document))
        .collect()
}

impl Convert for cst::Name {
    type Target = ByteSlice;

    fn convert(&self, _document: &mut Document) -> Option<Self::Target> {
        Some(span(self.syntax()))
    }
}

impl Convert for cst::OperationType {
    type Target = OperationType;

    fn convert(&self, _document: &mut Document) -> Option<Self::Target> {
        let token = self.syntax().first_token()?;
        match token.kind() {
            S![query] => Some(OperationType::Query),
            S![mutation] => Some(OperationType::Mutation),
            S![subscription] => Some(OperationType::Subscription),
            _ => None,
        }
    }
}

impl Convert for cst::OperationDefinition {
    type Target = OperationDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let operation_type = match self.operation_type() {
            Some(ty) => ty.convert(document)?,
            None => OperationType::Query,
        };
        let name = match self.name() {
            Some(name) => name.convert(document)?,
            None => ByteSlice::default(),
        };
        let variable_definitions = match self.variable_definitions() {
            Some(defs) => collect(document, defs.variable_definitions()),
            None => Vec::new(),
        };
        let directives = collect_directives(document, self.directives());
        let selection_set = self.selection_set()?.convert(document)?;
        Some(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: span(self.syntax()),
        })
    }
}

impl Convert for cst::FragmentDefinition {
    type Target = FragmentDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.fragment_name()?.name()?.convert(document)?;
        let type_condition = self
            .type_condition()?
            .named_type()?
            .name()?
            .convert(document)?;
        let directives = collect_directives(document, self.directives());
        let selection_set = self.selection_set()?.convert(document)?;
        Some(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: span(self.syntax()),
        })
    }
}

impl Convert for cst::SelectionSet {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let selections = collect(document, self.selections());
        Some(push(&mut document.selection_sets, SelectionSet { selections }))
    }
}

impl Convert for cst::Selection {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        use cst::Selection as C;
        let selection = match self {
            C::Field(field) => {
                let field = field.convert(document)?;
                Selection {
                    kind: SelectionKind::Field,
                    index: push(&mut document.fields, field),
                }
            }
            C::FragmentSpread(spread) => {
                let spread = spread.convert(document)?;
                Selection {
                    kind: SelectionKind::FragmentSpread,
                    index: push(&mut document.fragment_spreads, spread),
                }
            }
            C::InlineFragment(fragment) => {
                let fragment = fragment.convert(document)?;
                Selection {
                    kind: SelectionKind::InlineFragment,
                    index: push(&mut document.inline_fragments, fragment),
                }
            }
        };
        Some(push(&mut document.selections, selection))
    }
}

impl Convert for cst::Field {
    type Target = Field;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let alias = match self.alias() {
            Some(alias) => Some(alias.name()?.convert(document)?),
            None => None,
        };
        let name = self.name()?.convert(document)?;
        let arguments = collect_arguments(document, self.arguments());
        let directives = collect_directives(document, self.directives());
        let selection_set = match self.selection_set() {
            Some(set) => Some(set.convert(document)?),
            None => None,
        };
        Some(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: span(self.syntax()),
        })
    }
}

impl Convert for cst::FragmentSpread {
    type Target = FragmentSpread;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let fragment_name = self.fragment_name()?.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        Some(FragmentSpread {
            fragment_name,
            directives,
            span: span(self.syntax()),
        })
    }
}

impl Convert for cst::InlineFragment {
    type Target = InlineFragment;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let type_condition = match self.type_condition() {
            Some(condition) => Some(condition.named_type()?.name()?.convert(document)?),
            None => None,
        };
        let directives = collect_directives(document, self.directives());
        let selection_set = self.selection_set()?.convert(document)?;
        Some(InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: span(self.syntax()),
        })
    }
}

impl Convert for cst::Argument {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let value = self.value()?.convert(document)?;
        let argument = Argument {
            name,
            value,
            span: span(self.syntax()),
        };
        Some(push(&mut document.arguments, argument))
    }
}

impl Convert for cst::Directive {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let arguments = collect_arguments(document, self.arguments());
        let directive = Directive {
            name,
            arguments,
            span: span(self.syntax()),
        };
        Some(push(&mut document.directives, directive))
    }
}

impl Convert for cst::VariableDefinition {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.variable()?.name()?.convert(document)?;
        let ty = self.ty()?.convert(document)?;
        let default_value = match self.default_value() {
            Some(default) => Some(default.value()?.convert(document)?),
            None => None,
        };
        let directives = collect_directives(document, self.directives());
        let definition = VariableDefinition {
            name,
            ty,
            default_value,
            directives,
            span: span(self.syntax()),
        };
        Some(push(&mut document.variable_definitions, definition))
    }
}

impl Convert for cst::Type {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        use cst::Type as C;
        match self {
            C::NamedType(named) => {
                let name = named.name()?.convert(document)?;
                Some(document.add_named_type(name))
            }
            C::ListType(list) => {
                let of_type = list.ty()?.convert(document)?;
                Some(document.add_list_type(of_type))
            }
            C::NonNullType(non_null) => {
                let of_type = if let Some(named) = non_null.named_type() {
                    let name = named.name()?.convert(document)?;
                    document.add_named_type(name)
                } else if let Some(list) = non_null.list_type() {
                    let item = list.ty()?.convert(document)?;
                    document.add_list_type(item)
                } else {
                    return None;
                };
                Some(document.add_non_null_type(of_type))
            }
        }
    }
}

impl Convert for cst::Value {
    type Target = Value;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        use cst::Value as C;
        Some(match self {
            C::Variable(v) => {
                let name = v.name()?.convert(document)?;
                let variable = VariableValue {
                    name,
                    span: span(v.syntax()),
                };
                Value::new(
                    ValueKind::Variable,
                    push(&mut document.variable_values, variable),
                )
            }
            C::StringValue(v) => {
                let content = document.input.append_str(&String::from(v));
                Value::new(
                    ValueKind::String,
                    push(&mut document.string_values, StringValue { content }),
                )
            }
            C::FloatValue(v) => {
                let range = v.syntax().first_token()?.text_range();
                let raw = ByteSlice::new(u32::from(range.start()), u32::from(range.end()));
                Value::new(
                    ValueKind::Float,
                    push(&mut document.float_values, FloatValue { raw }),
                )
            }
            C::IntValue(v) => {
                let range = v.syntax().first_token()?.text_range();
                let raw = ByteSlice::new(u32::from(range.start()), u32::from(range.end()));
                Value::new(
                    ValueKind::Integer,
                    push(&mut document.int_values, IntValue { raw }),
                )
            }
            C::BooleanValue(v) => {
                let value = bool::try_from(v).ok()?;
                Value::new(
                    ValueKind::Boolean,
                    push(&mut document.boolean_values, BooleanValue { value }),
                )
            }
            C::NullValue(_) => Value::NULL,
            C::EnumValue(v) => {
                let name = v.name()?.convert(document)?;
                Value::new(
                    ValueKind::Enum,
                    push(&mut document.enum_values, EnumValue { name }),
                )
            }
            C::ListValue(v) => {
                let items: Vec<Value> = collect(document, v.values());
                let refs = items
                    .into_iter()
                    .map(|item| push(&mut document.values, item))
                    .collect();
                Value::new(
                    ValueKind::List,
                    push(&mut document.list_values, ListValue { refs }),
                )
            }
            C::ObjectValue(v) => {
                let fields: Vec<ObjectField> = collect(document, v.object_fields());
                let refs = fields
                    .into_iter()
                    .map(|field| push(&mut document.object_fields, field))
                    .collect();
                Value::new(
                    ValueKind::Object,
                    push(&mut document.object_values, ObjectValue { refs }),
                )
            }
        })
    }
}

impl Convert for cst::ObjectField {
    type Target = ObjectField;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let value = self.value()?.convert(document)?;
        Some(ObjectField { name, value })
    }
}

impl Convert for cst::DirectiveDefinition {
    type Target = DirectiveDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let arguments = collect_input_values(document, self.arguments_definition());
        let locations = self
            .directive_locations()
            .map(|locations| {
                locations
                    .directive_locations()
                    .filter_map(|location| location.convert(document))
                    .collect()
            })
            .unwrap_or_default();
        Some(DirectiveDefinition {
            name,
            arguments,
            repeatable: self.repeatable_token().is_some(),
            locations,
        })
    }
}

impl Convert for cst::DirectiveLocation {
    type Target = DirectiveLocation;

    fn convert(&self, _document: &mut Document) -> Option<Self::Target> {
        let token = self.syntax().first_token()?;
        match token.kind() {
            S![QUERY] => Some(DirectiveLocation::Query),
            S![MUTATION] => Some(DirectiveLocation::Mutation),
            S![SUBSCRIPTION] => Some(DirectiveLocation::Subscription),
            S![FIELD] => Some(DirectiveLocation::Field),
            S![FRAGMENT_DEFINITION] => Some(DirectiveLocation::FragmentDefinition),
            S![FRAGMENT_SPREAD] => Some(DirectiveLocation::FragmentSpread),
            S![INLINE_FRAGMENT] => Some(DirectiveLocation::InlineFragment),
            S![VARIABLE_DEFINITION] => Some(DirectiveLocation::VariableDefinition),
            S![SCHEMA] => Some(DirectiveLocation::Schema),
            S![SCALAR] => Some(DirectiveLocation::Scalar),
            S![OBJECT] => Some(DirectiveLocation::Object),
            S![FIELD_DEFINITION] => Some(DirectiveLocation::FieldDefinition),
            S![ARGUMENT_DEFINITION] => Some(DirectiveLocation::ArgumentDefinition),
            S![INTERFACE] => Some(DirectiveLocation::Interface),
            S![UNION] => Some(DirectiveLocation::Union),
            S![ENUM] => Some(DirectiveLocation::Enum),
            S![ENUM_VALUE] => Some(DirectiveLocation::EnumValue),
            S![INPUT_OBJECT] => Some(DirectiveLocation::InputObject),
            S![INPUT_FIELD_DEFINITION] => Some(DirectiveLocation::InputFieldDefinition),
            _ => None,
        }
    }
}

impl Convert for cst::ScalarTypeDefinition {
    type Target = ScalarTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        Some(ScalarTypeDefinition {
            name: self.name()?.convert(document)?,
            directives: collect_directives(document, self.directives()),
        })
    }
}

impl Convert for cst::ScalarTypeExtension {
    type Target = ScalarTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        Some(ScalarTypeDefinition {
            name: self.name()?.convert(document)?,
            directives: collect_directives(document, self.directives()),
        })
    }
}

fn collect_implements_interfaces(
    document: &mut Document,
    interfaces: Option<cst::ImplementsInterfaces>,
) -> Vec<ByteSlice> {
    match interfaces {
        Some(interfaces) => collect_named_types(document, interfaces.named_types()),
        None => Vec::new(),
    }
}

fn collect_field_definitions(
    document: &mut Document,
    fields: Option<cst::FieldsDefinition>,
) -> Vec<Ref> {
    match fields {
        Some(fields) => collect(document, fields.field_definitions()),
        None => Vec::new(),
    }
}

impl Convert for cst::ObjectTypeDefinition {
    type Target = ObjectTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        Some(ObjectTypeDefinition {
            name: self.name()?.convert(document)?,
            implements_interfaces: collect_implements_interfaces(
                document,
                self.implements_interfaces(),
            ),
            directives: collect_directives(document, self.directives()),
            fields: collect_field_definitions(document, self.fields_definition()),
        })
    }
}

impl Convert for cst::ObjectTypeExtension {
    type Target = ObjectTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        Some(ObjectTypeDefinition {
            name: self.name()?.convert(document)?,
            implements_interfaces: collect_implements_interfaces(
                document,
                self.implements_interfaces(),
            ),
            directives: collect_directives(document, self.directives()),
            fields: collect_field_definitions(document, self.fields_definition()),
        })
    }
}

impl Convert for cst::InterfaceTypeDefinition {
    type Target = InterfaceTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        Some(InterfaceTypeDefinition {
            name: self.name()?.convert(document)?,
            implements_interfaces: collect_implements_interfaces(
                document,
                self.implements_interfaces(),
            ),
            directives: collect_directives(document, self.directives()),
            fields: collect_field_definitions(document, self.fields_definition()),
        })
    }
}

impl Convert for cst::InterfaceTypeExtension {
    type Target = InterfaceTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        Some(InterfaceTypeDefinition {
            name: self.name()?.convert(document)?,
            implements_interfaces: collect_implements_interfaces(
                document,
                self.implements_interfaces(),
            ),
            directives: collect_directives(document, self.directives()),
            fields: collect_field_definitions(document, self.fields_definition()),
        })
    }
}

impl Convert for cst::UnionTypeDefinition {
    type Target = UnionTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        let members = match self.union_member_types() {
            Some(members) => collect_named_types(document, members.named_types()),
            None => Vec::new(),
        };
        Some(UnionTypeDefinition {
            name,
            directives,
            members,
        })
    }
}

impl Convert for cst::UnionTypeExtension {
    type Target = UnionTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        let members = match self.union_member_types() {
            Some(members) => collect_named_types(document, members.named_types()),
            None => Vec::new(),
        };
        Some(UnionTypeDefinition {
            name,
            directives,
            members,
        })
    }
}

impl Convert for cst::EnumTypeDefinition {
    type Target = EnumTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        let values = match self.enum_values_definition() {
            Some(values) => collect(document, values.enum_value_definitions()),
            None => Vec::new(),
        };
        Some(EnumTypeDefinition {
            name,
            directives,
            values,
        })
    }
}

impl Convert for cst::EnumTypeExtension {
    type Target = EnumTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        let values = match self.enum_values_definition() {
            Some(values) => collect(document, values.enum_value_definitions()),
            None => Vec::new(),
        };
        Some(EnumTypeDefinition {
            name,
            directives,
            values,
        })
    }
}

impl Convert for cst::EnumValueDefinition {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.enum_value()?.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        Some(push(
            &mut document.enum_value_definitions,
            EnumValueDefinition { name, directives },
        ))
    }
}

impl Convert for cst::InputObjectTypeDefinition {
    type Target = InputObjectTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        let fields = match self.input_fields_definition() {
            Some(fields) => collect(document, fields.input_value_definitions()),
            None => Vec::new(),
        };
        Some(InputObjectTypeDefinition {
            name,
            directives,
            fields,
        })
    }
}

impl Convert for cst::InputObjectTypeExtension {
    type Target = InputObjectTypeDefinition;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        let fields = match self.input_fields_definition() {
            Some(fields) => collect(document, fields.input_value_definitions()),
            None => Vec::new(),
        };
        Some(InputObjectTypeDefinition {
            name,
            directives,
            fields,
        })
    }
}

impl Convert for cst::FieldDefinition {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let arguments = collect_input_values(document, self.arguments_definition());
        let ty = self.ty()?.convert(document)?;
        let directives = collect_directives(document, self.directives());
        Some(push(
            &mut document.field_definitions,
            FieldDefinition {
                name,
                arguments,
                ty,
                directives,
            },
        ))
    }
}

impl Convert for cst::InputValueDefinition {
    type Target = Ref;

    fn convert(&self, document: &mut Document) -> Option<Self::Target> {
        let name = self.name()?.convert(document)?;
        let ty = self.ty()?.convert(document)?;
        let default_value = match self.default_value() {
            Some(default) => Some(default.value()?.convert(document)?),
            None => None,
        };
        let directives = collect_directives(document, self.directives());
        Some(push(
            &mut document.input_value_definitions,
            InputValueDefinition {
                name,
                ty,
                default_value,
                directives,
            },
        ))
    }
}
