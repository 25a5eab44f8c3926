//! Arena-allocated *Abstract Syntax Tree* for GraphQL documents.
//!
//! A [`Document`] owns the source text of one GraphQL document together with
//! one `Vec` per kind of syntax node. Nodes never point at each other: every
//! relationship is an index ([`Ref`]) into one of those arrays, and names are
//! [`ByteSlice`] ranges into the document [`Input`].
//!
//! Two documents take part in every validation: the *operation* document
//! (the executable document being checked) and the *definition* document
//! (the schema). They are never merged; links between them are resolved by
//! name through [`Index`].
//!
//! Documents are append-only. A `Ref` handed out by a document stays valid
//! for as long as that document lives.

use indexmap::IndexMap;

mod builtins;
mod definitions;
mod directive_location;
pub(crate) mod from_cst;
mod impls;
mod types;
mod values;

pub(crate) use self::definitions::TYPENAME;
pub use self::directive_location::DirectiveLocation;
pub use self::directive_location::DirectiveLocations;
pub use self::types::operation_type_satisfies_definition_type;
pub use self::types::Type;
pub use self::values::BooleanValue;
pub use self::values::EnumValue;
pub use self::values::FloatValue;
pub use self::values::IntValue;
pub use self::values::ListValue;
pub use self::values::ObjectField;
pub use self::values::ObjectValue;
pub use self::values::StringValue;
pub use self::values::Value;
pub use self::values::ValueKind;
pub use self::values::VariableValue;

/// Index into one of the typed arrays of a [`Document`].
pub type Ref = usize;

/// Half-open byte range into a document [`Input`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteSlice {
    pub start: u32,
    pub end: u32,
}

impl ByteSlice {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 1-based line and column of a location in a source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// The text a document was parsed from.
///
/// Strings that do not occur verbatim in the source, such as string values
/// after escape sequences are resolved, are appended after the source text
/// so that they can be addressed with a [`ByteSlice`] like everything else.
#[derive(Clone, Debug, Default)]
pub struct Input {
    raw: String,
    source_len: usize,
}

impl Input {
    pub fn new(source: &str) -> Self {
        Self {
            raw: source.to_owned(),
            source_len: source.len(),
        }
    }

    /// The original source text, without appended strings.
    pub fn source(&self) -> &str {
        &self.raw[..self.source_len]
    }

    pub fn byte_slice(&self, slice: ByteSlice) -> &str {
        self.raw
            .get(slice.start as usize..slice.end as usize)
            .unwrap_or_default()
    }

    pub fn append_str(&mut self, value: &str) -> ByteSlice {
        let start = self.raw.len() as u32;
        self.raw.push_str(value);
        ByteSlice::new(start, self.raw.len() as u32)
    }

    /// Returns `None` for offsets outside of the original source text.
    pub fn line_column(&self, offset: usize) -> Option<LineColumn> {
        if offset > self.source_len {
            return None;
        }
        let before = self.raw.get(..offset)?;
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Some(LineColumn { line, column })
    }
}

/// Tag identifying which typed array of a [`Document`] a [`Node`] lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[default]
    Unknown,
    OperationDefinition,
    FragmentDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    Argument,
    Directive,
    VariableDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    ScalarTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    DirectiveDefinition,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Unknown => "Unknown",
            NodeKind::OperationDefinition => "OperationDefinition",
            NodeKind::FragmentDefinition => "FragmentDefinition",
            NodeKind::SelectionSet => "SelectionSet",
            NodeKind::Field => "Field",
            NodeKind::FragmentSpread => "FragmentSpread",
            NodeKind::InlineFragment => "InlineFragment",
            NodeKind::Argument => "Argument",
            NodeKind::Directive => "Directive",
            NodeKind::VariableDefinition => "VariableDefinition",
            NodeKind::ObjectTypeDefinition => "ObjectTypeDefinition",
            NodeKind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            NodeKind::UnionTypeDefinition => "UnionTypeDefinition",
            NodeKind::ScalarTypeDefinition => "ScalarTypeDefinition",
            NodeKind::EnumTypeDefinition => "EnumTypeDefinition",
            NodeKind::EnumValueDefinition => "EnumValueDefinition",
            NodeKind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            NodeKind::FieldDefinition => "FieldDefinition",
            NodeKind::InputValueDefinition => "InputValueDefinition",
            NodeKind::DirectiveDefinition => "DirectiveDefinition",
        }
    }
}

/// A `(kind, index)` pair addressing one node of a [`Document`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Node {
    pub kind: NodeKind,
    pub index: Ref,
}

impl Node {
    pub const UNKNOWN: Node = Node {
        kind: NodeKind::Unknown,
        index: 0,
    };

    pub fn new(kind: NodeKind, index: Ref) -> Self {
        Self { kind, index }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    /// Empty for anonymous operations
    pub name: ByteSlice,
    pub variable_definitions: Vec<Ref>,
    pub directives: Vec<Ref>,
    pub selection_set: Ref,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentDefinition {
    pub name: ByteSlice,
    pub type_condition: ByteSlice,
    pub directives: Vec<Ref>,
    pub selection_set: Ref,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    pub selections: Vec<Ref>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Field,
    FragmentSpread,
    InlineFragment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub kind: SelectionKind,
    pub index: Ref,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub alias: Option<ByteSlice>,
    pub name: ByteSlice,
    pub arguments: Vec<Ref>,
    pub directives: Vec<Ref>,
    pub selection_set: Option<Ref>,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentSpread {
    pub fragment_name: ByteSlice,
    pub directives: Vec<Ref>,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineFragment {
    pub type_condition: Option<ByteSlice>,
    pub directives: Vec<Ref>,
    pub selection_set: Ref,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub name: ByteSlice,
    pub value: Value,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub name: ByteSlice,
    pub arguments: Vec<Ref>,
    pub span: ByteSlice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDefinition {
    pub name: ByteSlice,
    pub ty: Ref,
    pub default_value: Option<Value>,
    pub directives: Vec<Ref>,
    pub span: ByteSlice,
}

/// Names of the root operation types of a schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootOperationTypes {
    pub query: Option<ByteSlice>,
    pub mutation: Option<ByteSlice>,
    pub subscription: Option<ByteSlice>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectTypeDefinition {
    pub name: ByteSlice,
    pub implements_interfaces: Vec<ByteSlice>,
    pub directives: Vec<Ref>,
    pub fields: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceTypeDefinition {
    pub name: ByteSlice,
    pub implements_interfaces: Vec<ByteSlice>,
    pub directives: Vec<Ref>,
    pub fields: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnionTypeDefinition {
    pub name: ByteSlice,
    pub directives: Vec<Ref>,
    pub members: Vec<ByteSlice>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarTypeDefinition {
    pub name: ByteSlice,
    pub directives: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumTypeDefinition {
    pub name: ByteSlice,
    pub directives: Vec<Ref>,
    pub values: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValueDefinition {
    pub name: ByteSlice,
    pub directives: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputObjectTypeDefinition {
    pub name: ByteSlice,
    pub directives: Vec<Ref>,
    pub fields: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: ByteSlice,
    pub arguments: Vec<Ref>,
    pub ty: Ref,
    pub directives: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputValueDefinition {
    pub name: ByteSlice,
    pub ty: Ref,
    pub default_value: Option<Value>,
    pub directives: Vec<Ref>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectiveDefinition {
    pub name: ByteSlice,
    pub arguments: Vec<Ref>,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
}

/// Name lookups for a definition document.
#[derive(Clone, Debug, Default)]
pub struct Index {
    /// Type definitions by name
    pub nodes: IndexMap<String, Node>,
    /// Directive definitions by name, without the leading `@`
    pub directives: IndexMap<String, Node>,
    /// The `__typename: String!` meta field, available on every composite type
    pub typename_field_definition: Option<Ref>,
}

/// One parsed GraphQL document and all of its nodes.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub input: Input,
    /// Top-level definitions in source order
    pub root_nodes: Vec<Node>,

    pub operation_definitions: Vec<OperationDefinition>,
    pub fragment_definitions: Vec<FragmentDefinition>,
    pub selection_sets: Vec<SelectionSet>,
    pub selections: Vec<Selection>,
    pub fields: Vec<Field>,
    pub fragment_spreads: Vec<FragmentSpread>,
    pub inline_fragments: Vec<InlineFragment>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub variable_definitions: Vec<VariableDefinition>,

    pub types: Vec<Type>,
    pub values: Vec<Value>,
    pub variable_values: Vec<VariableValue>,
    pub int_values: Vec<IntValue>,
    pub float_values: Vec<FloatValue>,
    pub string_values: Vec<StringValue>,
    pub boolean_values: Vec<BooleanValue>,
    pub enum_values: Vec<EnumValue>,
    pub list_values: Vec<ListValue>,
    pub object_values: Vec<ObjectValue>,
    pub object_fields: Vec<ObjectField>,

    pub root_operation_types: RootOperationTypes,
    pub object_type_definitions: Vec<ObjectTypeDefinition>,
    pub interface_type_definitions: Vec<InterfaceTypeDefinition>,
    pub union_type_definitions: Vec<UnionTypeDefinition>,
    pub scalar_type_definitions: Vec<ScalarTypeDefinition>,
    pub enum_type_definitions: Vec<EnumTypeDefinition>,
    pub enum_value_definitions: Vec<EnumValueDefinition>,
    pub input_object_type_definitions: Vec<InputObjectTypeDefinition>,
    pub field_definitions: Vec<FieldDefinition>,
    pub input_value_definitions: Vec<InputValueDefinition>,
    pub directive_definitions: Vec<DirectiveDefinition>,

    pub index: Index,
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Document>();
    assert_sync::<Document>();
};

/// Appends `item` and returns its index.
pub(crate) fn push<T>(array: &mut Vec<T>, item: T) -> Ref {
    array.push(item);
    array.len() - 1
}

impl Document {
    /// An empty document over `source`. Nodes are added by the parser front-end
    /// or by hand through the public arrays.
    pub fn new(source: &str) -> Self {
        Self {
            input: Input::new(source),
            ..Default::default()
        }
    }

    pub fn byte_slice(&self, slice: ByteSlice) -> &str {
        self.input.byte_slice(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_strings_are_addressable() {
        let mut input = Input::new("query { a }");
        let slice = input.append_str("hello");
        assert_eq!(input.byte_slice(slice), "hello");
        assert_eq!(input.source(), "query { a }");
    }

    #[test]
    fn line_column_is_one_based() {
        let input = Input::new("query {\n  pet\n}");
        assert_eq!(
            input.line_column(10),
            Some(LineColumn { line: 2, column: 3 })
        );
        assert_eq!(input.line_column(0), Some(LineColumn { line: 1, column: 1 }));
        assert_eq!(input.line_column(100), None);
    }
}
