//! Lookups on operation (executable) documents, and node accessors shared by
//! both kinds of documents.

use super::DirectiveLocation;
use super::Document;
use super::Node;
use super::NodeKind;
use super::OperationType;
use super::Ref;
use super::SelectionKind;
use super::Value;

impl Document {
    /// Name of any named node, empty for anonymous operations, inline
    /// fragments without type condition and unnamed node kinds.
    pub fn node_name(&self, node: Node) -> &str {
        let name = match node.kind {
            NodeKind::OperationDefinition => self.operation_definitions.get(node.index).map(|n| n.name),
            NodeKind::FragmentDefinition => self.fragment_definitions.get(node.index).map(|n| n.name),
            NodeKind::Field => self.fields.get(node.index).map(|n| n.name),
            NodeKind::FragmentSpread => self.fragment_spreads.get(node.index).map(|n| n.fragment_name),
            NodeKind::InlineFragment => self
                .inline_fragments
                .get(node.index)
                .and_then(|n| n.type_condition),
            NodeKind::Argument => self.arguments.get(node.index).map(|n| n.name),
            NodeKind::Directive => self.directives.get(node.index).map(|n| n.name),
            NodeKind::VariableDefinition => self.variable_definitions.get(node.index).map(|n| n.name),
            NodeKind::ObjectTypeDefinition => self.object_type_definitions.get(node.index).map(|n| n.name),
            NodeKind::InterfaceTypeDefinition => self
                .interface_type_definitions
                .get(node.index)
                .map(|n| n.name),
            NodeKind::UnionTypeDefinition => self.union_type_definitions.get(node.index).map(|n| n.name),
            NodeKind::ScalarTypeDefinition => self.scalar_type_definitions.get(node.index).map(|n| n.name),
            NodeKind::EnumTypeDefinition => self.enum_type_definitions.get(node.index).map(|n| n.name),
            NodeKind::EnumValueDefinition => self.enum_value_definitions.get(node.index).map(|n| n.name),
            NodeKind::InputObjectTypeDefinition => self
                .input_object_type_definitions
                .get(node.index)
                .map(|n| n.name),
            NodeKind::FieldDefinition => self.field_definitions.get(node.index).map(|n| n.name),
            NodeKind::InputValueDefinition => self
                .input_value_definitions
                .get(node.index)
                .map(|n| n.name),
            NodeKind::DirectiveDefinition => self.directive_definitions.get(node.index).map(|n| n.name),
            NodeKind::SelectionSet | NodeKind::Unknown => None,
        };
        name.map_or("", |name| self.byte_slice(name))
    }

    pub fn operation_definition_name(&self, operation: Ref) -> &str {
        self.node_name(Node::new(NodeKind::OperationDefinition, operation))
    }

    pub fn fragment_definition_name(&self, fragment: Ref) -> &str {
        self.node_name(Node::new(NodeKind::FragmentDefinition, fragment))
    }

    pub fn selection_set_selections(&self, selection_set: Ref) -> &[Ref] {
        self.selection_sets
            .get(selection_set)
            .map(|set| set.selections.as_slice())
            .unwrap_or_default()
    }

    pub fn field_name(&self, field: Ref) -> &str {
        self.node_name(Node::new(NodeKind::Field, field))
    }

    pub fn field_alias(&self, field: Ref) -> Option<&str> {
        let alias = self.fields.get(field)?.alias?;
        Some(self.byte_slice(alias))
    }

    /// Key the field's value appears under in the response: alias or name.
    pub fn field_response_key(&self, field: Ref) -> &str {
        self.field_alias(field)
            .unwrap_or_else(|| self.field_name(field))
    }

    pub fn field_has_selections(&self, field: Ref) -> bool {
        self.fields
            .get(field)
            .and_then(|f| f.selection_set)
            .is_some_and(|set| !self.selection_set_selections(set).is_empty())
    }

    pub fn argument_name(&self, argument: Ref) -> &str {
        self.node_name(Node::new(NodeKind::Argument, argument))
    }

    pub fn argument_value(&self, argument: Ref) -> Option<Value> {
        self.arguments.get(argument).map(|arg| arg.value)
    }

    pub fn directive_name(&self, directive: Ref) -> &str {
        self.node_name(Node::new(NodeKind::Directive, directive))
    }

    pub fn fragment_spread_name(&self, spread: Ref) -> &str {
        self.node_name(Node::new(NodeKind::FragmentSpread, spread))
    }

    /// Arguments of a field or directive.
    pub fn node_arguments(&self, node: Node) -> &[Ref] {
        let arguments = match node.kind {
            NodeKind::Field => self.fields.get(node.index).map(|f| f.arguments.as_slice()),
            NodeKind::Directive => self
                .directives
                .get(node.index)
                .map(|d| d.arguments.as_slice()),
            _ => None,
        };
        arguments.unwrap_or_default()
    }

    /// Arguments of `node` following `argument`.
    pub fn arguments_after(&self, node: Node, argument: Ref) -> &[Ref] {
        let arguments = self.node_arguments(node);
        match arguments.iter().position(|&arg| arg == argument) {
            Some(position) => &arguments[position + 1..],
            None => &[],
        }
    }

    pub fn field_argument(&self, field: Ref, name: &str) -> Option<Ref> {
        self.node_arguments(Node::new(NodeKind::Field, field))
            .iter()
            .copied()
            .find(|&arg| self.argument_name(arg) == name)
    }

    pub fn node_directives(&self, node: Node) -> &[Ref] {
        let directives = match node.kind {
            NodeKind::OperationDefinition => self
                .operation_definitions
                .get(node.index)
                .map(|n| n.directives.as_slice()),
            NodeKind::FragmentDefinition => self
                .fragment_definitions
                .get(node.index)
                .map(|n| n.directives.as_slice()),
            NodeKind::Field => self.fields.get(node.index).map(|n| n.directives.as_slice()),
            NodeKind::FragmentSpread => self
                .fragment_spreads
                .get(node.index)
                .map(|n| n.directives.as_slice()),
            NodeKind::InlineFragment => self
                .inline_fragments
                .get(node.index)
                .map(|n| n.directives.as_slice()),
            NodeKind::VariableDefinition => self
                .variable_definitions
                .get(node.index)
                .map(|n| n.directives.as_slice()),
            _ => None,
        };
        directives.unwrap_or_default()
    }

    /// Where a directive applied to `node` is located, for checking against
    /// the locations its definition allows.
    pub fn node_directive_location(&self, node: Node) -> Option<DirectiveLocation> {
        Some(match node.kind {
            NodeKind::OperationDefinition => {
                match self.operation_definitions.get(node.index)?.operation_type {
                    OperationType::Query => DirectiveLocation::Query,
                    OperationType::Mutation => DirectiveLocation::Mutation,
                    OperationType::Subscription => DirectiveLocation::Subscription,
                }
            }
            NodeKind::Field => DirectiveLocation::Field,
            NodeKind::FragmentDefinition => DirectiveLocation::FragmentDefinition,
            NodeKind::FragmentSpread => DirectiveLocation::FragmentSpread,
            NodeKind::InlineFragment => DirectiveLocation::InlineFragment,
            NodeKind::VariableDefinition => DirectiveLocation::VariableDefinition,
            _ => return None,
        })
    }

    pub fn variable_definition_name(&self, variable_definition: Ref) -> &str {
        self.node_name(Node::new(NodeKind::VariableDefinition, variable_definition))
    }

    /// Variable definition `name` of the operation `operation`.
    pub fn variable_definition_by_name(&self, operation: Ref, name: &str) -> Option<Ref> {
        self.operation_definitions
            .get(operation)?
            .variable_definitions
            .iter()
            .copied()
            .find(|&def| self.variable_definition_name(def) == name)
    }

    pub fn fragment_definition_by_name(&self, name: &str) -> Option<Ref> {
        (0..self.fragment_definitions.len()).find(|&i| self.fragment_definition_name(i) == name)
    }

    /// Whether any fragment spread in the document refers to `name`.
    pub fn fragment_definition_is_used(&self, name: &str) -> bool {
        (0..self.fragment_spreads.len()).any(|i| self.fragment_spread_name(i) == name)
    }

    /// Same field name and same arguments, in any order, with identical
    /// printed values.
    pub fn fields_are_equal_flat(&self, left: Ref, right: Ref) -> bool {
        if self.field_name(left) != self.field_name(right) {
            return false;
        }
        let left_arguments = self.node_arguments(Node::new(NodeKind::Field, left));
        let right_arguments = self.node_arguments(Node::new(NodeKind::Field, right));
        if left_arguments.len() != right_arguments.len() {
            return false;
        }
        left_arguments.iter().all(|&left_argument| {
            let Some(right_argument) = self.field_argument(right, self.argument_name(left_argument))
            else {
                return false;
            };
            match (
                self.argument_value(left_argument)
                    .map(|value| self.print_value(value)),
                self.argument_value(right_argument)
                    .map(|value| self.print_value(value)),
            ) {
                (Some(Ok(left_value)), Some(Ok(right_value))) => left_value == right_value,
                _ => false,
            }
        })
    }

    /// Fragment spreads inside `selection_set`, through fields and inline
    /// fragments but not through other fragment definitions.
    pub fn selection_set_fragment_spreads(&self, selection_set: Ref) -> Vec<Ref> {
        let mut spreads = Vec::new();
        self.collect_fragment_spreads(selection_set, &mut spreads);
        spreads
    }

    fn collect_fragment_spreads(&self, selection_set: Ref, spreads: &mut Vec<Ref>) {
        for &selection in self.selection_set_selections(selection_set) {
            let Some(selection) = self.selections.get(selection) else {
                continue;
            };
            match selection.kind {
                SelectionKind::Field => {
                    if let Some(set) = self.fields.get(selection.index).and_then(|f| f.selection_set) {
                        self.collect_fragment_spreads(set, spreads);
                    }
                }
                SelectionKind::InlineFragment => {
                    if let Some(fragment) = self.inline_fragments.get(selection.index) {
                        self.collect_fragment_spreads(fragment.selection_set, spreads);
                    }
                }
                SelectionKind::FragmentSpread => spreads.push(selection.index),
            }
        }
    }

    /// Names of all variables used by fragment `name`, including fragments
    /// it spreads.
    pub fn fragment_variable_usages<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        let mut usages = Vec::new();
        let mut visited = Vec::new();
        self.collect_fragment_variable_usages(name, &mut usages, &mut visited);
        usages
    }

    fn collect_fragment_variable_usages<'a>(
        &'a self,
        name: &'a str,
        usages: &mut Vec<&'a str>,
        visited: &mut Vec<&'a str>,
    ) {
        if visited.contains(&name) {
            return;
        }
        visited.push(name);
        let Some(fragment) = self.fragment_definition_by_name(name) else {
            return;
        };
        let node = Node::new(NodeKind::FragmentDefinition, fragment);
        self.collect_directive_variable_usages(node, usages);
        if let Some(def) = self.fragment_definitions.get(fragment) {
            self.collect_selection_set_variable_usages(def.selection_set, usages, visited);
        }
    }

    fn collect_selection_set_variable_usages<'a>(
        &'a self,
        selection_set: Ref,
        usages: &mut Vec<&'a str>,
        visited: &mut Vec<&'a str>,
    ) {
        for &selection in self.selection_set_selections(selection_set) {
            let Some(selection) = self.selections.get(selection).copied() else {
                continue;
            };
            match selection.kind {
                SelectionKind::Field => {
                    let node = Node::new(NodeKind::Field, selection.index);
                    for &argument in self.node_arguments(node) {
                        if let Some(value) = self.argument_value(argument) {
                            self.value_variable_names(value, usages);
                        }
                    }
                    self.collect_directive_variable_usages(node, usages);
                    if let Some(set) = self.fields.get(selection.index).and_then(|f| f.selection_set) {
                        self.collect_selection_set_variable_usages(set, usages, visited);
                    }
                }
                SelectionKind::InlineFragment => {
                    let node = Node::new(NodeKind::InlineFragment, selection.index);
                    self.collect_directive_variable_usages(node, usages);
                    if let Some(fragment) = self.inline_fragments.get(selection.index) {
                        self.collect_selection_set_variable_usages(
                            fragment.selection_set,
                            usages,
                            visited,
                        );
                    }
                }
                SelectionKind::FragmentSpread => {
                    let node = Node::new(NodeKind::FragmentSpread, selection.index);
                    self.collect_directive_variable_usages(node, usages);
                    let name = self.fragment_spread_name(selection.index);
                    self.collect_fragment_variable_usages(name, usages, visited);
                }
            }
        }
    }

    fn collect_directive_variable_usages<'a>(&'a self, node: Node, usages: &mut Vec<&'a str>) {
        for &directive in self.node_directives(node) {
            for &argument in self.node_arguments(Node::new(NodeKind::Directive, directive)) {
                if let Some(value) = self.argument_value(argument) {
                    self.value_variable_names(value, usages);
                }
            }
        }
    }

    /// Number of fields `selection_set` contributes at its own level once
    /// fragment spreads and inline fragments are flattened.
    pub fn selection_set_field_count(&self, selection_set: Ref) -> usize {
        let mut visited = Vec::new();
        self.count_fields(selection_set, &mut visited)
    }

    fn count_fields<'a>(&'a self, selection_set: Ref, visited: &mut Vec<&'a str>) -> usize {
        let mut count = 0;
        for &selection in self.selection_set_selections(selection_set) {
            let Some(selection) = self.selections.get(selection).copied() else {
                continue;
            };
            count += match selection.kind {
                SelectionKind::Field => 1,
                SelectionKind::InlineFragment => match self.inline_fragments.get(selection.index) {
                    Some(fragment) => self.count_fields(fragment.selection_set, visited),
                    None => 0,
                },
                SelectionKind::FragmentSpread => {
                    let name = self.fragment_spread_name(selection.index);
                    if visited.contains(&name) {
                        continue;
                    }
                    visited.push(name);
                    let definition = self
                        .fragment_definition_by_name(name)
                        .and_then(|fragment| self.fragment_definitions.get(fragment));
                    match definition {
                        Some(fragment) => self.count_fields(fragment.selection_set, visited),
                        None => 0,
                    }
                }
            };
        }
        count
    }
}
