use crate::ast::ByteSlice;
use crate::ast::Document;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::report::DiagnosticData;
use crate::walker::Visitor;
use crate::walker::WalkContext;
use crate::walker::Walker;

/// Fragment definitions and their uses are consistent:
///
/// - spreads refer to defined fragments and never form cycles,
/// - type conditions name composite types that can apply where the fragment
///   is used,
/// - fragment names are unique, and every fragment is used.
pub fn fragments(walker: &mut Walker) {
    let id = walker.add_visitor(Fragments::default());
    walker.register_enter_document_visitor(id);
    walker.register_leave_document_visitor(id);
    walker.register_enter_fragment_definition_visitor(id);
    walker.register_enter_inline_fragment_visitor(id);
    walker.register_enter_fragment_spread_visitor(id);
}

#[derive(Default)]
struct Fragments {
    /// Name and span of every fragment definition entered so far
    fragment_definitions: Vec<(String, ByteSlice)>,
}

impl Visitor for Fragments {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.fragment_definitions.clear();
    }

    fn leave_document(&mut self, ctx: &mut WalkContext<'_>) {
        let operation = ctx.operation();
        let unused = self
            .fragment_definitions
            .iter()
            .find(|(name, _)| !operation.fragment_definition_is_used(name));
        if let Some((name, span)) = unused {
            ctx.stop_with_external_err(
                DiagnosticData::FragmentDefinedButNotUsed { name: name.clone() }.at(*span),
            );
        }
    }

    fn enter_fragment_definition(&mut self, ctx: &mut WalkContext<'_>, fragment: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let fragment_definition = &operation.fragment_definitions[fragment];
        let name = operation.byte_slice(fragment_definition.name);
        let type_name = operation.byte_slice(fragment_definition.type_condition);

        let Some(type_node) = definition.type_definition_node(type_name) else {
            ctx.stop_with_external_err(
                DiagnosticData::TypeUndefined {
                    type_name: type_name.to_owned(),
                }
                .at(fragment_definition.type_condition),
            );
            return;
        };
        if !definition.node_is_composite(type_node) {
            ctx.stop_with_external_err(
                DiagnosticData::FragmentDefinitionOnTypeDisallowed {
                    name: name.to_owned(),
                    type_name: type_name.to_owned(),
                }
                .at(fragment_definition.type_condition),
            );
            return;
        }
        if self.fragment_definitions.iter().any(|(seen, _)| seen == name) {
            ctx.stop_with_external_err(
                DiagnosticData::FragmentDefinitionMustBeUnique {
                    name: name.to_owned(),
                }
                .at(fragment_definition.span),
            );
            return;
        }
        self.fragment_definitions
            .push((name.to_owned(), fragment_definition.span));
    }

    fn enter_inline_fragment(&mut self, ctx: &mut WalkContext<'_>, inline_fragment: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let fragment = &operation.inline_fragments[inline_fragment];
        let Some(type_condition) = fragment.type_condition else {
            return;
        };
        let type_name = operation.byte_slice(type_condition);

        let Some(type_node) = definition.type_definition_node(type_name) else {
            ctx.stop_with_external_err(
                DiagnosticData::TypeUndefined {
                    type_name: type_name.to_owned(),
                }
                .at(type_condition),
            );
            return;
        };
        if !definition.node_is_composite(type_node) {
            ctx.stop_with_external_err(
                DiagnosticData::InlineFragmentOnTypeDisallowed {
                    type_name: type_name.to_owned(),
                }
                .at(fragment.span),
            );
            return;
        }
        let enclosing_type = ctx.enclosing_type_definition();
        if !definition.node_fragment_is_allowed_on_node(type_node, enclosing_type) {
            ctx.stop_with_external_err(
                DiagnosticData::InlineFragmentOnTypeMismatchEnclosingType {
                    type_name: type_name.to_owned(),
                    enclosing_type: definition.node_name(enclosing_type).to_owned(),
                }
                .at(fragment.span),
            );
        }
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, fragment_spread: Ref) {
        let operation = ctx.operation();
        let definition = ctx.definition();
        let span = operation.fragment_spreads[fragment_spread].span;
        let name = operation.fragment_spread_name(fragment_spread);

        let Some(fragment) = operation.fragment_definition_by_name(name) else {
            ctx.stop_with_external_err(
                DiagnosticData::FragmentUndefined {
                    name: name.to_owned(),
                }
                .at(span),
            );
            return;
        };

        let enclosing_fragment = ctx
            .root_node()
            .filter(|node| node.kind == NodeKind::FragmentDefinition)
            .map(|node| operation.fragment_definition_name(node.index));
        if let Some(enclosing_fragment) = enclosing_fragment {
            if spreads_reach(operation, name, enclosing_fragment) {
                ctx.stop_with_external_err(
                    DiagnosticData::FragmentSpreadFormsCycle {
                        name: name.to_owned(),
                    }
                    .at(span),
                );
                return;
            }
        }

        let type_condition = operation.fragment_definitions[fragment].type_condition;
        let type_name = operation.byte_slice(type_condition);
        let Some(type_node) = definition.type_definition_node(type_name) else {
            ctx.stop_with_external_err(
                DiagnosticData::TypeUndefined {
                    type_name: type_name.to_owned(),
                }
                .at(type_condition),
            );
            return;
        };
        if !definition.node_is_composite(type_node) {
            ctx.stop_with_external_err(
                DiagnosticData::FragmentDefinitionOnTypeDisallowed {
                    name: name.to_owned(),
                    type_name: type_name.to_owned(),
                }
                .at(type_condition),
            );
            return;
        }
        let enclosing_type = ctx.enclosing_type_definition();
        if !definition.node_fragment_is_allowed_on_node(type_node, enclosing_type) {
            ctx.stop_with_external_err(
                DiagnosticData::FragmentSpreadOnTypeMismatchEnclosingType {
                    name: name.to_owned(),
                    type_name: type_name.to_owned(),
                    enclosing_type: definition.node_name(enclosing_type).to_owned(),
                }
                .at(span),
            );
        }
    }
}

/// Whether spreading fragment `from` ends up spreading `target`, directly or
/// through other fragments.
fn spreads_reach(operation: &Document, from: &str, target: &str) -> bool {
    let mut visited: Vec<&str> = Vec::new();
    let mut stack = vec![from];
    while let Some(name) = stack.pop() {
        if name == target {
            return true;
        }
        if visited.contains(&name) {
            continue;
        }
        visited.push(name);
        let Some(fragment) = operation.fragment_definition_by_name(name) else {
            continue;
        };
        let selection_set = operation.fragment_definitions[fragment].selection_set;
        for spread in operation.selection_set_fragment_spreads(selection_set) {
            stack.push(operation.fragment_spread_name(spread));
        }
    }
    false
}
