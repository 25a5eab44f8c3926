//! Depth-first traversal of an operation document with visitor dispatch.
//!
//! Visitors are added to a [`Walker`] once and then registered for the hooks
//! they implement. Each hook has its own ordered list of visitor ids, so a
//! node is only dispatched to the visitors interested in it, in registration
//! order.
//!
//! The walk ends as soon as a visitor stops it through its
//! [`WalkContext`]: the flag is checked after every single callback.

use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::SelectionKind;
use crate::report::DiagnosticData;
use crate::report::ExternalError;
use crate::report::Report;
use std::ops::ControlFlow;
use tracing::trace;

mod context;
mod path;
mod visitor;

pub use self::context::WalkContext;
pub use self::path::Path;
pub use self::path::PathItem;
pub use self::visitor::Visitor;

/// Position of a visitor in its [`Walker`].
pub type VisitorId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hook {
    EnterDocument,
    LeaveDocument,
    EnterOperationDefinition,
    LeaveOperationDefinition,
    EnterFragmentDefinition,
    LeaveFragmentDefinition,
    EnterVariableDefinition,
    EnterSelectionSet,
    EnterField,
    EnterArgument,
    EnterDirective,
    EnterFragmentSpread,
    EnterInlineFragment,
}

/// Dispatch table: registered visitor ids per hook.
#[derive(Debug, Default)]
struct Hooks {
    enter_document: Vec<VisitorId>,
    leave_document: Vec<VisitorId>,
    enter_operation_definition: Vec<VisitorId>,
    leave_operation_definition: Vec<VisitorId>,
    enter_fragment_definition: Vec<VisitorId>,
    leave_fragment_definition: Vec<VisitorId>,
    enter_variable_definition: Vec<VisitorId>,
    enter_selection_set: Vec<VisitorId>,
    enter_field: Vec<VisitorId>,
    enter_argument: Vec<VisitorId>,
    enter_directive: Vec<VisitorId>,
    enter_fragment_spread: Vec<VisitorId>,
    enter_inline_fragment: Vec<VisitorId>,
}

impl Hooks {
    fn get(&self, hook: Hook) -> &[VisitorId] {
        match hook {
            Hook::EnterDocument => &self.enter_document,
            Hook::LeaveDocument => &self.leave_document,
            Hook::EnterOperationDefinition => &self.enter_operation_definition,
            Hook::LeaveOperationDefinition => &self.leave_operation_definition,
            Hook::EnterFragmentDefinition => &self.enter_fragment_definition,
            Hook::LeaveFragmentDefinition => &self.leave_fragment_definition,
            Hook::EnterVariableDefinition => &self.enter_variable_definition,
            Hook::EnterSelectionSet => &self.enter_selection_set,
            Hook::EnterField => &self.enter_field,
            Hook::EnterArgument => &self.enter_argument,
            Hook::EnterDirective => &self.enter_directive,
            Hook::EnterFragmentSpread => &self.enter_fragment_spread,
            Hook::EnterInlineFragment => &self.enter_inline_fragment,
        }
    }
}

/// Walks operation documents, dispatching to registered visitors.
#[derive(Default)]
pub struct Walker {
    visitors: Vec<Box<dyn Visitor>>,
    hooks: Hooks,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `visitor`. It receives no callbacks until
    /// registered for hooks with the returned id.
    pub fn add_visitor(&mut self, visitor: impl Visitor + 'static) -> VisitorId {
        self.visitors.push(Box::new(visitor));
        self.visitors.len() - 1
    }

    pub fn register_enter_document_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_document.push(visitor)
    }

    pub fn register_leave_document_visitor(&mut self, visitor: VisitorId) {
        self.hooks.leave_document.push(visitor)
    }

    pub fn register_enter_operation_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_operation_definition.push(visitor)
    }

    pub fn register_leave_operation_visitor(&mut self, visitor: VisitorId) {
        self.hooks.leave_operation_definition.push(visitor)
    }

    pub fn register_enter_fragment_definition_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_fragment_definition.push(visitor)
    }

    pub fn register_leave_fragment_definition_visitor(&mut self, visitor: VisitorId) {
        self.hooks.leave_fragment_definition.push(visitor)
    }

    pub fn register_enter_variable_definition_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_variable_definition.push(visitor)
    }

    pub fn register_enter_selection_set_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_selection_set.push(visitor)
    }

    pub fn register_enter_field_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_field.push(visitor)
    }

    pub fn register_enter_argument_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_argument.push(visitor)
    }

    pub fn register_enter_directive_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_directive.push(visitor)
    }

    pub fn register_enter_fragment_spread_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_fragment_spread.push(visitor)
    }

    pub fn register_enter_inline_fragment_visitor(&mut self, visitor: VisitorId) {
        self.hooks.enter_inline_fragment.push(visitor)
    }

    /// Walks `operation`, resolving types against `definition`. Errors are
    /// appended to `report`.
    pub fn walk(&mut self, operation: &Document, definition: &Document, report: &mut Report) {
        let mut traversal = Traversal {
            visitors: &mut self.visitors,
            hooks: &self.hooks,
            ctx: WalkContext::new(operation, definition, report),
        };
        let _ = traversal.walk_document();
    }
}

type Flow = ControlFlow<()>;

struct Traversal<'w, 'a> {
    visitors: &'w mut [Box<dyn Visitor>],
    hooks: &'w Hooks,
    ctx: WalkContext<'a>,
}

impl<'a> Traversal<'_, 'a> {
    fn dispatch(
        &mut self,
        hook: Hook,
        mut call: impl FnMut(&mut dyn Visitor, &mut WalkContext<'a>),
    ) -> Flow {
        for &id in self.hooks.get(hook) {
            if let Some(visitor) = self.visitors.get_mut(id) {
                call(visitor.as_mut(), &mut self.ctx);
            }
            if self.ctx.stopped {
                trace!(?hook, visitor = id, path = %self.ctx.path, "walk stopped");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn stop_with(&mut self, error: ExternalError) -> Flow {
        self.ctx.stop_with_external_err(error);
        trace!(path = %self.ctx.path, "walk stopped");
        ControlFlow::Break(())
    }

    fn walk_document(&mut self) -> Flow {
        let operation = self.ctx.operation();
        self.dispatch(Hook::EnterDocument, |v, ctx| v.enter_document(ctx))?;
        for node in &operation.root_nodes {
            match node.kind {
                NodeKind::OperationDefinition => self.walk_operation_definition(node.index)?,
                NodeKind::FragmentDefinition => self.walk_fragment_definition(node.index)?,
                _ => {}
            }
        }
        self.dispatch(Hook::LeaveDocument, |v, ctx| v.leave_document(ctx))
    }

    fn walk_operation_definition(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        let definition = self.ctx.definition();
        let Some(operation_definition) = operation.operation_definitions.get(index) else {
            return ControlFlow::Continue(());
        };
        let operation_type = operation_definition.operation_type;
        let Some(root_type) = definition.root_operation_type_node(operation_type) else {
            return self.stop_with(
                DiagnosticData::OperationTypeUndefined {
                    operation_type: operation_type.as_str(),
                }
                .at(operation_definition.span),
            );
        };

        let name = operation.byte_slice(operation_definition.name);
        let root_name = if name.is_empty() {
            operation_type.as_str()
        } else {
            name
        };
        self.ctx.path.clear();
        self.ctx.path.push(PathItem::Name(root_name.to_owned()));
        self.ctx.ancestors.clear();
        self.ctx
            .ancestors
            .push(Node::new(NodeKind::OperationDefinition, index));
        self.ctx.enclosing_type_definition = root_type;

        self.dispatch(Hook::EnterOperationDefinition, |v, ctx| {
            v.enter_operation_definition(ctx, index)
        })?;
        for &variable_definition in &operation_definition.variable_definitions {
            self.walk_variable_definition(variable_definition)?;
        }
        self.walk_directives(&operation_definition.directives)?;
        self.walk_selection_set(operation_definition.selection_set)?;
        self.dispatch(Hook::LeaveOperationDefinition, |v, ctx| {
            v.leave_operation_definition(ctx, index)
        })?;

        self.ctx.ancestors.pop();
        self.ctx.path.pop();
        ControlFlow::Continue(())
    }

    fn walk_fragment_definition(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        let definition = self.ctx.definition();
        let Some(fragment) = operation.fragment_definitions.get(index) else {
            return ControlFlow::Continue(());
        };
        let type_condition = operation.byte_slice(fragment.type_condition);
        let type_node = definition.type_definition_node(type_condition);

        self.ctx.path.clear();
        self.ctx
            .path
            .push(PathItem::Name(operation.byte_slice(fragment.name).to_owned()));
        self.ctx.ancestors.clear();
        self.ctx
            .ancestors
            .push(Node::new(NodeKind::FragmentDefinition, index));
        self.ctx.enclosing_type_definition = type_node.unwrap_or(Node::UNKNOWN);

        self.dispatch(Hook::EnterFragmentDefinition, |v, ctx| {
            v.enter_fragment_definition(ctx, index)
        })?;
        if type_node.is_none() {
            return self.stop_with(
                DiagnosticData::TypeUndefined {
                    type_name: type_condition.to_owned(),
                }
                .at(fragment.type_condition),
            );
        }
        self.walk_directives(&fragment.directives)?;
        self.walk_selection_set(fragment.selection_set)?;
        self.dispatch(Hook::LeaveFragmentDefinition, |v, ctx| {
            v.leave_fragment_definition(ctx, index)
        })?;

        self.ctx.ancestors.pop();
        self.ctx.path.pop();
        ControlFlow::Continue(())
    }

    fn walk_variable_definition(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        self.dispatch(Hook::EnterVariableDefinition, |v, ctx| {
            v.enter_variable_definition(ctx, index)
        })?;
        let node = Node::new(NodeKind::VariableDefinition, index);
        self.ctx.ancestors.push(node);
        self.walk_directives(operation.node_directives(node))?;
        self.ctx.ancestors.pop();
        ControlFlow::Continue(())
    }

    fn walk_directives(&mut self, directives: &[Ref]) -> Flow {
        for &directive in directives {
            self.walk_directive(directive)?;
        }
        ControlFlow::Continue(())
    }

    fn walk_directive(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        self.dispatch(Hook::EnterDirective, |v, ctx| v.enter_directive(ctx, index))?;
        let node = Node::new(NodeKind::Directive, index);
        self.ctx.ancestors.push(node);
        for &argument in operation.node_arguments(node) {
            self.walk_argument(argument)?;
        }
        self.ctx.ancestors.pop();
        ControlFlow::Continue(())
    }

    fn walk_argument(&mut self, index: Ref) -> Flow {
        self.dispatch(Hook::EnterArgument, |v, ctx| v.enter_argument(ctx, index))
    }

    fn walk_selection_set(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        self.ctx
            .ancestors
            .push(Node::new(NodeKind::SelectionSet, index));
        self.dispatch(Hook::EnterSelectionSet, |v, ctx| {
            v.enter_selection_set(ctx, index)
        })?;
        for &selection in operation.selection_set_selections(index) {
            let Some(selection) = operation.selections.get(selection) else {
                continue;
            };
            match selection.kind {
                SelectionKind::Field => self.walk_field(selection.index)?,
                SelectionKind::FragmentSpread => self.walk_fragment_spread(selection.index)?,
                SelectionKind::InlineFragment => self.walk_inline_fragment(selection.index)?,
            }
        }
        self.ctx.ancestors.pop();
        ControlFlow::Continue(())
    }

    fn walk_field(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        let definition = self.ctx.definition();
        let Some(field) = operation.fields.get(index) else {
            return ControlFlow::Continue(());
        };
        self.dispatch(Hook::EnterField, |v, ctx| v.enter_field(ctx, index))?;

        self.ctx.ancestors.push(Node::new(NodeKind::Field, index));
        for &argument in &field.arguments {
            self.walk_argument(argument)?;
        }
        self.walk_directives(&field.directives)?;
        if let Some(selection_set) = field.selection_set {
            let enclosing_type = self.ctx.enclosing_type_definition;
            let field_type = definition
                .node_field_definition_by_name(enclosing_type, operation.field_name(index))
                .map_or(Node::UNKNOWN, |def| definition.field_definition_type_node(def));
            self.ctx.enclosing_type_definition = field_type;
            self.ctx.path.push(PathItem::Name(
                operation.field_response_key(index).to_owned(),
            ));
            self.walk_selection_set(selection_set)?;
            self.ctx.path.pop();
            self.ctx.enclosing_type_definition = enclosing_type;
        }
        self.ctx.ancestors.pop();
        ControlFlow::Continue(())
    }

    fn walk_fragment_spread(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        self.dispatch(Hook::EnterFragmentSpread, |v, ctx| {
            v.enter_fragment_spread(ctx, index)
        })?;
        let node = Node::new(NodeKind::FragmentSpread, index);
        self.ctx.ancestors.push(node);
        self.walk_directives(operation.node_directives(node))?;
        self.ctx.ancestors.pop();
        ControlFlow::Continue(())
    }

    fn walk_inline_fragment(&mut self, index: Ref) -> Flow {
        let operation = self.ctx.operation();
        let definition = self.ctx.definition();
        let Some(fragment) = operation.inline_fragments.get(index) else {
            return ControlFlow::Continue(());
        };
        self.dispatch(Hook::EnterInlineFragment, |v, ctx| {
            v.enter_inline_fragment(ctx, index)
        })?;

        self.ctx
            .ancestors
            .push(Node::new(NodeKind::InlineFragment, index));
        self.walk_directives(&fragment.directives)?;
        let enclosing_type = self.ctx.enclosing_type_definition;
        if let Some(type_condition) = fragment.type_condition {
            let type_name = operation.byte_slice(type_condition);
            match definition.type_definition_node(type_name) {
                Some(node) => self.ctx.enclosing_type_definition = node,
                None => {
                    return self.stop_with(
                        DiagnosticData::TypeUndefined {
                            type_name: type_name.to_owned(),
                        }
                        .at(type_condition),
                    )
                }
            }
        }
        self.walk_selection_set(fragment.selection_set)?;
        self.ctx.enclosing_type_definition = enclosing_type;
        self.ctx.ancestors.pop();
        ControlFlow::Continue(())
    }
}
