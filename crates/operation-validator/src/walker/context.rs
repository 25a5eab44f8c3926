use super::Path;
use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::report::ExternalError;
use crate::report::InternalError;
use crate::report::Report;

/// Traversal state handed to every [`Visitor`][super::Visitor] callback.
///
/// Path, ancestors and enclosing type are maintained by the walker and are
/// read-only for visitors. Visitors report through the stop methods.
pub struct WalkContext<'a> {
    operation: &'a Document,
    definition: &'a Document,
    report: &'a mut Report,
    pub(super) path: Path,
    pub(super) ancestors: Vec<Node>,
    pub(super) enclosing_type_definition: Node,
    pub(super) stopped: bool,
}

impl<'a> WalkContext<'a> {
    pub(super) fn new(
        operation: &'a Document,
        definition: &'a Document,
        report: &'a mut Report,
    ) -> Self {
        Self {
            operation,
            definition,
            report,
            path: Path::default(),
            ancestors: Vec::new(),
            enclosing_type_definition: Node::UNKNOWN,
            stopped: false,
        }
    }

    /// The document being validated.
    pub fn operation(&self) -> &'a Document {
        self.operation
    }

    /// The schema.
    pub fn definition(&self) -> &'a Document {
        self.definition
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Enclosing operation document nodes, innermost last.
    pub fn ancestors(&self) -> &[Node] {
        &self.ancestors
    }

    /// The innermost ancestor.
    pub fn parent(&self) -> Option<Node> {
        self.ancestors.last().copied()
    }

    /// Schema type the current selection is made on, [`Node::UNKNOWN`] when
    /// it cannot be resolved.
    pub fn enclosing_type_definition(&self) -> Node {
        self.enclosing_type_definition
    }

    pub fn report(&self) -> &Report {
        &*self.report
    }

    /// Operation definition or fragment definition the walk is currently in.
    pub fn root_node(&self) -> Option<Node> {
        self.ancestors.first().copied()
    }

    /// Operation definition the walk is currently in, `None` inside fragment
    /// definitions.
    pub fn root_operation(&self) -> Option<Ref> {
        self.root_node()
            .filter(|node| node.kind == NodeKind::OperationDefinition)
            .map(|node| node.index)
    }

    /// Name of the innermost ancestor.
    pub fn ancestor_name(&self) -> &'a str {
        match self.parent() {
            Some(node) => self.operation.node_name(node),
            None => "",
        }
    }

    /// Schema definition of an argument of the field or directive the walk
    /// is currently in.
    pub fn argument_input_value_definition(&self, argument: Ref) -> Option<Ref> {
        let parent = self.parent()?;
        let argument_name = self.operation.argument_name(argument);
        let definitions = match parent.kind {
            NodeKind::Field => {
                let field_name = self.operation.field_name(parent.index);
                self.definition
                    .node_field_definition_arguments(self.enclosing_type_definition, field_name)
            }
            NodeKind::Directive => {
                let directive_name = self.operation.directive_name(parent.index);
                let directive = self.definition.directive_definition_by_name(directive_name)?;
                self.definition.directive_definition_arguments(directive)
            }
            _ => return None,
        };
        self.definition
            .input_value_definition_by_name(definitions, argument_name)
    }

    /// Records `error` and ends the walk.
    pub fn stop_with_external_err(&mut self, error: impl Into<ExternalError>) {
        self.report.add_external_error(error.into());
        self.stopped = true;
    }

    /// Records a broken invariant and ends the walk.
    pub fn stop_with_internal_err(&mut self, error: InternalError) {
        self.report.add_internal_error(error);
        self.stopped = true;
    }

    /// Records `error` and continues. Call [`stop`][Self::stop] once all
    /// errors of a kind are recorded.
    pub fn add_external_error(&mut self, error: impl Into<ExternalError>) {
        self.report.add_external_error(error.into());
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
