use super::WalkContext;
use crate::ast::Ref;

/// Callbacks invoked by the [`Walker`][super::Walker].
///
/// Every method has an empty default: a visitor implements the hooks it
/// needs and registers for exactly those. A hook is only called for
/// visitors registered for it.
///
/// `enter_document` runs first on every walk and is the place to reset any
/// state kept from a previous walk.
#[allow(unused_variables)]
pub trait Visitor: Send {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {}

    fn leave_document(&mut self, ctx: &mut WalkContext<'_>) {}

    fn enter_operation_definition(&mut self, ctx: &mut WalkContext<'_>, operation: Ref) {}

    fn leave_operation_definition(&mut self, ctx: &mut WalkContext<'_>, operation: Ref) {}

    fn enter_fragment_definition(&mut self, ctx: &mut WalkContext<'_>, fragment: Ref) {}

    fn leave_fragment_definition(&mut self, ctx: &mut WalkContext<'_>, fragment: Ref) {}

    fn enter_variable_definition(&mut self, ctx: &mut WalkContext<'_>, variable_definition: Ref) {}

    fn enter_selection_set(&mut self, ctx: &mut WalkContext<'_>, selection_set: Ref) {}

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, field: Ref) {}

    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, argument: Ref) {}

    fn enter_directive(&mut self, ctx: &mut WalkContext<'_>, directive: Ref) {}

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, fragment_spread: Ref) {}

    fn enter_inline_fragment(&mut self, ctx: &mut WalkContext<'_>, inline_fragment: Ref) {}
}
