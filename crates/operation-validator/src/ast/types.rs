use super::push;
use super::ByteSlice;
use super::Document;
use super::Ref;
use crate::report::InternalError;

/// A type reference as written in a field, argument or variable definition.
///
/// Wrappers point at another entry of [`Document::types`]; every chain ends
/// in exactly one `Named` leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Named(ByteSlice),
    List(Ref),
    NonNull(Ref),
}

impl Type {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    /// The wrapped type, `None` for named types
    pub fn of_type(&self) -> Option<Ref> {
        match *self {
            Type::Named(_) => None,
            Type::List(of_type) | Type::NonNull(of_type) => Some(of_type),
        }
    }

    fn same_kind(&self, other: &Type) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl Document {
    pub fn add_named_type(&mut self, name: ByteSlice) -> Ref {
        push(&mut self.types, Type::Named(name))
    }

    pub fn add_list_type(&mut self, of_type: Ref) -> Ref {
        push(&mut self.types, Type::List(of_type))
    }

    pub fn add_non_null_type(&mut self, of_type: Ref) -> Ref {
        push(&mut self.types, Type::NonNull(of_type))
    }

    pub fn type_at(&self, ty: Ref) -> Result<&Type, InternalError> {
        self.types
            .get(ty)
            .ok_or(InternalError::TypeRefOutOfBounds(ty))
    }

    pub fn type_is_non_null(&self, ty: Ref) -> bool {
        self.types.get(ty).is_some_and(Type::is_non_null)
    }

    /// Unwraps List and NonNull down to the named leaf.
    pub fn resolve_underlying_type(&self, ty: Ref) -> Result<Ref, InternalError> {
        let mut current = ty;
        // a well formed chain is never longer than the type array
        for _ in 0..=self.types.len() {
            match self.type_at(current)?.of_type() {
                Some(of_type) => current = of_type,
                None => return Ok(current),
            }
        }
        Err(InternalError::TypeRefOutOfBounds(ty))
    }

    /// Name of the named leaf of `ty`, empty when the chain is broken.
    pub fn resolve_type_name(&self, ty: Ref) -> &str {
        match self
            .resolve_underlying_type(ty)
            .map(|leaf| self.types.get(leaf))
        {
            Ok(Some(Type::Named(name))) => self.byte_slice(*name),
            _ => "",
        }
    }

    /// Renders `ty` in GraphQL syntax, e.g. `[String!]!`.
    pub fn print_type(&self, ty: Ref) -> Result<String, InternalError> {
        let mut out = String::new();
        self.write_type(ty, &mut out, 0)?;
        Ok(out)
    }

    fn write_type(&self, ty: Ref, out: &mut String, depth: usize) -> Result<(), InternalError> {
        if depth > self.types.len() {
            return Err(InternalError::TypeRefOutOfBounds(ty));
        }
        match *self.type_at(ty)? {
            Type::Named(name) => out.push_str(self.byte_slice(name)),
            Type::List(of_type) => {
                out.push('[');
                self.write_type(of_type, out, depth + 1)?;
                out.push(']');
            }
            Type::NonNull(of_type) => {
                self.write_type(of_type, out, depth + 1)?;
                out.push('!');
            }
        }
        Ok(())
    }

    /// Both types have the same wrapper at every level and the same name
    /// at the leaf.
    pub fn types_are_compatible_deep(&self, left: Ref, right: Ref) -> Result<bool, InternalError> {
        types_match(self, left, self, right)
    }
}

/// Whether a variable declared with `operation_type` may be used where the
/// schema expects `definition_type`.
///
/// A nullable variable is accepted in a non-null position when a default
/// value exists, and a non-null variable is accepted in a nullable position.
pub fn operation_type_satisfies_definition_type(
    operation: &Document,
    operation_type: Ref,
    definition: &Document,
    definition_type: Ref,
    has_default_value: bool,
) -> Result<bool, InternalError> {
    let mut operation_type = operation_type;
    let mut definition_type = definition_type;

    let operation_is_non_null = operation.type_at(operation_type)?.is_non_null();
    let definition_ty = *definition.type_at(definition_type)?;
    if !operation_is_non_null && has_default_value {
        if let Type::NonNull(of_type) = definition_ty {
            definition_type = of_type;
        }
    }

    let definition_is_non_null = definition.type_at(definition_type)?.is_non_null();
    if let Type::NonNull(of_type) = *operation.type_at(operation_type)? {
        if !definition_is_non_null {
            operation_type = of_type;
        }
    }

    types_match(operation, operation_type, definition, definition_type)
}

fn types_match(
    left_document: &Document,
    left: Ref,
    right_document: &Document,
    right: Ref,
) -> Result<bool, InternalError> {
    let (mut left, mut right) = (left, right);
    let limit = left_document.types.len().min(right_document.types.len());
    for _ in 0..=limit {
        let left_type = left_document.type_at(left)?;
        let right_type = right_document.type_at(right)?;
        if !left_type.same_kind(right_type) {
            return Ok(false);
        }
        match (*left_type, *right_type) {
            (Type::Named(left_name), Type::Named(right_name)) => {
                return Ok(
                    left_document.byte_slice(left_name) == right_document.byte_slice(right_name)
                );
            }
            (Type::List(l), Type::List(r)) | (Type::NonNull(l), Type::NonNull(r)) => {
                left = l;
                right = r;
            }
            _ => return Ok(false),
        }
    }
    Err(InternalError::TypeRefOutOfBounds(left))
}
