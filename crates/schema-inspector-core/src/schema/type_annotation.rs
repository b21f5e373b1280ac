use crate::ast;
use crate::loc;
use crate::schema::NamedSchemaTypeRef;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeGraph;

/// Represents the annotated type of a [`SchemaField`](crate::schema::SchemaField)
/// or field argument: a named type wrapped in zero or more list and non-null
/// wrappers.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
        ref_location: loc::SourceLocation,
    },
    Named {
        nullable: bool,
        type_ref: NamedSchemaTypeRef,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(
        ref_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(ref_location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ref_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(
                        ref_location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: ref_location.to_owned(),
                },

            ast::schema::Type::NamedType(name) =>
                Self::Named {
                    nullable,
                    type_ref: NamedSchemaTypeRef::new(
                        name,
                        ref_location.to_owned(),
                    ),
                },

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(ref_location, inner, false),
        }
    }

    /// Recursively unwrap list wrappers and return the reference to the
    /// inner-most named type.
    pub fn innermost_type_ref(&self) -> &NamedSchemaTypeRef {
        match self {
            Self::List { inner, .. } => inner.innermost_type_ref(),
            Self::Named { type_ref, .. } => type_ref,
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        self.innermost_type_ref().name()
    }

    /// Resolve the inner-most named type against the given graph.
    ///
    /// Every annotation in a built [`SchemaTypeGraph`] references a defined
    /// type, so this only returns `None` when used with a different graph.
    pub fn innermost_type<'graph>(
        &self,
        graph: &'graph SchemaTypeGraph,
    ) -> Option<&'graph SchemaType> {
        self.innermost_type_ref().deref(graph).ok()
    }

    /// How many list wrappers surround the inner-most named type.
    pub fn list_depth(&self) -> usize {
        match self {
            Self::List { inner, .. } => 1 + inner.list_depth(),
            Self::Named { .. } => 0,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List { ref_location, .. } => ref_location,
            Self::Named { type_ref, .. } => type_ref.ref_location(),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable, .. } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { nullable, type_ref } => write!(
                f,
                "{}{}",
                type_ref.name(),
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
