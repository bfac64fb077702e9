//! Core data types for the declaration hierarchy of a source file.

mod declaration_kind;
mod tree;

pub use declaration_kind::{AccessorKind, DeclarationKind};
pub use tree::{DeclId, DeclarationNode, DeclarationTree, Span};
