//! # excerpt-parser
//!
//! Declaration front-ends for the excerpt snippet engine.
//!
//! A front-end parses a source file with ast-grep and records its
//! namespaces, types, members and accessors as a [`DeclarationTree`]:
//! an arena of declarations, each carrying its kind, name, parameter
//! types, generic arity and the byte span a reader would cut out of the
//! file. Only C# has a front-end today.

pub mod error;
pub mod extractors;
pub mod parser;
pub mod types;

pub use error::ParserError;
pub use extractors::{CSharpParser, DeclarationParser};
pub use parser::{detect_language, language_from_name};
pub use types::{AccessorKind, DeclId, DeclarationKind, DeclarationNode, DeclarationTree, Span};
