//! C# declaration front-end.
//!
//! Walks the ast-grep C# tree and records namespaces, types, members and
//! accessors into a [`DeclarationTree`]. Method bodies are never entered, so
//! local functions and lambdas do not show up as declarations.

mod helpers;
mod members;

use ast_grep_core::Node;
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::parser::parse_source;
use crate::types::{DeclId, DeclarationKind, DeclarationNode, DeclarationTree, Span};

use super::DeclarationParser;

const LANGUAGE: &str = "csharp";

/// Front-end for C# source files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpParser;

impl DeclarationParser for CSharpParser {
    fn language(&self) -> &'static str {
        LANGUAGE
    }

    fn parse(&self, source: &str) -> Result<DeclarationTree, ParserError> {
        let ast = parse_source(source, SupportLang::CSharp);
        let root = ast.root();

        if let Some(error) = helpers::first_syntax_error(&root) {
            return Err(ParserError::ParseFailed {
                language: LANGUAGE.to_string(),
                message: format!(
                    "syntax error at line {}: {}",
                    error.start_pos().line() + 1,
                    error.text().lines().next().unwrap_or_default().trim()
                ),
            });
        }

        let mut walker = Walker {
            source,
            tree: DeclarationTree::new(source),
        };
        walker.walk_members(&root, None);

        tracing::debug!(declarations = walker.tree.len(), "parsed C# declarations");
        Ok(walker.tree)
    }
}

struct Walker<'s> {
    source: &'s str,
    tree: DeclarationTree,
}

impl Walker<'_> {
    fn push<D: ast_grep_core::Doc>(
        &mut self,
        node: &Node<D>,
        parent: Option<DeclId>,
        kind: DeclarationKind,
        name: String,
    ) -> DeclId {
        let span = helpers::declaration_span(node, self.source);
        self.push_span(parent, DeclarationNode::new(kind, name, span))
    }

    fn push_span(&mut self, parent: Option<DeclId>, decl: DeclarationNode) -> DeclId {
        self.tree.push(parent, decl)
    }

    /// Visit the declarations directly inside `container`.
    ///
    /// A file-scoped namespace (`namespace A;`) adopts every declaration that
    /// follows it in the same container.
    fn walk_members<D: ast_grep_core::Doc>(&mut self, container: &Node<D>, parent: Option<DeclId>) {
        let mut scope = parent;
        for child in container.children() {
            if child.kind().as_ref() == "file_scoped_namespace_declaration" {
                scope = self.file_scoped_namespace(&child, container, parent);
                continue;
            }
            self.visit(&child, scope);
        }
    }

    fn file_scoped_namespace<D: ast_grep_core::Doc>(
        &mut self,
        node: &Node<D>,
        container: &Node<D>,
        parent: Option<DeclId>,
    ) -> Option<DeclId> {
        let Some(name) = helpers::declared_name(node) else {
            return parent;
        };
        let start = helpers::declaration_span(node, self.source).start;
        let end = self.source[..container.range().end].trim_end().len();
        let id = self.push_span(
            parent,
            DeclarationNode::new(DeclarationKind::Namespace, name, Span::new(start, end)),
        );
        // Some grammar versions nest the following declarations inside the
        // namespace node itself.
        self.walk_members(node, Some(id));
        Some(id)
    }

    fn visit<D: ast_grep_core::Doc>(&mut self, node: &Node<D>, parent: Option<DeclId>) {
        let kind = node.kind();
        match kind.as_ref() {
            "namespace_declaration" => {
                if let Some(name) = helpers::declared_name(node) {
                    let id = self.push(node, parent, DeclarationKind::Namespace, name);
                    self.walk_body(node, id);
                }
            }
            "class_declaration"
            | "struct_declaration"
            | "interface_declaration"
            | "record_declaration"
            | "record_struct_declaration"
            | "enum_declaration" => {
                if let Some(name) = helpers::declared_name(node) {
                    let span = helpers::declaration_span(node, self.source);
                    let decl = DeclarationNode::new(DeclarationKind::Type, name, span)
                        .with_generic_arity(helpers::generic_arity(node));
                    let id = self.push_span(parent, decl);
                    self.walk_body(node, id);
                }
            }
            "delegate_declaration" => {
                if let Some(name) = helpers::declared_name(node) {
                    let span = helpers::declaration_span(node, self.source);
                    let decl = DeclarationNode::new(DeclarationKind::Type, name, span)
                        .with_generic_arity(helpers::generic_arity(node));
                    self.push_span(parent, decl);
                }
            }
            "method_declaration"
            | "constructor_declaration"
            | "destructor_declaration"
            | "property_declaration"
            | "indexer_declaration"
            | "event_declaration"
            | "event_field_declaration" => members::process_member(self, node, parent),
            other if other.starts_with("preproc_") => self.walk_members(node, parent),
            _ => {}
        }
    }

    fn walk_body<D: ast_grep_core::Doc>(&mut self, node: &Node<D>, id: DeclId) {
        if let Some(body) = node
            .children()
            .find(|child| child.kind().as_ref() == "declaration_list")
        {
            self.walk_members(&body, Some(id));
        }
    }
}

#[cfg(test)]
mod tests;
