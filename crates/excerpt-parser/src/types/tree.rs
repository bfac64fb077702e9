//! Arena-backed declaration tree produced by a front-end.

use serde::{Deserialize, Serialize};

use super::{AccessorKind, DeclarationKind};

/// Index of a declaration inside its [`DeclarationTree`].
///
/// Ids are handed out in pre-order, so comparing two ids compares their
/// position in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeclId(usize);

impl DeclId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Byte range of a declaration inside the tree's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies entirely inside this span.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One declaration: namespace, type, member or accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationNode {
    pub kind: DeclarationKind,
    /// Declared name. Empty for constructors, destructors, indexers and accessors.
    pub name: String,
    /// Whitespace-free parameter type names, in declaration order.
    pub parameter_types: Vec<String>,
    pub generic_arity: usize,
    pub span: Span,
    pub parent: Option<DeclId>,
    pub children: Vec<DeclId>,
}

impl DeclarationNode {
    #[must_use]
    pub fn new(kind: DeclarationKind, name: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            name: name.into(),
            parameter_types: Vec::new(),
            generic_arity: 0,
            span,
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameters(mut self, parameter_types: Vec<String>) -> Self {
        self.parameter_types = parameter_types;
        self
    }

    #[must_use]
    pub const fn with_generic_arity(mut self, generic_arity: usize) -> Self {
        self.generic_arity = generic_arity;
        self
    }

    #[must_use]
    pub const fn accessor(&self) -> Option<AccessorKind> {
        match self.kind {
            DeclarationKind::Accessor(accessor) => Some(accessor),
            _ => None,
        }
    }
}

/// The declaration hierarchy of one source file.
///
/// Owns the source text; spans are materialized into text on demand.
#[derive(Debug, Clone, Default)]
pub struct DeclarationTree {
    source: String,
    nodes: Vec<DeclarationNode>,
    roots: Vec<DeclId>,
}

impl DeclarationTree {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Append a declaration under `parent` (or at top level) and return its id.
    ///
    /// Declarations must be pushed in source order.
    pub fn push(&mut self, parent: Option<DeclId>, mut node: DeclarationNode) -> DeclId {
        debug_assert!(
            node.accessor().is_none()
                || parent.is_some_and(|p| self.get(p).kind.owns_accessors()),
            "accessor declarations must sit under a property, indexer or event"
        );
        debug_assert!(node.span.end <= self.source.len(), "span outside source");

        let id = DeclId(self.nodes.len());
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level declarations in source order.
    #[must_use]
    pub fn roots(&self) -> &[DeclId] {
        &self.roots
    }

    #[must_use]
    pub fn get(&self, id: DeclId) -> &DeclarationNode {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every declaration in source order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &DeclarationNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (DeclId(i), node))
    }

    /// Raw source text covered by the declaration's span.
    #[must_use]
    pub fn text(&self, id: DeclId) -> &str {
        let span = self.get(id).span;
        &self.source[span.start..span.end]
    }

    /// The declaration text split into lines, line terminators removed.
    #[must_use]
    pub fn lines(&self, id: DeclId) -> Vec<&str> {
        self.text(id).lines().collect()
    }

    /// Dotted path from the top level down to `id`, using the markers a
    /// member pattern would use for unnamed members.
    #[must_use]
    pub fn qualified_name(&self, id: DeclId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(decl_id) = current {
            let node = self.get(decl_id);
            segments.push(display_segment(node));
            current = node.parent;
        }
        segments.reverse();
        segments.join(".")
    }
}

fn display_segment(node: &DeclarationNode) -> String {
    match node.kind {
        DeclarationKind::Namespace | DeclarationKind::Property | DeclarationKind::Event => {
            node.name.clone()
        }
        DeclarationKind::Type => generic_name(node),
        DeclarationKind::Method => {
            format!("{}({})", generic_name(node), node.parameter_types.join(","))
        }
        DeclarationKind::Indexer => format!("[{}]", node.parameter_types.join(",")),
        DeclarationKind::Constructor => {
            format!("<Constructor>({})", node.parameter_types.join(","))
        }
        DeclarationKind::Destructor => "<Destructor>".to_string(),
        DeclarationKind::Accessor(accessor) => accessor.keyword().to_string(),
    }
}

fn generic_name(node: &DeclarationNode) -> String {
    if node.generic_arity == 0 {
        return node.name.clone();
    }
    let placeholders: Vec<String> = (1..=node.generic_arity).map(|i| format!("T{i}")).collect();
    format!("{}{{{}}}", node.name, placeholders.join(","))
}
