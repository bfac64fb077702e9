//! Matching trie built from a declaration tree.
//!
//! Edges are qualified-name chunks; each node records the declarations whose
//! qualified path ends there. Re-opened namespaces and types share one path,
//! so their children merge. A suffix index maps every edge label to the nodes
//! it leads to, which lets a pattern start at any depth.

use std::collections::HashMap;

use excerpt_parser::{AccessorKind, DeclId, DeclarationKind, DeclarationTree};

/// Index of a node inside a [`MatchingTrie`].
pub type TrieNodeId = usize;

const ROOT: TrieNodeId = 0;

/// Edge key between two trie nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrieKey {
    Name { name: String, arity: usize },
    Parameters(Vec<String>),
    Indexer(Vec<String>),
    Constructor,
    Destructor,
    Accessor(AccessorKind),
}

impl TrieKey {
    /// Label under which the edge is registered in the suffix index.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Name { name, .. } => name,
            Self::Parameters(_) => "()",
            Self::Indexer(_) => "[]",
            Self::Constructor => "<Constructor>",
            Self::Destructor => "<Destructor>",
            Self::Accessor(kind) => kind.keyword(),
        }
    }

    fn name(name: &str, arity: usize) -> Self {
        Self::Name {
            name: name.to_string(),
            arity,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    key: Option<TrieKey>,
    children: HashMap<TrieKey, TrieNodeId>,
    declarations: Vec<DeclId>,
}

impl TrieNode {
    /// Edge leading into this node; `None` for the root.
    #[must_use]
    pub const fn key(&self) -> Option<&TrieKey> {
        self.key.as_ref()
    }

    pub fn children(&self) -> impl Iterator<Item = (&TrieKey, TrieNodeId)> {
        self.children.iter().map(|(key, id)| (key, *id))
    }

    #[must_use]
    pub fn child(&self, key: &TrieKey) -> Option<TrieNodeId> {
        self.children.get(key).copied()
    }

    /// Declarations whose qualified path terminates here, in source order.
    #[must_use]
    pub fn declarations(&self) -> &[DeclId] {
        &self.declarations
    }
}

/// Immutable lookup structure for one file.
#[derive(Debug, Clone)]
pub struct MatchingTrie {
    nodes: Vec<TrieNode>,
    suffix_index: HashMap<String, Vec<TrieNodeId>>,
}

impl MatchingTrie {
    /// Build the trie for every declaration in `tree`.
    #[must_use]
    pub fn build(tree: &DeclarationTree) -> Self {
        let mut trie = Self {
            nodes: vec![TrieNode::default()],
            suffix_index: HashMap::new(),
        };
        for &root in tree.roots() {
            trie.insert(tree, root, ROOT);
        }
        tracing::debug!(
            nodes = trie.nodes.len(),
            labels = trie.suffix_index.len(),
            "built matching trie"
        );
        trie
    }

    #[must_use]
    pub fn node(&self, id: TrieNodeId) -> &TrieNode {
        &self.nodes[id]
    }

    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    /// Nodes reached through an edge with the given label, in creation order.
    #[must_use]
    pub fn entry_points(&self, label: &str) -> &[TrieNodeId] {
        self.suffix_index.get(label).map_or(&[], Vec::as_slice)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the trie holds nothing but its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn insert(&mut self, tree: &DeclarationTree, id: DeclId, parent: TrieNodeId) {
        let decl = tree.get(id);
        let scope = match decl.kind {
            DeclarationKind::Namespace => {
                let node = decl
                    .name
                    .split('.')
                    .fold(parent, |node, segment| self.child(node, TrieKey::name(segment, 0)));
                self.record(node, id)
            }
            DeclarationKind::Type => {
                let node = self.child(parent, TrieKey::name(&decl.name, decl.generic_arity));
                self.record(node, id)
            }
            DeclarationKind::Method => {
                let name = self.child(parent, TrieKey::name(&decl.name, decl.generic_arity));
                self.record(name, id);
                let params = self.child(name, TrieKey::Parameters(decl.parameter_types.clone()));
                self.record(params, id)
            }
            DeclarationKind::Constructor => {
                let marker = self.child(parent, TrieKey::Constructor);
                self.record(marker, id);
                let params =
                    self.child(marker, TrieKey::Parameters(decl.parameter_types.clone()));
                self.record(params, id)
            }
            DeclarationKind::Destructor => {
                let node = self.child(parent, TrieKey::Destructor);
                self.record(node, id)
            }
            DeclarationKind::Property | DeclarationKind::Event => {
                let node = self.child(parent, TrieKey::name(&decl.name, 0));
                self.record(node, id)
            }
            DeclarationKind::Indexer => {
                let node = self.child(parent, TrieKey::Indexer(decl.parameter_types.clone()));
                self.record(node, id)
            }
            DeclarationKind::Accessor(kind) => {
                let node = self.child(parent, TrieKey::Accessor(kind));
                self.record(node, id)
            }
        };

        for &child in &decl.children {
            self.insert(tree, child, scope);
        }
    }

    /// Child of `parent` along `key`, created and indexed on first use.
    fn child(&mut self, parent: TrieNodeId, key: TrieKey) -> TrieNodeId {
        if let Some(existing) = self.nodes[parent].child(&key) {
            return existing;
        }
        let id = self.nodes.len();
        self.suffix_index
            .entry(key.label().to_string())
            .or_default()
            .push(id);
        self.nodes[parent].children.insert(key.clone(), id);
        self.nodes.push(TrieNode {
            key: Some(key),
            ..TrieNode::default()
        });
        id
    }

    fn record(&mut self, node: TrieNodeId, id: DeclId) -> TrieNodeId {
        self.nodes[node].declarations.push(id);
        node
    }
}
