//! Resolution of a chunk sequence against a [`MatchingTrie`].
//!
//! The first chunk may match an edge at any depth (through the suffix
//! index); every following chunk must match a direct child. A node whose
//! child repeats its own key is treated as that child too, so redundant
//! nested scopes such as `namespace A { namespace A.B { } }` can be skipped.

use std::collections::{BTreeSet, VecDeque};

use excerpt_parser::{DeclId, DeclarationTree};

use crate::pattern::Chunk;
use crate::trie::{MatchingTrie, TrieKey, TrieNodeId};

/// Resolve `chunks` to the declarations they address, in source order.
///
/// Returns `None` when nothing matches or `chunks` is empty.
#[must_use]
pub fn resolve(trie: &MatchingTrie, tree: &DeclarationTree, chunks: &[Chunk]) -> Option<Vec<DeclId>> {
    let (first, rest) = chunks.split_first()?;

    let entries = trie
        .entry_points(label(first))
        .iter()
        .copied()
        .filter(|&id| trie.node(id).key().is_some_and(|key| accepts(first, key)));
    let mut frontier = collapse(trie, entries);

    for chunk in rest {
        let next: Vec<TrieNodeId> = frontier
            .iter()
            .flat_map(|&id| {
                trie.node(id)
                    .children()
                    .filter(|(key, _)| accepts(chunk, key))
                    .map(|(_, child)| child)
            })
            .collect();
        frontier = collapse(trie, next);
        if frontier.is_empty() {
            break;
        }
    }

    let matched: BTreeSet<DeclId> = frontier
        .iter()
        .flat_map(|&id| terminal_declarations(trie, id))
        .collect();
    let mut outermost: Vec<DeclId> = matched
        .iter()
        .copied()
        .filter(|&id| !is_nested(tree, &matched, id))
        .collect();
    outermost.sort_by_key(|&id| tree.get(id).span.start);

    tracing::debug!(
        chunks = chunks.len(),
        matches = outermost.len(),
        "resolved member pattern"
    );
    (!outermost.is_empty()).then_some(outermost)
}

fn label(chunk: &Chunk) -> &str {
    match chunk {
        Chunk::Identifier(name) | Chunk::Generic { name, .. } => name,
        Chunk::Parameters(_) => "()",
        Chunk::Indexer(_) => "[]",
        Chunk::Constructor => "<Constructor>",
        Chunk::Destructor => "<Destructor>",
        Chunk::Accessor(kind) => kind.keyword(),
    }
}

fn accepts(chunk: &Chunk, key: &TrieKey) -> bool {
    match (chunk, key) {
        (Chunk::Identifier(wanted), TrieKey::Name { name, .. }) => wanted == name,
        (
            Chunk::Generic {
                name: wanted,
                arity: wanted_arity,
            },
            TrieKey::Name { name, arity },
        ) => wanted == name && wanted_arity == arity,
        (Chunk::Parameters(wanted), TrieKey::Parameters(types))
        | (Chunk::Indexer(wanted), TrieKey::Indexer(types)) => wanted == types,
        (Chunk::Constructor, TrieKey::Constructor) | (Chunk::Destructor, TrieKey::Destructor) => {
            true
        }
        (Chunk::Accessor(wanted), TrieKey::Accessor(kind)) => wanted == kind,
        _ => false,
    }
}

/// Close a node set over "child with the same key as its parent".
fn collapse(trie: &MatchingTrie, nodes: impl IntoIterator<Item = TrieNodeId>) -> BTreeSet<TrieNodeId> {
    let mut closed = BTreeSet::new();
    let mut pending: Vec<TrieNodeId> = nodes.into_iter().collect();
    while let Some(id) = pending.pop() {
        if !closed.insert(id) {
            continue;
        }
        let node = trie.node(id);
        if let Some(repeat) = node.key().and_then(|key| node.child(key)) {
            pending.push(repeat);
        }
    }
    closed
}

/// Declarations recorded at `id`, or at its nearest descendants when `id`
/// is only an intermediate segment of a dotted namespace.
fn terminal_declarations(trie: &MatchingTrie, id: TrieNodeId) -> Vec<DeclId> {
    let mut found = Vec::new();
    let mut queue = VecDeque::from([id]);
    while let Some(current) = queue.pop_front() {
        let node = trie.node(current);
        if node.declarations().is_empty() {
            queue.extend(node.children().map(|(_, child)| child));
        } else {
            found.extend_from_slice(node.declarations());
        }
    }
    found
}

/// Whether another matched declaration already covers `id`'s text.
///
/// Declarations sharing one span (`event EventHandler A, B;`) keep only the
/// first.
fn is_nested(tree: &DeclarationTree, matched: &BTreeSet<DeclId>, id: DeclId) -> bool {
    let span = tree.get(id).span;
    matched.iter().any(|&other| {
        let other_span = tree.get(other).span;
        other != id && other_span.contains(&span) && (other_span != span || other < id)
    })
}
