// In: src/pipeline/trie.rs

//! The character trie over indexed prefixes.
//!
//! Nodes live in an arena and are addressed by `NodeId`; node 0 is the root.
//! Children are kept in a `BTreeMap`, so every traversal visits them in
//! ascending character order. Per-pass encoding state (assumed offsets) is not
//! stored here; the encoder keeps it in its own table indexed by `NodeId`.

use std::collections::BTreeMap;

use crate::pipeline::context::{PrefixIndex, SuffixFrequencies};

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    pub children: BTreeMap<char, NodeId>,
    /// Suffix frequencies of the prefix that ends at this node, if any.
    pub leaf: Option<SuffixFrequencies>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the trie for every prefix of the index.
    pub fn build(index: &PrefixIndex) -> Self {
        let mut trie = Self::new();
        for (prefix, suffixes) in index {
            trie.insert(prefix, suffixes.clone());
        }
        log::debug!(
            "trie built: {} nodes, depth {}",
            trie.node_count(),
            trie.depth()
        );
        trie
    }

    /// Walks or creates the path for `prefix` and attaches `suffixes` to its
    /// terminal node, summing into any leaf already there.
    pub fn insert(&mut self, prefix: &str, suffixes: SuffixFrequencies) -> NodeId {
        let mut id = ROOT;
        for ch in prefix.chars() {
            id = match self.nodes[id].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[id].children.insert(ch, child);
                    child
                }
            };
        }
        let leaf = self.nodes[id].leaf.get_or_insert_with(BTreeMap::new);
        for (suffix, frequency) in suffixes {
            let slot = leaf.entry(suffix).or_insert(0);
            *slot = slot.saturating_add(frequency);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    /// Follows `key` from the root.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(ROOT, |id, ch| self.nodes[id].children.get(&ch).copied())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every node but the root has exactly one incoming edge.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Length of the longest root-to-node path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for &child in self.nodes[id].children.values() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}
