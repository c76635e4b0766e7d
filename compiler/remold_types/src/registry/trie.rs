//! Identity trie canonicalizing parameterized types.

use rustc_hash::FxHashMap;

use crate::TypeId;

/// Root of the trie: one branch per raw type, then one level per argument.
#[derive(Default)]
pub(super) struct TypeTrie {
    root: TrieNode,
    nodes: usize,
}

#[derive(Default)]
struct TrieNode {
    children: FxHashMap<TypeId, TrieNode>,
    parameterized: Option<TypeId>,
}

impl TypeTrie {
    /// Walk `raw` then each argument, creating nodes on the way, and return the
    /// memoized leaf or the one `make` allocates.
    pub(super) fn find_or_insert(
        &mut self,
        raw: TypeId,
        type_parameters: &[TypeId],
        make: impl FnOnce() -> TypeId,
    ) -> TypeId {
        let TypeTrie { root, nodes } = self;
        let mut node = child(root, raw, nodes);
        for &parameter in type_parameters {
            node = child(node, parameter, nodes);
        }
        *node.parameterized.get_or_insert_with(make)
    }

    pub(super) fn node_count(&self) -> usize {
        self.nodes
    }

    pub(super) fn clear(&mut self) {
        *self = TypeTrie::default();
    }
}

fn child<'a>(node: &'a mut TrieNode, key: TypeId, nodes: &mut usize) -> &'a mut TrieNode {
    node.children.entry(key).or_insert_with(|| {
        *nodes += 1;
        TrieNode::default()
    })
}
