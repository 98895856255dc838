use tinyvec::TinyVec;

use crate::hash::Key;

/// Stable handle of a node inside its arena.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Forward links of a single tower; index `i` is the next node at level `i`.
pub(crate) type Links = TinyVec<[Option<NodeId>; 4]>;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) value: String,
    pub(crate) forward: Links,
}

impl Node {
    pub(crate) fn new(key: Key, value: String, level: usize) -> Self {
        let mut forward = Links::new();
        forward.resize(level, None);
        Self {
            key,
            value,
            forward,
        }
    }

    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }

    pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
        self.forward.get(level).copied().flatten()
    }
}

/// Owns every node of a list. Nodes only refer to each other by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}
