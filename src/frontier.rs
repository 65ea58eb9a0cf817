use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{NodeArena, NodeId};

/// Min-priority queue of search nodes. Among equal priorities the most
/// recently inserted node comes out first.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    open_list: BinaryHeap<(Reverse<u32>, NodeId)>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, arena: &NodeArena, id: NodeId) {
        self.open_list.push((Reverse(arena.get(id).priority), id));
    }

    pub fn pop_min(&mut self) -> Option<NodeId> {
        self.open_list.pop().map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.open_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_list.is_empty()
    }
}
