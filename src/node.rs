use crate::board::Board;
use crate::traits::board::{Heuristic, HeuristicKind};

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub moves: u32,
    pub predecessor: Option<NodeId>,
    pub priority: u32,
}

/// Append-only storage for the tree of explored paths. Nodes only ever point
/// at their parent, so the tree can't form a cycle.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn root(&mut self, board: Board, heuristic: HeuristicKind) -> NodeId {
        let priority = board.get_heuristic(heuristic);
        self.push(SearchNode { board, moves: 0, predecessor: None, priority })
    }

    pub fn child(&mut self, parent: NodeId, board: Board, heuristic: HeuristicKind) -> NodeId {
        let moves = self.get(parent).moves + 1;
        let priority = moves + board.get_heuristic(heuristic);
        self.push(SearchNode { board, moves, predecessor: Some(parent), priority })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Board held by the parent of `id`, if any.
    pub fn predecessor_board(&self, id: NodeId) -> Option<&Board> {
        self.get(id).predecessor.map(|parent| &self.get(parent).board)
    }

    /// Boards from the root down to `id`.
    pub fn path(&self, id: NodeId) -> Vec<Board> {
        let mut path = vec![];
        let mut current = Some(id);

        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.board.clone());
            current = node.predecessor;
        }

        path.reverse();
        path
    }
}
