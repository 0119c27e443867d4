//! Arena-backed MCTS search tree
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Parents
//! own their children through the arena; the parent link is a plain index
//! used only when walking back up during backpropagation.

use crate::board::{Board, Move, Stone};

/// Index of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One position in the tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Position after `mv` was played
    pub board: Board,
    /// Move that produced this node (`None` at the root)
    pub mv: Option<Move>,
    /// Color that played `mv`; rewards are credited from its side
    pub mover: Stone,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Moves not yet expanded into children
    pub untried: Vec<Move>,
    pub visits: u32,
    /// Sum of rewards: 1 per win, 0.5 per draw
    pub wins: f64,
}

impl Node {
    fn new(board: Board, mv: Option<Move>, mover: Stone, parent: Option<NodeId>) -> Self {
        let untried = if board.is_terminal().0 {
            Vec::new()
        } else {
            board.empty_points().into_iter().map(Move::Place).collect()
        };
        Self {
            board,
            mv,
            mover,
            parent,
            children: Vec::new(),
            untried,
            visits: 0,
            wins: 0.0,
        }
    }

    /// UCT priority: `wins/visits + c * sqrt(2 ln(parent_visits) / visits)`.
    ///
    /// An unvisited node is always preferred.
    #[must_use]
    pub fn uct(&self, parent_visits: u32, c: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = f64::from(self.visits);
        let exploitation = self.wins / n;
        let exploration = c * (2.0 * f64::from(parent_visits.max(1)).ln() / n).sqrt();
        exploitation + exploration
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / f64::from(self.visits)
        }
    }

    /// Selection descends through a node once nothing is left to expand
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty() && !self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Tree with a single root for `board`; the root's mover is the side
    /// that is *not* to move.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let mover = board.current_player().opponent();
        Self {
            nodes: vec![Node::new(board, None, mover, None)],
        }
    }

    #[inline]
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child of `id` with the highest UCT value; ties keep the earlier child.
    #[must_use]
    pub fn select_child(&self, id: NodeId, c: f64) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &node.children {
            let score = self.nodes[child.0].uct(node.visits, c);
            match best {
                Some((_, s)) if s >= score => {}
                _ => best = Some((child, score)),
            }
        }
        best.map(|(child, _)| child)
    }

    /// Walk down from the root while the current node is fully expanded.
    #[must_use]
    pub fn select_leaf(&self, c: f64) -> NodeId {
        let mut id = self.root_id();
        while self.nodes[id.0].is_fully_expanded() {
            match self.select_child(id, c) {
                Some(child) => id = child,
                None => break,
            }
        }
        id
    }

    /// Expand the untried move at `index` of `parent` into a new child.
    ///
    /// The child's board is a copy of the parent's with the move played.
    pub fn expand(&mut self, parent: NodeId, index: usize) -> NodeId {
        let node = &mut self.nodes[parent.0];
        let mv = node.untried.swap_remove(index);
        let color = node.board.current_player();
        let mut board = node.board.clone();
        let played = board.play(mv, color);
        debug_assert!(played, "untried move {mv:?} was not legal");

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(board, Some(mv), color, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Credit a playout result from `id` up to the root.
    ///
    /// `winner` is `Stone::Empty` for a draw.
    pub fn backpropagate(&mut self, id: NodeId, winner: Stone) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            node.visits += 1;
            node.wins += if winner == node.mover {
                1.0
            } else if winner == Stone::Empty {
                0.5
            } else {
                0.0
            };
            current = node.parent;
        }
    }

    /// Most visited child of `id`; ties keep the earlier child.
    #[must_use]
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child in &self.nodes[id.0].children {
            let visits = self.nodes[child.0].visits;
            match best {
                Some((_, v)) if v >= visits => {}
                _ => best = Some((child, visits)),
            }
        }
        best.map(|(child, _)| child)
    }
}
