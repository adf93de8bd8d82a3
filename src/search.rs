//! Shared state-management machinery: the search tree each engine grows
//! and the path reconstruction that walks it back.

use std::fmt::Debug;
use std::hash::Hash;

use nonmax::NonMaxU32;

/// Path cost in edge count; the grid is unit-cost.
pub type Cost = u32;

/// States the engines can key their bookkeeping by.
///
/// The single-goal engines search over plain cells; the multi-goal engine
/// searches over (cell, remaining objectives) pairs.
pub trait SearchState: Copy + Debug + PartialEq + Eq + Hash {}

/// A reference to a [`SearchTreeNode`] within its [`SearchTree`].
///
/// `NonMaxU32` keeps `Option<NodeId>` 4 bytes wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(NonMaxU32);

impl NodeId {
    #[inline(always)]
    fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize);
        Self(NonMaxU32::new(index as u32).unwrap())
    }

    #[inline(always)]
    fn index(self) -> usize {
        self.0.get() as usize
    }
}

#[derive(Debug)]
pub struct SearchTreeNode<St>
where
    St: SearchState,
{
    pub(crate) parent: Option<NodeId>,
    pub(crate) state: St,
    pub(crate) g: Cost,
}

impl<St> SearchTreeNode<St>
where
    St: SearchState,
{
    #[must_use]
    pub fn new(state: St, parent: Option<NodeId>, g: Cost) -> Self {
        Self { parent, state, g }
    }

    /// Gives this node a better path through a new parent.
    pub fn reach(&mut self, new_parent: NodeId, g: Cost) {
        debug_assert!(g < self.g);
        self.parent = Some(new_parent);
        self.g = g;
    }

    #[inline(always)]
    pub(crate) fn state(&self) -> &St {
        &self.state
    }
}

/// All the search nodes of one engine run.
///
/// Parent links form a tree rooted at the start state; it is only ever
/// walked backwards, to reconstruct the winning path.
pub struct SearchTree<St>
where
    St: SearchState,
{
    nodes: Vec<SearchTreeNode<St>>,
}

impl<St> SearchTree<St>
where
    St: SearchState,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    #[inline(always)]
    pub fn push(&mut self, node: SearchTreeNode<St>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstructs the state sequence from the root to `leaf`.
    #[must_use]
    pub fn path(&self, leaf: NodeId) -> Vec<St> {
        let mut states = vec![*self[leaf].state()];
        let mut node = leaf;
        while let Some(parent) = self[node].parent {
            debug_assert!(parent != node);
            states.push(*self[parent].state());
            node = parent;
        }
        states.reverse();
        states
    }
}

impl<St> Default for SearchTree<St>
where
    St: SearchState,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<St> std::ops::Index<NodeId> for SearchTree<St>
where
    St: SearchState,
{
    type Output = SearchTreeNode<St>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<St> std::ops::IndexMut<NodeId> for SearchTree<St>
where
    St: SearchState,
{
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchTreeNode<St> {
        &mut self.nodes[id.index()]
    }
}

impl<St> std::fmt::Debug for SearchTree<St>
where
    St: SearchState,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    #[test]
    fn path_walks_back_to_the_root() {
        let mut tree = SearchTree::new();
        let a = tree.push(SearchTreeNode::new(Cell::new(0, 0), None, 0));
        let b = tree.push(SearchTreeNode::new(Cell::new(0, 1), Some(a), 1));
        let c = tree.push(SearchTreeNode::new(Cell::new(1, 1), Some(b), 2));

        assert_eq!(tree.len(), 3);
        assert_eq!(
            tree.path(c),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(tree.path(a), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn reach_reparents_on_a_better_path() {
        let mut tree = SearchTree::new();
        let a = tree.push(SearchTreeNode::new(Cell::new(0, 0), None, 0));
        let b = tree.push(SearchTreeNode::new(Cell::new(2, 0), Some(a), 4));

        tree[b].reach(a, 2);
        assert_eq!(tree[b].g, 2);
        assert_eq!(tree.path(b), vec![Cell::new(0, 0), Cell::new(2, 0)]);
    }
}
