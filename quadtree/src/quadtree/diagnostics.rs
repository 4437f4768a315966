use super::*;

/// Work done by `add` since the last `reset_counters`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Calls into the active collision predicate.
    pub coll_tests: u64,
    /// Nodes visited while placing entities and re-testing overlaps.
    pub branch_visits_add: u64,
}

impl<E: Entity> QuadTree<E> {
    pub fn level_of(&self, id: E::Id) -> Option<u32> {
        self.branch_of(id).map(|node| self.nodes[node.index()].level)
    }

    pub fn branch_of(&self, id: E::Id) -> Option<NodeId> {
        self.entity_branch.get(&id).map(|slot| slot.node)
    }

    pub fn branch_id_of(&self, id: E::Id) -> Option<u8> {
        self.branch_of(id)
            .map(|node| self.nodes[node.index()].branch_id)
    }

    pub fn reset_counters(&mut self) {
        self.counters = Counters::default();
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn coll_tests(&self) -> u64 {
        self.counters.coll_tests
    }

    pub fn branch_visits_add(&self) -> u64 {
        self.counters.branch_visits_add
    }

    /// Depth of the standard hierarchy, root included.
    pub fn num_levels(&self) -> u32 {
        self.num_levels
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> &Node<E::Id> {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<E::Id>> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<E::Id>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    // Node rectangles in arena order, for debug overlays
    pub fn node_rects(&self, rects: &mut Vec<Rectangle>) {
        rects.extend(self.nodes.iter().map(|node| node.rect));
    }
}
