use super::*;

impl<E: Entity> QuadTree<E> {
    /// Removes the entity and every pair it takes part in, returning the
    /// stored handle. Unknown ids are ignored.
    pub fn remove(&mut self, id: E::Id) -> Option<E> {
        self.detach(id).map(|slot| slot.handle)
    }

    pub fn remove_list<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = E::Id>,
    {
        for id in ids {
            self.detach(id);
        }
    }

    /// Drops all entities and pairs. The node topology is kept.
    pub fn clear(&mut self) {
        tracing::debug!(entities = self.entity_branch.len(), "clearing quadtree");
        for node in &mut self.nodes {
            node.entities.clear();
        }
        self.entity_branch.clear();
        self.collisions.clear();
    }

    pub(super) fn detach(&mut self, id: E::Id) -> Option<Slot<E>> {
        let slot = self.entity_branch.remove(&id)?;
        self.nodes[slot.node.index()].entities.remove(&id);
        self.collisions.purge(id);
        Some(slot)
    }
}
