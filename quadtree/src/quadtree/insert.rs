use super::*;

impl<E: Entity> QuadTree<E> {
    /// Places `entity` at its best-fit node and records every pair it now
    /// collides with.
    ///
    /// An entity that is already indexed is detached first: it leaves its old
    /// node and all of its pairs are dropped before it is placed again. A
    /// rectangle with a non-positive extent, or whose right or bottom edge
    /// would not fit in an `i32`, is rejected and leaves the tree untouched.
    pub fn add(&mut self, entity: E) -> QuadtreeResult<()> {
        let rect = entity.rect();
        validate_entity_rect(&rect)?;
        let id = entity.id();
        self.detach(id);

        let mut path = std::mem::take(&mut self.path);
        path.clear();
        let mut current = NodeId::ROOT;
        loop {
            path.push(current);
            self.counters.branch_visits_add += 1;
            self.test_residents(current, &entity, &rect);
            match self.best_child(current, &rect) {
                Some(child) => current = child,
                None => break,
            }
        }

        if current == NodeId::ROOT {
            tracing::trace!(?id, ?rect, "entity settled at root");
        }
        match self.mode {
            CollisionMode::Entities => self.retest_structural(&path, current, &entity, &rect),
            _ => self.retest_overlapping(&path, &entity, &rect),
        }
        self.nodes[current.index()].entities.insert(id);
        self.entity_branch.insert(
            id,
            Slot {
                node: current,
                rect,
                handle: entity,
            },
        );
        self.path = path;
        Ok(())
    }

    pub fn add_list<I>(&mut self, entities: I) -> QuadtreeResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        for entity in entities {
            self.add(entity)?;
        }
        Ok(())
    }

    // The root lists its auxiliary cells after the four quadrants, so they
    // are only reached once no quadrant can hold the rectangle.
    fn best_child(&self, node: NodeId, rect: &Rectangle) -> Option<NodeId> {
        self.nodes[node.index()]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.index()].rect.contains(rect))
    }

    fn test_residents(&mut self, node: NodeId, incoming: &E, rect: &Rectangle) {
        let mode = self.mode;
        if !mode.is_enabled() {
            return;
        }
        let id = incoming.id();
        for other in &self.nodes[node.index()].entities {
            if *other == id {
                continue;
            }
            let Some(slot) = self.entity_branch.get(other) else {
                debug_assert!(false, "node holds unindexed entity {:?}", other);
                continue;
            };
            self.counters.coll_tests += 1;
            if mode.collided(incoming, rect, &slot.handle, &slot.rect) {
                self.collisions.insert(id, *other);
            }
        }
    }

    /// Tests against every node overlapping `rect` that the descent did not
    /// already cover. Only valid when the predicate rejects disjoint rects. This reaches the kept node's descendants as well as
    /// overlapping cells of the other branch family (auxiliary vs standard).
    fn retest_overlapping(&mut self, path: &[NodeId], incoming: &E, rect: &Rectangle) {
        if !self.mode.is_enabled() {
            return;
        }
        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        stack.push(NodeId::ROOT);
        while let Some(node) = stack.pop() {
            for &child in &self.nodes[node.index()].children {
                if self.nodes[child.index()].rect.intersects(rect) {
                    stack.push(child);
                }
            }
            if !path.contains(&node) {
                self.counters.branch_visits_add += 1;
                self.test_residents(node, incoming, rect);
            }
        }
        self.stack = stack;
    }

    /// Rect-blind variant for entity-only collisions: the whole subtree of
    /// `kept`, plus the opposite branch family (auxiliary cells for a
    /// standard node, the standard hierarchy for an auxiliary cell). Both
    /// sides of any pair reach each other this way, whichever is added last.
    fn retest_structural(
        &mut self,
        path: &[NodeId],
        kept: NodeId,
        incoming: &E,
        rect: &Rectangle,
    ) {
        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        stack.push(kept);
        let kept_node = &self.nodes[kept.index()];
        if !kept_node.is_root() {
            let kept_auxiliary = kept_node.is_auxiliary();
            for &child in &self.nodes[NodeId::ROOT.index()].children {
                if self.nodes[child.index()].is_auxiliary() != kept_auxiliary {
                    stack.push(child);
                }
            }
        }
        while let Some(node) = stack.pop() {
            stack.extend(self.nodes[node.index()].children.iter().copied());
            if !path.contains(&node) {
                self.counters.branch_visits_add += 1;
                self.test_residents(node, incoming, rect);
            }
        }
        self.stack = stack;
    }
}
