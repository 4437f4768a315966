use super::*;

impl<E: Entity> QuadTree<E> {
    /// Every indexed entity whose rectangle intersects `rect`.
    pub fn entities_in(&self, rect: &Rectangle) -> Vec<&E> {
        let mut found = Vec::new();
        self.entities_in_with(rect, |entity| found.push(entity));
        found
    }

    pub fn entities_in_with<'a, F>(&'a self, rect: &Rectangle, mut f: F)
    where
        F: FnMut(&'a E),
    {
        let mut stack = NodeStack::new();
        stack.push(NodeId::ROOT);
        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id.index()];
            // Children were filtered when pushed. The root is always scanned
            // since it holds entities lying outside the world.
            for id in &node.entities {
                if let Some(slot) = self.entity_branch.get(id) {
                    if slot.rect.intersects(rect) {
                        f(&slot.handle);
                    }
                }
            }
            for &child in &node.children {
                if self.nodes[child.index()].rect.intersects(rect) {
                    stack.push(child);
                }
            }
        }
    }

    pub fn count_in(&self, rect: &Rectangle) -> usize {
        let mut count = 0;
        self.entities_in_with(rect, |_| count += 1);
        count
    }
}
