use super::*;

impl<E: Entity> QuadTree<E> {
    pub(crate) fn build_nodes(
        world: Rectangle,
        min_size: (i32, i32),
        worst_case: u32,
    ) -> Vec<Node<E::Id>> {
        let mut nodes = Vec::new();
        nodes.push(Node::new(world, 0, ROOT_BRANCH, None));
        Self::build_branch(&mut nodes, NodeId::ROOT, min_size);

        // The auxiliary grid only makes sense when the root actually split.
        if worst_case > 0 && !nodes[NodeId::ROOT.index()].is_leaf() {
            let inflate = i32::try_from(worst_case).unwrap_or(i32::MAX / 4);
            for (i, cell) in world.grid3x3().iter().enumerate() {
                let id = NodeId::from_index(nodes.len());
                let branch_id = FIRST_AUXILIARY_BRANCH + i as u8;
                nodes.push(Node::new(
                    cell.inflate(inflate),
                    1,
                    branch_id,
                    Some(NodeId::ROOT),
                ));
                nodes[NodeId::ROOT.index()].children.push(id);
            }
        }

        nodes
    }

    fn build_branch(nodes: &mut Vec<Node<E::Id>>, node: NodeId, min_size: (i32, i32)) {
        let rect = nodes[node.index()].rect;
        if rect.half_width() < min_size.0 || rect.half_height() < min_size.1 {
            return;
        }

        let level = nodes[node.index()].level + 1;
        for (i, quadrant) in rect.quadrants().iter().enumerate() {
            let child = NodeId::from_index(nodes.len());
            nodes.push(Node::new(*quadrant, level, i as u8 + 1, Some(node)));
            nodes[node.index()].children.push(child);
            Self::build_branch(nodes, child, min_size);
        }
    }
}
