use super::*;

pub(crate) const ROOT_BRANCH: u8 = 0;
pub(crate) const FIRST_AUXILIARY_BRANCH: u8 = 5;

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "node index {} overflows", index);
        NodeId(index as u32)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub struct Node<Id> {
    pub(crate) rect: Rectangle,
    pub(crate) level: u32,
    pub(crate) branch_id: u8,
    pub(crate) parent: Option<NodeId>,
    // Standard quadrants first; the root appends its auxiliary cells after them.
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) entities: FxHashSet<Id>,
}

impl<Id> Node<Id> {
    pub(crate) fn new(rect: Rectangle, level: u32, branch_id: u8, parent: Option<NodeId>) -> Self {
        Self {
            rect,
            level,
            branch_id,
            parent,
            children: SmallVec::new(),
            entities: FxHashSet::default(),
        }
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// 0 for the root, 1..=4 for the standard quadrants (top-left, top-right,
    /// bottom-left, bottom-right), 5..=13 for the root's auxiliary cells.
    pub fn branch_id(&self) -> u8 {
        self.branch_id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_auxiliary(&self) -> bool {
        self.branch_id >= FIRST_AUXILIARY_BRANCH
    }

    /// Number of entities whose best fit is this node.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = &Id> + '_ {
        self.entities.iter()
    }
}
