//! Bounded quadtree with a static node topology and dynamic membership.
//!
//! The node arena is built once from the world rectangle and never split or
//! merged afterwards. Each entity lives in exactly one node, its best fit: the
//! deepest node whose rectangle fully contains the entity's rectangle.
//! Collision pairs are discovered as a side effect of `add` and kept in a
//! symmetric set until either entity is re-added or removed.
//!
//! Pairs are only refreshed for the entity being added. Two entities that
//! stop being re-added keep whatever pair state they had at their last `add`.

use crate::collision_detection::CollisionMode;
use crate::error::{validate_entity_rect, validate_min_size, validate_world_rect, QuadtreeResult};
use common::shapes::Rectangle;
use fxhash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

mod build_nodes;
mod collision_pairs;
mod config;
mod diagnostics;
mod insert;
mod maintenance;
mod query_rect;
mod types;

pub(crate) use collision_pairs::CollisionPairs;
pub use config::Config;
pub use diagnostics::Counters;
pub use types::{Node, NodeId};
pub(crate) use types::{FIRST_AUXILIARY_BRANCH, ROOT_BRANCH};

pub(crate) type NodeStack = SmallVec<[NodeId; 32]>;

/// A caller-side object that can be placed in the tree.
pub trait Entity {
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    /// Current bounds. Sampled once per `add`.
    fn rect(&self) -> Rectangle;

    /// Narrow-phase test, consulted when entity collisions are enabled.
    /// With rect collisions also on, it only runs for overlapping rects.
    /// On its own it is never pruned by rect, so entity-only trees test
    /// more pairs per `add`.
    fn precise_collided(&self, _other: &Self) -> bool {
        true
    }
}

struct Slot<E> {
    node: NodeId,
    rect: Rectangle,
    handle: E,
}

pub struct QuadTree<E: Entity> {
    nodes: Vec<Node<E::Id>>,
    entity_branch: FxHashMap<E::Id, Slot<E>>,
    collisions: CollisionPairs<E::Id>,
    min_size: (i32, i32),
    worst_case: u32,
    mode: CollisionMode,
    num_levels: u32,
    counters: Counters,
    path: NodeStack,
    stack: NodeStack,
}

impl<E: Entity> QuadTree<E> {
    pub fn new(
        world: Rectangle,
        min_size: (i32, i32),
        worst_case: u32,
        collide_rects: bool,
        collide_entities: bool,
    ) -> QuadtreeResult<Self> {
        Self::new_with_config(
            world,
            Config {
                min_size,
                worst_case,
                collide_rects,
                collide_entities,
            },
        )
    }

    pub fn new_with_config(world: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_world_rect(&world)?;
        validate_min_size(config.min_size.0, config.min_size.1)?;
        let nodes = Self::build_nodes(world, config.min_size, config.worst_case);
        let num_levels = nodes.iter().map(|node| node.level).max().unwrap_or(0) + 1;
        let auxiliary = nodes[NodeId::ROOT.index()].children.len() > 4;
        tracing::debug!(
            nodes = nodes.len(),
            levels = num_levels,
            auxiliary,
            "built quadtree topology"
        );
        Ok(Self {
            nodes,
            entity_branch: FxHashMap::default(),
            collisions: CollisionPairs::new(),
            min_size: config.min_size,
            worst_case: config.worst_case,
            mode: CollisionMode::from_flags(config.collide_rects, config.collide_entities),
            num_levels,
            counters: Counters::default(),
            path: NodeStack::new(),
            stack: NodeStack::new(),
        })
    }

    pub fn world(&self) -> Rectangle {
        self.nodes[NodeId::ROOT.index()].rect
    }

    pub fn min_size(&self) -> (i32, i32) {
        self.min_size
    }

    pub fn worst_case(&self) -> u32 {
        self.worst_case
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entity_branch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_branch.is_empty()
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.entity_branch.contains_key(&id)
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.entity_branch.get(&id).map(|slot| &slot.handle)
    }

    /// Rectangle snapshot taken at the entity's last `add`.
    pub fn rect_of(&self, id: E::Id) -> Option<Rectangle> {
        self.entity_branch.get(&id).map(|slot| slot.rect)
    }

    pub fn entities(&self) -> impl Iterator<Item = &E> + '_ {
        self.entity_branch.values().map(|slot| &slot.handle)
    }

    /// Every colliding pair, once per ordering.
    pub fn collision_pairs(&self) -> impl Iterator<Item = (E::Id, E::Id)> + '_ {
        self.collisions.iter()
    }

    /// Like `collision_pairs` but resolved to the stored handles.
    pub fn collisions(&self) -> impl Iterator<Item = (&E, &E)> + '_ {
        self.collisions.iter().filter_map(move |(a, b)| {
            let a = self.entity_branch.get(&a)?;
            let b = self.entity_branch.get(&b)?;
            Some((&a.handle, &b.handle))
        })
    }

    pub fn is_colliding(&self, a: E::Id, b: E::Id) -> bool {
        self.collisions.contains(a, b)
    }

    /// Ids currently colliding with `id`.
    pub fn collisions_of(&self, id: E::Id) -> impl Iterator<Item = E::Id> + '_ {
        self.collisions.partners(id)
    }

    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }
}
