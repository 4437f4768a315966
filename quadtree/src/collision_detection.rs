use crate::quadtree::Entity;
use common::shapes::Rectangle;

/// Predicate used when entities are tested against each other during `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    /// Bounding rectangles overlap.
    Rects,
    /// Only the entities' own `precise_collided`.
    Entities,
    /// Rectangle overlap as a fast reject, then `precise_collided`.
    Full,
    /// No collision tests at all.
    Off,
}

impl CollisionMode {
    pub fn from_flags(collide_rects: bool, collide_entities: bool) -> Self {
        match (collide_rects, collide_entities) {
            (true, false) => CollisionMode::Rects,
            (false, true) => CollisionMode::Entities,
            (true, true) => CollisionMode::Full,
            (false, false) => CollisionMode::Off,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != CollisionMode::Off
    }

    #[inline]
    pub fn collided<E: Entity>(self, a: &E, a_rect: &Rectangle, b: &E, b_rect: &Rectangle) -> bool {
        match self {
            CollisionMode::Rects => a_rect.intersects(b_rect),
            CollisionMode::Entities => a.precise_collided(b),
            CollisionMode::Full => a_rect.intersects(b_rect) && a.precise_collided(b),
            CollisionMode::Off => false,
        }
    }
}
