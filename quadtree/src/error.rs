use common::shapes::Rectangle;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    #[error("world rectangle must have positive extents and edges inside i32 ({rect:?})")]
    InvalidWorldRect { rect: Rectangle },
    #[error("minimum node size must be positive (width: {width}, height: {height})")]
    InvalidMinSize { width: i32, height: i32 },
    #[error("entity rectangle must have positive extents and edges inside i32 ({rect:?})")]
    InvalidEntityRect { rect: Rectangle },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

pub(crate) fn validate_world_rect(rect: &Rectangle) -> QuadtreeResult<()> {
    if !rect.is_valid() || !rect.edges_fit() {
        return Err(QuadtreeError::InvalidWorldRect { rect: *rect });
    }
    Ok(())
}

pub(crate) fn validate_min_size(width: i32, height: i32) -> QuadtreeResult<()> {
    if width <= 0 || height <= 0 {
        return Err(QuadtreeError::InvalidMinSize { width, height });
    }
    Ok(())
}

pub(crate) fn validate_entity_rect(rect: &Rectangle) -> QuadtreeResult<()> {
    if !rect.is_valid() || !rect.edges_fit() {
        return Err(QuadtreeError::InvalidEntityRect { rect: *rect });
    }
    Ok(())
}
