//! Keyed Entity
//!
//! Anything the UI renders as a keyed row exposes a stable id.

/// Entity with a stable unique identifier
pub trait Entity {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
}
