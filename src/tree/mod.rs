//! Element tree: slotmap-backed arena, capability flags, element data.

pub mod arena;
pub mod element;

pub use arena::Tree;
pub use element::{Caps, ContainerKind, ElementData, ElementId, RangeState};
