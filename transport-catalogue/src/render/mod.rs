//! Route map rendering.

mod map;
mod projector;
mod settings;

pub use map::MapRenderer;
pub use projector::{Point, SphereProjector};
pub use settings::{Color, RenderSettings};
