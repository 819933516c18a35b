//! Render commands emitted by the field.
//!
//! One frame is a `Clear` followed by circles and lines. Backends consume
//! the stream in order; nothing is cached between frames.

use plexus_shared::{Color, Vec2};

/// A single drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear the entire surface.
    Clear,
    /// Filled circle.
    Circle {
        /// Center position.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Stroked line segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f32,
    },
}
