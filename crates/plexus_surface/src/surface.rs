//! The surface trait and the recording implementation.

use plexus_shared::{Color, Vec2};

use crate::command::RenderCommand;

/// A 2D drawing surface sized to the viewport.
///
/// This is the full contract the particle field needs: clear, filled
/// circles, stroked lines, and its own dimensions.
pub trait Surface: Send {
    /// Current surface size as `(width, height)` in pixels.
    fn size(&self) -> (f32, f32);

    /// Resizes the surface to match a new viewport.
    fn resize(&mut self, width: f32, height: f32);

    /// Clears the whole surface.
    fn clear(&mut self);

    /// Draws a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draws a stroked line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
}

/// Statistics for the recording surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    /// Frames recorded (one per `clear`).
    pub frames: u64,
    /// Circles drawn in the last frame.
    pub circles_last_frame: u32,
    /// Lines drawn in the last frame.
    pub lines_last_frame: u32,
}

/// Surface that records the command stream instead of rasterizing it.
///
/// The primary test double, and the batching layer in front of real
/// backends: the current frame's commands are kept until the next `clear`.
#[derive(Debug, Default)]
pub struct CommandSurface {
    width: f32,
    height: f32,
    commands: Vec<RenderCommand>,
    stats: SurfaceStats,
}

impl CommandSurface {
    /// Creates a recording surface of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(4096),
            stats: SurfaceStats::default(),
        }
    }

    /// The commands recorded since the last `clear` (including it).
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Recording statistics.
    #[must_use]
    pub fn stats(&self) -> SurfaceStats {
        self.stats
    }
}

impl Surface for CommandSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(RenderCommand::Clear);
        self.stats.frames += 1;
        self.stats.circles_last_frame = 0;
        self.stats.lines_last_frame = 0;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(RenderCommand::Circle {
            center,
            radius,
            color,
        });
        self.stats.circles_last_frame += 1;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(RenderCommand::Line {
            from,
            to,
            color,
            width,
        });
        self.stats.lines_last_frame += 1;
    }
}
