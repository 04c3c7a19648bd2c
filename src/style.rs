//! Display attributes consumed by renderers.

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Plain track.
pub const TRACK_COLOR: Color = Color::new(243.0 / 255.0, 167.0 / 255.0, 18.0 / 255.0);

/// Highlighted (selected) track.
pub const TRACK_HIGHLIGHT_COLOR: Color = Color::new(219.0 / 255.0, 43.0 / 255.0, 57.0 / 255.0);

/// Switch body and its inactive branch.
pub const SWITCH_COLOR: Color = Color::new(50.0 / 255.0, 200.0 / 255.0, 50.0 / 255.0);

/// Live branch of a switch.
pub const SWITCH_ACTIVE_COLOR: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 50.0 / 255.0);

/// Stroke width for track, in screen pixels.
pub const LINE_THICKNESS: f32 = 4.0;
