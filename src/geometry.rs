//! Geometry shared with the host scene

/// A position in the host's parent coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in item-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// What the host scene needs from an item it composes into its render pass.
///
/// The host positions and stacks items and asks them to paint; it never
/// looks at how an item stores its pixels.
pub trait SceneItem {
    fn set_pos(&mut self, pos: Point);
    fn set_z_value(&mut self, z: f64);
    fn set_visibility(&mut self, visible: bool);
    fn bounding_rect(&self) -> Rect;
    fn paint(&self, surface: &mut image::RgbaImage);
}
