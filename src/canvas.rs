use crate::color::Rgb;
use crate::error::SurfaceError;

/// Handle to an element drawn on a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slant {
    #[default]
    Roman,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub weight: Weight,
    pub slant: Slant,
}

impl Font {
    pub fn new(size: f32) -> Self {
        Self { size, weight: Weight::Regular, slant: Slant::Roman }
    }

    pub fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = Slant::Italic;
        self
    }
}

/// A centered text element. `x`/`y` locate the center of the text block.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub fill: Rgb,
    pub font: Font,
    pub wrap_width: Option<f32>,
}

/// Drawing surface the screensavers render onto.
///
/// Every call is best-effort: a surface that is not laid out yet answers
/// [`SurfaceError::NotReady`] and the caller skips the frame.
pub trait Canvas {
    /// Current `(width, height)`, queried every frame so resizes are picked up.
    fn size(&self) -> Result<(f32, f32), SurfaceError>;

    fn create_rect(&mut self, rect: Rect, fill: Rgb) -> Result<ItemId, SurfaceError>;
    fn update_rect(&mut self, id: ItemId, rect: Rect, fill: Rgb) -> Result<(), SurfaceError>;

    fn create_text(&mut self, text: Text) -> Result<ItemId, SurfaceError>;
    fn update_text(&mut self, id: ItemId, text: Text) -> Result<(), SurfaceError>;

    /// Bounding box of a drawn text element, if it exists.
    fn bounds(&self, id: ItemId) -> Option<Rect>;

    fn remove(&mut self, id: ItemId);
    fn clear(&mut self);
}
