use crate::canvas::{Canvas, ItemId, Rect, Text, Weight};
use crate::color::Rgb;
use crate::error::SurfaceError;

const GLYPH_WIDTH: f32 = 0.55;      // Average glyph advance, relative to font size
const GLYPH_WIDTH_BOLD: f32 = 0.6;
const LINE_SPACING: f32 = 1.2;
const MIN_EXTENT: f32 = 2.0;        // Smaller surfaces are still being laid out

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, fill: Rgb },
    Text(Text),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub content: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<Line>,
    pub bounds: Rect,
}

/// In-memory display list implementing [`Canvas`].
///
/// Items keep their creation order, which is also their paint order. The
/// window front-end repaints a scene every frame; tests inspect it directly.
#[derive(Debug, Default)]
pub struct Scene {
    width: f32,
    height: f32,
    next_id: u32,
    items: Vec<(ItemId, Shape)>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn items(&self) -> impl Iterator<Item = &Shape> {
        self.items.iter().map(|(_, shape)| shape)
    }

    pub fn get(&self, id: ItemId) -> Option<&Shape> {
        self.items.iter().find(|(item, _)| *item == id).map(|(_, shape)| shape)
    }

    pub fn text(&self, id: ItemId) -> Option<&Text> {
        match self.get(id) {
            Some(Shape::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, shape: Shape) -> ItemId {
        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.push((id, shape));
        id
    }

    fn slot(&mut self, id: ItemId) -> Result<&mut Shape, SurfaceError> {
        self.items
            .iter_mut()
            .find(|(item, _)| *item == id)
            .map(|(_, shape)| shape)
            .ok_or(SurfaceError::UnknownItem(id))
    }
}

impl Canvas for Scene {
    fn size(&self) -> Result<(f32, f32), SurfaceError> {
        if self.width < MIN_EXTENT || self.height < MIN_EXTENT {
            return Err(SurfaceError::NotReady { width: self.width, height: self.height });
        }
        Ok((self.width, self.height))
    }

    fn create_rect(&mut self, rect: Rect, fill: Rgb) -> Result<ItemId, SurfaceError> {
        self.size()?;
        Ok(self.push(Shape::Rect { rect, fill }))
    }

    fn update_rect(&mut self, id: ItemId, rect: Rect, fill: Rgb) -> Result<(), SurfaceError> {
        *self.slot(id)? = Shape::Rect { rect, fill };
        Ok(())
    }

    fn create_text(&mut self, text: Text) -> Result<ItemId, SurfaceError> {
        self.size()?;
        Ok(self.push(Shape::Text(text)))
    }

    fn update_text(&mut self, id: ItemId, text: Text) -> Result<(), SurfaceError> {
        *self.slot(id)? = Shape::Text(text);
        Ok(())
    }

    fn bounds(&self, id: ItemId) -> Option<Rect> {
        self.text(id).map(|text| layout(text).bounds)
    }

    fn remove(&mut self, id: ItemId) {
        self.items.retain(|(item, _)| *item != id);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Lays a centered text block out into lines using approximate metrics.
pub fn layout(text: &Text) -> TextLayout {
    let glyph = text.font.size
        * match text.font.weight {
            Weight::Bold => GLYPH_WIDTH_BOLD,
            Weight::Regular => GLYPH_WIDTH,
        };
    let line_height = text.font.size * LINE_SPACING;
    let max_chars = text
        .wrap_width
        .map(|w| ((w / glyph).floor() as usize).max(1));

    let rows = wrap(&text.content, max_chars);
    let block_width = rows
        .iter()
        .map(|row| row.chars().count() as f32 * glyph)
        .fold(0.0, f32::max);
    let block_height = rows.len() as f32 * line_height;
    let top = text.y - block_height * 0.5;

    let lines = rows
        .into_iter()
        .enumerate()
        .map(|(i, content)| {
            let width = content.chars().count() as f32 * glyph;
            Line { x: text.x - width * 0.5, y: top + i as f32 * line_height, content }
        })
        .collect();

    TextLayout {
        lines,
        bounds: Rect::new(text.x - block_width * 0.5, top, block_width, block_height),
    }
}

fn wrap(content: &str, max_chars: Option<usize>) -> Vec<String> {
    let mut rows = Vec::new();
    for paragraph in content.split('\n') {
        let Some(limit) = max_chars else {
            rows.push(paragraph.to_string());
            continue;
        };
        let mut row = String::new();
        for word in paragraph.split_whitespace() {
            let fits = row.is_empty() || row.chars().count() + 1 + word.chars().count() <= limit;
            if !fits {
                rows.push(std::mem::take(&mut row));
            }
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(word);
        }
        rows.push(row);
    }
    rows
}
