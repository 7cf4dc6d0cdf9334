use crate::canvas::{Canvas, Font, ItemId, Text};
use crate::color::Rgb;
use crate::constants::*;
use crate::error::SurfaceError;
use crate::quotes::state::FadeState;
use crate::quotes::store::Quote;

const WRAP_RATIO: f32 = 0.8;        // Quote wraps at 80% of the canvas width
const AUTHOR_GAP: f32 = 40.0;       // Space between quote block and author line
const AUTHOR_FALLBACK_Y: f32 = 60.0;

pub fn quote_font_size(canvas_width: f32) -> f32 {
    (canvas_width / 30.0).floor().clamp(20.0, 36.0)
}

pub fn author_font_size(canvas_width: f32) -> f32 {
    (canvas_width / 40.0).floor().clamp(16.0, 28.0)
}

pub fn text_fill(alpha: f32) -> Rgb {
    Rgb::gray(alpha)
}

/// The shadow is a much fainter copy of the quote.
pub fn shadow_fill(alpha: f32) -> Rgb {
    Rgb::gray(alpha * SHADOW_ALPHA)
}

/// Canvas items making up one displayed quote: parallax shadow, quote, author.
#[derive(Debug, Default)]
pub struct QuoteText {
    shadow: Option<ItemId>,
    quote: Option<ItemId>,
    author: Option<ItemId>,
}

impl QuoteText {
    pub fn is_drawn(&self) -> bool {
        self.quote.is_some()
    }

    pub fn shadow_id(&self) -> Option<ItemId> {
        self.shadow
    }

    pub fn quote_id(&self) -> Option<ItemId> {
        self.quote
    }

    pub fn author_id(&self) -> Option<ItemId> {
        self.author
    }

    /// Creates the items on first use and updates them in place afterwards,
    /// re-reading the canvas size so layout follows resizes.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, quote: &Quote, state: &FadeState) -> Result<(), SurfaceError> {
        let (width, height) = canvas.size()?;
        let drift = state.drift();
        let center_x = width * 0.5;
        let center_y = height * 0.5;
        let quote_size = quote_font_size(width);

        // Drawn first so it sits behind the quote.
        let shadow = Text {
            content: quote.text.clone(),
            x: center_x + drift.start_x + drift.shadow_offset,
            y: center_y + drift.start_y,
            fill: shadow_fill(state.alpha()),
            font: Font::new(quote_size * SHADOW_SCALE).bold(),
            wrap_width: Some(width * WRAP_RATIO),
        };
        put(canvas, &mut self.shadow, shadow)?;

        let fill = text_fill(state.alpha());
        let main = Text {
            content: quote.text.clone(),
            x: center_x + drift.offset,
            y: center_y,
            fill,
            font: Font::new(quote_size).bold(),
            wrap_width: Some(width * WRAP_RATIO),
        };
        let quote_id = put(canvas, &mut self.quote, main)?;

        let author_y = canvas
            .bounds(quote_id)
            .map(|bounds| bounds.bottom() + AUTHOR_GAP)
            .unwrap_or(center_y + AUTHOR_FALLBACK_Y);
        let author = Text {
            content: quote.attribution(),
            x: center_x + drift.offset,
            y: author_y,
            fill,
            font: Font::new(author_font_size(width)).italic(),
            wrap_width: None,
        };
        put(canvas, &mut self.author, author)?;
        Ok(())
    }

    pub fn discard(&mut self, canvas: &mut dyn Canvas) {
        for id in [self.shadow.take(), self.quote.take(), self.author.take()].into_iter().flatten() {
            canvas.remove(id);
        }
    }
}

fn put(canvas: &mut dyn Canvas, slot: &mut Option<ItemId>, text: Text) -> Result<ItemId, SurfaceError> {
    if let Some(id) = *slot {
        match canvas.update_text(id, text.clone()) {
            Ok(()) => return Ok(id),
            // Somebody cleared the canvas under us; draw it again.
            Err(SurfaceError::UnknownItem(_)) => {}
            Err(e) => return Err(e),
        }
    }
    let id = canvas.create_text(text)?;
    *slot = Some(id);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn font_sizes_follow_canvas_width() {
        assert_eq!(quote_font_size(300.0), 20.0);
        assert_eq!(quote_font_size(900.0), 30.0);
        assert_eq!(quote_font_size(3840.0), 36.0);
        assert_eq!(author_font_size(300.0), 16.0);
        assert_eq!(author_font_size(1000.0), 25.0);
        assert_eq!(author_font_size(3840.0), 28.0);
    }

    #[test]
    fn shadow_is_fainter_than_text() {
        for i in 0..=100 {
            let alpha = i as f32 / 100.0;
            let expected = (255.0 * (alpha * 0.15)).round() as u8;
            assert_eq!(shadow_fill(alpha).r, expected);
            assert_eq!(text_fill(alpha).r, (255.0 * alpha).round() as u8);
        }
    }

    #[test]
    fn draws_three_items_then_updates_in_place() {
        let mut scene = Scene::new(1200.0, 800.0);
        let mut state = FadeState::new();
        state.fade_in(&mut StdRng::seed_from_u64(9));
        let quote = Quote::new("Keep going.", "Anon");
        let mut text = QuoteText::default();

        text.draw(&mut scene, &quote, &state).unwrap();
        assert_eq!(scene.len(), 3);
        let first = text.quote_id();

        state.advance(1200.0);
        text.draw(&mut scene, &quote, &state).unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(text.quote_id(), first);

        let quote_item = scene.text(first.unwrap()).unwrap();
        assert_eq!(quote_item.font.size, 36.0);
        assert_eq!(quote_item.wrap_width, Some(960.0));

        let author = scene.text(text.author_id().unwrap()).unwrap();
        let quote_bottom = scene.bounds(first.unwrap()).unwrap().bottom();
        assert!((author.y - (quote_bottom + 40.0)).abs() < 1e-3);
        assert_eq!(author.content, "— Anon");

        let shadow = scene.text(text.shadow_id().unwrap()).unwrap();
        assert!((shadow.font.size - 36.0 * 1.8).abs() < 1e-3);

        text.discard(&mut scene);
        assert!(scene.is_empty());
        assert!(!text.is_drawn());
    }

    #[test]
    fn not_ready_surface_draws_nothing() {
        let mut scene = Scene::default();
        let mut text = QuoteText::default();
        let result = text.draw(&mut scene, &Quote::new("a", "b"), &FadeState::new());
        assert!(matches!(result, Err(SurfaceError::NotReady { .. })));
        assert!(!text.is_drawn());
    }
}
