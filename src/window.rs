use std::time::Instant;

use anyhow::Result;
use raylib::prelude::*;

use crate::canvas::{Font, Rect, Text};
use crate::color::Rgb;
use crate::constants::*;
use crate::host::{EXIT_HINT, Host};
use crate::registry::AppContext;
use crate::scene::{Scene, Shape, layout};
use crate::state::HostState;

const HEADER_HEIGHT: i32 = 40;
const MARGIN: i32 = 10;
const LABEL_SIZE: i32 = 20;

pub struct WindowOptions {
    pub selected: usize,
    pub fullscreen: bool,
}

/// Opens the selector window and runs until it is closed.
pub fn run(context: AppContext, options: WindowOptions) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Screensaver Selector")
        .resizable()
        .build();
    rl.set_target_fps(TARGET_FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);

    let preview_area = preview_area(rl.get_screen_width(), rl.get_screen_height());
    let preview = Scene::new(preview_area.width, preview_area.height);
    let mut host = Host::new(context, preview)?;
    host.select(options.selected);

    if options.fullscreen {
        rl.toggle_fullscreen();
        host.enter_fullscreen(Scene::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32));
    }

    let started = Instant::now();

    // --- Main Loop ---
    while !rl.window_should_close() {
        // --- Input ---
        match host.state() {
            HostState::Fullscreen => {
                let leave = rl.is_key_pressed(KeyboardKey::KEY_ESCAPE)
                    || rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
                if leave {
                    host.exit_fullscreen();
                    if rl.is_window_fullscreen() {
                        rl.toggle_fullscreen();
                    }
                }
            }
            HostState::Previewing => {
                if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                    break;
                }
                if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                    host.select_next();
                }
                if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                    host.select_previous();
                }
                if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                    rl.toggle_fullscreen();
                    host.enter_fullscreen(Scene::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32));
                }
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_N) {
            host.skip();
        }

        // --- Update ---
        let screen_width = rl.get_screen_width();
        let screen_height = rl.get_screen_height();
        let area = preview_area(screen_width, screen_height);
        if let Some(session) = host.preview_mut() {
            session.canvas_mut().resize(area.width, area.height);
        }
        if let Some(session) = host.fullscreen_mut() {
            session.canvas_mut().resize(screen_width as f32, screen_height as f32);
        }
        host.advance(started.elapsed());

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        if let Some(session) = host.fullscreen() {
            paint(&mut d, session.canvas(), 0, 0);
            if host.hint_visible() {
                draw_hint(&mut d, screen_width, screen_height);
            }
            continue;
        }

        d.draw_text(
            &format!("Select Screensaver:  < {} >    [Enter] Start Fullscreen", host.selected_name()),
            MARGIN,
            MARGIN,
            LABEL_SIZE,
            Color::WHITE,
        );
        d.draw_rectangle_lines(
            area.x as i32 - 1,
            area.y as i32 - 1,
            area.width as i32 + 2,
            area.height as i32 + 2,
            Color::GRAY,
        );
        if let Some(session) = host.preview() {
            let mut clip = d.begin_scissor_mode(area.x as i32, area.y as i32, area.width as i32, area.height as i32);
            paint(&mut clip, session.canvas(), area.x as i32, area.y as i32);
        }
    }

    host.exit_fullscreen();
    if let Some(session) = host.preview_mut() {
        session.cleanup();
    }
    Ok(())
}

fn preview_area(screen_width: i32, screen_height: i32) -> Rect {
    Rect::new(
        MARGIN as f32,
        (HEADER_HEIGHT + MARGIN) as f32,
        (screen_width - 2 * MARGIN).max(0) as f32,
        (screen_height - HEADER_HEIGHT - 2 * MARGIN).max(0) as f32,
    )
}

fn color(rgb: Rgb) -> Color {
    Color::new(rgb.r, rgb.g, rgb.b, 255)
}

/// Draws a scene's display list with its origin at `(ox, oy)`.
fn paint<D: RaylibDraw>(d: &mut D, scene: &Scene, ox: i32, oy: i32) {
    for shape in scene.items() {
        match shape {
            Shape::Rect { rect, fill } => {
                d.draw_rectangle(
                    ox + rect.x as i32,
                    oy + rect.y as i32,
                    rect.width as i32,
                    rect.height as i32,
                    color(*fill),
                );
            }
            Shape::Text(text) => draw_text(d, text, ox, oy),
        }
    }
}

// The default raylib font has no bold or italic faces; style is ignored.
fn draw_text<D: RaylibDraw>(d: &mut D, text: &Text, ox: i32, oy: i32) {
    let size = text.font.size as i32;
    for line in layout(text).lines {
        d.draw_text(&line.content, ox + line.x as i32, oy + line.y as i32, size, color(text.fill));
    }
}

fn draw_hint<D: RaylibDraw>(d: &mut D, screen_width: i32, screen_height: i32) {
    let hint = Text {
        content: EXIT_HINT.to_string(),
        x: screen_width as f32 * 0.5,
        y: screen_height as f32 * 0.95,
        fill: Rgb::WHITE,
        font: Font::new(LABEL_SIZE as f32),
        wrap_width: None,
    };
    draw_text(d, &hint, 0, 0);
}
