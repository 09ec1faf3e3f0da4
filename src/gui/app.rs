use std::time::Duration;

use anyhow::{Result, anyhow};
use raylib::prelude::*;
use tracing::warn;

use crate::constants::*;
use crate::deck::Deck;
use crate::gui::presenter::GuiPresenter;
use crate::gui::slide_view::SlideView;
use crate::gui::texture_loader::load_texture_with_exif_rotation;
use crate::gui::theme::{Palette, palette_for, with_opacity};
use crate::input::{Command, Control, Key};
use crate::navigator::{NavigatorConfig, SlideNavigator};
use crate::presenter::Frame;

const MAX_DOTS: usize = 40; // Indicator dots are skipped for longer decks

const KEYS: [(KeyboardKey, Key); 5] = [
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_ENTER, Key::Enter),
    (KeyboardKey::KEY_HOME, Key::Home),
];

/// Clickable areas for the given frame, in render texture coordinates.
/// Disabled or hidden controls are left out.
pub fn control_layout(frame: &Frame) -> Vec<(Control, Rectangle)> {
    let size = CONTROL_SIZE as f32;
    let margin = CONTROL_MARGIN as f32;
    let middle = (RENDER_HEIGHT as f32 - size) * 0.5;
    let right = RENDER_WIDTH as f32 - margin - size;

    let mut controls = Vec::new();
    if !frame.prev_disabled {
        controls.push((Control::Prev, Rectangle::new(margin, middle, size, size)));
    }
    if frame.next_visible {
        controls.push((Control::Next, Rectangle::new(right, middle, size, size)));
    } else if frame.slide_count > 1 {
        // Replay takes the place of "next" on the last slide
        controls.push((Control::Replay, Rectangle::new(right, middle, size, size)));
    }

    if frame.slide_count <= MAX_DOTS {
        let row_width = DOT_SPACING * (frame.slide_count as f32 - 1.0);
        let first_x = (RENDER_WIDTH as f32 - row_width) * 0.5;
        let y = RENDER_HEIGHT as f32 - margin;
        for i in 0..frame.slide_count {
            let x = first_x + DOT_SPACING * i as f32;
            controls.push((
                Control::Dot(i),
                Rectangle::new(x - DOT_RADIUS, y - DOT_RADIUS, DOT_RADIUS * 2.0, DOT_RADIUS * 2.0),
            ));
        }
    }
    controls
}

pub fn hit_test(frame: &Frame, point: Vector2) -> Option<Control> {
    control_layout(frame)
        .into_iter()
        .find(|(_, r)| point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height)
        .map(|(control, _)| control)
}

fn poll_commands(rl: &RaylibHandle, frame: Option<&Frame>) -> Vec<Command> {
    let mut commands: Vec<Command> = KEYS
        .iter()
        .filter(|(code, _)| rl.is_key_pressed(*code))
        .filter_map(|(_, key)| Command::from_key(*key))
        .collect();

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if let Some(frame) = frame {
            // Screen -> render texture coordinates
            let mouse = rl.get_mouse_position();
            let point = Vector2::new(
                mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width() as f32,
                mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height() as f32,
            );
            if let Some(control) = hit_test(frame, point) {
                commands.push(Command::from_control(control));
            }
        }
    }
    commands
}

fn draw_chrome(d: &mut RaylibDrawHandle, frame: &Frame, palette: &Palette) {
    // Progress bar
    let filled = (RENDER_WIDTH as f32 * frame.progress / 100.0).round() as i32;
    d.draw_rectangle(0, 0, RENDER_WIDTH, PROGRESS_BAR_HEIGHT, with_opacity(palette.text, 0.15));
    d.draw_rectangle(0, 0, filled, PROGRESS_BAR_HEIGHT, palette.accent);

    for (control, rect) in control_layout(frame) {
        let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
        let half = rect.width * 0.25;
        match control {
            Control::Prev => {
                d.draw_rectangle_rec(rect, with_opacity(palette.accent, 0.25));
                d.draw_triangle(
                    Vector2::new(center.x - half, center.y),
                    Vector2::new(center.x + half, center.y + half),
                    Vector2::new(center.x + half, center.y - half),
                    palette.text,
                );
            }
            Control::Next => {
                d.draw_rectangle_rec(rect, with_opacity(palette.accent, 0.25));
                d.draw_triangle(
                    Vector2::new(center.x + half, center.y),
                    Vector2::new(center.x - half, center.y - half),
                    Vector2::new(center.x - half, center.y + half),
                    palette.text,
                );
            }
            Control::Replay => {
                d.draw_rectangle_rec(rect, with_opacity(palette.accent, 0.25));
                d.draw_circle_lines(center.x as i32, center.y as i32, half, palette.text);
                d.draw_triangle(
                    Vector2::new(center.x + half * 0.6, center.y),
                    Vector2::new(center.x - half * 0.4, center.y - half * 0.6),
                    Vector2::new(center.x - half * 0.4, center.y + half * 0.6),
                    palette.text,
                );
            }
            Control::Dot(i) => {
                let color = if i == frame.index {
                    palette.accent
                } else {
                    with_opacity(palette.text, 0.35)
                };
                d.draw_circle_v(center, DOT_RADIUS, color);
            }
        }
    }
}

pub fn run(deck: Deck, config: NavigatorConfig) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Narrative")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut views = Vec::with_capacity(deck.slides().len());
    for slide in deck.slides() {
        let texture = match slide.image() {
            Some(path) => match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    // The slide stays in the deck, shown with its theme only
                    warn!(?path, error = %e, "could not load slide image");
                    None
                }
            },
            None => None,
        };
        views.push(SlideView::new(texture, slide.title().map(str::to_string)));
    }

    let mut navigator = SlideNavigator::new(deck.into_slides(), config, GuiPresenter::default())?;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for command in poll_commands(&rl, navigator.presenter().frame()) {
            navigator.apply(command);
        }
        navigator.update(Duration::from_secs_f32(dt.max(0.0)));

        if navigator.presenter_mut().take_change() {
            views[navigator.current_index()].restart();
        }
        views[navigator.current_index()].update(dt);

        // --- Render into the fixed size framebuffer ---
        let frame = navigator.frame();
        let palette = palette_for(&frame.theme);
        let view = &views[navigator.current_index()];

        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(palette.background);
            view.draw(&mut d, &palette);
            draw_chrome(&mut d, frame, &palette);
        });

        // Scale the framebuffer to the window (render textures are upside down)
        let mut d2 = rl.begin_drawing(&thread);
        let sw = d2.get_screen_width() as f32;
        let sh = d2.get_screen_height() as f32;

        d2.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NavigatorState;

    fn frame_at(count: usize, index: usize) -> Frame {
        let mut nav = SlideNavigator::new(
            (0..count).map(|_| crate::slide::Slide::new("t")).collect(),
            NavigatorConfig::immediate(),
            (),
        )
        .unwrap();
        nav.go_to(index);
        nav.frame().clone()
    }

    fn center_of(frame: &Frame, wanted: Control) -> Vector2 {
        let (_, r) = control_layout(frame)
            .into_iter()
            .find(|(c, _)| *c == wanted)
            .expect("control laid out");
        Vector2::new(r.x + r.width * 0.5, r.y + r.height * 0.5)
    }

    #[test]
    fn first_slide_has_no_prev_control() {
        let frame = Frame::from_state(&NavigatorState::new(3), "t");
        let controls: Vec<Control> = control_layout(&frame).into_iter().map(|(c, _)| c).collect();
        assert!(!controls.contains(&Control::Prev));
        assert!(controls.contains(&Control::Next));
    }

    #[test]
    fn last_slide_swaps_next_for_replay() {
        let frame = frame_at(3, 2);
        let controls: Vec<Control> = control_layout(&frame).into_iter().map(|(c, _)| c).collect();
        assert!(controls.contains(&Control::Prev));
        assert!(!controls.contains(&Control::Next));
        assert!(controls.contains(&Control::Replay));
    }

    #[test]
    fn clicks_hit_controls() {
        let frame = frame_at(3, 1);
        assert_eq!(hit_test(&frame, center_of(&frame, Control::Prev)), Some(Control::Prev));
        assert_eq!(hit_test(&frame, center_of(&frame, Control::Dot(2))), Some(Control::Dot(2)));
        assert_eq!(hit_test(&frame, Vector2::new(RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 * 0.5)), None);
    }
}
