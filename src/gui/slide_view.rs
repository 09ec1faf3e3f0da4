use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::gui::theme::{Palette, with_opacity};

/// Visual side of one slide: its texture, title and the Ken Burns animation
/// that runs while it is the active slide.
pub struct SlideView {
    image: Option<Texture2D>,
    title: Option<String>,

    scale: f32, // Fit-to-screen scale of the texture
    opacity: f32,

    // Ken Burns effect parameters
    ken_burns_pan_direction: i32,
    ken_burns_progress: f32,
    ken_burns_scale: f32,

    tween_ken_burns_scale: ease::Tween,
    tween_ken_burns_pan: ease::Tween,
    tween_fade: ease::Tween,
}

impl SlideView {
    pub fn new(image: Option<Texture2D>, title: Option<String>) -> Self {
        // Scale too big images to fit the screen
        let scale = match &image {
            Some(image) if image.width() > image.height() => {
                if image.width() as f32 > RENDER_WIDTH as f32 * 0.9 {
                    (RENDER_WIDTH as f32 * 0.9) / image.width() as f32
                } else {
                    1.0
                }
            }
            Some(image) => {
                if image.height() as f32 > RENDER_HEIGHT as f32 * 0.9 {
                    (RENDER_HEIGHT as f32 * 0.9) / image.height() as f32
                } else {
                    1.0
                }
            }
            None => 1.0,
        };

        Self {
            image,
            title,
            scale,
            opacity: 0.0,
            ken_burns_pan_direction: 0,
            ken_burns_progress: 0.0,
            ken_burns_scale: 1.0,
            tween_ken_burns_scale: ease::Tween::new(ease::linear_none, 1.0, 0.9, KEN_BURNS_DURATION),
            tween_ken_burns_pan: ease::Tween::new(ease::linear_none, 0.0, 1.0, KEN_BURNS_DURATION),
            tween_fade: ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION),
        }
    }

    /// Starts the entrance animation over; called each time the slide becomes active.
    pub fn restart(&mut self) {
        // Randomly choose a panning direction: left-to-right, right-to-left, top-to-bottom, or bottom-to-top
        self.ken_burns_pan_direction = rand::rng().random_range(0..4);
        self.ken_burns_progress = 0.0;
        self.ken_burns_scale = 1.0;
        self.opacity = 0.0;

        self.tween_ken_burns_scale = ease::Tween::new(ease::linear_none, 1.0, 0.9, KEN_BURNS_DURATION);
        self.tween_ken_burns_pan = ease::Tween::new(ease::linear_none, 0.0, 1.0, KEN_BURNS_DURATION);
        self.tween_fade = ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION);
    }

    pub fn update(&mut self, dt: f32) {
        self.opacity = self.tween_fade.apply(dt);
        self.ken_burns_scale = self.tween_ken_burns_scale.apply(dt);
        self.ken_burns_progress = self.tween_ken_burns_pan.apply(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        if let Some(image) = &self.image {
            let tex_width = image.width() as f32;
            let tex_height = image.height() as f32;

            let scaled_width = tex_width * self.scale;
            let scaled_height = tex_height * self.scale;

            // Source window shrinks and slides across the texture
            let window_width = tex_width * self.ken_burns_scale;
            let window_height = tex_height * self.ken_burns_scale;
            let slack_x = tex_width - window_width;
            let slack_y = tex_height - window_height;
            let t = self.ken_burns_progress;

            let pan_origin = match self.ken_burns_pan_direction {
                0 => Vector2::new(slack_x * t, slack_y * 0.5),         // left-to-right
                1 => Vector2::new(slack_x * (1.0 - t), slack_y * 0.5), // right-to-left
                2 => Vector2::new(slack_x * 0.5, slack_y * t),         // top-to-bottom
                _ => Vector2::new(slack_x * 0.5, slack_y * (1.0 - t)), // bottom-to-top
            };

            d.draw_texture_pro(
                image,
                Rectangle::new(pan_origin.x, pan_origin.y, window_width, window_height),
                Rectangle::new(
                    (RENDER_WIDTH as f32 - scaled_width) * 0.5,
                    (RENDER_HEIGHT as f32 - scaled_height) * 0.5,
                    scaled_width,
                    scaled_height,
                ),
                Vector2::new(0.0, 0.0),
                0.0,
                with_opacity(Color::WHITE, self.opacity),
            );
        }

        if let Some(title) = &self.title {
            let font_size = 56;
            // Centered when there is no picture, bottom-left caption otherwise
            let (x, y) = if self.image.is_some() {
                (CONTROL_MARGIN * 2, RENDER_HEIGHT - CONTROL_MARGIN * 4 - font_size)
            } else {
                (
                    (RENDER_WIDTH - measure_text(title, font_size)) / 2,
                    (RENDER_HEIGHT - font_size) / 2,
                )
            };
            d.draw_text(title, x, y, font_size, with_opacity(palette.text, self.opacity));
        }
    }
}
