use std::collections::HashMap;

use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::config::{Rgba, Theme};
use crate::constants::*;
use crate::engine::Engine;
use crate::layout::{Item, ItemKind, Scene, layout};
use crate::render::Frame;
use crate::slide::{AssetRef, ThemeColor, Transition};
use crate::state::PresenterState;

const CODE_BACKGROUND: Color = Color { r: 0x2B, g: 0x2B, b: 0x2B, a: 0xFF };
const CODE_FOREGROUND: Color = Color { r: 0xF8, g: 0xF8, b: 0xF2, a: 0xFF };

/// Draws scenes with raylib and animates slide changes.
pub struct Presenter {
    theme: Theme,
    textures: HashMap<AssetRef, Texture2D>,
    transition_duration: f32,

    scene: Option<Scene>,
    previous_background: Option<ThemeColor>,

    state: PresenterState,
    tween: Option<ease::Tween>,
    animation_timer: f32,
    progress: f32,
}

impl Presenter {
    pub fn new(theme: Theme, textures: HashMap<AssetRef, Texture2D>, transition_duration: f32) -> Self {
        Self {
            theme,
            textures,
            transition_duration,
            scene: None,
            previous_background: None,
            state: PresenterState::Showing,
            tween: None,
            animation_timer: 0.0,
            progress: 1.0,
        }
    }

    fn color(&self, color: ThemeColor) -> Color {
        to_color(self.theme.color(color))
    }

    fn start_transition(&mut self) {
        self.tween = Some(ease::Tween::new(ease::cubic_out, 0.0, 1.0, self.transition_duration));
        self.animation_timer = 0.0;
        self.progress = 0.0;
        self.state = PresenterState::Transitioning;
    }

    pub fn update(&mut self, dt: f32) {
        if self.state != PresenterState::Transitioning {
            return;
        }
        if let Some(tween) = self.tween.as_mut() {
            self.progress = tween.apply(dt);
        }
        self.animation_timer += dt;
        if self.animation_timer >= self.transition_duration {
            self.state = PresenterState::Showing;
            self.tween = None;
            self.progress = 1.0;
        }
    }

    pub fn link_at(&self, x: f32, y: f32) -> Option<&str> {
        self.scene.as_ref().and_then(|scene| scene.link_at(x, y))
    }

    /// Draw the current scene onto the fixed-size canvas.
    pub fn draw_scene(&self, d: &mut RaylibDrawHandle) {
        let Some(scene) = &self.scene else {
            d.clear_background(Color::BLACK);
            return;
        };
        d.clear_background(self.color(scene.background));
        for item in scene.items.iter().filter(|item| item.visible) {
            self.draw_item(d, item);
        }
    }

    fn draw_item(&self, d: &mut RaylibDrawHandle, item: &Item) {
        let b = item.bounds;
        match &item.kind {
            ItemKind::Text { text, size, color, link } => {
                let color = self.color(*color);
                d.draw_text(text, b.x as i32, b.y as i32, *size, color);
                if link.is_some() {
                    let underline_y = b.y + b.h + 4.0;
                    d.draw_line_ex(Vector2::new(b.x, underline_y), Vector2::new(b.x + b.w, underline_y), 4.0, color);
                }
            }
            ItemKind::Bullet { color } => {
                let radius = b.w * 0.5;
                d.draw_circle_v(Vector2::new(b.x + radius, b.y + radius), radius, self.color(*color));
            }
            ItemKind::Code { lines, size } => {
                d.draw_rectangle_rec(Rectangle::new(b.x, b.y, b.w, b.h), CODE_BACKGROUND);
                let line_height = *size as f32 * LINE_SPACING;
                for (i, line) in lines.iter().enumerate() {
                    let y = b.y + CODE_PADDING + i as f32 * line_height;
                    d.draw_text(line, (b.x + CODE_PADDING) as i32, y as i32, *size, CODE_FOREGROUND);
                }
            }
            ItemKind::Image { asset } => {
                if let Some(texture) = self.textures.get(asset) {
                    d.draw_texture_pro(
                        texture,
                        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                        Rectangle::new(b.x, b.y, b.w, b.h),
                        Vector2::new(0.0, 0.0),
                        0.0,
                        Color::WHITE,
                    );
                }
            }
        }
    }

    /// Scale the canvas to the window, applying the running transition.
    pub fn blit(&self, d: &mut RaylibDrawHandle, framebuffer: &RenderTexture2D) {
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        let t = self.progress;
        let transition = self.scene.as_ref().map(|s| s.transition.as_slice()).unwrap_or(&[]);

        let (mut scale, mut alpha, mut offset_x) = (1.0, 1.0, 0.0);
        if self.state == PresenterState::Transitioning {
            for effect in transition {
                match effect {
                    Transition::Zoom => scale = 0.1 + 0.9 * t,
                    Transition::Fade => alpha = t,
                    Transition::Slide => offset_x = (1.0 - t) * sw,
                    Transition::Appear => {}
                }
            }
        }

        let behind = self.previous_background.or(self.scene.as_ref().map(|s| s.background));
        d.clear_background(behind.map_or(Color::BLACK, |c| self.color(c)));

        let w = sw * scale;
        let h = sh * scale;
        d.draw_texture_pro(
            framebuffer,
            // Render textures are stored upside down
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new((sw - w) * 0.5 + offset_x, (sh - h) * 0.5, w, h),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (alpha * 255.0) as u8),
        );
    }
}

impl Engine for Presenter {
    fn present(&mut self, frame: &Frame<'_>) {
        let textures = &self.textures;
        let scene = layout(
            frame,
            |text, size| measure_text(text, size) as f32,
            |asset| textures.get(asset).map(|t| (t.width() as f32, t.height() as f32)),
        );

        let previous = self.scene.as_ref().map(|s| (s.slide_index, s.background));
        let slide_changed = previous.is_some_and(|(index, _)| index != scene.slide_index);
        let animated = scene.transition.iter().any(|t| *t != Transition::Appear);

        self.scene = Some(scene);

        if slide_changed {
            self.previous_background = previous.map(|(_, background)| background);
            if animated && self.transition_duration > 0.0 {
                self.start_transition();
            }
        }
    }
}

pub fn to_color(rgba: Rgba) -> Color {
    Color::new(rgba.r, rgba.g, rgba.b, rgba.a)
}
