//! Rendering layer.
//!
//! The game draws through the `Surface` trait in world coordinates
//! (800×600, y down). Each function receives a mutable surface and an
//! immutable view of the game; no game logic is performed here.

pub mod terminal;

use std::io;

use crate::assets::{Images, Sprite};
use crate::config::{
    Rgb, C_BUTTON, C_BUTTON_HOVER, C_ENEMY, C_GAME_OVER, C_HINT, C_MENU_BG, C_PLATFORM, C_PLAYER,
    C_SKY, C_WHITE, WIDTH,
};
use crate::animation::Animation;
use crate::entities::{Body, Button, Mode, Rect};
use crate::game::Game;

pub use terminal::TerminalSurface;

/// Where a string of text is placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextAnchor {
    TopLeft(f32, f32),
    Center(f32, f32),
}

/// Drawing primitives the game needs from its host.
pub trait Surface {
    fn clear(&mut self) -> io::Result<()>;
    fn fill(&mut self, color: Rgb) -> io::Result<()>;
    fn filled_rect(&mut self, rect: &Rect, color: Rgb) -> io::Result<()>;
    fn rect(&mut self, rect: &Rect, color: Rgb) -> io::Result<()>;
    fn text(&mut self, text: &str, at: TextAnchor, size: f32, color: Rgb) -> io::Result<()>;
    fn blit(&mut self, sprite: &Sprite, x: f32, y: f32) -> io::Result<()>;
    /// Push the finished frame to the output.
    fn present(&mut self) -> io::Result<()>;
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<S: Surface>(surface: &mut S, game: &Game, images: &Images) -> io::Result<()> {
    surface.clear()?;

    match game.mode {
        Mode::Menu => draw_menu(surface, game)?,
        Mode::Playing => draw_playing(surface, game, images)?,
        Mode::GameOver => draw_game_over(surface, game)?,
    }

    surface.present()
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<S: Surface>(surface: &mut S, game: &Game) -> io::Result<()> {
    surface.fill(C_MENU_BG)?;
    surface.text("PLATFORMER", TextAnchor::Center(400.0, 100.0), 60.0, C_WHITE)?;

    for button in &game.buttons {
        draw_button(surface, button)?;
    }

    surface.text(
        "ARROWS: MOVE   UP: JUMP",
        TextAnchor::Center(400.0, 500.0),
        24.0,
        C_HINT,
    )
}

pub fn draw_button<S: Surface>(surface: &mut S, button: &Button) -> io::Result<()> {
    let color = if button.hover { C_BUTTON_HOVER } else { C_BUTTON };
    surface.filled_rect(&button.rect, color)?;
    surface.rect(&button.rect, C_WHITE)?;
    let (cx, cy) = button.rect.center();
    surface.text(&button.label, TextAnchor::Center(cx, cy), 30.0, C_WHITE)
}

// ── Playing ───────────────────────────────────────────────────────────────────

fn draw_playing<S: Surface>(surface: &mut S, game: &Game, images: &Images) -> io::Result<()> {
    surface.fill(C_SKY)?;

    for platform in &game.platforms {
        surface.filled_rect(platform, C_PLATFORM)?;
    }
    for enemy in &game.enemies {
        draw_actor(surface, &enemy.body, &enemy.anim, images, C_ENEMY)?;
    }
    draw_actor(surface, &game.player.body, &game.player.anim, images, C_PLAYER)?;

    surface.text(
        &format!("LIVES: {}", game.player.lives),
        TextAnchor::TopLeft(10.0, 10.0),
        30.0,
        C_WHITE,
    )?;
    surface.text(
        &format!("SCORE: {}", game.player.score),
        TextAnchor::TopLeft(WIDTH - 200.0, 10.0),
        30.0,
        C_WHITE,
    )
}

/// Draw the current animation frame, or a solid `placeholder` rectangle if
/// the frame's image is not loaded.
pub fn draw_actor<S: Surface>(
    surface: &mut S,
    body: &Body,
    anim: &Animation,
    images: &Images,
    placeholder: Rgb,
) -> io::Result<()> {
    match anim.image(images) {
        Some(sprite) => surface.blit(sprite, body.rect.x, body.rect.y),
        None => surface.filled_rect(&body.rect, placeholder),
    }
}

// ── Game over ─────────────────────────────────────────────────────────────────

fn draw_game_over<S: Surface>(surface: &mut S, game: &Game) -> io::Result<()> {
    surface.fill(C_MENU_BG)?;
    surface.text("GAME OVER", TextAnchor::Center(400.0, 200.0), 80.0, C_GAME_OVER)?;
    surface.text(
        &format!("SCORE: {}", game.player.score),
        TextAnchor::Center(400.0, 300.0),
        40.0,
        C_WHITE,
    )?;
    surface.text(
        "CLICK TO RETURN TO MENU",
        TextAnchor::Center(400.0, 400.0),
        24.0,
        C_HINT,
    )
}
