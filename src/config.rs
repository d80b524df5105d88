/// Game-wide constants and runtime settings.
///
/// Physics values are per frame, tuned for the 60 FPS driver loop.

use std::path::PathBuf;
use std::time::Duration;

/// An RGB colour triple.
pub type Rgb = (u8, u8, u8);

// ── World ─────────────────────────────────────────────────────────────────────

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

// ── Physics ───────────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.8;
/// Upward impulse applied on jump (negative is up).
pub const JUMP: f32 = -15.0;
pub const SPEED: f32 = 5.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const SPAWN: (f32, f32) = (100.0, 100.0);
pub const PLAYER_SIZE: (f32, f32) = (30.0, 50.0);
pub const START_LIVES: u32 = 3;
pub const STOMP_SCORE: u32 = 100;
/// Fraction of `JUMP` applied as a bounce after a stomp.
pub const STOMP_BOUNCE: f32 = 0.7;
pub const PLAYER_FRAMES: [&str; 2] = ["player_idle1", "player_idle2"];
pub const PLAYER_ANIM_INTERVAL: u32 = 10;

// ── Enemy ─────────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: (f32, f32) = (32.0, 32.0);
/// Half-open range the patrol speed magnitude is drawn from.
pub const ENEMY_SPEED_MIN: f32 = 1.0;
pub const ENEMY_SPEED_MAX: f32 = 2.5;
pub const ENEMY_FRAMES: [&str; 2] = ["enemy_move1", "enemy_move2"];
pub const ENEMY_ANIM_INTERVAL: u32 = 7;

/// Every image identifier the game looks up.
pub const SPRITE_IDS: [&str; 4] = ["player_idle1", "player_idle2", "enemy_move1", "enemy_move2"];

// ── Driver ────────────────────────────────────────────────────────────────────

pub const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

/// A key counts as held if its last press/repeat arrived within this many
/// frames. Terminals without release events rely on OS key-repeat to refresh it.
pub const HOLD_WINDOW: u64 = 8;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_WHITE: Rgb = (255, 255, 255);
pub const C_MENU_BG: Rgb = (40, 40, 60);
pub const C_SKY: Rgb = (135, 206, 235);
pub const C_PLATFORM: Rgb = (100, 200, 100);
pub const C_PLAYER: Rgb = (0, 120, 255);
pub const C_ENEMY: Rgb = (255, 50, 50);
pub const C_BUTTON: Rgb = (70, 130, 180);
pub const C_BUTTON_HOVER: Rgb = (100, 160, 210);
pub const C_HINT: Rgb = (200, 200, 200);
pub const C_GAME_OVER: Rgb = (255, 50, 50);

// ── Runtime settings ──────────────────────────────────────────────────────────

/// Values the binary reads from the environment at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub assets_dir: PathBuf,
    pub log_path: PathBuf,
    /// `None` means seed from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            assets_dir: PathBuf::from("images"),
            log_path: std::env::temp_dir().join("platformer.log"),
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Empty or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Settings {
            assets_dir: non_empty("PLATFORMER_ASSETS")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            log_path: non_empty("PLATFORMER_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            seed: non_empty("PLATFORMER_SEED").and_then(|s| s.trim().parse().ok()),
        }
    }
}
