/// All game entity types: data and constructors, no per-frame logic.

use rand::Rng;

use crate::animation::Animation;
use crate::config::{
    ENEMY_ANIM_INTERVAL, ENEMY_FRAMES, ENEMY_SIZE, ENEMY_SPEED_MAX, ENEMY_SPEED_MIN,
    PLAYER_ANIM_INTERVAL, PLAYER_FRAMES, PLAYER_SIZE, SPAWN, START_LIVES,
};

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
}

/// What the frame driver should do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open point test, `[left, right) × [top, bottom)`.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

// ── Physics body ──────────────────────────────────────────────────────────────

/// The physics state shared by the player and enemies.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub facing_right: bool,
    /// Resting on a platform this frame. Recomputed by every physics step.
    pub grounded: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Body {
            rect: Rect::new(x, y, w, h),
            vx: 0.0,
            vy: 0.0,
            facing_right: true,
            grounded: false,
        }
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub lives: u32,
    pub score: u32,
    pub anim: Animation,
}

impl Player {
    pub fn new() -> Self {
        Player {
            body: Body::new(SPAWN.0, SPAWN.1, PLAYER_SIZE.0, PLAYER_SIZE.1),
            lives: START_LIVES,
            score: 0,
            anim: Animation::new(&PLAYER_FRAMES, PLAYER_ANIM_INTERVAL),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Body,
    /// Patrol anchor: the x the enemy spawned at.
    pub start_x: f32,
    /// Maximum horizontal distance from `start_x` before turning around.
    pub range: f32,
    /// Signed patrol speed; the sign flips at the range boundary.
    pub speed: f32,
    pub anim: Animation,
}

impl Enemy {
    /// Spawn an enemy whose patrol speed is drawn from `rng`.
    pub fn new(x: f32, y: f32, range: f32, rng: &mut impl Rng) -> Self {
        let speed = rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
        Self::with_speed(x, y, range, speed)
    }

    pub fn with_speed(x: f32, y: f32, range: f32, speed: f32) -> Self {
        Enemy {
            body: Body::new(x, y, ENEMY_SIZE.0, ENEMY_SIZE.1),
            start_x: x,
            range,
            speed,
            anim: Animation::new(&ENEMY_FRAMES, ENEMY_ANIM_INTERVAL),
        }
    }
}

// ── Menu buttons ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    Music,
    Quit,
}

#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: ButtonAction,
    /// Pointer is over the button. Refreshed every menu frame.
    pub hover: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, action: ButtonAction) -> Self {
        Button {
            rect,
            label: label.into(),
            action,
            hover: false,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }
}

pub fn music_label(on: bool) -> String {
    format!("MUSIC: {}", if on { "ON" } else { "OFF" })
}

// ── Level layout ──────────────────────────────────────────────────────────────

/// Ground strip followed by four floating ledges, in collision order.
pub fn level_platforms() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 560.0, 800.0, 40.0),
        Rect::new(200.0, 400.0, 200.0, 20.0),
        Rect::new(500.0, 300.0, 150.0, 20.0),
        Rect::new(100.0, 250.0, 100.0, 20.0),
        Rect::new(400.0, 150.0, 200.0, 20.0),
    ]
}

/// Spawn points `(x, y, patrol range)` for the enemies of a fresh level.
pub const ENEMY_SPAWNS: [(f32, f32, f32); 3] = [
    (250.0, 350.0, 100.0),
    (550.0, 250.0, 80.0),
    (150.0, 200.0, 60.0),
];

pub fn level_enemies(rng: &mut impl Rng) -> Vec<Enemy> {
    ENEMY_SPAWNS
        .iter()
        .map(|&(x, y, range)| Enemy::new(x, y, range, rng))
        .collect()
}

pub fn menu_buttons(music_on: bool) -> Vec<Button> {
    vec![
        Button::new(Rect::new(250.0, 200.0, 300.0, 60.0), "PLAY", ButtonAction::Play),
        Button::new(
            Rect::new(250.0, 280.0, 300.0, 60.0),
            music_label(music_on),
            ButtonAction::Music,
        ),
        Button::new(Rect::new(250.0, 360.0, 300.0, 60.0), "QUIT", ButtonAction::Quit),
    ]
}
