/// Top-level state machine: owns the world and dispatches each frame to the
/// handler for the current mode.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compute::{jump, update_enemy, update_player};
use crate::config::SPEED;
use crate::entities::{
    level_enemies, level_platforms, menu_buttons, music_label, Button, ButtonAction, Enemy, Flow,
    Mode, Player, Rect,
};
use crate::input::{InputState, Key};

pub struct Game {
    pub mode: Mode,
    pub music_on: bool,
    pub buttons: Vec<Button>,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Rect>,
    rng: StdRng,
}

impl Game {
    /// Build a game in the menu, with enemy speeds drawn from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let music_on = true;
        Game {
            mode: Mode::Menu,
            music_on,
            buttons: menu_buttons(music_on),
            player: Player::new(),
            enemies: level_enemies(&mut rng),
            platforms: level_platforms(),
            rng,
        }
    }

    /// Recreate player, platforms and enemies. Menu state is untouched.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.platforms = level_platforms();
        self.enemies = level_enemies(&mut self.rng);
        log::debug!("level reset");
    }

    /// Run one frame of simulation for the current mode.
    pub fn update(&mut self, input: &InputState) -> Flow {
        if self.mode == Mode::Menu {
            let (px, py) = input.pointer();
            for button in &mut self.buttons {
                button.hover = button.contains(px, py);
            }
        }

        // A click that changes the mode ends click handling for this frame.
        for &(x, y) in input.clicks() {
            let before = self.mode;
            if self.handle_click(x, y) == Flow::Quit {
                return Flow::Quit;
            }
            if self.mode != before {
                break;
            }
        }

        if self.mode == Mode::Playing {
            self.step_playing(input);
        }

        Flow::Continue
    }

    /// The single entry point for pointer clicks, whatever the mode.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Flow {
        match self.mode {
            Mode::Menu => {
                let action = self
                    .buttons
                    .iter()
                    .find(|b| b.contains(x, y))
                    .map(|b| b.action);
                match action {
                    Some(ButtonAction::Play) => self.set_mode(Mode::Playing),
                    Some(ButtonAction::Music) => self.toggle_music(),
                    Some(ButtonAction::Quit) => {
                        log::info!("quit requested from menu");
                        return Flow::Quit;
                    }
                    None => {}
                }
            }
            Mode::GameOver => {
                self.set_mode(Mode::Menu);
                self.reset();
            }
            Mode::Playing => {}
        }
        Flow::Continue
    }

    fn toggle_music(&mut self) {
        self.music_on = !self.music_on;
        let label = music_label(self.music_on);
        if let Some(button) = self
            .buttons
            .iter_mut()
            .find(|b| b.action == ButtonAction::Music)
        {
            button.label = label;
        }
        log::debug!("music {}", if self.music_on { "on" } else { "off" });
    }

    fn step_playing(&mut self, input: &InputState) {
        let body = &mut self.player.body;
        if input.is_held(Key::Left) {
            body.vx = -SPEED;
            body.facing_right = false;
        } else if input.is_held(Key::Right) {
            body.vx = SPEED;
            body.facing_right = true;
        } else {
            body.vx = 0.0;
        }

        if input.is_held(Key::Up) {
            jump(&mut self.player);
        }

        for enemy in &mut self.enemies {
            update_enemy(enemy, &self.platforms);
        }

        let next = update_player(&mut self.player, &self.platforms, &mut self.enemies);
        self.set_mode(next);
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::info!("mode {:?} -> {:?} (score {})", self.mode, mode, self.player.score);
            self.mode = mode;
        }
    }
}
