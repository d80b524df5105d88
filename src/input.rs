/// Input state as seen by the game for one frame.
///
/// Keys are level-triggered: a key counts as held while its last press or
/// repeat is no older than `HOLD_WINDOW` frames, or until an explicit
/// release arrives. This covers terminals that only emit press events (OS
/// key-repeat keeps the key fresh) as well as those that report releases.
///
/// Pointer clicks are edge-triggered events queued with their position and
/// drained by `end_frame`, so each click is seen by exactly one update.

use std::collections::HashMap;

use crate::config::HOLD_WINDOW;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
}

#[derive(Clone, Debug, Default)]
pub struct InputState {
    /// Frame each key was last pressed or repeated on.
    key_frame: HashMap<Key, u64>,
    frame: u64,
    pointer: (f32, f32),
    clicks: Vec<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the frame counter. Call once before draining events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// Drop this frame's click events.
    pub fn end_frame(&mut self) {
        self.clicks.clear();
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Record a press or repeat of `key` on the current frame.
    pub fn press(&mut self, key: Key) {
        self.key_frame.insert(key, self.frame);
    }

    pub fn release(&mut self, key: Key) {
        self.key_frame.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn move_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// Queue a primary-button click. The pointer moves there too.
    pub fn click(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        self.clicks.push((x, y));
    }

    pub fn clicks(&self) -> &[(f32, f32)] {
        &self.clicks
    }
}
