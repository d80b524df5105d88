/// Fixed-interval sprite-frame cycling.

use crate::assets::{Images, Sprite};

/// Cycles through an ordered list of image identifiers, advancing one frame
/// every `interval` updates and wrapping forever.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    frames: Vec<String>,
    interval: u32,
    frame: usize,
    timer: u32,
}

impl Animation {
    /// An `interval` of zero is treated as one.
    pub fn new(frames: &[&str], interval: u32) -> Self {
        Animation {
            frames: frames.iter().map(|f| f.to_string()).collect(),
            interval: interval.max(1),
            frame: 0,
            timer: 0,
        }
    }

    pub fn update(&mut self) {
        self.timer += 1;
        if self.timer >= self.interval {
            self.timer = 0;
            if !self.frames.is_empty() {
                self.frame = (self.frame + 1) % self.frames.len();
            }
        }
    }

    /// Index of the current frame.
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_id(&self) -> Option<&str> {
        self.frames.get(self.frame).map(String::as_str)
    }

    /// The sprite bound to the current frame, if it was loaded.
    pub fn image<'a>(&self, images: &'a Images) -> Option<&'a Sprite> {
        self.frame_id().and_then(|id| images.get(id))
    }
}
