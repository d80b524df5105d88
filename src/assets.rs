/// Named image resources.
///
/// Sprites are loaded once at startup from `<dir>/<id>.png`. Anything that
/// fails to load is simply absent; the renderer draws a placeholder instead.

use std::collections::HashMap;
use std::path::Path;

/// An RGBA image kept in memory, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Sprite {
    /// Returns `None` when `pixels` does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Sprite { width, height, pixels })
    }

    pub fn load(path: &Path) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        Ok(Sprite { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Images {
    sprites: HashMap<String, Sprite>,
}

impl Images {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every id in `ids` from `dir`. Missing or broken files are logged
    /// and skipped.
    pub fn load_dir(dir: &Path, ids: &[&str]) -> Self {
        let mut images = Images::new();
        for id in ids {
            let path = dir.join(format!("{id}.png"));
            match Sprite::load(&path) {
                Ok(sprite) => images.insert(id, sprite),
                Err(err) => log::warn!("Sprite '{}' unavailable ({}): {}", id, path.display(), err),
            }
        }
        log::info!("Loaded {}/{} sprites from {}", images.len(), ids.len(), dir.display());
        images
    }

    pub fn insert(&mut self, id: &str, sprite: Sprite) {
        self.sprites.insert(id.to_string(), sprite);
    }

    pub fn get(&self, id: &str) -> Option<&Sprite> {
        self.sprites.get(id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
