//! Loaded textures by key.
//!
//! `Texture2D` is bound to the GL context, so the store is inserted as a
//! non-send resource and only touched by setup and rendering.

use raylib::prelude::Texture2D;
use std::collections::HashMap;

pub struct TextureStore {
    pub map: HashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
