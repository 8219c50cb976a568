//! Spritesheet frame strip definitions.
//!
//! Every animation in the scene is a single horizontal strip of equally
//! sized frames inside one texture. A [`FrameSet`] describes one strip; the
//! [`FrameSetStore`] maps string keys (e.g. `"player_jump"`) to frame sets.
//! Playback speed is not stored here: it lives on the consuming component as
//! a tick divisor.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// One horizontal strip of equally sized frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    pub tex_key: String,
    pub frame_count: usize,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl FrameSet {
    /// Panics if `frame_count` is zero; an empty strip is a configuration
    /// error, not a runtime condition.
    pub fn new(
        tex_key: impl Into<String>,
        frame_count: usize,
        frame_width: f32,
        frame_height: f32,
    ) -> Self {
        assert!(frame_count > 0, "frame set needs at least one frame");
        Self {
            tex_key: tex_key.into(),
            frame_count,
            frame_width,
            frame_height,
        }
    }

    /// Source-rect offset of frame `index`, clamped to the last frame.
    pub fn frame_offset(&self, index: usize) -> Vector2 {
        let index = index.min(self.frame_count - 1);
        Vector2 {
            x: index as f32 * self.frame_width,
            y: 0.0,
        }
    }
}

/// Keyed store of immutable frame-strip definitions.
#[derive(Resource, Default)]
pub struct FrameSetStore {
    pub frame_sets: FxHashMap<String, FrameSet>,
}

impl FrameSetStore {
    pub fn insert(&mut self, key: impl Into<String>, frame_set: FrameSet) {
        self.frame_sets.insert(key.into(), frame_set);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&FrameSet> {
        self.frame_sets.get(key.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_offset_advances_by_frame_width() {
        let set = FrameSet::new("tex", 10, 40.0, 50.0);
        assert_eq!(set.frame_offset(0).x, 0.0);
        assert_eq!(set.frame_offset(3).x, 120.0);
        assert_eq!(set.frame_offset(0).y, 0.0);
    }

    #[test]
    fn test_frame_offset_clamps_to_last_frame() {
        let set = FrameSet::new("tex", 10, 40.0, 50.0);
        assert_eq!(set.frame_offset(9).x, 360.0);
        assert_eq!(set.frame_offset(99).x, 360.0);
    }

    #[test]
    #[should_panic]
    fn test_empty_frame_set_panics() {
        let _ = FrameSet::new("tex", 0, 40.0, 50.0);
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = FrameSetStore::default();
        store.insert("idle", FrameSet::new("tex", 4, 10.0, 10.0));
        assert!(store.get("idle").is_some());
        assert!(store.get("missing").is_none());
    }
}
