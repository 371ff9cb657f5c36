//! Keyboard input handling for the viewer.
//!
//! This module defines the [`ViewerKey`] enum for abstracting viewer actions from physical keys,
//! and provides [`KeyState`] for tracking pressed keys and applying them to a [`ViewerState`].

use std::collections::HashSet;

use crate::math::Vec3;
use crate::viewer::ViewerState;

/// Every action the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    /// Move the camera toward -z (W).
    MoveForward,
    /// Move the camera toward +z (S).
    MoveBackward,
    /// Move the camera toward -x (A).
    MoveLeft,
    /// Move the camera toward +x (D).
    MoveRight,
    /// Move the camera toward +y (E).
    MoveUp,
    /// Move the camera toward -y (Q).
    MoveDown,
    /// Roll the model counter-clockwise (Z).
    RollLeft,
    /// Roll the model clockwise (X).
    RollRight,
    /// Scale the model up by one step (= or +).
    ZoomIn,
    /// Scale the model down by one step (-).
    ZoomOut,
    /// Switch to the next pipeline (Space).
    NextPipeline,
    /// Quit the viewer (`).
    Quit,
}

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase().as_str() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

impl ViewerKey {
    /// Whether holding the key keeps acting every update, rather than once per press.
    pub fn is_continuous(self) -> bool {
        !matches!(
            self,
            ViewerKey::ZoomIn | ViewerKey::ZoomOut | ViewerKey::NextPipeline | ViewerKey::Quit
        )
    }

    /// Maps the text produced by a key press to an action, ignoring case.
    ///
    /// # Returns
    /// * `Some(ViewerKey)` if the text maps to an action.
    /// * `None` otherwise.
    pub fn from_char(c: &str) -> Option<ViewerKey> {
        match_char_key!(c, {
            "w" => ViewerKey::MoveForward,
            "s" => ViewerKey::MoveBackward,
            "a" => ViewerKey::MoveLeft,
            "d" => ViewerKey::MoveRight,
            "e" => ViewerKey::MoveUp,
            "q" => ViewerKey::MoveDown,
            "z" => ViewerKey::RollLeft,
            "x" => ViewerKey::RollRight,
            "=" => ViewerKey::ZoomIn,
            "+" => ViewerKey::ZoomIn,
            "-" => ViewerKey::ZoomOut,
            " " => ViewerKey::NextPipeline,
            "`" => ViewerKey::Quit,
        })
    }
}

/// Tracks held keys and presses not yet applied.
///
/// Use [`press_key`](Self::press_key) and [`release_key`](Self::release_key) from the event
/// loop, then call [`update`](Self::update) once per frame.
#[derive(Debug, Default)]
pub struct KeyState {
    /// Keys currently held down.
    pub pressed_keys: HashSet<ViewerKey>,
    /// Keys pressed since the last update. Key repeat does not add to this.
    fresh_presses: HashSet<ViewerKey>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a key as pressed.
    pub fn press_key(&mut self, key: ViewerKey) {
        if self.pressed_keys.insert(key) {
            self.fresh_presses.insert(key);
        }
    }

    /// Marks a key as released.
    pub fn release_key(&mut self, key: ViewerKey) {
        self.pressed_keys.remove(&key);
    }

    /// Checks if a key is currently held.
    pub fn is_pressed(&self, key: ViewerKey) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Applies held and freshly pressed keys to the viewer.
    ///
    /// Movement and roll scale with `delta_time` and act while held. Zoom,
    /// pipeline switching and quitting act once per press, even if the key was
    /// released again before this update.
    pub fn update(&mut self, viewer: &mut ViewerState, delta_time: f32) {
        let axis = |positive: ViewerKey, negative: ViewerKey| -> f32 {
            self.is_pressed(positive) as i32 as f32 - self.is_pressed(negative) as i32 as f32
        };

        let direction = Vec3::new(
            axis(ViewerKey::MoveRight, ViewerKey::MoveLeft),
            axis(ViewerKey::MoveUp, ViewerKey::MoveDown),
            axis(ViewerKey::MoveBackward, ViewerKey::MoveForward),
        );
        if direction != Vec3::ZERO {
            viewer.move_camera(direction, delta_time);
        }

        let roll = axis(ViewerKey::RollLeft, ViewerKey::RollRight);
        if roll != 0.0 {
            viewer.roll(roll, delta_time);
        }

        for key in self.fresh_presses.drain().filter(|key| !key.is_continuous()) {
            match key {
                ViewerKey::ZoomIn => viewer.zoom(1.0),
                ViewerKey::ZoomOut => viewer.zoom(-1.0),
                ViewerKey::NextPipeline => viewer.cycle_pipeline(),
                ViewerKey::Quit => {
                    log::info!("Quit requested");
                    viewer.quit_requested = true;
                }
                _ => {}
            }
        }
    }
}
