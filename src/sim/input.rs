//! Discrete input events consumed by the simulation

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Jump with normal gravity
    Up,
    /// Jump with inverted gravity (ceiling walk)
    Down,
    Left,
    Right,
    /// Leave the game-over menu
    Restart,
    /// Quit (Escape / Q)
    ConfirmQuit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
    /// Window close request
    Quit,
}

impl InputEvent {
    /// Fresh (non-repeat) key press
    pub const fn press(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }

    pub const fn release(key: Key) -> Self {
        InputEvent::KeyUp { key }
    }

    /// Whether this event asks to leave the game entirely
    pub fn is_quit_request(&self) -> bool {
        matches!(
            self,
            InputEvent::Quit
                | InputEvent::KeyDown {
                    key: Key::ConfirmQuit,
                    ..
                }
        )
    }
}
