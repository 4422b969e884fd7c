//! Keyboard and on-screen button mapping

use crate::consts::*;
use crate::sim::{GamePhase, Intent, Rect};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    R,
    Q,
    Escape,
    /// Window close button
    Close,
}

impl Key {
    /// Parse a key name as frontends commonly report it
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "a" => Some(Key::A),
            "d" => Some(Key::D),
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            "r" => Some(Key::R),
            "q" => Some(Key::Q),
            "escape" | "esc" => Some(Key::Escape),
            "close" => Some(Key::Close),
            _ => None,
        }
    }
}

/// Map a key press to an intent for the current phase
pub fn intent_for_key(key: Key, phase: GamePhase) -> Option<Intent> {
    if key == Key::Close {
        return Some(Intent::Quit);
    }
    match phase {
        GamePhase::Playing => match key {
            Key::Left | Key::A => Some(Intent::LaneLeft),
            Key::Right | Key::D => Some(Intent::LaneRight),
            Key::Up | Key::W => Some(Intent::Forward),
            Key::Down | Key::S => Some(Intent::Backward),
            _ => None,
        },
        GamePhase::GameOver => match key {
            Key::R => Some(Intent::Reset),
            Key::Q | Key::Escape => Some(Intent::Quit),
            _ => None,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// UP/DOWN buttons stacked in the bottom-right corner inside the road margin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnScreenButtons {
    pub up: Rect,
    pub down: Rect,
}

impl OnScreenButtons {
    pub fn new(width: i32, height: i32, margin: i32) -> Self {
        let x = width - margin - BUTTON_WIDTH;
        let up_y = height - margin - BUTTON_HEIGHT * 2 - BUTTON_PAD;
        let down_y = height - margin - BUTTON_HEIGHT;
        Self {
            up: Rect::new(x, up_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            down: Rect::new(x, down_y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }
}

impl Default for OnScreenButtons {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, ROAD_MARGIN)
    }
}

/// Map a pointer click to an intent; clicks do nothing after game over
pub fn intent_for_click(
    buttons: &OnScreenButtons,
    button: PointerButton,
    x: i32,
    y: i32,
    phase: GamePhase,
) -> Option<Intent> {
    if button != PointerButton::Primary || phase != GamePhase::Playing {
        return None;
    }
    if buttons.up.contains_point(x, y) {
        Some(Intent::Forward)
    } else if buttons.down.contains_point(x, y) {
        Some(Intent::Backward)
    } else {
        None
    }
}
