//! Platform abstraction layer
//!
//! Turns device events into game intents. Polling the devices themselves
//! is left to whichever frontend hosts the game.

pub mod input;

pub use input::{Key, OnScreenButtons, PointerButton, intent_for_click, intent_for_key};
