// Input module - keyboard-to-controller mapping
//
// The NES accepts up to two controllers, each an 8-bit shift register
// (see `bus::ControllerPort`). This module is the host side: it tracks
// which physical keys are held and turns that into a `Controller` snapshot
// per player, ready to hand to the bus each frame.

pub mod config;
pub mod controller;
pub mod keyboard;

pub use config::InputConfig;
pub use controller::Controller;
pub use keyboard::{Button, KeyboardHandler, KeyboardMapping, Player};
