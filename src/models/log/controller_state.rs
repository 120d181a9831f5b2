//! One controller sample as submitted by a device.

use serde::Deserialize;

/// Buttons and joystick axes of a single sample.
///
/// Deserializing this from JSON is deliberately strict: flags must be JSON
/// booleans and axes JSON numbers, every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ControllerState {
    pub button1: bool,
    pub button2: bool,
    pub joystick_pressed: bool,
    pub joystick_x: f64,
    pub joystick_y: f64,
}
