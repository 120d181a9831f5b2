//! Raw query string of the `/log-get` route.

use crate::{
    models::log::controller_state::ControllerState,
    util::{parse_lenient_f64, query_flag},
};

/// Every value seen for each parameter, in query order.
///
/// Parameters may repeat; coercion decides what a repeat means.
#[derive(Debug, Default)]
pub struct LogQuery {
    pub button1: Vec<String>,
    pub button2: Vec<String>,
    pub joystick_pressed: Vec<String>,
    pub joystick_x: Vec<String>,
    pub joystick_y: Vec<String>,
}

impl LogQuery {
    /// Group decoded `key=value` pairs by parameter, ignoring unknown keys.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "button1" => &mut query.button1,
                "button2" => &mut query.button2,
                "joystick_pressed" => &mut query.joystick_pressed,
                "joystick_x" => &mut query.joystick_x,
                "joystick_y" => &mut query.joystick_y,
                _ => continue,
            };
            slot.push(value);
        }
        query
    }

    /// Coerce the raw strings into a sample.
    ///
    /// A flag is set only by a single `"true"` value; repeats and anything
    /// else clear it. Axes join repeated values with `,` before the lenient
    /// parse, so `x=1&x=2` reads as `1`. Returns `None` when either axis has
    /// no finite numeric prefix.
    pub fn coerce(&self) -> Option<ControllerState> {
        let flag = |values: &[String]| match values {
            [single] => query_flag(Some(single.as_str())),
            _ => false,
        };
        let axis = |values: &[String]| {
            parse_lenient_f64(&values.join(",")).filter(|v| v.is_finite())
        };
        Some(ControllerState {
            button1: flag(&self.button1),
            button2: flag(&self.button2),
            joystick_pressed: flag(&self.joystick_pressed),
            joystick_x: axis(&self.joystick_x)?,
            joystick_y: axis(&self.joystick_y)?,
        })
    }
}
