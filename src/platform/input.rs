//! Key events to control flags
//!
//! Key-down and key-up events latch flags that the simulation reads once per
//! tick. Two keys map onto each direction so both WASD and arrow players are
//! covered.

use crate::sim::TickInput;

/// A logical control a key can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Start,
}

impl Control {
    /// Map a DOM `KeyboardEvent.code` to a control
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" | "ArrowLeft" => Some(Control::Left),
            "KeyD" | "ArrowRight" => Some(Control::Right),
            "Space" => Some(Control::Start),
            _ => None,
        }
    }
}

/// Currently held controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub start: bool,
}

impl Controls {
    /// Apply a key press or release. Returns false for unmapped keys.
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        let Some(control) = Control::from_key_code(code) else {
            return false;
        };
        match control {
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::Start => self.start = pressed,
        }
        true
    }

    /// Snapshot the held controls as tick input
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            start: self.start,
            idle_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_keys_map_to_each_direction() {
        assert_eq!(Control::from_key_code("KeyA"), Some(Control::Left));
        assert_eq!(Control::from_key_code("ArrowLeft"), Some(Control::Left));
        assert_eq!(Control::from_key_code("KeyD"), Some(Control::Right));
        assert_eq!(Control::from_key_code("ArrowRight"), Some(Control::Right));
        assert_eq!(Control::from_key_code("Space"), Some(Control::Start));
        assert_eq!(Control::from_key_code("KeyW"), None);
    }

    #[test]
    fn test_press_and_release_latch() {
        let mut controls = Controls::default();
        assert!(controls.apply_key("ArrowRight", true));
        assert!(controls.right);
        assert!(controls.to_tick_input().right);

        // Still held until released
        assert!(controls.to_tick_input().right);
        assert!(controls.apply_key("KeyD", false));
        assert!(!controls.right);

        assert!(!controls.apply_key("Escape", true));
        assert_eq!(controls, Controls::default());
    }
}
