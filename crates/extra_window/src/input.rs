//! Per-window input state
//!
//! Double-buffered key and mouse-button snapshots plus cursor delta
//! tracking. One [`InputState`] lives inside each window record and is
//! advanced exactly once per frame by `ExtraWindow::update_input`; edge
//! queries (pressed/released) compare the current snapshot against the
//! previous one.

use glfw::{Key, MouseButton};

use crate::math::Vec2;
use crate::window::backend::WindowBackend;

/// One slot per GLFW key code (`GLFW_KEY_LAST + 1`).
pub(crate) const KEY_SLOT_COUNT: usize = 349;

/// GLFW reports eight mouse buttons.
pub(crate) const MOUSE_BUTTON_COUNT: usize = 8;

/// Every key code the tracker polls each frame.
const TRACKED_KEYS: [Key; 120] = [
    Key::Space,
    Key::Apostrophe,
    Key::Comma,
    Key::Minus,
    Key::Period,
    Key::Slash,
    Key::Num0,
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
    Key::Semicolon,
    Key::Equal,
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
    Key::LeftBracket,
    Key::Backslash,
    Key::RightBracket,
    Key::GraveAccent,
    Key::World1,
    Key::World2,
    Key::Escape,
    Key::Enter,
    Key::Tab,
    Key::Backspace,
    Key::Insert,
    Key::Delete,
    Key::Right,
    Key::Left,
    Key::Down,
    Key::Up,
    Key::PageUp,
    Key::PageDown,
    Key::Home,
    Key::End,
    Key::CapsLock,
    Key::ScrollLock,
    Key::NumLock,
    Key::PrintScreen,
    Key::Pause,
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
    Key::F21,
    Key::F22,
    Key::F23,
    Key::F24,
    Key::F25,
    Key::Kp0,
    Key::Kp1,
    Key::Kp2,
    Key::Kp3,
    Key::Kp4,
    Key::Kp5,
    Key::Kp6,
    Key::Kp7,
    Key::Kp8,
    Key::Kp9,
    Key::KpDecimal,
    Key::KpDivide,
    Key::KpMultiply,
    Key::KpSubtract,
    Key::KpAdd,
    Key::KpEnter,
    Key::KpEqual,
    Key::LeftShift,
    Key::LeftControl,
    Key::LeftAlt,
    Key::LeftSuper,
    Key::RightShift,
    Key::RightControl,
    Key::RightAlt,
    Key::RightSuper,
    Key::Menu,
];

const TRACKED_MOUSE_BUTTONS: [MouseButton; MOUSE_BUTTON_COUNT] = [
    MouseButton::Button1,
    MouseButton::Button2,
    MouseButton::Button3,
    MouseButton::Button4,
    MouseButton::Button5,
    MouseButton::Button6,
    MouseButton::Button7,
    MouseButton::Button8,
];

/// Buffer slot for a key code, `None` for `Key::Unknown`.
fn key_slot(key: Key) -> Option<usize> {
    usize::try_from(key as i32).ok().filter(|&slot| slot < KEY_SLOT_COUNT)
}

fn button_slot(button: MouseButton) -> Option<usize> {
    usize::try_from(button as i32).ok().filter(|&slot| slot < MOUSE_BUTTON_COUNT)
}

/// Double-buffered input snapshots for one window.
pub(crate) struct InputState {
    current_keys: [bool; KEY_SLOT_COUNT],
    prev_keys: [bool; KEY_SLOT_COUNT],
    current_buttons: [bool; MOUSE_BUTTON_COUNT],
    prev_buttons: [bool; MOUSE_BUTTON_COUNT],
    last_mouse: Vec2,
    mouse_delta: Vec2,
    first_update: bool,
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self {
            current_keys: [false; KEY_SLOT_COUNT],
            prev_keys: [false; KEY_SLOT_COUNT],
            current_buttons: [false; MOUSE_BUTTON_COUNT],
            prev_buttons: [false; MOUSE_BUTTON_COUNT],
            last_mouse: Vec2::zeros(),
            mouse_delta: Vec2::zeros(),
            first_update: true,
        }
    }

    /// Advance the snapshots by one frame.
    ///
    /// Rotates current into previous, re-polls every tracked key and
    /// button, and recomputes the cursor delta. The first update after
    /// creation seeds the cursor position and reports a zero delta.
    pub(crate) fn update(&mut self, backend: &dyn WindowBackend) {
        self.prev_keys = self.current_keys;
        for key in TRACKED_KEYS {
            if let Some(slot) = key_slot(key) {
                self.current_keys[slot] = backend.key_down(key);
            }
        }

        self.prev_buttons = self.current_buttons;
        for button in TRACKED_MOUSE_BUTTONS {
            if let Some(slot) = button_slot(button) {
                self.current_buttons[slot] = backend.mouse_button_down(button);
            }
        }

        let (x, y) = backend.cursor_position();
        #[allow(clippy::cast_possible_truncation)]
        let position = Vec2::new(x as f32, y as f32);
        if self.first_update {
            self.first_update = false;
            self.mouse_delta = Vec2::zeros();
        } else {
            self.mouse_delta = position - self.last_mouse;
        }
        self.last_mouse = position;
    }

    pub(crate) fn key_down(&self, key: Key) -> bool {
        key_slot(key).is_some_and(|slot| self.current_keys[slot])
    }

    pub(crate) fn key_pressed(&self, key: Key) -> bool {
        key_slot(key).is_some_and(|slot| self.current_keys[slot] && !self.prev_keys[slot])
    }

    pub(crate) fn key_released(&self, key: Key) -> bool {
        key_slot(key).is_some_and(|slot| !self.current_keys[slot] && self.prev_keys[slot])
    }

    pub(crate) fn button_down(&self, button: MouseButton) -> bool {
        button_slot(button).is_some_and(|slot| self.current_buttons[slot])
    }

    pub(crate) fn button_pressed(&self, button: MouseButton) -> bool {
        button_slot(button).is_some_and(|slot| self.current_buttons[slot] && !self.prev_buttons[slot])
    }

    pub(crate) fn button_released(&self, button: MouseButton) -> bool {
        button_slot(button).is_some_and(|slot| !self.current_buttons[slot] && self.prev_buttons[slot])
    }

    pub(crate) const fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::mock::MockWindow;

    #[test]
    fn test_double_buffering_invariant() {
        let (window, state) = MockWindow::new("w1");
        let mut input = InputState::new();

        state.borrow_mut().press_key(Key::Space);
        input.update(&window);
        assert!(input.key_down(Key::Space));
        assert!(input.key_pressed(Key::Space));

        // Previous buffer after update n must equal current after n-1.
        input.update(&window);
        assert!(input.key_down(Key::Space));
        assert!(!input.key_pressed(Key::Space));

        state.borrow_mut().release_key(Key::Space);
        input.update(&window);
        assert!(!input.key_down(Key::Space));
        assert!(input.key_released(Key::Space));

        input.update(&window);
        assert!(!input.key_released(Key::Space));
    }

    #[test]
    fn test_pressed_iff_down_now_and_up_before() {
        let (window, state) = MockWindow::new("w1");
        let mut input = InputState::new();

        input.update(&window);
        assert!(!input.key_pressed(Key::Enter));

        state.borrow_mut().press_key(Key::Enter);
        input.update(&window);
        assert!(input.key_pressed(Key::Enter) && input.key_down(Key::Enter));

        // Held for a second frame: down, no longer an edge.
        input.update(&window);
        assert!(input.key_down(Key::Enter) && !input.key_pressed(Key::Enter));
    }

    #[test]
    fn test_mouse_button_edges() {
        let (window, state) = MockWindow::new("w1");
        let mut input = InputState::new();

        state.borrow_mut().press_button(glfw::MouseButtonLeft);
        input.update(&window);
        assert!(input.button_down(glfw::MouseButtonLeft));
        assert!(input.button_pressed(glfw::MouseButtonLeft));

        state.borrow_mut().release_button(glfw::MouseButtonLeft);
        input.update(&window);
        assert!(input.button_released(glfw::MouseButtonLeft));
        assert!(!input.button_down(glfw::MouseButtonLeft));
    }

    #[test]
    fn test_first_update_yields_zero_delta() {
        let (window, state) = MockWindow::new("w1");
        state.borrow_mut().cursor = (250.0, 90.0);

        let mut input = InputState::new();
        input.update(&window);
        assert_eq!(input.mouse_delta(), Vec2::zeros());

        state.borrow_mut().cursor = (262.0, 85.0);
        input.update(&window);
        assert_eq!(input.mouse_delta(), Vec2::new(12.0, -5.0));
    }

    #[test]
    fn test_stationary_cursor_has_zero_delta() {
        let (window, state) = MockWindow::new("w1");
        state.borrow_mut().cursor = (10.0, 10.0);

        let mut input = InputState::new();
        input.update(&window);
        input.update(&window);
        assert_eq!(input.mouse_delta(), Vec2::zeros());
    }

    #[test]
    fn test_unknown_key_is_never_down() {
        let (window, _state) = MockWindow::new("w1");
        let mut input = InputState::new();
        input.update(&window);
        assert!(!input.key_down(Key::Unknown));
        assert!(!input.key_pressed(Key::Unknown));
        assert!(!input.key_released(Key::Unknown));
    }
}
