//! Recording mock backends for unit tests
//!
//! `MockWindow` stands in for a native window: scripted key/button/cursor
//! state, observable native-call effects, and a per-window label written
//! into a shared context log so tests can assert context-switch ordering
//! across windows and the primary context.

use std::cell::RefCell;
use std::rc::Rc;

use glfw::{Key, MouseButton};

use crate::error::{WindowError, WindowResult};
use crate::flags::WindowFlags;
use crate::input::{KEY_SLOT_COUNT, MOUSE_BUTTON_COUNT};
use crate::window::backend::{Platform, WindowBackend};

/// Shared handle to one mock window's scripted state.
pub(crate) type SharedState = Rc<RefCell<MockState>>;

/// Shared log of context-affecting calls, in order.
pub(crate) type ContextLog = Rc<RefCell<Vec<String>>>;

/// Scripted native state for one mock window.
pub(crate) struct MockState {
    pub keys: [bool; KEY_SLOT_COUNT],
    pub buttons: [bool; MOUSE_BUTTON_COUNT],
    pub cursor: (f64, f64),
    pub should_close: bool,
    pub size: (u32, u32),
    pub framebuffer: (u32, u32),
    pub position: (i32, i32),
    pub title: String,
    pub opacity: f32,
    pub focused: bool,
    pub minimized: bool,
    pub native_resize_calls: usize,
    pub calls: Vec<String>,
    pub dropped: bool,
}

impl MockState {
    fn new(size: (u32, u32)) -> Self {
        Self {
            keys: [false; KEY_SLOT_COUNT],
            buttons: [false; MOUSE_BUTTON_COUNT],
            cursor: (0.0, 0.0),
            should_close: false,
            size,
            framebuffer: size,
            position: (0, 0),
            title: String::new(),
            opacity: 1.0,
            focused: true,
            minimized: false,
            native_resize_calls: 0,
            calls: Vec::new(),
            dropped: false,
        }
    }

    pub fn press_key(&mut self, key: Key) {
        if let Ok(slot) = usize::try_from(key as i32) {
            self.keys[slot] = true;
        }
    }

    pub fn release_key(&mut self, key: Key) {
        if let Ok(slot) = usize::try_from(key as i32) {
            self.keys[slot] = false;
        }
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons[button as usize] = true;
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons[button as usize] = false;
    }
}

/// Mock window backend with observable effects.
pub(crate) struct MockWindow {
    label: String,
    state: SharedState,
    context_log: ContextLog,
}

impl MockWindow {
    /// Standalone mock with its own private context log.
    pub fn new(label: &str) -> (Self, SharedState) {
        Self::with_log(label, Rc::new(RefCell::new(Vec::new())), (300, 300))
    }

    fn with_log(label: &str, context_log: ContextLog, size: (u32, u32)) -> (Self, SharedState) {
        let state = Rc::new(RefCell::new(MockState::new(size)));
        (
            Self {
                label: label.to_string(),
                state: Rc::clone(&state),
                context_log,
            },
            state,
        )
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.state.borrow_mut().dropped = true;
        self.context_log.borrow_mut().push(format!("destroy:{}", self.label));
    }
}

impl WindowBackend for MockWindow {
    fn make_current(&mut self) {
        self.context_log.borrow_mut().push(format!("current:{}", self.label));
    }

    fn swap_buffers(&mut self) {
        self.context_log.borrow_mut().push(format!("swap:{}", self.label));
    }

    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn size(&self) -> (u32, u32) {
        self.state.borrow().size
    }

    fn set_size(&mut self, width: u32, height: u32) {
        let mut state = self.state.borrow_mut();
        state.size = (width, height);
        state.native_resize_calls += 1;
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.state.borrow().framebuffer
    }

    fn position(&self) -> (i32, i32) {
        self.state.borrow().position
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.state.borrow_mut().position = (x, y);
    }

    fn set_title(&mut self, title: &str) {
        let mut state = self.state.borrow_mut();
        state.title.clear();
        state.title.push_str(title);
    }

    fn opacity(&self) -> f32 {
        self.state.borrow().opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.borrow_mut().opacity = opacity;
    }

    fn content_scale(&self) -> (f32, f32) {
        (1.0, 1.0)
    }

    fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    fn is_minimized(&self) -> bool {
        self.state.borrow().minimized
    }

    fn maximize(&mut self) {
        self.state.borrow_mut().calls.push("maximize".to_string());
    }

    fn minimize(&mut self) {
        let mut state = self.state.borrow_mut();
        state.minimized = true;
        state.calls.push("minimize".to_string());
    }

    fn restore(&mut self) {
        let mut state = self.state.borrow_mut();
        state.minimized = false;
        state.calls.push("restore".to_string());
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.state
            .borrow_mut()
            .calls
            .push(format!("set_resizable({resizable})"));
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.state
            .borrow_mut()
            .calls
            .push(format!("set_decorated({decorated})"));
    }

    fn set_floating(&mut self, floating: bool) {
        self.state
            .borrow_mut()
            .calls
            .push(format!("set_floating({floating})"));
    }

    fn enter_fullscreen(&mut self, width: u32, height: u32) {
        self.state
            .borrow_mut()
            .calls
            .push(format!("enter_fullscreen({width}x{height})"));
    }

    fn set_cursor_enabled(&mut self, enabled: bool) {
        self.state
            .borrow_mut()
            .calls
            .push(format!("cursor_enabled({enabled})"));
    }

    fn key_down(&self, key: Key) -> bool {
        usize::try_from(key as i32).is_ok_and(|slot| self.state.borrow().keys[slot])
    }

    fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.state.borrow().buttons[button as usize]
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.state.borrow().cursor
    }
}

/// What the mock platform saw: the context log, every created window's
/// state, and the hint set each creation received.
#[derive(Default)]
pub(crate) struct PlatformShared {
    pub windows: Vec<SharedState>,
    pub creation_hints: Vec<WindowFlags>,
    pub fail_next_create: bool,
}

/// Mock platform: hands out `MockWindow`s wired to one shared context log.
pub(crate) struct MockPlatform {
    shared: Rc<RefCell<PlatformShared>>,
    context_log: ContextLog,
}

impl MockPlatform {
    pub fn new() -> (Self, Rc<RefCell<PlatformShared>>, ContextLog) {
        let shared = Rc::new(RefCell::new(PlatformShared::default()));
        let context_log = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                shared: Rc::clone(&shared),
                context_log: Rc::clone(&context_log),
            },
            shared,
            context_log,
        )
    }
}

impl Platform for MockPlatform {
    fn poll_events(&mut self) {
        self.context_log.borrow_mut().push("poll".to_string());
    }

    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        _title: &str,
        hints: WindowFlags,
    ) -> WindowResult<Box<dyn WindowBackend>> {
        let mut shared = self.shared.borrow_mut();
        shared.creation_hints.push(hints);
        if shared.fail_next_create {
            shared.fail_next_create = false;
            return Err(WindowError::CreationFailed);
        }

        let label = format!("w{}", shared.windows.len() + 1);
        let (window, state) =
            MockWindow::with_log(&label, Rc::clone(&self.context_log), (width, height));
        shared.windows.push(state);

        // Mirror the real platform: the fresh context is left current.
        self.context_log.borrow_mut().push(format!("current:{label}"));
        Ok(Box::new(window))
    }

    fn make_primary_current(&mut self) {
        self.context_log.borrow_mut().push("current:primary".to_string());
    }
}
