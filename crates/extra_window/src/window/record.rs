//! The extra-window record

use glfw::{Key, MouseButton};

use crate::flags::WindowFlags;
use crate::input::InputState;
use crate::math::Vec2;
use crate::window::backend::WindowBackend;

/// Identity token for one extra window, used by the context switch guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

impl WindowId {
    /// Reserved id carried by records whose creation failed.
    pub(crate) const INVALID: Self = Self(0);

    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// One secondary window: native handle, cached geometry, display flags,
/// and per-frame input snapshots.
///
/// The application owns every record it creates and is responsible for
/// calling [`ExtraWindow::close`] on each before shutting the system down.
/// A record stays usable for queries after creation fails or after `close`;
/// mutating operations warn and do nothing, pure queries silently return
/// neutral values, so the dominant pattern of checking [`is_valid`] once at
/// creation remains sound.
///
/// `width`/`height` are the last size requested through this API. They are
/// deliberately not synchronized with user-driven native resizes; [`size`]
/// queries native truth when that is what's needed.
///
/// [`is_valid`]: ExtraWindow::is_valid
/// [`size`]: ExtraWindow::size
pub struct ExtraWindow {
    id: WindowId,
    backend: Option<Box<dyn WindowBackend>>,
    width: u32,
    height: u32,
    title: String,
    valid: bool,
    flags: WindowFlags,
    input: InputState,
}

impl ExtraWindow {
    pub(crate) fn new(
        id: WindowId,
        backend: Box<dyn WindowBackend>,
        width: u32,
        height: u32,
        title: &str,
        flags: WindowFlags,
    ) -> Self {
        Self {
            id,
            backend: Some(backend),
            width,
            height,
            title: title.to_string(),
            valid: true,
            flags,
            input: InputState::new(),
        }
    }

    /// Sentinel record returned when native creation fails.
    pub(crate) fn invalid() -> Self {
        Self {
            id: WindowId::INVALID,
            backend: None,
            width: 0,
            height: 0,
            title: String::new(),
            valid: false,
            flags: WindowFlags::empty(),
            input: InputState::new(),
        }
    }

    /// Identity token for this window.
    #[must_use]
    pub const fn id(&self) -> WindowId {
        self.id
    }

    /// True between successful creation and destruction.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Display attributes applied through this API.
    #[must_use]
    pub const fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Title text owned by this record.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last size requested through this API, in screen units.
    ///
    /// Not updated by user-driven native resizes; see [`ExtraWindow::size`]
    /// for current native truth.
    #[must_use]
    pub const fn requested_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the user asked this window to close.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.backend().is_some_and(|backend| backend.should_close())
    }

    /// Destroy the native window and invalidate the record.
    ///
    /// Idempotent after the first call: destroying an already-invalid
    /// record warns and does nothing.
    pub fn close(&mut self) {
        if !self.valid || self.backend.is_none() {
            log::warn!("tried to destroy a null or invalid window");
            return;
        }
        log::info!("destroying extra window {:?} (\"{}\")", self.id, self.title);
        self.backend = None;
        self.title.clear();
        self.valid = false;
    }

    // ---- input ----

    /// Advance this window's input snapshots by one frame.
    ///
    /// Call exactly once per window per frame, after the global event poll.
    /// Skipping a frame leaves edge detection stale; calling twice in one
    /// frame collapses press/release transitions.
    pub fn update_input(&mut self) {
        if !self.valid {
            return;
        }
        if let Some(backend) = self.backend.as_deref() {
            self.input.update(backend);
        }
    }

    /// Key is held down on the current snapshot.
    #[must_use]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.valid && self.input.key_down(key)
    }

    /// Key went down between the previous and current snapshots.
    #[must_use]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.valid && self.input.key_pressed(key)
    }

    /// Key went up between the previous and current snapshots.
    #[must_use]
    pub fn is_key_released(&self, key: Key) -> bool {
        self.valid && self.input.key_released(key)
    }

    /// Mouse button is held down on the current snapshot.
    #[must_use]
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.valid && self.input.button_down(button)
    }

    /// Mouse button went down between snapshots.
    #[must_use]
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.valid && self.input.button_pressed(button)
    }

    /// Mouse button went up between snapshots.
    #[must_use]
    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.valid && self.input.button_released(button)
    }

    /// Absolute cursor position in this window's client coordinates.
    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.backend().map_or_else(Vec2::zeros, |backend| {
            let (x, y) = backend.cursor_position();
            #[allow(clippy::cast_possible_truncation)]
            let position = Vec2::new(x as f32, y as f32);
            position
        })
    }

    /// Cursor movement between the last two input updates. Zero on the
    /// first update after creation.
    #[must_use]
    pub fn cursor_delta(&self) -> Vec2 {
        if self.valid {
            self.input.mouse_delta()
        } else {
            Vec2::zeros()
        }
    }

    /// Show the cursor and release any capture.
    pub fn enable_cursor(&mut self) {
        if let Some(backend) = self.edit_backend("enable_cursor") {
            backend.set_cursor_enabled(true);
        }
    }

    /// Hide and capture the cursor for this window.
    pub fn disable_cursor(&mut self) {
        if let Some(backend) = self.edit_backend("disable_cursor") {
            backend.set_cursor_enabled(false);
        }
    }

    // ---- info ----

    /// Current native position of the top-left corner.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        self.backend().map_or((0, 0), |backend| backend.position())
    }

    /// Current native client-area size in screen units.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.backend().map_or((0, 0), |backend| backend.size())
    }

    /// Whether the window has input focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.backend().is_some_and(|backend| backend.is_focused())
    }

    /// Whether the window is minimized.
    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.backend().is_some_and(|backend| backend.is_minimized())
    }

    /// Current window opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.backend().map_or(0.0, |backend| backend.opacity())
    }

    /// Content scale (DPI factor) per axis. Identity for invalid records.
    #[must_use]
    pub fn content_scale(&self) -> (f32, f32) {
        self.backend().map_or((1.0, 1.0), |backend| backend.content_scale())
    }

    // ---- editing ----

    /// Move the window so its top-left corner sits at `(x, y)`.
    pub fn set_position(&mut self, x: i32, y: i32) {
        if let Some(backend) = self.edit_backend("set_position") {
            backend.set_position(x, y);
        }
    }

    /// Resize the client area.
    ///
    /// Skips the native call when the requested size equals the cached
    /// requested size; otherwise resizes and updates the cache.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if !self.valid {
            log::warn!("set_size on an invalid window");
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        if let Some(backend) = self.backend.as_deref_mut() {
            backend.set_size(width, height);
            self.width = width;
            self.height = height;
        }
    }

    /// Replace the title text.
    pub fn set_title(&mut self, title: &str) {
        if !self.valid {
            log::warn!("set_title on an invalid window");
            return;
        }
        if let Some(backend) = self.backend.as_deref_mut() {
            backend.set_title(title);
            self.title.clear();
            self.title.push_str(title);
        }
    }

    /// Set window opacity; values are clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        if let Some(backend) = self.edit_backend("set_opacity") {
            backend.set_opacity(opacity.clamp(0.0, 1.0));
        }
    }

    /// Maximize the window.
    pub fn maximize(&mut self) {
        if let Some(backend) = self.edit_backend("maximize") {
            backend.maximize();
        }
    }

    /// Minimize (iconify) the window.
    pub fn minimize(&mut self) {
        if let Some(backend) = self.edit_backend("minimize") {
            backend.minimize();
        }
    }

    /// Restore from a maximized or minimized state.
    pub fn restore(&mut self) {
        if let Some(backend) = self.edit_backend("restore") {
            backend.restore();
        }
    }

    /// Apply a display attribute to the live window and record it.
    ///
    /// Fullscreen moves the window to the primary monitor at the cached
    /// requested size. Transparency only exists as a creation hint at the
    /// native layer; requesting it here records the flag and warns.
    pub fn set_flag(&mut self, flag: WindowFlags) {
        if !self.valid {
            log::warn!("set_flag on an invalid window");
            return;
        }
        self.flags |= flag;

        let (width, height) = (self.width, self.height);
        let Some(backend) = self.backend.as_deref_mut() else {
            return;
        };
        if flag.contains(WindowFlags::FULLSCREEN) {
            backend.enter_fullscreen(width, height);
        }
        if flag.contains(WindowFlags::RESIZABLE) {
            backend.set_resizable(true);
        }
        if flag.contains(WindowFlags::UNDECORATED) {
            backend.set_decorated(false);
        }
        if flag.contains(WindowFlags::TRANSPARENT) {
            log::warn!("transparent framebuffers can only be requested at creation");
        }
        if flag.contains(WindowFlags::ALWAYS_ON_TOP) {
            backend.set_floating(true);
        }
    }

    /// Reset the tracked attribute set to empty.
    ///
    /// Native attributes already applied are intentionally left in place;
    /// this clears bookkeeping, it does not revert the window.
    pub fn clear_flags(&mut self) {
        if !self.valid {
            log::warn!("clear_flags on an invalid window");
            return;
        }
        self.flags = WindowFlags::empty();
    }

    // ---- internal ----

    fn backend(&self) -> Option<&dyn WindowBackend> {
        if self.valid {
            self.backend.as_deref()
        } else {
            None
        }
    }

    fn edit_backend(&mut self, op: &str) -> Option<&mut (dyn WindowBackend + 'static)> {
        if !self.valid {
            log::warn!("{op} on an invalid window");
            return None;
        }
        self.backend.as_deref_mut()
    }

    /// Backend access for the context switch protocol.
    pub(crate) fn context_backend(&mut self) -> Option<&mut (dyn WindowBackend + 'static)> {
        if self.valid {
            self.backend.as_deref_mut()
        } else {
            None
        }
    }
}
