//! Backend traits for the native windowing layer
//!
//! These traits are the internal contract between the window records, the
//! context switch protocol, and whatever actually owns native handles. They
//! are not part of the public API; applications only see `ExtraWindow` and
//! `WindowSystem`. Keeping the seam here lets every lifecycle, input, and
//! context-ordering property run against mock backends in tests.

use glfw::{Key, MouseButton};

use crate::error::WindowResult;
use crate::flags::WindowFlags;

/// Native operations on one window and its rendering context.
pub(crate) trait WindowBackend {
    /// Make this window's context current on the calling thread.
    fn make_current(&mut self);

    /// Present the back buffer.
    fn swap_buffers(&mut self);

    /// Native close-request flag.
    fn should_close(&self) -> bool;

    /// Client-area size in screen units.
    fn size(&self) -> (u32, u32);

    fn set_size(&mut self, width: u32, height: u32);

    /// Drawable size in pixels; differs from [`Self::size`] under display
    /// scaling.
    fn framebuffer_size(&self) -> (u32, u32);

    fn position(&self) -> (i32, i32);

    fn set_position(&mut self, x: i32, y: i32);

    fn set_title(&mut self, title: &str);

    fn opacity(&self) -> f32;

    fn set_opacity(&mut self, opacity: f32);

    /// Content scale (DPI factor) per axis.
    fn content_scale(&self) -> (f32, f32);

    fn is_focused(&self) -> bool;

    fn is_minimized(&self) -> bool;

    fn maximize(&mut self);

    fn minimize(&mut self);

    fn restore(&mut self);

    fn set_resizable(&mut self, resizable: bool);

    fn set_decorated(&mut self, decorated: bool);

    fn set_floating(&mut self, floating: bool);

    /// Move the window to fullscreen on the primary monitor at the given
    /// size and a fixed refresh target.
    fn enter_fullscreen(&mut self, width: u32, height: u32);

    /// Normal cursor when enabled, hidden-and-captured when disabled.
    fn set_cursor_enabled(&mut self, enabled: bool);

    /// Raw key state, true while held.
    fn key_down(&self, key: Key) -> bool;

    fn mouse_button_down(&self, button: MouseButton) -> bool;

    /// Absolute cursor position in client coordinates.
    fn cursor_position(&self) -> (f64, f64);
}

/// Process-level operations: event polling, window creation, and restoring
/// the primary context after an extra window's bracket ends.
pub(crate) trait Platform {
    /// Poll all pending native events, for every window at once.
    fn poll_events(&mut self);

    /// Create a native window with the given creation hints applied.
    ///
    /// On success the new window's context is left current so the caller
    /// can initialize renderer state for it; the caller is responsible for
    /// restoring the primary context afterwards.
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: WindowFlags,
    ) -> WindowResult<Box<dyn WindowBackend>>;

    /// Make the primary window's context current again.
    fn make_primary_current(&mut self);
}
