//! GLFW implementation of the backend seam

use glfw::Context;

use crate::error::{WindowError, WindowResult};
use crate::flags::WindowFlags;
use crate::window::backend::{Platform, WindowBackend};

/// Refresh target used when a window is moved to fullscreen.
const FULLSCREEN_REFRESH_HZ: u32 = 60;

/// GLFW-backed platform: owns the library handle and the primary window's
/// render context so the context switch protocol can restore it.
pub(crate) struct GlfwPlatform {
    glfw: glfw::Glfw,
    primary: glfw::PRenderContext,
}

impl GlfwPlatform {
    /// Bind to the primary window the host already created.
    pub(crate) fn new(primary: &mut glfw::Window) -> Self {
        Self {
            glfw: primary.glfw.clone(),
            primary: primary.render_context(),
        }
    }
}

impl Platform for GlfwPlatform {
    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: WindowFlags,
    ) -> WindowResult<Box<dyn WindowBackend>> {
        self.glfw.default_window_hints();
        // Non-resizable unless requested; resizing is explicit opt-in.
        self.glfw
            .window_hint(glfw::WindowHint::Resizable(hints.contains(WindowFlags::RESIZABLE)));
        if hints.contains(WindowFlags::UNDECORATED) {
            self.glfw.window_hint(glfw::WindowHint::Decorated(false));
        }
        if hints.contains(WindowFlags::TRANSPARENT) {
            self.glfw.window_hint(glfw::WindowHint::TransparentFramebuffer(true));
        }
        if hints.contains(WindowFlags::ALWAYS_ON_TOP) {
            self.glfw.window_hint(glfw::WindowHint::Floating(true));
        }

        let (mut window, events) = self
            .glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        // Input is read by polling device state each frame, so no
        // per-event subscriptions are enabled on the new window.

        // Leave the fresh context current for renderer setup; uncapped swap
        // so secondary presents never stall the primary loop.
        window.make_current();
        self.glfw.set_swap_interval(glfw::SwapInterval::None);

        Ok(Box::new(GlfwWindow {
            glfw: self.glfw.clone(),
            window,
            _events: events,
        }))
    }

    fn make_primary_current(&mut self) {
        self.primary.make_current();
    }
}

/// One GLFW window plus its context.
pub(crate) struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowBackend for GlfwWindow {
    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.window.set_size(width as i32, height as i32);
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    fn position(&self) -> (i32, i32) {
        self.window.get_pos()
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn opacity(&self) -> f32 {
        self.window.get_opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.window.set_opacity(opacity);
    }

    fn content_scale(&self) -> (f32, f32) {
        self.window.get_content_scale()
    }

    fn is_focused(&self) -> bool {
        self.window.is_focused()
    }

    fn is_minimized(&self) -> bool {
        self.window.is_iconified()
    }

    fn maximize(&mut self) {
        self.window.maximize();
    }

    fn minimize(&mut self) {
        self.window.iconify();
    }

    fn restore(&mut self) {
        self.window.restore();
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.window.set_resizable(resizable);
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.window.set_decorated(decorated);
    }

    fn set_floating(&mut self, floating: bool) {
        self.window.set_floating(floating);
    }

    fn enter_fullscreen(&mut self, width: u32, height: u32) {
        let window = &mut self.window;
        self.glfw.with_primary_monitor(|_, monitor| {
            if let Some(monitor) = monitor {
                window.set_monitor(
                    glfw::WindowMode::FullScreen(monitor),
                    0,
                    0,
                    width,
                    height,
                    Some(FULLSCREEN_REFRESH_HZ),
                );
            } else {
                log::warn!("no primary monitor available, staying windowed");
            }
        });
    }

    fn set_cursor_enabled(&mut self, enabled: bool) {
        let mode = if enabled {
            glfw::CursorMode::Normal
        } else {
            glfw::CursorMode::Disabled
        };
        self.window.set_cursor_mode(mode);
    }

    fn key_down(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }

    fn mouse_button_down(&self, button: glfw::MouseButton) -> bool {
        self.window.get_mouse_button(button) == glfw::Action::Press
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.window.get_cursor_pos()
    }
}
