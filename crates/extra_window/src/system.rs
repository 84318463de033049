//! The window system: lifecycle and context switching
//!
//! [`WindowSystem`] owns the platform seam, the render bridge, and the
//! staged creation hints. It creates and tears down extra windows and runs
//! the context switch protocol that brackets each window's draw calls:
//! `begin_drawing` makes the window's context current and re-establishes
//! 2D drawing state for its framebuffer, `end_drawing` presents and
//! restores the primary context.
//!
//! The bracket discipline is a caller obligation: one `begin_drawing` per
//! window, matched by one `end_drawing`, never nested, and no primary
//! drawing in between. Debug builds track the active context and assert on
//! misuse; release builds do not defend.

use crate::config::WindowConfig;
use crate::error::{WindowError, WindowResult};
use crate::flags::WindowFlags;
use crate::math::{ortho_projection, Mat4};
use crate::render::RenderBackend;
use crate::window::backend::Platform;
use crate::window::glfw::GlfwPlatform;
use crate::window::{ExtraWindow, WindowId};

/// Initialize the windowing capability layer.
///
/// Call exactly once, before creating any window; the host builds its
/// primary window from the returned handle. Native errors are reported
/// through the log rather than aborting.
pub fn init_windowing() -> WindowResult<glfw::Glfw> {
    glfw::init(glfw::log_errors).map_err(|_| WindowError::InitializationFailed)
}

/// Which rendering context is current on the frame-loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveContext {
    Primary,
    Extra(WindowId),
}

/// Manager for all extra windows: creation hints, lifecycle, event
/// polling, and the drawing bracket.
pub struct WindowSystem {
    platform: Box<dyn Platform>,
    renderer: Box<dyn RenderBackend>,
    pending_hints: WindowFlags,
    active: ActiveContext,
    next_id: u64,
}

impl WindowSystem {
    /// Bind the system to the host's primary window.
    ///
    /// Call once, after the primary window exists and its context is
    /// current, before any extra-window operation. The system keeps a
    /// handle to the primary context so every drawing bracket can restore
    /// it.
    pub fn init(primary: &mut glfw::Window, renderer: Box<dyn RenderBackend>) -> Self {
        log::info!("extra-window system initialized");
        Self::with_platform(Box::new(GlfwPlatform::new(primary)), renderer)
    }

    pub(crate) fn with_platform(
        platform: Box<dyn Platform>,
        renderer: Box<dyn RenderBackend>,
    ) -> Self {
        Self {
            platform,
            renderer,
            pending_hints: WindowFlags::empty(),
            active: ActiveContext::Primary,
            next_id: 0,
        }
    }

    /// Stage display attributes for the next window creation.
    ///
    /// Hints accumulate until the next [`WindowSystem::create_window`]
    /// call, which consumes them; they never leak into later creations.
    /// Fullscreen has no creation-hint equivalent at the native layer and
    /// is only recorded in the new window's flags.
    pub fn hint(&mut self, flags: WindowFlags) {
        self.pending_hints |= flags;
    }

    /// Attributes currently staged for the next creation.
    #[must_use]
    pub const fn pending_hints(&self) -> WindowFlags {
        self.pending_hints
    }

    /// Create an extra window, consuming the staged hints.
    ///
    /// The new window's context is made current just long enough to set up
    /// private renderer state for it; the primary context is current again
    /// when this returns. On native failure this logs an error and returns
    /// an invalid record, so check [`ExtraWindow::is_valid`] before use.
    pub fn create_window(&mut self, width: u32, height: u32, title: &str) -> ExtraWindow {
        let hints = std::mem::take(&mut self.pending_hints);
        self.build_window(width, height, title, hints)
    }

    /// Create an extra window from an explicit configuration.
    ///
    /// Staged hints are neither applied nor consumed; the configuration is
    /// the whole description.
    pub fn create_window_from_config(&mut self, config: &WindowConfig) -> ExtraWindow {
        self.build_window(config.width, config.height, &config.title, config.flags())
    }

    fn build_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: WindowFlags,
    ) -> ExtraWindow {
        match self.platform.create_window(width, height, title, hints) {
            Ok(backend) => {
                // The fresh context is current here: hand the renderer its
                // private per-context state, then restore the primary.
                let (fb_width, fb_height) = backend.framebuffer_size();
                self.renderer.init_context(width, height);
                self.renderer.viewport(0, 0, fb_width, fb_height);
                self.platform.make_primary_current();

                self.next_id += 1;
                let id = WindowId::from_raw(self.next_id);
                log::info!("created extra window {id:?} ({width}x{height}, \"{title}\")");
                ExtraWindow::new(id, backend, width, height, title, hints)
            }
            Err(err) => {
                log::error!("extra window creation failed: {err}");
                ExtraWindow::invalid()
            }
        }
    }

    /// Poll all pending native events for every window at once.
    ///
    /// Call once per frame, before the per-window input updates.
    pub fn poll_events(&mut self) {
        self.platform.poll_events();
    }

    /// Make `window`'s context the active drawing target.
    ///
    /// Re-reads the framebuffer size (pixels can differ from logical size
    /// under display scaling), sets the viewport to the full framebuffer,
    /// and installs an orthographic projection with an identity model-view
    /// so 2D drawing works in that window regardless of the primary
    /// window's matrices. No-op for invalid records.
    pub fn begin_drawing(&mut self, window: &mut ExtraWindow) {
        let id = window.id();
        let Some(backend) = window.context_backend() else {
            return;
        };
        debug_assert!(
            self.active == ActiveContext::Primary,
            "begin_drawing({id:?}) while {:?} is still active",
            self.active,
        );

        backend.make_current();
        let (fb_width, fb_height) = backend.framebuffer_size();
        self.renderer.viewport(0, 0, fb_width, fb_height);
        self.renderer.set_projection(&ortho_projection(fb_width, fb_height));
        self.renderer.set_modelview(&Mat4::identity());
        self.active = ActiveContext::Extra(id);
    }

    /// Present `window`'s back buffer and restore the primary context.
    ///
    /// Must pair with the `begin_drawing` on the same window. No-op for
    /// invalid records.
    pub fn end_drawing(&mut self, window: &mut ExtraWindow) {
        let id = window.id();
        let Some(backend) = window.context_backend() else {
            return;
        };
        debug_assert!(
            self.active == ActiveContext::Extra(id),
            "end_drawing({id:?}) while {:?} is active",
            self.active,
        );

        backend.swap_buffers();
        self.platform.make_primary_current();
        self.active = ActiveContext::Primary;
    }

    /// Tear the system down.
    ///
    /// Call after every extra window has been closed; the capability layer
    /// itself shuts down when the host releases its own handles.
    pub fn shutdown(self) {
        debug_assert!(
            self.active == ActiveContext::Primary,
            "shutdown inside a drawing bracket",
        );
        log::info!("extra-window system shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::window::mock::{ContextLog, MockPlatform, PlatformShared};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordedFrame {
        viewport: (i32, i32, u32, u32),
        projection: Mat4,
        modelview: Mat4,
    }

    /// Render bridge that keeps everything it was told.
    #[derive(Default)]
    struct RecordingRenderer {
        inits: Rc<RefCell<Vec<(u32, u32)>>>,
        frames: Rc<RefCell<Vec<RecordedFrame>>>,
        last_viewport: Rc<RefCell<Option<(i32, i32, u32, u32)>>>,
    }

    impl RenderBackend for RecordingRenderer {
        fn init_context(&mut self, width: u32, height: u32) {
            self.inits.borrow_mut().push((width, height));
        }

        fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
            *self.last_viewport.borrow_mut() = Some((x, y, width, height));
        }

        fn set_projection(&mut self, projection: &Mat4) {
            let viewport = self.last_viewport.borrow().expect("viewport before projection");
            self.frames.borrow_mut().push(RecordedFrame {
                viewport,
                projection: *projection,
                modelview: Mat4::zeros(),
            });
        }

        fn set_modelview(&mut self, modelview: &Mat4) {
            if let Some(frame) = self.frames.borrow_mut().last_mut() {
                frame.modelview = *modelview;
            }
        }
    }

    fn test_system() -> (
        WindowSystem,
        Rc<RefCell<PlatformShared>>,
        ContextLog,
        RecordingRenderer,
    ) {
        let (platform, shared, log) = MockPlatform::new();
        let renderer = RecordingRenderer::default();
        let handle = RecordingRenderer {
            inits: Rc::clone(&renderer.inits),
            frames: Rc::clone(&renderer.frames),
            last_viewport: Rc::clone(&renderer.last_viewport),
        };
        let system = WindowSystem::with_platform(Box::new(platform), Box::new(renderer));
        (system, shared, log, handle)
    }

    #[test]
    fn test_creation_initializes_renderer_then_restores_primary() {
        let (mut system, _shared, log, renderer) = test_system();
        let window = system.create_window(300, 300, "Second Window");

        assert!(window.is_valid());
        assert_eq!(renderer.inits.borrow().as_slice(), &[(300, 300)]);
        // Context went to the new window for setup, then back to primary.
        assert_eq!(log.borrow().as_slice(), &["current:w1", "current:primary"]);
    }

    #[test]
    fn test_failed_creation_returns_invalid_record() {
        let (mut system, shared, _log, renderer) = test_system();
        shared.borrow_mut().fail_next_create = true;

        let window = system.create_window(300, 300, "Doomed");
        assert!(!window.is_valid());
        assert!(renderer.inits.borrow().is_empty());
    }

    #[test]
    fn test_hints_are_consumed_by_exactly_one_creation() {
        let (mut system, shared, _log, _renderer) = test_system();
        system.hint(WindowFlags::RESIZABLE);
        system.hint(WindowFlags::UNDECORATED);
        assert_eq!(
            system.pending_hints(),
            WindowFlags::RESIZABLE | WindowFlags::UNDECORATED
        );

        let first = system.create_window(300, 300, "First");
        assert_eq!(
            first.flags(),
            WindowFlags::RESIZABLE | WindowFlags::UNDECORATED
        );
        assert!(system.pending_hints().is_empty());

        let second = system.create_window(300, 300, "Second");
        assert!(second.flags().is_empty());

        let hints = &shared.borrow().creation_hints;
        assert_eq!(hints[0], WindowFlags::RESIZABLE | WindowFlags::UNDECORATED);
        assert!(hints[1].is_empty());
    }

    #[test]
    fn test_hints_consumed_even_when_creation_fails() {
        let (mut system, shared, _log, _renderer) = test_system();
        shared.borrow_mut().fail_next_create = true;
        system.hint(WindowFlags::RESIZABLE);

        let window = system.create_window(300, 300, "Doomed");
        assert!(!window.is_valid());
        assert!(system.pending_hints().is_empty());
    }

    #[test]
    fn test_config_creation_ignores_staged_hints() {
        let (mut system, shared, _log, _renderer) = test_system();
        system.hint(WindowFlags::ALWAYS_ON_TOP);

        let config = WindowConfig {
            width: 150,
            height: 150,
            title: "Third Window".to_string(),
            undecorated: true,
            ..WindowConfig::default()
        };
        let window = system.create_window_from_config(&config);
        assert_eq!(window.flags(), WindowFlags::UNDECORATED);
        // Staged hints survive for the next plain creation.
        assert_eq!(system.pending_hints(), WindowFlags::ALWAYS_ON_TOP);
        assert_eq!(shared.borrow().creation_hints[0], WindowFlags::UNDECORATED);
    }

    #[test]
    fn test_bracket_restores_primary_context() {
        let (mut system, _shared, log, _renderer) = test_system();
        let mut window = system.create_window(300, 300, "Second Window");
        log.borrow_mut().clear();

        system.begin_drawing(&mut window);
        system.end_drawing(&mut window);

        assert_eq!(
            log.borrow().as_slice(),
            &["current:w1", "swap:w1", "current:primary"]
        );
    }

    #[test]
    fn test_bracket_installs_window_local_projection() {
        let (mut system, shared, _log, renderer) = test_system();
        let mut window = system.create_window(300, 300, "Second Window");

        // Display scaling: framebuffer twice the logical size.
        shared.borrow_mut().windows[0].borrow_mut().framebuffer = (600, 600);

        system.begin_drawing(&mut window);
        system.end_drawing(&mut window);

        let frames = renderer.frames.borrow();
        let frame = frames.last().expect("bracket recorded a frame");
        assert_eq!(frame.viewport, (0, 0, 600, 600));
        assert_eq!(frame.projection, ortho_projection(600, 600));
        assert_eq!(frame.modelview, Mat4::identity());
    }

    #[test]
    fn test_sequential_brackets_do_not_leak_state() {
        let (mut system, shared, log, renderer) = test_system();
        let mut first = system.create_window(300, 300, "Second Window");
        let mut second = system.create_window(150, 150, "Third Window");
        shared.borrow_mut().windows[1].borrow_mut().framebuffer = (150, 150);
        log.borrow_mut().clear();

        system.begin_drawing(&mut first);
        system.end_drawing(&mut first);
        system.begin_drawing(&mut second);
        system.end_drawing(&mut second);

        assert_eq!(
            log.borrow().as_slice(),
            &[
                "current:w1",
                "swap:w1",
                "current:primary",
                "current:w2",
                "swap:w2",
                "current:primary",
            ]
        );

        // The second bracket re-read its own framebuffer; nothing carried
        // over from the first window's 300x300 state.
        let frames = renderer.frames.borrow();
        let frame = frames.last().expect("second bracket recorded");
        assert_eq!(frame.viewport, (0, 0, 150, 150));
        assert_eq!(frame.projection, ortho_projection(150, 150));
    }

    #[test]
    fn test_bracket_on_invalid_window_is_inert() {
        let (mut system, _shared, log, _renderer) = test_system();
        let mut window = ExtraWindow::invalid();
        log.borrow_mut().clear();

        system.begin_drawing(&mut window);
        system.end_drawing(&mut window);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_close_inside_frame_loop_shape() {
        // The demo's loop shape: poll, input, bracket, close at the end.
        let (mut system, _shared, log, _renderer) = test_system();
        let mut window = system.create_window(300, 300, "Second Window");

        system.poll_events();
        window.update_input();
        system.begin_drawing(&mut window);
        system.end_drawing(&mut window);
        window.close();
        system.shutdown();

        assert!(log.borrow().iter().any(|entry| entry == "destroy:w1"));
    }
}
