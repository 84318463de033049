//! Render bridge
//!
//! The crate never issues draw calls itself; the host's rendering library
//! does. [`RenderBackend`] is the narrow seam between the two: when a
//! window's context becomes current, the bridge receives the viewport and
//! matrix state that re-establishes 2D drawing semantics for that window.
//!
//! Implementors can assume every call arrives with the context it targets
//! already current on the calling thread, so `init_context` is the right
//! place to load function pointers or build per-context pipeline state.

use crate::math::Mat4;

/// Host-renderer operations driven by the context switch protocol.
pub trait RenderBackend {
    /// Set up fresh renderer-internal state for a newly created context.
    ///
    /// Called exactly once per window, with that window's context current,
    /// before the primary context is restored. `width` and `height` are the
    /// logical creation size.
    fn init_context(&mut self, width: u32, height: u32);

    /// Set the viewport in framebuffer pixels.
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Install a projection matrix.
    fn set_projection(&mut self, projection: &Mat4);

    /// Install a model-view matrix.
    fn set_modelview(&mut self, modelview: &Mat4);
}

/// Bridge for hosts that configure viewport and matrices entirely inside
/// their own renderer. Traces every call and otherwise does nothing.
pub struct NullRenderer;

impl RenderBackend for NullRenderer {
    fn init_context(&mut self, width: u32, height: u32) {
        log::trace!("render bridge: init context {width}x{height}");
    }

    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        log::trace!("render bridge: viewport {x},{y} {width}x{height}");
    }

    fn set_projection(&mut self, _projection: &Mat4) {
        log::trace!("render bridge: projection updated");
    }

    fn set_modelview(&mut self, _modelview: &Mat4) {
        log::trace!("render bridge: model-view updated");
    }
}
