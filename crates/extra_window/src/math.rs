//! Math types and projection helpers
//!
//! Thin aliases over nalgebra plus the orthographic projection used when a
//! window's context becomes the active drawing target.

pub use nalgebra::{Matrix4, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Orthographic projection covering one window's framebuffer.
///
/// Maps framebuffer pixels to clip space with the origin at the top-left
/// corner and y growing downward, the conventional 2D drawing setup. Depth
/// spans `[0, 1]`.
#[must_use]
pub fn ortho_projection(width: u32, height: u32) -> Mat4 {
    Mat4::new_orthographic(0.0, width as f32, height as f32, 0.0, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_ortho_maps_framebuffer_corners_to_clip_corners() {
        let proj = ortho_projection(800, 600);

        let top_left = proj.transform_point(&Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = proj.transform_point(&Point3::new(800.0, 600.0, 0.0));
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }

    #[test]
    fn test_ortho_tracks_framebuffer_not_logical_size() {
        // Under 2x display scaling the framebuffer is twice the logical
        // size; the projection must follow the framebuffer.
        let logical = ortho_projection(400, 300);
        let scaled = ortho_projection(800, 600);

        let center_logical = logical.transform_point(&Point3::new(200.0, 150.0, 0.0));
        let center_scaled = scaled.transform_point(&Point3::new(400.0, 300.0, 0.0));
        assert_relative_eq!(center_logical.x, 0.0);
        assert_relative_eq!(center_scaled.x, 0.0);
        assert_relative_eq!(center_logical.y, 0.0);
        assert_relative_eq!(center_scaled.y, 0.0);
    }
}
