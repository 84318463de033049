//! Display attribute flags for extra windows

use bitflags::bitflags;

bitflags! {
    /// Display attributes of an extra window.
    ///
    /// Accumulated through [`crate::WindowSystem::hint`] before creation or
    /// applied afterwards with [`crate::ExtraWindow::set_flag`]. The tracked
    /// set reflects what was applied through this API, not native truth.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        /// Fullscreen on the primary monitor. No pre-creation hint
        /// equivalent exists; apply it after creation.
        const FULLSCREEN = 1 << 0;
        /// User-driven resizing. Windows are non-resizable unless this is
        /// requested explicitly.
        const RESIZABLE = 1 << 1;
        /// No title bar or border.
        const UNDECORATED = 1 << 2;
        /// Transparent framebuffer. Only honored as a creation hint.
        const TRANSPARENT = 1 << 3;
        /// Keep the window above all others.
        const ALWAYS_ON_TOP = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_accumulate() {
        let mut flags = WindowFlags::default();
        assert!(flags.is_empty());

        flags |= WindowFlags::RESIZABLE;
        flags |= WindowFlags::UNDECORATED;
        assert!(flags.contains(WindowFlags::RESIZABLE));
        assert!(flags.contains(WindowFlags::UNDECORATED));
        assert!(!flags.contains(WindowFlags::FULLSCREEN));
    }
}
