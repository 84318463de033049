//! # Extra Window
//!
//! Secondary windows for a primary graphics application, each with its own
//! rendering context and input state, driven from a single-threaded frame
//! loop.
//!
//! The host keeps its main window and renderer; this crate manages any
//! number of additional windows next to it. Each extra window owns a native
//! handle, a private rendering context, double-buffered keyboard/mouse
//! snapshots, and a set of display attributes. The [`WindowSystem`] switches
//! the active context into an extra window for its draw calls and restores
//! the primary context afterwards, so the main window's own drawing remains
//! valid.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use extra_window::{NullRenderer, WindowFlags, WindowSystem};
//! use glfw::Context;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut glfw = extra_window::init_windowing()?;
//!     let (mut main_window, _events) = glfw
//!         .create_window(600, 600, "Main Window", glfw::WindowMode::Windowed)
//!         .ok_or("main window creation failed")?;
//!     main_window.make_current();
//!
//!     let mut system = WindowSystem::init(&mut main_window, Box::new(NullRenderer));
//!     system.hint(WindowFlags::RESIZABLE);
//!     let mut side = system.create_window(300, 300, "Side Window");
//!
//!     while !main_window.should_close() && !side.should_close() {
//!         system.poll_events();
//!         side.update_input();
//!
//!         system.begin_drawing(&mut side);
//!         // issue draw calls through your renderer here
//!         system.end_drawing(&mut side);
//!
//!         main_window.swap_buffers();
//!     }
//!
//!     side.close();
//!     system.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod math;
pub mod render;
pub mod system;
pub mod window;

mod input;

pub use config::{ConfigError, WindowConfig};
pub use error::{WindowError, WindowResult};
pub use flags::WindowFlags;
pub use render::{NullRenderer, RenderBackend};
pub use system::{init_windowing, WindowSystem};
pub use window::{ExtraWindow, WindowId};

/// Common imports for applications embedding the window system.
pub mod prelude {
    pub use crate::{
        ExtraWindow, NullRenderer, RenderBackend, WindowConfig, WindowError, WindowFlags,
        WindowId, WindowResult, WindowSystem,
    };
}
