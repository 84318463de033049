//! Multi-window bounce demo
//!
//! Opens a main window plus two extra windows: one reacts to input focused
//! on it (hold Space to lift the pad against gravity), the other roams the
//! desktop, reflecting off the edges and toggling its color on every
//! bounce. Draw calls belong to the host renderer; the demo wires up the
//! null bridge and exercises the full per-frame protocol: global event
//! poll, per-window input updates, and a begin/end drawing bracket per
//! window with the primary context restored in between.

#![allow(dead_code)] // Allow unused fields in structs for demo purposes

mod bounce;

use bounce::{Bouncer, ORANGE};
use extra_window::{NullRenderer, WindowConfig, WindowFlags, WindowSystem};
use glfw::{Context, Key};

const DESKTOP_BOUNDS: (f32, f32) = (1366.0, 768.0);
const ROAMER_SIZE: f32 = 150.0;
const ROAM_SPEED: f32 = 5.0;
const PAD_LIFT_PER_FRAME: f32 = 25.0;
const PAD_GRAVITY_PER_FRAME: f32 = 1.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    extra_window::logging::init();

    let mut glfw = extra_window::init_windowing()?;
    let (mut main_window, _main_events) = glfw
        .create_window(600, 600, "Main Window", glfw::WindowMode::Windowed)
        .ok_or("failed to create the main window")?;
    main_window.make_current();
    glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

    let mut system = WindowSystem::init(&mut main_window, Box::new(NullRenderer));

    // The pad window takes its setup from bounce_app.toml when present.
    let pad_config = WindowConfig::from_toml_file("bounce_app.toml").unwrap_or_else(|_| {
        WindowConfig {
            width: 300,
            height: 300,
            title: "Second Window".to_string(),
            ..WindowConfig::default()
        }
    });
    let mut pad_window = system.create_window_from_config(&pad_config);

    system.hint(WindowFlags::UNDECORATED);
    let mut roam_window = system.create_window(150, 150, "Third Window");

    let mut roamer = Bouncer::new(
        (683.0, 384.0),
        ROAM_SPEED,
        (ROAMER_SIZE, ROAMER_SIZE),
        DESKTOP_BOUNDS,
    );
    set_window_position(&mut roam_window, roamer.position);

    // The pad sinks every frame and lifts while Space is held.
    let mut pad_y = 100.0f32;

    while !main_window.should_close()
        && !pad_window.should_close()
        && !roam_window.should_close()
    {
        system.poll_events();
        pad_window.update_input();
        roam_window.update_input();

        if pad_window.is_key_down(Key::Space) {
            pad_y -= PAD_LIFT_PER_FRAME;
        }
        pad_y += PAD_GRAVITY_PER_FRAME;
        log::trace!("pad rectangle at y = {pad_y:.0}");

        if roamer.step() {
            let name = if roamer.color.b == ORANGE.b { "orange" } else { "violet" };
            log::info!("bounce at {:?}, color is now {name}", roamer.position);
            roam_window.set_title(&format!("Third Window ({name})"));
        }
        set_window_position(&mut roam_window, roamer.position);

        // The main window draws through the host renderer; only its
        // present belongs to the demo.
        main_window.swap_buffers();

        system.begin_drawing(&mut pad_window);
        // host draw calls for the pad rectangle at (100, pad_y) go here
        system.end_drawing(&mut pad_window);

        system.begin_drawing(&mut roam_window);
        // host draw calls clearing to roamer.color go here
        system.end_drawing(&mut roam_window);
    }

    roam_window.close();
    pad_window.close();
    system.shutdown();
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn set_window_position(window: &mut extra_window::ExtraWindow, position: (f32, f32)) {
    window.set_position(position.0 as i32, position.1 as i32);
}
