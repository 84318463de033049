//! Bounce movement for the roaming window
//!
//! Pure state stepping, kept free of windowing calls so the reflection and
//! color-toggle behavior is testable frame by frame.

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// First palette entry for the roaming window.
pub const ORANGE: Color = Color { r: 255, g: 161, b: 0, a: 255 };
/// Second palette entry, swapped in on every bounce.
pub const VIOLET: Color = Color { r: 135, g: 60, b: 190, a: 255 };

/// A window that wanders the desktop and reflects off its edges.
pub struct Bouncer {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub size: (f32, f32),
    pub bounds: (f32, f32),
    pub color: Color,
}

impl Bouncer {
    pub fn new(position: (f32, f32), speed: f32, size: (f32, f32), bounds: (f32, f32)) -> Self {
        Self {
            position,
            velocity: (speed, speed),
            size,
            bounds,
            color: ORANGE,
        }
    }

    /// Advance one frame; returns true if any edge was hit.
    ///
    /// Each axis moves, then reflects when the leading edge passes the
    /// desktop bound (or the trailing edge passes zero). Every reflection
    /// toggles the color, so a corner hit toggles twice and lands back on
    /// the color it started with.
    pub fn step(&mut self) -> bool {
        let mut bounced = false;

        self.position.0 += self.velocity.0;
        if self.position.0 >= self.bounds.0 - self.size.0 || self.position.0 <= 0.0 {
            self.velocity.0 = -self.velocity.0;
            self.toggle_color();
            bounced = true;
        }

        self.position.1 += self.velocity.1;
        if self.position.1 >= self.bounds.1 - self.size.1 || self.position.1 <= 0.0 {
            self.velocity.1 = -self.velocity.1;
            self.toggle_color();
            bounced = true;
        }

        bounced
    }

    /// The blue channel distinguishes the two palette entries.
    fn toggle_color(&mut self) {
        self.color = if self.color.b == ORANGE.b { VIOLET } else { ORANGE };
    }
}
