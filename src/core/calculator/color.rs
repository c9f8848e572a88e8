use std::fmt;

/// Light teal: colour of the first session of a day.
pub const ANCHOR_START: Rgb = Rgb::new(0xb8, 0xf2, 0xe6);

/// Light lavender: colour of the last session of a day.
pub const ANCHOR_END: Rgb = Rgb::new(0xee, 0xbb, 0xee);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0..=1.0 (PDF colour operators).
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Linear interpolation in RGB space; channels are truncated.
    pub fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
        Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Colour of the `index`-th of `count` rendered sessions of one day.
pub fn session_color(index: usize, count: usize) -> Rgb {
    if count <= 1 {
        return ANCHOR_START;
    }
    if index + 1 >= count {
        return ANCHOR_END;
    }
    Rgb::lerp(ANCHOR_START, ANCHOR_END, index as f64 / (count - 1) as f64)
}

/// Gradient for a whole day column.
pub fn day_gradient(count: usize) -> Vec<Rgb> {
    (0..count).map(|i| session_color(i, count)).collect()
}
