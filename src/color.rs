#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White text faded over a black background: 0.0 is black, 1.0 is white.
    pub fn gray(alpha: f32) -> Self {
        let v = intensity(alpha);
        Self::new(v, v, v)
    }

    /// Converts HSV (all components in `[0, 1]`) to RGB. Channels are
    /// truncated, not rounded, so full saturation stays at 255.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }
}

/// Grayscale intensity for an opacity value.
pub fn intensity(alpha: f32) -> u8 {
    (255.0 * alpha.clamp(0.0, 1.0)).round() as u8
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
