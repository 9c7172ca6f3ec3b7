/// RGBA color with non-premultiplied components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const INDIGO: Color = Color(0.35, 0.34, 0.84, 1.0);

    /// Neutral placeholder tone used by the shimmer surface.
    pub const SECONDARY: Color = Color(0.56, 0.56, 0.58, 1.0);

    pub fn red(&self) -> f32 {
        self.0
    }

    pub fn green(&self) -> f32 {
        self.1
    }

    pub fn blue(&self) -> f32 {
        self.2
    }

    pub fn alpha(&self) -> f32 {
        self.3
    }

    /// Returns the same color with its alpha replaced by `alpha`.
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color(self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }

    /// Fully transparent variant of this color.
    ///
    /// Gradients that fade "to clear" should fade to the transparent variant
    /// of their own color rather than to transparent black, otherwise the
    /// interpolation darkens mid-ramp.
    pub fn cleared(self) -> Color {
        self.with_alpha(0.0)
    }

    /// Converts to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.0),
            channel(self.1),
            channel(self.2),
            channel(self.3),
        ]
    }
}
