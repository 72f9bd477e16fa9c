//! The zoom factor applied when painting a mind map.

use std::fmt;

use log::trace;

/// A zoom factor that is always within [`Zoom::MIN`]..=[`Zoom::MAX`].
///
/// Every constructor and step operation clamps, so a `Zoom` can never hold an
/// out-of-range value regardless of how many steps are applied.
///
/// # Examples
///
/// ```
/// # use ramify_core::zoom::Zoom;
/// let mut zoom = Zoom::default();
/// for _ in 0..50 {
///     zoom.zoom_in();
/// }
/// assert_eq!(zoom.factor(), Zoom::MAX);
/// assert_eq!(Zoom::new(0.1).factor(), Zoom::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Zoom(f32);

impl Zoom {
    /// Smallest allowed factor (half scale).
    pub const MIN: f32 = 0.5;
    /// Largest allowed factor (double scale).
    pub const MAX: f32 = 2.0;
    /// Increment applied by [`Zoom::zoom_in`] and [`Zoom::zoom_out`].
    pub const STEP: f32 = 0.1;

    /// Creates a zoom factor, clamping it into range. NaN maps to 1.0.
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the zoom factor.
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Returns the factor as a rounded percentage, e.g. `150` for 1.5.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// Increases the factor by one step.
    pub fn zoom_in(&mut self) {
        *self = Self::new(self.0 + Self::STEP);
        trace!(zoom = self.0; "Zoomed in");
    }

    /// Decreases the factor by one step.
    pub fn zoom_out(&mut self) {
        *self = Self::new(self.0 - Self::STEP);
        trace!(zoom = self.0; "Zoomed out");
    }

    /// Restores the factor to 1.0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_approx_eq!(f32, Zoom::new(0.0).factor(), 0.5);
        assert_approx_eq!(f32, Zoom::new(10.0).factor(), 2.0);
        assert_approx_eq!(f32, Zoom::new(1.3).factor(), 1.3);
        assert_approx_eq!(f32, Zoom::new(f32::NAN).factor(), 1.0);
    }

    #[test]
    fn test_steps() {
        let mut zoom = Zoom::default();
        zoom.zoom_in();
        assert_eq!(zoom.percent(), 110);
        zoom.zoom_out();
        zoom.zoom_out();
        assert_eq!(zoom.percent(), 90);
        zoom.reset();
        assert_approx_eq!(f32, zoom.factor(), 1.0);
    }

    #[test]
    fn test_display_percent() {
        assert_eq!(Zoom::new(1.5).to_string(), "150%");
    }

    #[test]
    fn test_zoom_out_stops_at_min() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom.zoom_out();
        }
        assert_approx_eq!(f32, zoom.factor(), Zoom::MIN);
    }
}
