//! Tone-mapping parameters and their validation.

use thiserror::Error;

/// Smallest exponent the gamma step will use.
pub const MIN_GAMMA: f32 = 0.01;

/// Error returned by [`ToneParameters::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A parameter lies outside its documented domain
    #[error("{name} = {value} is outside {range}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        range: &'static str,
    },
}

/// Parameters controlling how luminance is corrected and blended.
///
/// # Defaults
///
/// The default is the identity tone: full strength, gamma 1.0, no contrast
/// or brightness change. With these settings black maps exactly to the
/// shadow color and white to the highlight color.
///
/// # Out-of-range values
///
/// The transform clamps every field into its documented range before use
/// (see [`clamped()`](Self::clamped)). Callers that prefer to reject bad
/// input can call [`validate()`](Self::validate) first.
///
/// # Example
///
/// ```
/// use duotone::ToneParameters;
///
/// let params = ToneParameters::new()
///     .strength(0.9)
///     .gamma(1.2)
///     .contrast(10.0)
///     .brightness(-5.0);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParameters {
    /// Blend between the original pixel (0.0) and the mapped color (1.0).
    pub strength: f32,

    /// Exponent applied to the corrected luminance. Must be positive;
    /// the useful range is about 0.2..=3.0.
    pub gamma: f32,

    /// Contrast adjustment in -100..=100.
    pub contrast: f32,

    /// Additive brightness in -100..=100, applied as `brightness / 100`.
    pub brightness: f32,
}

impl Default for ToneParameters {
    fn default() -> Self {
        Self {
            strength: 1.0,
            gamma: 1.0,
            contrast: 0.0,
            brightness: 0.0,
        }
    }
}

impl ToneParameters {
    /// Identity tone parameters, same as `ToneParameters::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The "Brave Pink" look: 90% strength with a slight contrast boost.
    pub fn brave_pink() -> Self {
        Self {
            strength: 0.9,
            gamma: 1.0,
            contrast: 10.0,
            brightness: 0.0,
        }
    }

    /// Set blend strength (0.0..=1.0).
    #[inline]
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Set gamma exponent.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set contrast (-100..=100).
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Set brightness (-100..=100).
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Return a copy with every field forced into its documented range.
    ///
    /// Non-finite values fall back to the identity value for that field.
    /// Gamma is floored at [`MIN_GAMMA`]; contrast is kept in -100..=100,
    /// well away from the pole of the contrast factor at 259.
    pub fn clamped(&self) -> Self {
        Self {
            strength: finite_or(self.strength, 1.0).clamp(0.0, 1.0),
            gamma: finite_or(self.gamma, 1.0).max(MIN_GAMMA),
            contrast: finite_or(self.contrast, 0.0).clamp(-100.0, 100.0),
            brightness: finite_or(self.brightness, 0.0).clamp(-100.0, 100.0),
        }
    }

    /// Check every field against its documented domain.
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check("strength", self.strength, "[0, 1]", |v| {
            (0.0..=1.0).contains(&v)
        })?;
        check("gamma", self.gamma, "(0, inf)", |v| v > 0.0 && v.is_finite())?;
        check("contrast", self.contrast, "[-100, 100]", |v| {
            (-100.0..=100.0).contains(&v)
        })?;
        check("brightness", self.brightness, "[-100, 100]", |v| {
            (-100.0..=100.0).contains(&v)
        })?;
        Ok(())
    }
}

#[inline]
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn check(
    name: &'static str,
    value: f32,
    range: &'static str,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ParameterError> {
    if ok(value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange { name, value, range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let params = ToneParameters::default();
        assert!((params.strength - 1.0).abs() < f32::EPSILON);
        assert!((params.gamma - 1.0).abs() < f32::EPSILON);
        assert_eq!(params.contrast, 0.0);
        assert_eq!(params.brightness, 0.0);
        assert_eq!(ToneParameters::new(), params);
    }

    #[test]
    fn test_brave_pink_preset() {
        let params = ToneParameters::brave_pink();
        assert!((params.strength - 0.9).abs() < f32::EPSILON);
        assert!((params.contrast - 10.0).abs() < f32::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let params = ToneParameters::new()
            .strength(0.5)
            .gamma(2.0)
            .contrast(-20.0)
            .brightness(15.0);
        assert!((params.strength - 0.5).abs() < f32::EPSILON);
        assert!((params.gamma - 2.0).abs() < f32::EPSILON);
        assert!((params.contrast + 20.0).abs() < f32::EPSILON);
        assert!((params.brightness - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clamped_forces_ranges() {
        let params = ToneParameters::new()
            .strength(1.5)
            .gamma(0.0)
            .contrast(300.0)
            .brightness(-250.0)
            .clamped();
        assert_eq!(params.strength, 1.0);
        assert_eq!(params.gamma, MIN_GAMMA);
        assert_eq!(params.contrast, 100.0);
        assert_eq!(params.brightness, -100.0);

        let negative_gamma = ToneParameters::new().gamma(-3.0).clamped();
        assert_eq!(negative_gamma.gamma, MIN_GAMMA);
    }

    #[test]
    fn test_clamped_replaces_non_finite() {
        let params = ToneParameters::new()
            .strength(f32::NAN)
            .gamma(f32::INFINITY)
            .contrast(f32::NEG_INFINITY)
            .brightness(f32::NAN)
            .clamped();
        assert_eq!(params, ToneParameters::default());
    }

    #[test]
    fn test_clamped_keeps_valid_values() {
        let params = ToneParameters::brave_pink().gamma(0.2);
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn test_validate_reports_field() {
        let err = ToneParameters::new().contrast(259.0).validate().unwrap_err();
        assert_eq!(
            err,
            ParameterError::OutOfRange {
                name: "contrast",
                value: 259.0,
                range: "[-100, 100]",
            }
        );
        assert_eq!(err.to_string(), "contrast = 259 is outside [-100, 100]");

        assert!(ToneParameters::new().gamma(0.0).validate().is_err());
        assert!(ToneParameters::new().strength(-0.1).validate().is_err());
        assert!(ToneParameters::new()
            .brightness(f32::NAN)
            .validate()
            .is_err());
    }
}
