//! Command-line adjustments layered over a preset.

use duotone::{Color, ToneParameters};

use crate::error::HostError;
use crate::services::DuotoneSession;

/// Optional per-render adjustments, as entered on the command line.
///
/// Strength is a percentage (0-100). Everything is checked before the
/// session is touched, so a rejected override leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOverrides {
    pub shadow: Option<String>,
    pub highlight: Option<String>,
    pub strength_percent: Option<f32>,
    pub gamma: Option<f32>,
    pub contrast: Option<f32>,
    pub brightness: Option<f32>,
    /// Exchange the colors after the shadow/highlight overrides
    pub swap: bool,
}

impl RenderOverrides {
    /// Tone parameters from `base` with the numeric overrides applied.
    ///
    /// Values come from the user, so they are validated rather than clamped.
    pub fn params(&self, base: ToneParameters) -> Result<ToneParameters, HostError> {
        let mut params = base;
        if let Some(strength) = self.strength_percent {
            params.strength = strength / 100.0;
        }
        if let Some(gamma) = self.gamma {
            params.gamma = gamma;
        }
        if let Some(contrast) = self.contrast {
            params.contrast = contrast;
        }
        if let Some(brightness) = self.brightness {
            params.brightness = brightness;
        }
        params.validate()?;
        Ok(params)
    }

    /// Apply every override to `session`.
    pub fn apply(&self, session: &mut DuotoneSession) -> Result<(), HostError> {
        let shadow = parse_color("--shadow", self.shadow.as_deref())?;
        let highlight = parse_color("--highlight", self.highlight.as_deref())?;
        let params = self.params(*session.duotone().tone())?;

        if let Some(color) = shadow {
            session.set_shadow(color);
        }
        if let Some(color) = highlight {
            session.set_highlight(color);
        }
        session.set_params(params);
        if self.swap {
            session.swap_colors();
        }
        Ok(())
    }
}

fn parse_color(option: &'static str, value: Option<&str>) -> Result<Option<Color>, HostError> {
    value
        .map(|hex| {
            hex.parse().map_err(|source| HostError::InvalidColor {
                option,
                value: hex.to_string(),
                source,
            })
        })
        .transpose()
}
