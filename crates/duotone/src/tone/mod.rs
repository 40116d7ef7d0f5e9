//! Tone parameters and the luminance correction curve.

mod curve;
mod params;

pub use curve::{contrast_factor, luma, tone_value, ToneCurve, LUMA_B, LUMA_G, LUMA_R};
pub use params::{ParameterError, ToneParameters, MIN_GAMMA};
