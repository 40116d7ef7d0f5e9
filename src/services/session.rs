//! Interactive recoloring session.
//!
//! A session owns the working buffer for one image and recomputes the
//! duotone output only when asked. Parameter setters just record the new
//! state and mark the output stale; [`DuotoneSession::render`] does the
//! work. Scheduling (debouncing rapid slider changes, for instance) is up
//! to the caller.

use std::time::Instant;

use duotone::{Color, Duotone, PixelBuffer, ToneParameters};

use crate::error::HostError;
use crate::models::Preset;
use crate::rendering::fit_to_max;

pub struct DuotoneSession {
    working: PixelBuffer,
    output: PixelBuffer,
    duotone: Duotone,
    default_preset: Preset,
    stale: bool,
}

impl DuotoneSession {
    /// Start a session: fit `source` within `max_dimension` and render once
    /// with `preset`, which also becomes the target of [`reset`](Self::reset).
    pub fn new(source: PixelBuffer, max_dimension: u32, preset: Preset) -> Result<Self, HostError> {
        let working = fit_to_max(&source, max_dimension)?;
        tracing::info!(
            source_width = source.width(),
            source_height = source.height(),
            width = working.width(),
            height = working.height(),
            "Loaded working buffer"
        );

        let duotone = preset.duotone();
        let output = duotone.apply(&working);

        Ok(Self {
            working,
            output,
            duotone,
            default_preset: preset,
            stale: false,
        })
    }

    /// The (possibly downscaled) buffer every render reads from.
    pub fn working(&self) -> &PixelBuffer {
        &self.working
    }

    /// The most recent render. May be stale; see [`is_stale`](Self::is_stale).
    pub fn output(&self) -> &PixelBuffer {
        &self.output
    }

    /// Whether settings changed since the last render.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn duotone(&self) -> &Duotone {
        &self.duotone
    }

    pub fn set_shadow(&mut self, color: Color) {
        self.update(self.duotone.shadow(color));
    }

    pub fn set_highlight(&mut self, color: Color) {
        self.update(self.duotone.highlight(color));
    }

    pub fn set_params(&mut self, params: ToneParameters) {
        self.update(self.duotone.params(params));
    }

    /// Exchange shadow and highlight.
    pub fn swap_colors(&mut self) {
        self.update(self.duotone.swap());
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.update(preset.duotone());
    }

    /// Return to the preset the session was started with.
    pub fn reset(&mut self) {
        let preset = self.default_preset;
        self.apply_preset(&preset);
    }

    /// Recompute the output if any setting changed, then return it.
    pub fn render(&mut self) -> &PixelBuffer {
        if self.stale {
            let started = Instant::now();
            self.output = self.duotone.apply(&self.working);
            self.stale = false;
            tracing::debug!(
                width = self.output.width(),
                height = self.output.height(),
                shadow = %self.duotone.shadow_color(),
                highlight = %self.duotone.highlight_color(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Rendered duotone"
            );
        }
        &self.output
    }

    fn update(&mut self, duotone: Duotone) {
        if duotone != self.duotone {
            self.duotone = duotone;
            self.stale = true;
        }
    }
}
