use crate::{
    foundation::core::{Bpm, Point},
    foundation::error::{BeatpathError, BeatpathResult},
    foundation::math::wrap01,
    geometry::sampler::SampledCurve,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tunables for trail animation.
pub struct TrailConfig {
    /// Heartbeats per full path traversal.
    #[serde(default = "default_beats_per_cycle")]
    pub beats_per_cycle: f64,
    /// Lowest BPM the cycle math will accept; invalid or lower signals clamp
    /// to this.
    #[serde(default = "default_bpm_floor")]
    pub bpm_floor: f64,
    /// Fraction of the path length between consecutive trail particles.
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Size of the lead particle.
    #[serde(default = "default_base_size")]
    pub base_size: f64,
    /// Linear size shrink per particle along the tail.
    #[serde(default = "default_size_decay")]
    pub size_decay: f64,
    /// Opacity falloff divisor headroom; values above 1 keep even the last
    /// particle's opacity above zero.
    #[serde(default = "default_fade_headroom")]
    pub fade_headroom: f64,
}

fn default_beats_per_cycle() -> f64 {
    4.0
}

fn default_bpm_floor() -> f64 {
    40.0
}

fn default_spacing() -> f64 {
    0.015
}

fn default_base_size() -> f64 {
    8.0
}

fn default_size_decay() -> f64 {
    0.5
}

fn default_fade_headroom() -> f64 {
    1.2
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            beats_per_cycle: default_beats_per_cycle(),
            bpm_floor: default_bpm_floor(),
            spacing: default_spacing(),
            base_size: default_base_size(),
            size_decay: default_size_decay(),
            fade_headroom: default_fade_headroom(),
        }
    }
}

impl TrailConfig {
    /// Check field ranges.
    pub fn validate(&self) -> BeatpathResult<()> {
        if !(self.beats_per_cycle.is_finite() && self.beats_per_cycle > 0.0) {
            return Err(BeatpathError::validation(
                "beats_per_cycle must be finite and > 0",
            ));
        }
        if !(self.bpm_floor.is_finite() && self.bpm_floor > 0.0) {
            return Err(BeatpathError::validation("bpm_floor must be finite and > 0"));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(BeatpathError::validation("spacing must be finite and >= 0"));
        }
        if !(self.base_size.is_finite() && self.base_size >= 0.0) {
            return Err(BeatpathError::validation(
                "base_size must be finite and >= 0",
            ));
        }
        if !(self.size_decay.is_finite() && self.size_decay >= 0.0) {
            return Err(BeatpathError::validation(
                "size_decay must be finite and >= 0",
            ));
        }
        if !(self.fade_headroom.is_finite() && self.fade_headroom > 0.0) {
            return Err(BeatpathError::validation(
                "fade_headroom must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One rendered trail marker for the current frame.
///
/// Ephemeral: recomputed fresh on every [`TrailAnimator::animate`] call,
/// never stored across frames.
pub struct TrailParticle {
    /// Position in the trail; 0 is the lead particle.
    pub index: usize,
    /// Normalized arc-length position in [0, 1).
    pub progress: f64,
    /// Resolved point on the curve.
    pub point: Point,
    /// Visual weight, brightest at the lead and monotonically decreasing.
    pub opacity: f64,
    /// Marker size after linear tail shrink, never negative.
    pub size: f64,
    /// Whether this is the lead particle (hosts draw its bright core).
    pub is_lead: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Maps wall-clock time and a BPM signal to trail particle positions.
///
/// Stateless: every output is a pure function of
/// `(curve, bpm, now, count)`, so frames may be computed out of order or
/// recomputed redundantly, and nothing needs resetting when the path or BPM
/// changes.
pub struct TrailAnimator {
    config: TrailConfig,
}

impl TrailAnimator {
    /// Build an animator over a validated config.
    pub fn new(config: TrailConfig) -> BeatpathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active config.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Seconds for one full path traversal at the given BPM.
    ///
    /// Doubling the BPM halves the cycle. The BPM floor keeps zero/negative/
    /// NaN input from stalling the animation or dividing by zero.
    pub fn cycle_seconds(&self, bpm: Bpm) -> f64 {
        (60.0 / bpm.floored(self.config.bpm_floor)) * self.config.beats_per_cycle
    }

    /// Lead particle's normalized position at `now_secs`, in [0, 1).
    ///
    /// Derived by wrapping `now / cycle`, so the animation loops indefinitely
    /// without accumulating timer state regardless of how large `now_secs`
    /// grows. Non-finite timestamps read as 0.
    pub fn base_progress(&self, bpm: Bpm, now_secs: f64) -> f64 {
        wrap01(now_secs / self.cycle_seconds(bpm))
    }

    /// Compute all trail particles for one frame.
    ///
    /// Particle `i` sits `i * spacing` behind the lead, wrapped into [0, 1)
    /// so the tail flows smoothly across the path's start/end join, with
    /// linearly decaying opacity and size. `count == 0` yields an empty
    /// vector; a degenerate curve collapses every particle onto its fallback
    /// origin.
    pub fn animate(
        &self,
        curve: &SampledCurve,
        bpm: Bpm,
        now_secs: f64,
        count: usize,
    ) -> Vec<TrailParticle> {
        let base = self.base_progress(bpm, now_secs);
        let fade_denom = (count as f64) * self.config.fade_headroom;

        (0..count)
            .map(|index| {
                let i = index as f64;
                let progress = wrap01(base - i * self.config.spacing);
                TrailParticle {
                    index,
                    progress,
                    point: curve.point_at(progress),
                    opacity: 1.0 - i / fade_denom,
                    size: (self.config.base_size - i * self.config.size_decay).max(0.0),
                    is_lead: index == 0,
                }
            })
            .collect()
    }
}

/// Compute one frame of trail particles with the default [`TrailConfig`].
pub fn animate_trail(
    curve: &SampledCurve,
    bpm: Bpm,
    now_secs: f64,
    count: usize,
) -> Vec<TrailParticle> {
    TrailAnimator::default().animate(curve, bpm, now_secs, count)
}

#[cfg(test)]
#[path = "../../tests/unit/trail/animator.rs"]
mod tests;
