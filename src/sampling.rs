//! Instantaneous field samples for one animation frame.

use crate::constants::frame_phase;
use crate::fields::Phasor;
use crate::math::{Scalar, R3};
use crate::state::WaveState;

/// Errors raised while sampling a wave state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// A period must contain at least one frame.
    #[error("frames per period must be at least 1")]
    ZeroFramesPerPeriod,
}

/// Tip of a 2D arrow drawn from the plot origin.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArrow {
    /// Horizontal component.
    pub x: Scalar,
    /// Vertical component.
    pub y: Scalar,
}

impl PlotArrow {
    /// Projects a vector onto the transverse plane, discarding `z`.
    #[must_use]
    pub fn project(v: &R3) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Arrow length.
    #[must_use]
    pub fn length(&self) -> Scalar {
        self.x.hypot(self.y)
    }
}

/// Real-valued fields at one phase of the period.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Frame index within the period, in `0..frames_per_period`.
    pub frame: u32,
    /// Phase φ in radians.
    pub phase: Scalar,
    /// `Re(E'·e^(jφ))`.
    pub electric: R3,
    /// `Re(H'·e^(jφ))`.
    pub magnetic: R3,
}

impl FieldSample {
    /// Electric arrow in the plot plane.
    #[must_use]
    pub fn electric_arrow(&self) -> PlotArrow {
        PlotArrow::project(&self.electric)
    }

    /// Magnetic arrow in the plot plane.
    #[must_use]
    pub fn magnetic_arrow(&self) -> PlotArrow {
        PlotArrow::project(&self.magnetic)
    }

    /// Largest out-of-plane component; zero up to rounding for rotated states.
    #[must_use]
    pub fn transverse_residual(&self) -> Scalar {
        self.electric.z.abs().max(self.magnetic.z.abs())
    }
}

/// Samples `state` at `frame` of a period divided into `frames_per_period` steps.
///
/// Frames are reduced modulo the period first, so `frame` and
/// `frame + k·frames_per_period` give identical samples for any integer `k`.
///
/// # Errors
///
/// Returns [`SampleError::ZeroFramesPerPeriod`] when `frames_per_period == 0`.
pub fn sample(state: &WaveState, frame: i64, frames_per_period: u32) -> Result<FieldSample, SampleError> {
    if frames_per_period == 0 {
        return Err(SampleError::ZeroFramesPerPeriod);
    }
    // Non-negative and below frames_per_period, so the cast is lossless.
    let frame = frame.rem_euclid(i64::from(frames_per_period)) as u32;
    let phase = frame_phase(frame, frames_per_period);

    Ok(FieldSample {
        frame,
        phase,
        electric: state.electric().instantaneous(phase),
        magnetic: state.magnetic().instantaneous(phase),
    })
}
