//! Endless frame sequence driving the plot.

use std::sync::Arc;

use crate::config::AnimationConfig;
use crate::sampling::{sample, FieldSample, SampleError};
use crate::state::WaveState;

/// Infinite iterator of samples that restarts at frame 0 after every period.
///
/// The iterator holds its own handle on the state, so a concurrent re-solve
/// does not affect frames already being produced.
#[derive(Debug, Clone)]
pub struct Animation {
    state: Arc<WaveState>,
    frames_per_period: u32,
    next_frame: u32,
}

impl Animation {
    /// Animates `state` with the frame count of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::ZeroFramesPerPeriod`] if the period is empty.
    pub fn new(state: Arc<WaveState>, config: &AnimationConfig) -> Result<Self, SampleError> {
        if config.frames_per_period == 0 {
            return Err(SampleError::ZeroFramesPerPeriod);
        }
        Ok(Self {
            state,
            frames_per_period: config.frames_per_period,
            next_frame: 0,
        })
    }

    /// State being animated.
    #[must_use]
    pub fn state(&self) -> &Arc<WaveState> {
        &self.state
    }

    /// Samples of a single period, in frame order.
    #[must_use]
    pub fn period(&self) -> Vec<FieldSample> {
        let mut one = Self {
            next_frame: 0,
            ..self.clone()
        };
        (0..self.frames_per_period).filter_map(|_| one.next()).collect()
    }
}

impl Iterator for Animation {
    type Item = FieldSample;

    fn next(&mut self) -> Option<Self::Item> {
        let current = sample(&self.state, i64::from(self.next_frame), self.frames_per_period).ok()?;
        self.next_frame = (self.next_frame + 1) % self.frames_per_period;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
