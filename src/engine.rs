//! Stateful front door used by the rendering loop.
//!
//! [`PolarizationEngine`] owns the most recent successfully solved
//! [`WaveState`]. A solve either swaps in a complete new state or fails and
//! leaves the current one untouched, so the animation keeps drawing the last
//! valid wave.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::animation::Animation;
use crate::config::{ConfigError, EngineConfig};
use crate::fields::{solve_plane_wave, SolveError};
use crate::input::PlaneWaveInput;
use crate::polarization::PolarizationEllipse;
use crate::sampling::{sample, FieldSample, SampleError};
use crate::state::WaveState;

/// Owner of the current wave state.
#[derive(Debug, Clone, Default)]
pub struct PolarizationEngine {
    config: EngineConfig,
    state: Option<Arc<WaveState>>,
}

impl PolarizationEngine {
    /// Creates an engine without a state.
    ///
    /// `config` is not validated; see [`Self::try_new`]. An unusable frame
    /// count is still reported by [`Self::sample`] and [`Self::animation`].
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config, state: None }
    }

    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is inconsistent.
    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Solves `input`, rotates the result and makes it the current state.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] and keeps the previous state when the input is
    /// rejected.
    pub fn solve(&mut self, input: &PlaneWaveInput) -> Result<Arc<WaveState>, SolveError> {
        let solution = solve_plane_wave(
            &input.direction,
            &input.electric_field(),
            input.impedance(),
            self.config.orthogonality_tolerance,
        )
        .inspect_err(|err| {
            warn!("solve rejected, keeping previous state: {err}");
        })?;

        let state = Arc::new(WaveState::from_solution(solution));
        debug!(
            "frame rotation: angle = {:.6} rad, axis = {:?}",
            state.rotation().angle(),
            state.rotation().axis().as_slice()
        );
        if self.state.replace(Arc::clone(&state)).is_some() {
            info!("replaced wave state");
        } else {
            info!("initial wave state ready");
        }
        Ok(state)
    }

    /// Current state, if any solve has succeeded.
    #[must_use]
    pub fn state(&self) -> Option<Arc<WaveState>> {
        self.state.clone()
    }

    /// Samples the current state at `frame` using the configured frame count.
    ///
    /// Returns `Ok(None)` before the first successful solve.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] when the configured frame count is zero.
    pub fn sample(&self, frame: i64) -> Result<Option<FieldSample>, SampleError> {
        self.state
            .as_ref()
            .map(|state| sample(state, frame, self.config.animation.frames_per_period))
            .transpose()
    }

    /// Endless animation over a snapshot of the current state.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] when the configured frame count is zero.
    pub fn animation(&self) -> Result<Option<Animation>, SampleError> {
        self.state
            .clone()
            .map(|state| Animation::new(state, &self.config.animation))
            .transpose()
    }

    /// Polarization ellipse of the current state.
    #[must_use]
    pub fn polarization(&self) -> Option<PolarizationEllipse> {
        self.state
            .as_deref()
            .map(|state| PolarizationEllipse::of_state(state, self.config.polarization_tolerance))
    }
}
