//! Convenience re-exports for driving the engine.

pub use crate::animation::Animation;
pub use crate::config::{AnimationConfig, ConfigError, EngineConfig, PlotBounds};
pub use crate::constants::*;
pub use crate::engine::PolarizationEngine;
pub use crate::errors::PolarizationError;
pub use crate::fields::{solve_plane_wave, ElectricField, MagneticField, Phasor, PlaneWaveSolution, SolveError};
pub use crate::input::{parse_scalar, parse_triplet, ParseError, PlaneWaveInput};
pub use crate::io::{write_period_csv, write_samples_csv};
pub use crate::materials::MaterialProperties;
pub use crate::math::{phasor, CScalar, Scalar, C3, R3, R3x3};
pub use crate::polarization::{Handedness, PolarizationEllipse, PolarizationKind, StokesParameters};
pub use crate::rotation::{rotate, rodrigues, FrameRotation};
pub use crate::sampling::{sample, FieldSample, PlotArrow, SampleError};
pub use crate::state::WaveState;
pub use crate::units::{Impedance, Ohm, Quantity, Unit};
