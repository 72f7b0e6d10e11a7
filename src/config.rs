//! Engine and animation configuration.

use std::time::Duration;

use crate::constants::{
    DEFAULT_FRAMES_PER_PERIOD, DEFAULT_FRAME_INTERVAL, DEFAULT_ORTHOGONALITY_TOLERANCE,
    DEFAULT_PLOT_LIMIT, DEFAULT_POLARIZATION_TOLERANCE,
};
use crate::math::Scalar;
use crate::sampling::PlotArrow;

/// Errors raised when a configuration is internally inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A period must contain at least one frame.
    #[error("frames per period must be at least 1")]
    ZeroFrames,
    /// Frames must be spaced by a positive delay.
    #[error("frame interval must be non-zero")]
    ZeroInterval,
    /// Plot ranges must be finite with `min < max`.
    #[error("invalid plot range [{min}, {max}]")]
    InvalidBounds {
        /// Lower end.
        min: Scalar,
        /// Upper end.
        max: Scalar,
    },
    /// Tolerances must be finite and non-negative.
    #[error("invalid tolerance {name}: {value}")]
    InvalidTolerance {
        /// Which tolerance.
        name: &'static str,
        /// Rejected value.
        value: Scalar,
    },
}

/// Fixed axis ranges of the 2D plot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    /// Horizontal range `(min, max)`.
    pub x: (Scalar, Scalar),
    /// Vertical range `(min, max)`.
    pub y: (Scalar, Scalar),
}

impl PlotBounds {
    /// Square window `[-limit, limit]²`.
    #[must_use]
    pub fn symmetric(limit: Scalar) -> Self {
        Self {
            x: (-limit, limit),
            y: (-limit, limit),
        }
    }

    /// True when the arrow tip lies inside the window (edges included).
    #[must_use]
    pub fn contains(&self, arrow: &PlotArrow) -> bool {
        (self.x.0..=self.x.1).contains(&arrow.x) && (self.y.0..=self.y.1).contains(&arrow.y)
    }

    /// Checks that both ranges are finite and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] for the first offending range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &(min, max) in &[self.x, self.y] {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(ConfigError::InvalidBounds { min, max });
            }
        }
        Ok(())
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self::symmetric(DEFAULT_PLOT_LIMIT)
    }
}

/// Timing and layout of the animation loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Number of equally spaced phases per period.
    pub frames_per_period: u32,
    /// Delay between consecutive frames.
    pub interval: Duration,
    /// Fixed plot window.
    pub bounds: PlotBounds,
}

impl AnimationConfig {
    /// Animation with `frames_per_period` frames spaced by `interval`.
    #[must_use]
    pub fn new(frames_per_period: u32, interval: Duration) -> Self {
        Self {
            frames_per_period,
            interval,
            bounds: PlotBounds::default(),
        }
    }

    /// Replaces the plot window.
    #[must_use]
    pub fn with_bounds(mut self, bounds: PlotBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Wall-clock duration of one full period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.interval * self.frames_per_period
    }

    /// Checks frame count, interval and plot window.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames_per_period == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        self.bounds.validate()
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES_PER_PERIOD, DEFAULT_FRAME_INTERVAL)
    }
}

/// Settings of a [`PolarizationEngine`](crate::engine::PolarizationEngine).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Relative bound on `|E·a| / (‖E‖‖a‖)`; `0.0` demands exact orthogonality.
    pub orthogonality_tolerance: Scalar,
    /// Relative tolerance used to classify the polarization ellipse.
    pub polarization_tolerance: Scalar,
    /// Animation settings.
    pub animation: AnimationConfig,
}

impl EngineConfig {
    /// Default configuration with a custom animation.
    #[must_use]
    pub fn with_animation(animation: AnimationConfig) -> Self {
        Self {
            animation,
            ..Self::default()
        }
    }

    /// Replaces the orthogonality tolerance.
    #[must_use]
    pub fn with_orthogonality_tolerance(mut self, tolerance: Scalar) -> Self {
        self.orthogonality_tolerance = tolerance;
        self
    }

    /// Checks tolerances and the animation settings.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("orthogonality", self.orthogonality_tolerance),
            ("polarization", self.polarization_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        self.animation.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            orthogonality_tolerance: DEFAULT_ORTHOGONALITY_TOLERANCE,
            polarization_tolerance: DEFAULT_POLARIZATION_TOLERANCE,
            animation: AnimationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_ten_frames_at_100ms() {
        let config = EngineConfig::default();
        assert_eq!(config.animation.frames_per_period, 10);
        assert_eq!(config.animation.interval, Duration::from_millis(100));
        assert_eq!(config.animation.period(), Duration::from_secs(1));
        assert_eq!(config.animation.bounds, PlotBounds::symmetric(1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inconsistent_settings() {
        assert_eq!(
            AnimationConfig::new(0, Duration::from_millis(10)).validate(),
            Err(ConfigError::ZeroFrames)
        );
        assert_eq!(
            AnimationConfig::new(4, Duration::ZERO).validate(),
            Err(ConfigError::ZeroInterval)
        );
        let flipped = PlotBounds {
            x: (1.0, -1.0),
            y: (-1.0, 1.0),
        };
        assert_eq!(
            AnimationConfig::default().with_bounds(flipped).validate(),
            Err(ConfigError::InvalidBounds { min: 1.0, max: -1.0 })
        );
        assert!(matches!(
            EngineConfig::default().with_orthogonality_tolerance(-1.0).validate(),
            Err(ConfigError::InvalidTolerance { name: "orthogonality", .. })
        ));
    }

    #[test]
    fn bounds_include_edges() {
        let bounds = PlotBounds::default();
        assert!(bounds.contains(&PlotArrow { x: 1.0, y: -1.0 }));
        assert!(!bounds.contains(&PlotArrow { x: 1.0001, y: 0.0 }));
    }
}
