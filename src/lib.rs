#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and animation defaults.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared mathematical utilities (vectors, complex vectors, matrices).
pub mod math;
/// Lossless material parameters and intrinsic impedance.
pub mod materials;
/// Electric and magnetic phasors and the plane-wave solver.
pub mod fields;
/// Rodrigues rotation into the propagation-aligned frame.
pub mod rotation;
/// Immutable solved-and-rotated wave state.
pub mod state;
/// Phase sampling of a wave state.
pub mod sampling;
/// Engine and animation configuration.
pub mod config;
/// Endless frame iterator for the render loop.
pub mod animation;
/// Polarization ellipse and Stokes parameters.
pub mod polarization;
/// Parsing of user text input.
pub mod input;
/// Stateful engine owning the current wave.
pub mod engine;
/// Export helpers.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
