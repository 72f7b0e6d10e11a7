use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use em_polarization::prelude::*;
use log::info;

/// Solve a plane wave and print its E/H arrows for each animation frame.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Propagation direction `x,y,z`.
    #[arg(long, default_value = "0,0,1", allow_hyphen_values = true)]
    direction: String,
    /// Real part of the electric amplitude `x,y,z`.
    #[arg(long, default_value = "0.5,0,0", allow_hyphen_values = true)]
    real: String,
    /// Imaginary part of the electric amplitude `x,y,z`.
    #[arg(long, default_value = "0,0.5,0", allow_hyphen_values = true)]
    imag: String,
    /// Wave impedance in ohms.
    #[arg(long, default_value = "2")]
    impedance: String,
    /// Relative permittivity; with `--mu-r`, replaces `--impedance` by the medium's √(μ/ε).
    #[arg(long)]
    eps_r: Option<f64>,
    /// Relative permeability (defaults to 1 when only `--eps-r` is given).
    #[arg(long)]
    mu_r: Option<f64>,
    /// Overall amplitude factor.
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,
    /// Frames per period.
    #[arg(long, default_value_t = DEFAULT_FRAMES_PER_PERIOD)]
    frames: u32,
    /// Delay between frames in milliseconds.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,
    /// Number of periods to play.
    #[arg(long, default_value_t = 1)]
    periods: u32,
    /// Sleep between frames like the live plot does.
    #[arg(long)]
    realtime: bool,
    /// Also write one period as CSV to this file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<(), PolarizationError> {
    env_logger::init();
    let args = Args::parse();

    let animation = AnimationConfig::new(args.frames, Duration::from_millis(args.interval_ms));
    let mut engine = PolarizationEngine::try_new(EngineConfig::with_animation(animation))?;

    let mut input = PlaneWaveInput::from_text(&args.direction, &args.real, &args.imag, &args.impedance)?
        .with_amplitude(args.amplitude);
    if args.eps_r.is_some() || args.mu_r.is_some() {
        let medium = MaterialProperties::relative(args.eps_r.unwrap_or(1.0), args.mu_r.unwrap_or(1.0));
        input = input.in_medium(&medium);
    }
    let state = engine.solve(&input)?;
    info!("solved wave with η = {}", state.impedance());

    if let Some(p) = engine.polarization() {
        println!(
            "polarization: {:?} {:?}, semi-axes {:.4}/{:.4}, tilt {:.2}°",
            p.kind,
            p.handedness,
            p.semi_major,
            p.semi_minor,
            p.tilt.to_degrees()
        );
    }

    if let Some(path) = &args.csv {
        write_period_csv(BufWriter::new(File::create(path)?), &state, args.frames)?;
        info!("wrote {}", path.display());
    }

    let bounds = engine.config().animation.bounds;
    let total = usize::try_from(args.frames.saturating_mul(args.periods)).unwrap_or(usize::MAX);
    println!("frame, phase(rad), Ex, Ey, Hx, Hy");
    for s in engine.animation()?.into_iter().flatten().take(total) {
        let (e, h) = (s.electric_arrow(), s.magnetic_arrow());
        let clipped = if bounds.contains(&e) && bounds.contains(&h) { "" } else { "  (outside plot)" };
        println!(
            "{:>3}, {:.4}, {:+.4}, {:+.4}, {:+.4}, {:+.4}{clipped}",
            s.frame, s.phase, e.x, e.y, h.x, h.y
        );
        if args.realtime {
            thread::sleep(animation.interval);
        }
    }
    Ok(())
}
