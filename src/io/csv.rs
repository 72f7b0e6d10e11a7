//! CSV export of animation frames.

use std::io::{self, Write};

use crate::sampling::{sample, FieldSample, SampleError};
use crate::state::WaveState;

/// Column header written by [`write_samples_csv`].
pub const CSV_HEADER: &str = "frame,phase,ex,ey,ez,hx,hy,hz";

/// Writes one row per sample, preceded by [`CSV_HEADER`].
pub fn write_samples_csv<W, I>(mut w: W, samples: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = FieldSample>,
{
    writeln!(w, "{CSV_HEADER}")?;
    for s in samples {
        writeln!(
            w,
            "{},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            s.frame,
            s.phase,
            s.electric.x,
            s.electric.y,
            s.electric.z,
            s.magnetic.x,
            s.magnetic.y,
            s.magnetic.z
        )?;
    }
    Ok(())
}

/// Writes the `frames_per_period` samples of one full period of `state`.
///
/// A zero frame count is reported as [`io::ErrorKind::InvalidInput`].
pub fn write_period_csv<W: Write>(w: W, state: &WaveState, frames_per_period: u32) -> io::Result<()> {
    if frames_per_period == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            SampleError::ZeroFramesPerPeriod,
        ));
    }
    let samples = (0..frames_per_period)
        .map(|frame| sample(state, i64::from(frame), frames_per_period))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    write_samples_csv(w, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PolarizationEngine;
    use crate::input::PlaneWaveInput;

    #[test]
    fn writes_header_and_one_row_per_frame() {
        let mut engine = PolarizationEngine::default();
        let state = engine.solve(&PlaneWaveInput::default()).unwrap();
        let mut out = Vec::new();
        write_period_csv(&mut out, &state, 4).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("0,0.0000000000000000e0,5.0000000000000000e-1,"));
        assert!(lines[4].starts_with("3,"));
    }

    #[test]
    fn zero_frames_is_invalid_input() {
        let mut engine = PolarizationEngine::default();
        let state = engine.solve(&PlaneWaveInput::default()).unwrap();
        let err = write_period_csv(Vec::new(), &state, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
