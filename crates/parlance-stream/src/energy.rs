//! Chunk volume measurement.

/// Root-mean-square level of a PCM chunk, normalized to 0..1 of full scale.
/// An empty chunk measures 0.
pub fn rms(chunk: &[i16]) -> f32 {
    if chunk.is_empty() {
        return 0.0;
    }
    let sum_squares: i64 = chunk
        .iter()
        .map(|&sample| {
            let s = sample as i64;
            s * s
        })
        .sum();
    let mean_square = sum_squares as f64 / chunk.len() as f64;
    (mean_square.sqrt() / 32768.0) as f32
}

/// RMS level in dBFS, for diagnostics.
pub fn rms_to_dbfs(rms: f32) -> f32 {
    if rms <= 1e-10 {
        return -100.0;
    }
    20.0 * rms.log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_measures_zero() {
        assert_eq!(rms(&vec![0i16; 512]), 0.0);
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn full_scale_measures_one() {
        let level = rms(&vec![32767i16; 512]);
        assert!((level - 1.0).abs() < 1e-3);
    }

    #[test]
    fn sine_wave_rms_is_peak_over_sqrt2() {
        let wave: Vec<i16> = (0..512)
            .map(|i| {
                let phase = 2.0 * std::f32::consts::PI * i as f32 / 512.0;
                (phase.sin() * 16384.0) as i16
            })
            .collect();
        let level = rms(&wave);
        assert!((level - 0.354).abs() < 0.01);
    }

    #[test]
    fn dbfs_of_silence_is_floor() {
        assert_eq!(rms_to_dbfs(0.0), -100.0);
    }
}
