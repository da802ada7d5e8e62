use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::SpectralResult;
use crate::error::{DataError, Result};

/// Time between consecutive samples, in the same unit the frequency axis is the inverse of.
pub const SAMPLE_INTERVAL: f64 = 0.01;

pub const FREQUENCY_LABEL: &str = "frequency";
pub const FOURIER_LABEL: &str = "fourier";

/// Unnormalised forward DFT of `signal`, bins in standard order (DC first,
/// positive frequencies, then negative ones). Nothing is reordered or reduced.
pub fn fourier(signal: &[f64]) -> Result<SpectralResult> {
    if signal.is_empty() {
        return Err(DataError::EmptyInput);
    }
    let n = signal.len();

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    Ok(SpectralResult {
        frequencies: fftfreq(n, SAMPLE_INTERVAL),
        coefficients: buffer,
        x_label: FREQUENCY_LABEL,
        y_label: FOURIER_LABEL,
    })
}

/// Frequency of each DFT bin for `n` samples spaced `interval` apart.
///
/// `[0, 1, …, ⌈n/2⌉-1, -⌊n/2⌋, …, -1] / (n * interval)`
pub fn fftfreq(n: usize, interval: f64) -> Vec<f64> {
    let span = n as f64 * interval;
    let positive = n.div_ceil(2);
    (0..n)
        .map(|i| {
            let k = if i < positive {
                i as f64
            } else {
                i as f64 - n as f64
            };
            k / span
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, samples: usize) -> Vec<f64> {
        (0..samples)
            .map(|i| {
                let t = i as f64 * SAMPLE_INTERVAL;
                (1000.0 * (2.0 * std::f64::consts::PI * freq * t).sin()).round()
            })
            .collect()
    }

    #[test]
    fn test_fftfreq_even() {
        let f = fftfreq(4, 0.25);
        assert_eq!(f, vec![0.0, 1.0, -2.0, -1.0]);
    }

    #[test]
    fn test_fftfreq_odd() {
        let f = fftfreq(5, 0.01);
        let expected = [0.0, 20.0, 40.0, -40.0, -20.0];
        for (got, want) in f.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn test_fftfreq_single() {
        assert_eq!(fftfreq(1, SAMPLE_INTERVAL), vec![0.0]);
    }

    #[test]
    fn test_dc_bin_is_sum() {
        let result = fourier(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((result.coefficients[0].re - 10.0).abs() < 1e-9);
        assert!(result.coefficients[0].im.abs() < 1e-9);
    }

    #[test]
    fn test_sine_peak_at_source_frequency() {
        let f0 = 5.0;
        let result = fourier(&sine(f0, 200)).unwrap();
        let magnitudes: Vec<f64> = result.coefficients.iter().map(|c| c.norm()).collect();

        let half = result.frequencies.len() / 2;
        let peak = (1..half)
            .max_by(|&a, &b| magnitudes[a].total_cmp(&magnitudes[b]))
            .unwrap();
        let nearest = (1..half)
            .min_by(|&a, &b| {
                (result.frequencies[a] - f0)
                    .abs()
                    .total_cmp(&(result.frequencies[b] - f0).abs())
            })
            .unwrap();
        assert_eq!(peak, nearest);
        assert!((result.frequencies[peak] - f0).abs() < 1e-9);
    }

    #[test]
    fn test_output_lengths_and_labels() {
        let result = fourier(&[104.0, 103.0, 102.0, 101.0, 100.0]).unwrap();
        assert_eq!(result.frequencies.len(), 5);
        assert_eq!(result.coefficients.len(), 5);
        assert_eq!(result.x_label, "frequency");
        assert_eq!(result.y_label, "fourier");
    }

    #[test]
    fn test_bit_identical_on_repeat() {
        let signal = sine(3.0, 97);
        let a = fourier(&signal).unwrap();
        let b = fourier(&signal).unwrap();
        let bits = |r: &SpectralResult| {
            r.coefficients
                .iter()
                .flat_map(|c| [c.re.to_bits(), c.im.to_bits()])
                .chain(r.frequencies.iter().map(|f| f.to_bits()))
                .collect::<Vec<u64>>()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(fourier(&[]), Err(DataError::EmptyInput)));
    }
}
