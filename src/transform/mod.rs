//! Transforms that turn one selected column into an (x, y) series for the detail plot.

pub mod fourier;

use std::fmt;

use rustfft::num_complex::Complex;

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// SpectralResult – output of a transform
// ---------------------------------------------------------------------------

/// Frequency bins and the matching complex coefficients, plus axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralResult {
    pub frequencies: Vec<f64>,
    pub coefficients: Vec<Complex<f64>>,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// Widen loaded integer cells into a signal the transforms accept.
pub fn to_signal(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

// ---------------------------------------------------------------------------
// Transform registry
// ---------------------------------------------------------------------------

pub type TransformFn = fn(&[f64]) -> Result<SpectralResult>;

/// A transform as offered to the user: display name and function.
#[derive(Clone, Copy)]
pub struct Transformation {
    pub name: &'static str,
    pub function: TransformFn,
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Transformation {
    pub fn apply(&self, signal: &[f64]) -> Result<SpectralResult> {
        (self.function)(signal)
    }
}

/// Named transforms in registration order.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    entries: Vec<Transformation>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let mut registry = TransformRegistry::empty();
        registry.register("Fourier", fourier::fourier);
        registry
    }
}

impl TransformRegistry {
    pub fn empty() -> Self {
        TransformRegistry {
            entries: Vec::new(),
        }
    }

    /// Add a transform. Registering an existing name replaces its function.
    pub fn register(&mut self, name: &'static str, function: TransformFn) {
        match self.entries.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.function = function,
            None => self.entries.push(Transformation { name, function }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Transformation> {
        self.entries.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transformation> {
        self.entries.iter()
    }

    /// Run the transform called `name` on `signal`.
    pub fn apply(&self, name: &str, signal: &[f64]) -> Result<SpectralResult> {
        let transform = self
            .get(name)
            .ok_or_else(|| DataError::UnknownTransform(name.to_string()))?;
        transform.apply(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(signal: &[f64]) -> Result<SpectralResult> {
        Ok(SpectralResult {
            frequencies: (0..signal.len()).map(|i| i as f64).collect(),
            coefficients: signal.iter().map(|&v| Complex::new(v, 0.0)).collect(),
            x_label: "sample",
            y_label: "value",
        })
    }

    #[test]
    fn test_default_has_only_fourier() {
        let registry = TransformRegistry::default();
        let names: Vec<_> = registry.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Fourier"]);
        let result = registry.apply("Fourier", &[1.0, 0.0, -1.0, 0.0]).unwrap();
        assert_eq!(result.frequencies.len(), 4);
        assert_eq!(result.x_label, fourier::FREQUENCY_LABEL);
    }

    #[test]
    fn test_register_new_transform() {
        let mut registry = TransformRegistry::default();
        registry.register("Identity", identity);
        let names: Vec<_> = registry.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Fourier", "Identity"]);
        let result = registry.apply("Identity", &[3.0, 4.0]).unwrap();
        let magnitudes: Vec<f64> = result.coefficients.iter().map(|c| c.norm()).collect();
        assert_eq!(magnitudes, vec![3.0, 4.0]);
    }

    #[test]
    fn test_register_same_name_replaces() {
        let mut registry = TransformRegistry::default();
        registry.register("Fourier", identity);
        assert_eq!(registry.iter().count(), 1);
        let result = registry.apply("Fourier", &[2.0]).unwrap();
        assert_eq!(result.y_label, "value");
    }

    #[test]
    fn test_unknown_transform() {
        let registry = TransformRegistry::default();
        assert!(matches!(
            registry.apply("Wavelet", &[1.0]),
            Err(DataError::UnknownTransform(name)) if name == "Wavelet"
        ));
    }

    #[test]
    fn test_to_signal() {
        assert_eq!(to_signal(&[0, -3, 7]), vec![0.0, -3.0, 7.0]);
    }
}
