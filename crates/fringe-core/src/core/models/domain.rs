use serde::Serialize;
use std::ops::Deref;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Screen position at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("Screen positions must strictly increase (index {index}: {previous} -> {value})")]
    NotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("Invalid domain bounds: {0}")]
    InvalidBounds(String),
}

/// Ordered sample positions (meters) along the observation screen.
///
/// Positions are finite and strictly increasing. An empty domain is valid and yields an
/// empty curve.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScreenDomain {
    positions: Vec<f64>,
}

impl ScreenDomain {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `samples` evenly spaced positions from `start` to `end` inclusive.
    pub fn linspace(start: f64, end: f64, samples: usize) -> Result<Self, DomainError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DomainError::InvalidBounds(format!(
                "bounds must be finite, got [{}, {}]",
                start, end
            )));
        }
        if samples > 1 && start >= end {
            return Err(DomainError::InvalidBounds(format!(
                "start {} must be below end {}",
                start, end
            )));
        }

        let positions = match samples {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let span = end - start;
                let last = (n - 1) as f64;
                let mut positions: Vec<f64> = (0..n)
                    .map(|i| start + span * (i as f64 / last))
                    .collect();
                positions[n - 1] = end;
                positions
            }
        };
        Ok(Self { positions })
    }

    /// `samples` evenly spaced positions over `[-half_width, half_width]`.
    ///
    /// Sample `i` and sample `samples - 1 - i` are exact negatives of each other, so
    /// even functions of position evaluate bit-identically on both halves. An odd sample
    /// count places one sample exactly on the axis.
    pub fn symmetric(half_width: f64, samples: usize) -> Result<Self, DomainError> {
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err(DomainError::InvalidBounds(format!(
                "half width must be finite and positive, got {}",
                half_width
            )));
        }

        let positions = match samples {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let denominator = (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let numerator = 2.0 * i as f64 - denominator;
                        half_width * (numerator / denominator)
                    })
                    .collect()
            }
        };
        Ok(Self { positions })
    }

    /// Wraps caller-provided positions after checking the ordering invariant.
    pub fn from_positions(positions: Vec<f64>) -> Result<Self, DomainError> {
        for (index, &value) in positions.iter().enumerate() {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { index, value });
            }
            if index > 0 {
                let previous = positions[index - 1];
                if value <= previous {
                    return Err(DomainError::NotIncreasing {
                        index,
                        previous,
                        value,
                    });
                }
            }
        }
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<f64> {
        self.positions
    }

    /// `(first, last)` position, or `None` for an empty domain.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((*self.positions.first()?, *self.positions.last()?))
    }
}

impl Deref for ScreenDomain {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.positions
    }
}
