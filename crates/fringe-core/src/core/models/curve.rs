use super::domain::ScreenDomain;
use serde::Serialize;
use std::ops::Deref;

/// Intensity samples, one per [`ScreenDomain`] position.
///
/// Values produced by the model lie in `[0, 1]`; the on-axis sample of either mode is
/// exactly 1.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IntensityCurve {
    values: Vec<f64>,
}

impl IntensityCurve {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn peak(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Copy rescaled so the largest sample is 1.
    ///
    /// A curve that is empty or entirely dark is returned unchanged.
    pub fn peak_normalized(&self) -> Self {
        match self.peak() {
            Some(peak) if peak > 0.0 => Self {
                values: self.values.iter().map(|v| v / peak).collect(),
            },
            _ => self.clone(),
        }
    }

    /// Smallest intensity among samples whose position lies in `[low, high]`.
    pub fn minimum_within(&self, domain: &ScreenDomain, low: f64, high: f64) -> Option<f64> {
        domain
            .iter()
            .zip(&self.values)
            .filter(|(x, _)| (low..=high).contains(*x))
            .map(|(_, &v)| v)
            .reduce(f64::min)
    }

    /// `(position, intensity)` pairs for plotting.
    pub fn points<'a>(
        &'a self,
        domain: &'a ScreenDomain,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        domain.iter().copied().zip(self.values.iter().copied())
    }
}

impl Deref for IntensityCurve {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}
