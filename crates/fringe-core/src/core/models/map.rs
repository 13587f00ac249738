use serde::Serialize;

/// Square screen image, stored row-major.
///
/// Row `r` and column `c` correspond to screen coordinates `y = axis[r]` and
/// `x = axis[c]`, where `axis` spans `[-half_width, half_width]` in `size` steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityMap {
    size: usize,
    half_width: f64,
    axis: Vec<f64>,
    values: Vec<f64>,
}

impl IntensityMap {
    pub(crate) fn new(half_width: f64, axis: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), axis.len() * axis.len());
        Self {
            size: axis.len(),
            half_width,
            axis,
            values,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.values.get(row * self.size + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        self.values.get(start..start + self.size)
    }

    /// `(x, y, intensity)` for every pixel, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.values.iter().enumerate().map(move |(i, &v)| {
            let row = i / self.size;
            let col = i % self.size;
            (self.axis[col], self.axis[row], v)
        })
    }
}
