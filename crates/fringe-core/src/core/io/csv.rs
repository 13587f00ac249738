use crate::core::models::curve::IntensityCurve;
use crate::core::models::domain::ScreenDomain;
use crate::core::models::map::IntensityMap;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Curve has {values} samples but domain has {positions}")]
    LengthMismatch { positions: usize, values: usize },
}

/// Writes `position_m,intensity` rows for plotting a curve.
pub fn write_curve<W: Write>(
    domain: &ScreenDomain,
    curve: &IntensityCurve,
    writer: W,
) -> Result<(), ExportError> {
    if domain.len() != curve.len() {
        return Err(ExportError::LengthMismatch {
            positions: domain.len(),
            values: curve.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["position_m", "intensity"])?;
    for (x, intensity) in curve.points(domain) {
        csv_writer.serialize((x, intensity))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `x_m,y_m,intensity` rows, one per pixel, row by row.
pub fn write_map<W: Write>(map: &IntensityMap, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["x_m", "y_m", "intensity"])?;
    for cell in map.cells() {
        csv_writer.serialize(cell)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::params::OpticsParameters;
    use crate::core::optics::model::IntensityModel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn curve_is_written_with_header_and_one_row_per_sample() {
        let domain = ScreenDomain::symmetric(0.01, 5).unwrap();
        let params = OpticsParameters::new(550e-9, 5e-6, 0.1);
        let curve = IntensityModel::default()
            .single_slit(&params, &domain)
            .unwrap();

        let mut buffer = Vec::new();
        write_curve(&domain, &curve, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "position_m,intensity");
        assert_eq!(lines[3], "0.0,1.0");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let domain = ScreenDomain::symmetric(0.01, 3).unwrap();
        let curve = IntensityCurve::from_values(vec![1.0]);
        let result = write_curve(&domain, &curve, Vec::<u8>::new());
        assert!(matches!(
            result,
            Err(ExportError::LengthMismatch {
                positions: 3,
                values: 1
            })
        ));
    }

    #[test]
    fn map_is_written_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("screen.csv");
        let map = IntensityMap::new(1.0, vec![-1.0, 1.0], vec![0.25, 0.5, 0.5, 0.25]);

        write_map(&map, fs::File::create(&path).unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x_m,y_m,intensity");
        assert_eq!(lines[1], "-1.0,-1.0,0.25");
        assert_eq!(lines[4], "1.0,1.0,0.25");
    }
}
