use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Opens the CSV destination: the given file, or standard output when no path is set.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            debug!("Writing output to {:?}", path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => {
            debug!("Writing output to standard output.");
            Ok(Box::new(BufWriter::new(io::stdout().lock())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/curve.csv");
        {
            let mut writer = open_output(Some(&path)).unwrap();
            writer.write_all(b"position_m,intensity\n").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "position_m,intensity\n"
        );
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = open_output(Some(dir.path()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
