// Picks the input file for a run: the most recently modified CSV in a directory
use crate::error::ReportError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const INPUT_EXTENSION: &str = "csv";

/// Returns the `*.csv` file in `dir` with the latest modification time.
///
/// Only regular files whose extension is exactly `csv` are considered.
/// Equal timestamps are broken by file name, the greatest name wins.
pub fn latest_csv(dir: &Path) -> Result<PathBuf, ReportError> {
    let mut best: Option<(SystemTime, OsString, PathBuf)> = None;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != INPUT_EXTENSION) {
            continue;
        }
        let metadata = fs::metadata(&path)?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified()?;
        let name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();

        let is_newer = match &best {
            None => true,
            Some((best_modified, best_name, _)) => (modified, &name) > (*best_modified, best_name),
        };
        if is_newer {
            best = Some((modified, name, path));
        }
    }

    match best {
        Some((_, _, path)) => {
            tracing::info!(file = %path.display(), "Selected input file");
            Ok(path)
        }
        None => Err(ReportError::NoInputFound { dir: dir.to_path_buf() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, age_secs: u64) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs)).unwrap();
        path
    }

    #[test]
    fn test_latest_csv_picks_newest() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "janeiro.csv", 300);
        let newest = touch(dir.path(), "fevereiro.csv", 10);
        touch(dir.path(), "marco.csv", 100);

        assert_eq!(latest_csv(dir.path()).unwrap(), newest);
    }

    #[test]
    fn test_latest_csv_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        let csv = touch(dir.path(), "vendas.csv", 500);
        touch(dir.path(), "notas.txt", 1);
        touch(dir.path(), "VENDAS.CSV", 1);
        touch(dir.path(), "vendas.csv.bak", 1);
        fs::create_dir(dir.path().join("arquivo.csv")).unwrap();

        assert_eq!(latest_csv(dir.path()).unwrap(), csv);
    }

    #[test]
    fn test_latest_csv_tie_breaks_by_name() {
        let dir = TempDir::new().unwrap();
        let stamp = SystemTime::now() - Duration::from_secs(60);
        for name in ["b.csv", "c.csv", "a.csv"] {
            File::create(dir.path().join(name)).unwrap().set_modified(stamp).unwrap();
        }

        assert_eq!(latest_csv(dir.path()).unwrap(), dir.path().join("c.csv"));
    }

    #[test]
    fn test_latest_csv_empty_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "leia-me.txt", 1);

        match latest_csv(dir.path()) {
            Err(ReportError::NoInputFound { dir: reported }) => assert_eq!(reported, dir.path()),
            other => panic!("expected NoInputFound, got {:?}", other),
        }
    }

    #[test]
    fn test_latest_csv_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nao-existe");
        assert!(matches!(latest_csv(&missing), Err(ReportError::IoError { .. })));
    }
}
