use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// What [`write_if_missing`] did with the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Created,
    Kept,
}

impl WriteOutcome {
    pub fn created(self) -> bool {
        self == WriteOutcome::Created
    }
}

/// Replace `path` with `data` in one rename, so a reader never sees a
/// half-written plan or config. A bare file name writes into the current
/// directory.
pub fn atomic_write(path: &Path, data: impl AsRef<[u8]>) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => {
            std::fs::create_dir_all(p)?;
            p
        }
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data.as_ref())?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = data.as_ref().len(), "wrote file");
    Ok(())
}

/// Seed a file (e.g. the default `gtm.yaml`) without clobbering edits.
pub fn write_if_missing(path: &Path, data: impl AsRef<[u8]>) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Kept);
    }
    atomic_write(path, data)?;
    Ok(WriteOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_replaces_existing_plan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.md");
        atomic_write(&path, "# Old Launch Command\n").unwrap();
        atomic_write(&path, "# Atlas Launch Command\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Atlas Launch Command\n");
    }

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plans/q3/plan.json");
        atomic_write(&path, b"{}").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_if_missing_reports_outcome() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gtm.yaml");
        assert_eq!(write_if_missing(&path, "version: 1\n").unwrap(), WriteOutcome::Created);
        assert_eq!(write_if_missing(&path, "version: 2\n").unwrap(), WriteOutcome::Kept);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "version: 1\n");
    }
}
