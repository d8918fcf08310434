// Small filesystem and clock helpers used by the agent around this core

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Remove a file, treating an already-missing file as success
pub fn unlink(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Write `data` to `tmp_path`, then rename it over `final_path`.
///
/// Both paths must be on the same filesystem for the rename to be atomic.
pub fn write_file_atomic(tmp_path: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(tmp_path, data)?;
    if let Err(e) = fs::rename(tmp_path, final_path) {
        tracing::warn!(
            "Rename {} -> {} failed: {}",
            tmp_path.display(),
            final_path.display(),
            e
        );
        let _ = unlink(tmp_path);
        return Err(e);
    }
    Ok(())
}

/// Monotonic time elapsed since the first call in this process
pub fn monotime() -> Duration {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_unlink_missing_file() {
        assert!(unlink(&scratch("missing")).is_ok());
    }

    #[test]
    fn test_unlink_existing_file() {
        let path = scratch("present");
        fs::write(&path, b"x").unwrap();
        unlink(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_write_file_atomic_replaces_target() {
        let tmp = scratch("state.tmp");
        let target = scratch("state");
        fs::write(&target, b"old").unwrap();

        write_file_atomic(&tmp, &target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
        assert!(!tmp.exists());
        unlink(&target).unwrap();
    }

    #[test]
    fn test_write_file_atomic_cleans_up_on_failed_rename() {
        let tmp = scratch("orphan.tmp");
        let target = scratch("no-such-dir").join("state");

        assert!(write_file_atomic(&tmp, &target, b"data").is_err());
        assert!(!tmp.exists());
    }

    #[test]
    fn test_monotime_never_goes_backwards() {
        let first = monotime();
        let second = monotime();
        assert!(second >= first);
    }
}
