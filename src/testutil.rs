//! Helpers shared by unit tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

static CWD: Mutex<()> = Mutex::new(());

struct RestoreDir(PathBuf);

impl Drop for RestoreDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

/// Run `f` with the process working directory set to `dir`.
///
/// Entry paths are relative to the working directory, so tests that depend on
/// it are serialized here. The previous directory is restored even if `f` panics.
pub fn in_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let _lock = CWD.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = RestoreDir(std::env::current_dir().unwrap());
    std::env::set_current_dir(dir).unwrap();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn restores_dir_after_panic() {
        let dir = tempfile::tempdir().unwrap();
        let before = std::env::current_dir().unwrap();
        let result = std::panic::catch_unwind(|| in_dir(dir.path(), || panic!("boom")));
        assert!(result.is_err());
        // Take the lock so a concurrent `in_dir` cannot be observed mid-change.
        let _lock = CWD.lock().unwrap_or_else(|e| e.into_inner());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
