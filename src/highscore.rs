//! Best-effort highscore persistence
//!
//! The highscore is a single decimal integer in a text file next to the
//! executable's working directory. Persistence is never fatal: a missing or
//! unreadable file loads as zero and a failed write is logged and dropped.

use std::fs;
use std::path::{Path, PathBuf};

/// Well-known highscore file name
pub const HIGHSCORE_FILE: &str = "highscore.txt";

/// Read the stored highscore. Absent, empty, or non-numeric content all
/// yield 0; no error ever reaches the caller.
pub fn load_highscore(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => text.trim().parse().unwrap_or(0),
        Err(err) => {
            log::debug!("no highscore file at {}: {}", path.display(), err);
            0
        }
    }
}

/// Overwrite the file with the decimal representation of `value`. Write
/// failures are swallowed; the in-memory value stays authoritative for the
/// rest of the process.
pub fn save_highscore(path: &Path, value: u32) {
    if let Err(err) = fs::write(path, value.to_string()) {
        log::warn!("failed to save highscore to {}: {}", path.display(), err);
    }
}

/// Process-wide highscore tracker: loaded once at startup, persisted
/// immediately whenever the live score first exceeds it.
#[derive(Debug, Clone)]
pub struct Highscore {
    value: u32,
    path: PathBuf,
}

impl Highscore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = load_highscore(&path);
        log::info!("loaded highscore {} from {}", value, path.display());
        Self { value, path }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Record a live score. Returns true (and persists) only when the score
    /// beats the stored best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            save_highscore(&self.path, score);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pipedash_{}_{}", name, std::process::id()))
    }

    #[test]
    fn missing_file_loads_zero() {
        let path = scratch_path("missing");
        let _ = fs::remove_file(&path);
        assert_eq!(load_highscore(&path), 0);
    }

    #[test]
    fn corrupt_file_loads_zero() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(load_highscore(&path), 0);
        fs::write(&path, "").unwrap();
        assert_eq!(load_highscore(&path), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_load_round_trip() {
        let path = scratch_path("roundtrip");
        save_highscore(&path, 42);
        assert_eq!(load_highscore(&path), 42);
        // whitespace around the number is tolerated
        fs::write(&path, " 17\n").unwrap();
        assert_eq!(load_highscore(&path), 17);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn submit_persists_only_new_bests() {
        let path = scratch_path("submit");
        let _ = fs::remove_file(&path);

        let mut hs = Highscore::load(&path);
        assert_eq!(hs.value(), 0);
        assert!(hs.submit(5));
        assert!(!hs.submit(5));
        assert!(!hs.submit(3));
        assert_eq!(hs.value(), 5);
        assert!(hs.submit(9));

        // a fresh load sees the persisted best
        assert_eq!(Highscore::load(&path).value(), 9);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_failure_is_silent() {
        // temp_dir itself is a directory; writing to it must fail quietly
        let dir = std::env::temp_dir();
        save_highscore(&dir, 99);
    }
}
