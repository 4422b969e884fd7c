//! Persisted high score
//!
//! A single integer in a plain text file. Persistence is best effort: a
//! missing or garbled file reads as 0 and failed writes are only logged.

use std::fs;
use std::path::{Path, PathBuf};

/// Best score so far and where it lives on disk
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    best: u64,
    /// None keeps the score in memory only
    path: Option<PathBuf>,
}

impl HighScores {
    /// In-memory store starting at `best`, never written anywhere
    pub fn in_memory(best: u64) -> Self {
        Self { best, path: None }
    }

    /// Read the high score file, treating anything unusable as 0
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let best = match fs::read_to_string(path) {
            Ok(text) => parse_score(&text).unwrap_or_else(|| {
                log::warn!("High score file {} is unreadable, starting at 0", path.display());
                0
            }),
            Err(_) => {
                log::info!("No high score at {}, starting fresh", path.display());
                0
            }
        };
        if best > 0 {
            log::info!("Loaded high score {}", best);
        }
        Self {
            best,
            path: Some(path.to_path_buf()),
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if a finished round beats the stored score
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished round's score
    ///
    /// Saves and returns true only when it beats the current best.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        log::info!("New high score: {}", score);
        self.save();
        true
    }

    /// Overwrite the file with the current best; failures are swallowed
    pub fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match fs::write(path, self.best.to_string()) {
            Ok(()) => log::debug!("High score saved to {}", path.display()),
            Err(e) => log::warn!("Failed to save high score to {}: {}", path.display(), e),
        }
    }
}

/// Whole-file content as a score; blank counts as 0
fn parse_score(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lane_dodger_{}_{}_{}",
            name,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0)
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("42"), Some(42));
        assert_eq!(parse_score("  17\n"), Some(17));
        assert_eq!(parse_score(""), Some(0));
        assert_eq!(parse_score("\n"), Some(0));
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score("-3"), None);
    }

    #[test]
    fn test_missing_file_is_zero() {
        let path = temp_file("missing");
        let scores = HighScores::load(&path);
        assert_eq!(scores.best(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_garbage_file_is_zero() {
        let path = temp_file("garbage");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScores::load(&path).best(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_round_trip() {
        let path = temp_file("roundtrip");
        let mut scores = HighScores::load(&path);
        assert!(scores.record(57));
        assert_eq!(fs::read_to_string(&path).unwrap(), "57");

        let reloaded = HighScores::load(&path);
        assert_eq!(reloaded.best(), 57);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_only_higher_scores_saved() {
        let path = temp_file("higher");
        fs::write(&path, "10").unwrap();
        let mut scores = HighScores::load(&path);

        assert!(!scores.record(10));
        assert!(!scores.record(3));
        assert_eq!(fs::read_to_string(&path).unwrap(), "10");

        assert!(scores.record(11));
        assert_eq!(fs::read_to_string(&path).unwrap(), "11");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_swallowed() {
        let dir = temp_file("dir");
        fs::create_dir_all(&dir).unwrap();
        // A directory can't be overwritten as a file
        let mut scores = HighScores::load(&dir);
        assert!(scores.record(5));
        assert_eq!(scores.best(), 5);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_in_memory_never_writes() {
        let mut scores = HighScores::in_memory(3);
        assert!(scores.path().is_none());
        assert!(scores.record(4));
        assert_eq!(scores.best(), 4);
    }
}
