//! Validated, process-lifetime road configuration

use super::lanes::Lanes;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Tuning plus the lane model derived from it
#[derive(Debug, Clone)]
pub struct Track {
    pub tuning: Tuning,
    pub lanes: Lanes,
}

impl Track {
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        let lanes = Lanes::new(&tuning)?;
        log::debug!(
            "Track built: {} lanes, lane width {}",
            lanes.count(),
            lanes.lane_width()
        );
        Ok(Self { tuning, lanes })
    }

    /// Y past which an obstacle's top edge counts as off screen
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.tuning.height
    }
}

impl Default for Track {
    fn default() -> Self {
        let tuning = Tuning::default();
        let lanes = Lanes::layout(&tuning);
        Self { tuning, lanes }
    }
}
