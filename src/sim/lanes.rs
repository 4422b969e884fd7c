//! Lane model: lane index to horizontal center
//!
//! Built once from the road geometry and never changed while the process
//! runs, so every rectangle derived from a lane agrees with every other.

use serde::Serialize;

use crate::error::ConfigError;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lanes {
    centers: Vec<i32>,
    lane_width: i32,
}

impl Lanes {
    pub fn new(tuning: &Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if i32::try_from(tuning.lane_count).is_err() {
            return Err(ConfigError::Invalid(format!(
                "too many lanes: {}",
                tuning.lane_count
            )));
        }
        Ok(Self::layout(tuning))
    }

    /// Lay out lanes from tuning that already passed validation
    pub(crate) fn layout(tuning: &Tuning) -> Self {
        let count = tuning.lane_count as i32;
        let lane_width = tuning.road_width() / count;
        let centers = (0..count)
            .map(|i| tuning.road_margin + i * lane_width + lane_width / 2)
            .collect();

        Self {
            centers,
            lane_width,
        }
    }

    /// Horizontal center of `lane`
    ///
    /// Panics if `lane` is out of range; callers keep lanes in `0..count()`.
    #[inline]
    pub fn center_x(&self, lane: usize) -> i32 {
        self.centers[lane]
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.centers.len()
    }

    pub fn last(&self) -> usize {
        self.centers.len() - 1
    }

    pub fn middle(&self) -> usize {
        self.centers.len() / 2
    }

    pub fn lane_width(&self) -> i32 {
        self.lane_width
    }

    /// X of the separator lines between adjacent lanes (for road markings)
    pub fn separators(&self, road_margin: i32) -> impl Iterator<Item = i32> + '_ {
        (1..self.centers.len()).map(move |i| road_margin + i as i32 * self.lane_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_centers() {
        let lanes = Lanes::new(&Tuning::default()).unwrap();
        assert_eq!(lanes.count(), 3);
        assert_eq!(lanes.lane_width(), 146);
        assert_eq!(lanes.center_x(0), 93);
        assert_eq!(lanes.center_x(1), 239);
        assert_eq!(lanes.center_x(2), 385);
        assert_eq!(lanes.middle(), 1);
        assert_eq!(lanes.last(), 2);
    }

    #[test]
    fn test_single_lane() {
        let tuning = Tuning {
            lane_count: 1,
            ..Default::default()
        };
        let lanes = Lanes::new(&tuning).unwrap();
        assert_eq!(lanes.count(), 1);
        assert_eq!(lanes.middle(), 0);
        assert_eq!(lanes.center_x(0), 20 + 220);
    }

    #[test]
    fn test_separators() {
        let lanes = Lanes::new(&Tuning::default()).unwrap();
        let xs: Vec<i32> = lanes.separators(20).collect();
        assert_eq!(xs, vec![166, 312]);
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let tuning = Tuning {
            lane_count: 0,
            ..Default::default()
        };
        assert!(Lanes::new(&tuning).is_err());
    }
}
