use super::PeakHourConfig;
use crate::model::traffic::{TrafficFeatures, TrafficIntensitySource, TrafficSourceError};
use crate::util::datetime_ops;

/// deterministic traffic estimate from the time of week alone. location is ignored.
#[derive(Clone, Debug, Default)]
pub struct PeakHourTrafficSource {
    pub config: PeakHourConfig,
}

impl PeakHourTrafficSource {
    pub fn new(config: PeakHourConfig) -> PeakHourTrafficSource {
        PeakHourTrafficSource { config }
    }

    /// the rule table lookup: weekday rush hour, other weekday hours, weekend.
    pub fn intensity(&self, hour: u32, weekday: u32) -> f64 {
        let is_weekday = datetime_ops::is_weekday(weekday);
        let is_peak_hour = self.config.peak_windows.iter().any(|w| w.contains(hour));
        if is_weekday && is_peak_hour {
            self.config.peak_intensity
        } else if is_weekday {
            self.config.weekday_intensity
        } else {
            self.config.weekend_intensity
        }
    }
}

impl TryFrom<PeakHourConfig> for PeakHourTrafficSource {
    type Error = TrafficSourceError;

    fn try_from(config: PeakHourConfig) -> Result<Self, Self::Error> {
        config.validate().map_err(TrafficSourceError::Configuration)?;
        Ok(PeakHourTrafficSource::new(config))
    }
}

impl TrafficIntensitySource for PeakHourTrafficSource {
    fn name(&self) -> String {
        "Peak Hour Rule Table".to_string()
    }

    fn predict(&self, features: &TrafficFeatures) -> Result<f64, TrafficSourceError> {
        features
            .validate()
            .map_err(|message| TrafficSourceError::Prediction {
                source_name: self.name(),
                message,
            })?;
        Ok(self.intensity(features.hour, features.weekday))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::traffic::peak_hour::HourWindow;

    fn features(hour: u32, weekday: u32) -> TrafficFeatures {
        TrafficFeatures::new(hour, weekday, 39.74, -104.99)
    }

    #[test]
    fn test_default_rule_table() {
        let source = PeakHourTrafficSource::default();
        // monday 8am
        assert_eq!(source.predict(&features(8, 0)).unwrap(), 2.0);
        // friday 6pm
        assert_eq!(source.predict(&features(18, 4)).unwrap(), 2.0);
        // wednesday 1pm
        assert_eq!(source.predict(&features(13, 2)).unwrap(), 1.5);
        // saturday 8am
        assert_eq!(source.predict(&features(8, 5)).unwrap(), 1.0);
        // sunday 5pm
        assert_eq!(source.predict(&features(17, 6)).unwrap(), 1.0);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let source = PeakHourTrafficSource::default();
        assert_eq!(source.intensity(6, 1), 1.5);
        assert_eq!(source.intensity(7, 1), 2.0);
        assert_eq!(source.intensity(9, 1), 2.0);
        assert_eq!(source.intensity(10, 1), 1.5);
        assert_eq!(source.intensity(19, 1), 2.0);
        assert_eq!(source.intensity(20, 1), 1.5);
    }

    #[test]
    fn test_invalid_features_fail() {
        let source = PeakHourTrafficSource::default();
        let result = source.predict(&features(24, 0));
        assert!(matches!(result, Err(TrafficSourceError::Prediction { .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PeakHourConfig {
            peak_windows: vec![HourWindow::new(9, 7)],
            ..Default::default()
        };
        assert!(PeakHourTrafficSource::try_from(config).is_err());
    }
}
