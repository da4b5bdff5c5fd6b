use super::OptimizerError;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use smartroute_core::model::traffic::{TrafficFeatures, TrafficIntensitySource, TrafficSourceError};
use smartroute_core::util::geo_ops;

/// the predicted traffic intensity at a place and time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrafficPrediction {
    pub location: Location,
    pub time: String,
    pub traffic_prediction: f64,
    pub source: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl TrafficPrediction {
    /// queries a traffic source for a single location. hour and weekday come from the
    /// wall clock of `time`.
    pub fn predict(
        source: &dyn TrafficIntensitySource,
        latitude: f64,
        longitude: f64,
        time: &DateTime<FixedOffset>,
    ) -> Result<TrafficPrediction, OptimizerError> {
        geo_ops::validate_lat_lng(latitude, longitude).map_err(OptimizerError::invalid_input)?;
        let location = geo_ops::point_from_lat_lng(latitude, longitude);
        let features = TrafficFeatures::at(time, &location);
        let prediction = source.predict(&features)?;
        if !prediction.is_finite() {
            return Err(TrafficSourceError::Prediction {
                source_name: source.name(),
                message: format!("non-finite intensity '{prediction}' for {features:?}"),
            }
            .into());
        }
        Ok(TrafficPrediction {
            location: Location {
                lat: latitude,
                lng: longitude,
            },
            time: time.to_rfc3339_opts(SecondsFormat::Secs, false),
            traffic_prediction: prediction,
            source: source.name(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smartroute_core::model::scoring::RouteScoringError;
    use smartroute_core::model::traffic::peak_hour::PeakHourTrafficSource;
    use smartroute_core::util::datetime_ops;

    #[test]
    fn test_predict_peak_hour() {
        let source = PeakHourTrafficSource::default();
        let time = datetime_ops::parse_departure_time("2024-05-06T08:15:00-06:00").unwrap();
        let prediction = TrafficPrediction::predict(&source, 39.7392, -104.9903, &time).unwrap();
        assert_eq!(prediction.traffic_prediction, 2.0);
        assert_eq!(prediction.time, "2024-05-06T08:15:00-06:00");
        assert_eq!(prediction.location.lat, 39.7392);
    }

    #[test]
    fn test_predict_rejects_bad_coordinates() {
        let source = PeakHourTrafficSource::default();
        let time = datetime_ops::now();
        let result = TrafficPrediction::predict(&source, 123.0, -104.9903, &time);
        assert!(matches!(
            result,
            Err(OptimizerError::Scoring(RouteScoringError::InvalidInput(_)))
        ));
    }
}
