use crate::util::{datetime_ops, geo_ops};
use chrono::{Datelike, Timelike};
use geo::Point;
use serde::{Deserialize, Serialize};

/// the inputs to a traffic intensity prediction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrafficFeatures {
    /// hour of the day, in [0, 23]
    pub hour: u32,
    /// day of the week, Monday = 0 through Sunday = 6
    pub weekday: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl TrafficFeatures {
    pub fn new(hour: u32, weekday: u32, latitude: f64, longitude: f64) -> TrafficFeatures {
        TrafficFeatures {
            hour,
            weekday,
            latitude,
            longitude,
        }
    }

    /// features for a location at the wall-clock time of `time`.
    pub fn at<T: Datelike + Timelike>(time: &T, location: &Point<f64>) -> TrafficFeatures {
        TrafficFeatures {
            hour: datetime_ops::hour_of_day(time),
            weekday: datetime_ops::weekday_index(time),
            latitude: geo_ops::latitude(location),
            longitude: geo_ops::longitude(location),
        }
    }

    pub fn is_weekday(&self) -> bool {
        datetime_ops::is_weekday(self.weekday)
    }

    /// feature vector in model order: [hour, weekday, latitude, longitude]
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.hour as f64,
            self.weekday as f64,
            self.latitude,
            self.longitude,
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.hour > 23 {
            return Err(format!("hour '{}' must be in range [0, 23]", self.hour));
        }
        if self.weekday > 6 {
            return Err(format!("weekday '{}' must be in range [0, 6]", self.weekday));
        }
        geo_ops::validate_lat_lng(self.latitude, self.longitude)
    }
}
