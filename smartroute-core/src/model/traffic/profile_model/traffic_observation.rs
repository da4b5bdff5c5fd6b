use crate::model::traffic::TrafficSourceError;
use crate::util::{datetime_ops, geo_ops};
use chrono::NaiveDateTime;
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// one measured traffic intensity at a place and wall-clock time. rows of a training
/// CSV file have the header `timestamp,latitude,longitude,intensity`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrafficObservation {
    #[serde(deserialize_with = "datetime_ops::deserialize_naive_datetime")]
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: f64,
}

impl TrafficObservation {
    pub fn is_valid(&self) -> bool {
        self.intensity.is_finite()
            && geo_ops::validate_lat_lng(self.latitude, self.longitude).is_ok()
    }
}

/// reads all observations from a CSV file with headers.
pub fn read_observations<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<TrafficObservation>, TrafficSourceError> {
    let path_str = path.as_ref().to_string_lossy().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(|e| TrafficSourceError::TrainingData {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
    let rows_iter = tqdm!(
        reader.deserialize::<TrafficObservation>(),
        desc = format!("traffic observations {path_str}")
    );
    let mut observations = vec![];
    for (idx, row) in rows_iter.enumerate() {
        let observation = row.map_err(|e| TrafficSourceError::TrainingData {
            path: path_str.clone(),
            message: format!("row {}: {e}", idx + 1),
        })?;
        observations.push(observation);
    }
    log::info!(
        "read {} traffic observations from {path_str}",
        observations.len()
    );
    Ok(observations)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::datetime_ops::{hour_of_day, weekday_index};
    use std::io::Write;

    #[test]
    fn test_read_observations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timestamp,latitude,longitude,intensity").unwrap();
        writeln!(file, "2024-05-06 08:00:00,39.74,-104.99,1.8").unwrap();
        writeln!(file, "2024-05-11T14:30:00, 39.75, -105.00, 0.9").unwrap();
        file.flush().unwrap();

        let observations = read_observations(file.path()).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(hour_of_day(&observations[0].timestamp), 8);
        assert_eq!(weekday_index(&observations[0].timestamp), 0);
        assert_eq!(weekday_index(&observations[1].timestamp), 5);
        assert_eq!(observations[1].intensity, 0.9);
        assert!(observations.iter().all(|o| o.is_valid()));
    }

    #[test]
    fn test_read_observations_reports_bad_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timestamp,latitude,longitude,intensity").unwrap();
        writeln!(file, "not-a-time,39.74,-104.99,1.8").unwrap();
        file.flush().unwrap();

        let result = read_observations(file.path());
        match result {
            Err(TrafficSourceError::TrainingData { message, .. }) => {
                assert!(message.contains("row 1"))
            }
            other => panic!("expected TrainingData error, found {other:?}"),
        }
    }

    #[test]
    fn test_read_observations_missing_file() {
        let result = read_observations("/definitely/not/here.csv");
        assert!(matches!(result, Err(TrafficSourceError::TrainingData { .. })));
    }
}
