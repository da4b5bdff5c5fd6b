use super::{TrafficObservation, TrafficProfileConfig, WeeklyProfile};
use crate::model::traffic::{TrafficFeatures, TrafficSourceError};
use crate::util::datetime_ops;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type CellEntry = GeomWithData<[f64; 2], usize>;

/// the weekly intensity profile of one grid cell, located at the cell center.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProfileCell {
    pub latitude: f64,
    pub longitude: f64,
    pub profile: WeeklyProfile,
}

/// a traffic model learned from historical observations. observations are binned into
/// grid cells and each cell holds the mean intensity for every hour of the week.
///
/// a prediction uses the nearest cell to the query location. when that cell has no data
/// for the requested hour of the week, or no cell is close enough, the model-wide
/// profile is used, and finally the mean of all observations.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(
    try_from = "TrafficProfileModelRecord",
    into = "TrafficProfileModelRecord"
)]
pub struct TrafficProfileModel {
    pub config: TrafficProfileConfig,
    cells: Vec<ProfileCell>,
    global: WeeklyProfile,
    global_mean: f64,
    index: RTree<CellEntry>,
}

/// the stored form of a [`TrafficProfileModel`]. the spatial index is rebuilt on load.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrafficProfileModelRecord {
    pub config: TrafficProfileConfig,
    pub cells: Vec<ProfileCell>,
    pub global: WeeklyProfile,
}

impl TrafficProfileModel {
    /// fits a model to a set of observations. observations with non-finite intensity or
    /// invalid coordinates are skipped. fails if no valid observation remains.
    pub fn train(
        observations: &[TrafficObservation],
        config: TrafficProfileConfig,
    ) -> Result<TrafficProfileModel, TrafficSourceError> {
        config.validate().map_err(TrafficSourceError::Training)?;
        let mut global = WeeklyProfile::default();
        let mut binned: BTreeMap<(i64, i64), WeeklyProfile> = BTreeMap::new();
        let mut skipped = 0;
        for obs in observations.iter() {
            if !obs.is_valid() {
                skipped += 1;
                continue;
            }
            let weekday = datetime_ops::weekday_index(&obs.timestamp);
            let hour = datetime_ops::hour_of_day(&obs.timestamp);
            let key = cell_key(obs.latitude, obs.longitude, config.cell_size_degrees);
            binned
                .entry(key)
                .or_default()
                .add(weekday, hour, obs.intensity);
            global.add(weekday, hour, obs.intensity);
        }
        if skipped > 0 {
            log::warn!("skipped {skipped} invalid traffic observations during training");
        }
        let cells = binned
            .into_iter()
            .map(|((lat_idx, lng_idx), profile)| ProfileCell {
                latitude: cell_center(lat_idx, config.cell_size_degrees),
                longitude: cell_center(lng_idx, config.cell_size_degrees),
                profile,
            })
            .collect::<Vec<_>>();
        log::info!(
            "trained traffic profile model over {} cells from {} observations",
            cells.len(),
            global.observation_count()
        );
        TrafficProfileModel::try_from(TrafficProfileModelRecord {
            config,
            cells,
            global,
        })
        .map_err(TrafficSourceError::Training)
    }

    pub fn cells(&self) -> &[ProfileCell] {
        &self.cells
    }

    pub fn observation_count(&self) -> u64 {
        self.global.observation_count()
    }

    /// predicts the intensity for a set of traffic features. features are expected to be
    /// validated by the caller.
    pub fn predict(&self, features: &TrafficFeatures) -> f64 {
        let (weekday, hour) = (features.weekday, features.hour);
        self.nearest_cell(features.latitude, features.longitude)
            .and_then(|cell| cell.profile.mean(weekday, hour))
            .or_else(|| self.global.mean(weekday, hour))
            .unwrap_or(self.global_mean)
    }

    fn nearest_cell(&self, latitude: f64, longitude: f64) -> Option<&ProfileCell> {
        let query = [longitude, latitude];
        let max_distance = self.config.max_cell_distance_degrees;
        self.index
            .nearest_neighbor(&query)
            .filter(|entry| {
                let [x, y] = *entry.geom();
                let (dx, dy) = (x - query[0], y - query[1]);
                dx * dx + dy * dy <= max_distance * max_distance
            })
            .and_then(|entry| self.cells.get(entry.data))
    }
}

impl TryFrom<TrafficProfileModelRecord> for TrafficProfileModel {
    type Error = String;

    fn try_from(record: TrafficProfileModelRecord) -> Result<Self, Self::Error> {
        record.config.validate()?;
        if !record.global.is_well_formed() {
            return Err(String::from("model-wide profile is malformed"));
        }
        if let Some(idx) = record.cells.iter().position(|c| !c.profile.is_well_formed()) {
            return Err(format!("profile of cell {idx} is malformed"));
        }
        let global_mean = record
            .global
            .overall_mean()
            .ok_or_else(|| String::from("model has no observations"))?;
        let entries = record
            .cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| CellEntry::new([cell.longitude, cell.latitude], idx))
            .collect::<Vec<_>>();
        Ok(TrafficProfileModel {
            config: record.config,
            cells: record.cells,
            global: record.global,
            global_mean,
            index: RTree::bulk_load(entries),
        })
    }
}

impl From<TrafficProfileModel> for TrafficProfileModelRecord {
    fn from(model: TrafficProfileModel) -> Self {
        TrafficProfileModelRecord {
            config: model.config,
            cells: model.cells,
            global: model.global,
        }
    }
}

fn cell_key(latitude: f64, longitude: f64, cell_size: f64) -> (i64, i64) {
    (
        (latitude / cell_size).floor() as i64,
        (longitude / cell_size).floor() as i64,
    )
}

fn cell_center(idx: i64, cell_size: f64) -> f64 {
    (idx as f64 + 0.5) * cell_size
}
