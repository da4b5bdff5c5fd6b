use super::ScoreComponents;
use crate::model::route::CandidateRoute;

/// a candidate route paired with its computed score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRoute {
    pub route: CandidateRoute,
    pub components: ScoreComponents,
}

impl ScoredRoute {
    pub fn score(&self) -> f64 {
        self.components.score
    }
}
