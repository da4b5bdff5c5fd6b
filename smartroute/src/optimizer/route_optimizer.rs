use super::{OptimalRoute, OptimizerError, TrafficPrediction};
use crate::directions::{RouteQuery, RouteSource};
use chrono::{DateTime, FixedOffset};
use smartroute_core::model::scoring::{RouteScorer, ScoringPolicy};
use smartroute_core::model::traffic::TrafficIntensitySource;
use smartroute_core::util::datetime_ops;
use std::sync::Arc;

/// finds the best route between two places by scoring the alternatives offered by a
/// route source against predicted traffic.
pub struct RouteOptimizer {
    route_source: Arc<dyn RouteSource>,
    traffic_source: Arc<dyn TrafficIntensitySource>,
    scorer: RouteScorer,
}

impl RouteOptimizer {
    pub fn new(
        route_source: Arc<dyn RouteSource>,
        traffic_source: Arc<dyn TrafficIntensitySource>,
        policy: ScoringPolicy,
    ) -> Result<RouteOptimizer, OptimizerError> {
        let scorer = RouteScorer::new(traffic_source.clone(), policy)?;
        Ok(RouteOptimizer {
            route_source,
            traffic_source,
            scorer,
        })
    }

    /// prepares the traffic source to serve predictions, loading or training a model
    /// when one is configured.
    pub fn ensure_ready(&self) -> Result<(), OptimizerError> {
        self.traffic_source.ensure_ready()?;
        log::info!(
            "route optimizer ready with traffic source '{}' and {} scoring",
            self.traffic_source.name(),
            self.scorer.policy().name()
        );
        Ok(())
    }

    pub fn scorer(&self) -> &RouteScorer {
        &self.scorer
    }

    /// selects the lowest-scoring alternative between `origin` and `destination`.
    /// departure defaults to the current time.
    pub fn optimize(
        &self,
        origin: &str,
        destination: &str,
        departure_time: Option<DateTime<FixedOffset>>,
    ) -> Result<OptimalRoute, OptimizerError> {
        let departure_time = departure_time.unwrap_or_else(datetime_ops::now);
        let query = RouteQuery::new(origin, destination, departure_time)
            .map_err(OptimizerError::invalid_input)?;
        let candidates = self.route_source.get_routes(&query)?;
        let alternatives = candidates.len();
        log::debug!(
            "scoring {alternatives} routes from '{}' to '{}' departing {departure_time}",
            query.origin,
            query.destination
        );
        let best = self.scorer.select_best(candidates, &departure_time)?;
        log::info!(
            "selected route '{}' with score {:.4} out of {alternatives} alternatives",
            best.route.summary,
            best.score()
        );
        Ok(OptimalRoute::new(
            best,
            &departure_time,
            self.scorer.policy().name(),
            alternatives,
        ))
    }

    /// predicts traffic intensity at a location. time defaults to the current time.
    pub fn predict_traffic(
        &self,
        latitude: f64,
        longitude: f64,
        time: Option<DateTime<FixedOffset>>,
    ) -> Result<TrafficPrediction, OptimizerError> {
        let time = time.unwrap_or_else(datetime_ops::now);
        TrafficPrediction::predict(self.traffic_source.as_ref(), latitude, longitude, &time)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::directions::RouteSourceError;
    use smartroute_core::model::route::{CandidateRoute, InvalidRouteError, RouteLeg, RouteStep};
    use smartroute_core::model::scoring::RouteScoringError;
    use smartroute_core::model::traffic::peak_hour::PeakHourTrafficSource;
    use smartroute_core::util::geo_ops::point_from_lat_lng;
    use std::sync::Mutex;
    use uom::si::f64::{Length, Time};
    use uom::si::length::meter;
    use uom::si::time::second;

    /// returns a fixed set of routes and records every query it receives
    struct FakeRouteSource {
        routes: Vec<CandidateRoute>,
        queries: Mutex<Vec<RouteQuery>>,
    }

    impl FakeRouteSource {
        fn new(routes: Vec<CandidateRoute>) -> FakeRouteSource {
            FakeRouteSource {
                routes,
                queries: Mutex::new(vec![]),
            }
        }
    }

    impl RouteSource for FakeRouteSource {
        fn name(&self) -> String {
            String::from("fake")
        }

        fn get_routes(&self, query: &RouteQuery) -> Result<Vec<CandidateRoute>, RouteSourceError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(self.routes.clone())
        }
    }

    struct TimeoutRouteSource;

    impl RouteSource for TimeoutRouteSource {
        fn name(&self) -> String {
            String::from("timeout")
        }

        fn get_routes(&self, _query: &RouteQuery) -> Result<Vec<CandidateRoute>, RouteSourceError> {
            Err(RouteSourceError::Timeout(String::from("operation timed out")))
        }
    }

    struct UnusableRouteSource;

    impl RouteSource for UnusableRouteSource {
        fn name(&self) -> String {
            String::from("unusable")
        }

        fn get_routes(&self, _query: &RouteQuery) -> Result<Vec<CandidateRoute>, RouteSourceError> {
            Err(RouteSourceError::NoValidRoutes {
                count: 2,
                index: 0,
                source: InvalidRouteError::NoLegs,
            })
        }
    }

    /// a single-leg route starting downtown with one step per kilometer count
    fn route(summary: &str, duration_s: f64, step_km: &[f64]) -> CandidateRoute {
        let steps = step_km
            .iter()
            .enumerate()
            .map(|(i, km)| {
                let lat = 39.74 + 0.01 * i as f64;
                RouteStep::new(
                    point_from_lat_lng(lat, -104.99),
                    point_from_lat_lng(lat + 0.01, -104.99),
                    Length::new::<meter>(km * 1000.0),
                    Time::new::<second>(duration_s / step_km.len() as f64),
                )
                .with_instructions(&format!("continue for {km} km"))
            })
            .collect::<Vec<_>>();
        let total_m = step_km.iter().sum::<f64>() * 1000.0;
        let leg = RouteLeg::new(
            "Denver, CO, USA",
            "Boulder, CO, USA",
            point_from_lat_lng(39.74, -104.99),
            point_from_lat_lng(39.74 + 0.01 * step_km.len() as f64, -104.99),
            Time::new::<second>(duration_s),
            Length::new::<meter>(total_m),
            steps,
        );
        CandidateRoute::new(summary, vec![leg]).unwrap()
    }

    fn optimizer(source: Arc<dyn RouteSource>) -> RouteOptimizer {
        RouteOptimizer::new(
            source,
            Arc::new(PeakHourTrafficSource::default()),
            ScoringPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_optimize_selects_lowest_score() {
        let source = Arc::new(FakeRouteSource::new(vec![
            route("US-36 W", 2400.0, &[2.0, 40.0]),
            route("I-25 N", 1800.0, &[1.0, 30.0]),
            route("CO-93 N", 3000.0, &[5.0, 45.0]),
        ]));
        let departure = smartroute_core::util::datetime_ops::parse_departure_time(
            "2024-05-06T08:00:00-06:00",
        )
        .unwrap();
        let result = optimizer(source.clone())
            .optimize("Denver, CO", "Boulder, CO", Some(departure))
            .unwrap();
        assert_eq!(result.summary, "I-25 N");
        assert_eq!(result.alternatives_considered, 3);
        assert_eq!(result.duration.value, 1800);
        assert_eq!(result.distance.value, 31_000);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].instructions, "continue for 1 km");
        assert_eq!(result.scoring_policy, "blended");
        assert_eq!(result.departure_time, "2024-05-06T08:00:00-06:00");
        // weekday 8am is peak, intensity 2.0 everywhere
        let expected = 0.4 * 0.5 + 0.4 * 2.0 + 0.2 * 31.0;
        assert!((result.traffic_score - expected).abs() < 1e-9);

        let queries = source.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].departure_time, departure);
    }

    #[test]
    fn test_optimize_without_routes() {
        let source = Arc::new(FakeRouteSource::new(vec![]));
        let result = optimizer(source).optimize("Denver, CO", "Atlantis", None);
        assert!(matches!(
            result,
            Err(OptimizerError::Scoring(RouteScoringError::NoRoutesFound))
        ));
    }

    #[test]
    fn test_optimize_rejects_blank_origin() {
        let source = Arc::new(FakeRouteSource::new(vec![route("any", 60.0, &[1.0])]));
        let result = optimizer(source.clone()).optimize(" ", "Boulder, CO", None);
        assert!(matches!(
            result,
            Err(OptimizerError::Scoring(RouteScoringError::InvalidInput(_)))
        ));
        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_route_source_failure_propagates() {
        let result = optimizer(Arc::new(TimeoutRouteSource)).optimize("a", "b", None);
        assert!(matches!(
            result,
            Err(OptimizerError::RouteSource(RouteSourceError::Timeout(_)))
        ));
    }

    #[test]
    fn test_all_invalid_routes_is_invalid_input() {
        let result = optimizer(Arc::new(UnusableRouteSource)).optimize("a", "b", None);
        match result {
            Err(OptimizerError::Scoring(RouteScoringError::InvalidInput(message))) => {
                assert!(message.contains("all 2 routes"), "{message}");
            }
            other => panic!("expected invalid input, found {other:?}"),
        }
    }

    #[test]
    fn test_predict_traffic_weekend() {
        let source = Arc::new(FakeRouteSource::new(vec![]));
        let saturday =
            smartroute_core::util::datetime_ops::parse_departure_time("2024-05-11T08:00:00Z")
                .unwrap();
        let prediction = optimizer(source)
            .predict_traffic(39.74, -104.99, Some(saturday))
            .unwrap();
        assert_eq!(prediction.traffic_prediction, 1.0);
        assert_eq!(prediction.source, PeakHourTrafficSource::default().name());
    }
}
