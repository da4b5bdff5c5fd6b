use super::DirectionsResponse;
use crate::directions::{
    DirectionsConfig, RouteQuery, RouteSource, RouteSourceError, GOOGLE_MAPS_API_KEY_ENV,
};
use smartroute_core::model::route::CandidateRoute;
use smartroute_core::util::datetime_ops;
use std::time::Duration;

/// route source backed by the Google Directions API. requests alternative driving
/// routes with traffic-aware duration estimates.
pub struct GoogleDirectionsClient {
    base_url: String,
    api_key: String,
    traffic_model: String,
    client: reqwest::blocking::Client,
}

impl GoogleDirectionsClient {
    /// builds a client. fails when no api key is configured or available from the
    /// environment.
    pub fn new(config: &DirectionsConfig) -> Result<GoogleDirectionsClient, RouteSourceError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            RouteSourceError::Configuration(format!(
                "no Google Maps api key found, set 'directions.api_key' or the {} environment variable",
                GOOGLE_MAPS_API_KEY_ENV
            ))
        })?;
        if config.timeout_secs == 0 {
            return Err(RouteSourceError::Configuration(String::from(
                "'directions.timeout_secs' must be positive",
            )));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RouteSourceError::Configuration(format!("failure building http client: {e}"))
            })?;
        Ok(GoogleDirectionsClient {
            base_url: config.base_url.clone(),
            api_key,
            traffic_model: config.traffic_model.clone(),
            client,
        })
    }

    /// query parameters for a directions request. departure times in the past are
    /// sent as "now", the only past-or-present value the api accepts.
    fn query_params(&self, query: &RouteQuery) -> Vec<(&'static str, String)> {
        let departure = query.departure_time.timestamp();
        let departure_param = if departure <= datetime_ops::now().timestamp() {
            String::from("now")
        } else {
            departure.to_string()
        };
        vec![
            ("origin", query.origin.clone()),
            ("destination", query.destination.clone()),
            ("alternatives", String::from("true")),
            ("departure_time", departure_param),
            ("traffic_model", self.traffic_model.clone()),
            ("key", self.api_key.clone()),
        ]
    }
}

impl RouteSource for GoogleDirectionsClient {
    fn name(&self) -> String {
        String::from("Google Directions")
    }

    fn get_routes(&self, query: &RouteQuery) -> Result<Vec<CandidateRoute>, RouteSourceError> {
        log::debug!(
            "requesting directions from '{}' to '{}'",
            query.origin,
            query.destination
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(query))
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    RouteSourceError::Timeout(e.without_url().to_string())
                } else {
                    RouteSourceError::Request(e.without_url().to_string())
                }
            })?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(RouteSourceError::Upstream {
                status: status.to_string(),
                message,
            });
        }
        let body: DirectionsResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                RouteSourceError::Timeout(e.without_url().to_string())
            } else {
                RouteSourceError::Deserialize(e.without_url().to_string())
            }
        })?;
        let routes = body.into_routes()?;
        log::info!(
            "received {} candidate routes from '{}' to '{}'",
            routes.len(),
            query.origin,
            query.destination
        );
        Ok(routes)
    }
}
