use super::{TrafficFeatures, TrafficSourceError};

/// a provider of traffic intensity estimates. an intensity is a congestion multiplier
/// where larger values mean heavier traffic.
///
/// sources are shared read-only between requests and must be thread-safe.
pub trait TrafficIntensitySource: Send + Sync {
    /// descriptive name used in logs and responses
    fn name(&self) -> String;

    /// predicts the traffic intensity at a time and place. failures are returned to
    /// the caller, implementations never substitute a default value.
    fn predict(&self, features: &TrafficFeatures) -> Result<f64, TrafficSourceError>;

    /// prepares any backing resources so that [`TrafficIntensitySource::predict`] can
    /// succeed. sources without resources are always ready.
    fn ensure_ready(&self) -> Result<(), TrafficSourceError> {
        Ok(())
    }
}
