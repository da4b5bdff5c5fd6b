use chrono::{DateTime, FixedOffset};

/// a request for alternative routes between two places. origin and destination are
/// free text: an address or a "lat,lng" pair.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<FixedOffset>,
}

impl RouteQuery {
    pub fn new(
        origin: &str,
        destination: &str,
        departure_time: DateTime<FixedOffset>,
    ) -> Result<RouteQuery, String> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() {
            return Err(String::from("origin must not be empty"));
        }
        if destination.is_empty() {
            return Err(String::from("destination must not be empty"));
        }
        Ok(RouteQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_time,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smartroute_core::util::datetime_ops;

    #[test]
    fn test_new_trims_and_rejects_blank_places() {
        let now = datetime_ops::now();
        let query = RouteQuery::new("  Denver, CO ", "Boulder, CO", now).unwrap();
        assert_eq!(query.origin, "Denver, CO");
        assert!(RouteQuery::new("   ", "Boulder, CO", now).is_err());
        assert!(RouteQuery::new("Denver, CO", "", now).is_err());
    }
}
