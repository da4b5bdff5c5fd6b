mod directions_response;
mod google_directions_client;

pub use directions_response::{
    DirectionsLeg, DirectionsResponse, DirectionsRoute, DirectionsStep, LatLng, TextValue,
};
pub use google_directions_client::GoogleDirectionsClient;
