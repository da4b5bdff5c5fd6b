mod peak_hour_config;
mod peak_hour_source;

pub use peak_hour_config::{HourWindow, PeakHourConfig};
pub use peak_hour_source::PeakHourTrafficSource;
