use uom::si::f64::{Length, Time};
use uom::si::length::{kilometer, meter};
use uom::si::time::{minute, second};

/// renders a distance the way mapping services describe it, "850 m" or "12.4 km".
pub fn format_length(length: &Length) -> String {
    let meters = length.get::<meter>();
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", length.get::<kilometer>())
    }
}

/// renders a duration in whole minutes, "1 min", "25 mins" or "1 hour 5 mins".
pub fn format_time(time: &Time) -> String {
    let total_minutes = time.get::<minute>().round().max(1.0) as i64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let mins = |m: i64| if m == 1 { "1 min".to_string() } else { format!("{m} mins") };
    match hours {
        0 => mins(minutes),
        1 if minutes == 0 => "1 hour".to_string(),
        1 => format!("1 hour {}", mins(minutes)),
        h if minutes == 0 => format!("{h} hours"),
        h => format!("{h} hours {}", mins(minutes)),
    }
}

pub fn seconds(time: &Time) -> f64 {
    time.get::<second>()
}

pub fn meters(length: &Length) -> f64 {
    length.get::<meter>()
}
