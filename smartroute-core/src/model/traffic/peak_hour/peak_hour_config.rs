use serde::{Deserialize, Serialize};

/// an inclusive range of hours of the day, for example 7-9 covers 7:00 through 9:59.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    pub fn new(start: u32, end: u32) -> HourWindow {
        HourWindow { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

/// rule table for the peak hour traffic source
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PeakHourConfig {
    /// weekday hour windows considered rush hour
    #[serde(default = "default_peak_windows")]
    pub peak_windows: Vec<HourWindow>,
    /// intensity during weekday rush hour
    #[serde(default = "default_peak_intensity")]
    pub peak_intensity: f64,
    /// intensity during weekdays outside of rush hour
    #[serde(default = "default_weekday_intensity")]
    pub weekday_intensity: f64,
    /// intensity at any hour on Saturday and Sunday
    #[serde(default = "default_weekend_intensity")]
    pub weekend_intensity: f64,
}

impl Default for PeakHourConfig {
    fn default() -> Self {
        Self {
            peak_windows: default_peak_windows(),
            peak_intensity: default_peak_intensity(),
            weekday_intensity: default_weekday_intensity(),
            weekend_intensity: default_weekend_intensity(),
        }
    }
}

impl PeakHourConfig {
    pub fn validate(&self) -> Result<(), String> {
        for w in self.peak_windows.iter() {
            if w.start > w.end || w.end > 23 {
                return Err(format!(
                    "peak window {}-{} must satisfy start <= end <= 23",
                    w.start, w.end
                ));
            }
        }
        let intensities = [
            ("peak_intensity", self.peak_intensity),
            ("weekday_intensity", self.weekday_intensity),
            ("weekend_intensity", self.weekend_intensity),
        ];
        for (key, value) in intensities {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{key} '{value}' must be finite and non-negative"));
            }
        }
        Ok(())
    }
}

fn default_peak_windows() -> Vec<HourWindow> {
    vec![HourWindow::new(7, 9), HourWindow::new(17, 19)]
}

fn default_peak_intensity() -> f64 {
    2.0
}

fn default_weekday_intensity() -> f64 {
    1.5
}

fn default_weekend_intensity() -> f64 {
    1.0
}
