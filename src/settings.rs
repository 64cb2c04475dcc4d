//! Session settings.
//!
//! Nothing is read from disk or the environment; the defaults are the
//! configuration and tests build their own values.

/// Chart window parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSettings {
    pub window_width: i32,
    pub window_height: i32,
    /// MSAA samples for the line series.
    pub sample_count: i32,
    pub line_thickness: f32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 600,
            sample_count: 4,
            line_thickness: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Rows in the position/velocity table, both ends included.
    pub table_points: usize,
    /// Samples along the plotted velocity line.
    pub plot_points: usize,
    /// Calculations kept in the session history.
    pub history_capacity: usize,
    pub chart: ChartSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table_points: 11,
            plot_points: 100,
            history_capacity: 5,
            chart: ChartSettings::default(),
        }
    }
}
