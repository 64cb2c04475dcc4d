use std::future::Future;

use crate::core::trajectory::velocity_series;
use crate::core::window::{AxisWindow, axis_window};

pub const CHART_TITLE: &str = "MRUV: Velocidade vs Tempo";
pub const X_AXIS_LABEL: &str = "Tempo (s)";
pub const Y_AXIS_LABEL: &str = "Velocidade (m/s)";

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("nenhum display gráfico disponível (defina DISPLAY ou WAYLAND_DISPLAY)")]
    Headless,
}

/// Everything a chart surface needs to draw the velocity line.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub annotation: String,
    pub points: Vec<(f64, f64)>,
    pub window: AxisWindow,
}

impl VelocityChart {
    pub fn new(v0: f64, a: f64, total_time_s: f64, samples: usize) -> Self {
        let points = velocity_series(v0, a, total_time_s, samples);
        let window = axis_window(&points);
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            annotation: annotation(v0, a),
            points,
            window,
        }
    }
}

fn annotation(v0: f64, a: f64) -> String {
    // Folds -0.0 into 0.0 so neither prints with a sign.
    let (v0, a) = (v0 + 0.0, a + 0.0);
    if a < 0.0 {
        format!("v(t) = {v0:.2} - {:.2}·t", a.abs())
    } else {
        format!("v(t) = {v0:.2} + {a:.2}·t")
    }
}

/// A surface that can show a velocity chart. Blocks until the chart is
/// dismissed.
pub trait ChartPresenter {
    fn present(&mut self, chart: &VelocityChart) -> Result<(), DisplayError>;
}

/// Presenter for sessions that have no chart window.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl ChartPresenter for NoDisplay {
    fn present(&mut self, _chart: &VelocityChart) -> Result<(), DisplayError> {
        Err(DisplayError::Headless)
    }
}

/// A long-lived chart window driven from inside its own frame loop. One
/// surface serves every chart of a session; `show` resolves once the chart
/// is dismissed.
pub trait ChartSurface {
    fn show(&mut self, chart: &VelocityChart) -> impl Future<Output = ()>;
}

impl<P: ChartPresenter + ?Sized> ChartPresenter for &mut P {
    fn present(&mut self, chart: &VelocityChart) -> Result<(), DisplayError> {
        (**self).present(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::{CHART_TITLE, ChartPresenter, DisplayError, NoDisplay, VelocityChart};

    #[test]
    fn chart_carries_labels_and_samples() {
        let chart = VelocityChart::new(2.0, 1.5, 10.0, 100);

        assert_eq!(chart.title, CHART_TITLE);
        assert_eq!(chart.x_label, "Tempo (s)");
        assert_eq!(chart.y_label, "Velocidade (m/s)");
        assert_eq!(chart.points.len(), 100);
        assert_eq!(chart.points[0], (0.0, 2.0));
    }

    #[test]
    fn annotation_substitutes_coefficients() {
        assert_eq!(
            VelocityChart::new(2.0, 1.5, 10.0, 100).annotation,
            "v(t) = 2.00 + 1.50·t"
        );
        assert_eq!(
            VelocityChart::new(30.0, -5.0, 6.0, 100).annotation,
            "v(t) = 30.00 - 5.00·t"
        );
    }

    #[test]
    fn negative_zero_coefficients_print_unsigned() {
        assert_eq!(
            VelocityChart::new(-0.0, -0.0, 3.0, 10).annotation,
            "v(t) = 0.00 + 0.00·t"
        );
    }

    #[test]
    fn no_display_reports_headless() {
        let chart = VelocityChart::new(0.0, 1.0, 1.0, 2);

        assert!(matches!(NoDisplay.present(&chart), Err(DisplayError::Headless)));
    }

    #[test]
    fn window_covers_every_sample() {
        let chart = VelocityChart::new(30.0, -5.0, 6.0, 100);

        for &(x, y) in &chart.points {
            assert!(chart.window.x_min <= x && x <= chart.window.x_max);
            assert!(chart.window.y_min <= y && y <= chart.window.y_max);
        }
    }
}
