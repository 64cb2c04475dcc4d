use macroquad::prelude::*;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;

use crate::display::chart::{CHART_TITLE, ChartSurface, VelocityChart};
use crate::settings::ChartSettings;

const LEFT_MARGIN: f32 = 90.0;
const RIGHT_MARGIN: f32 = 40.0;
const TOP_MARGIN: f32 = 80.0;
const BOTTOM_MARGIN: f32 = 80.0;

const X_TICK_HINT: usize = 10;
const Y_TICK_HINT: usize = 8;
const TITLE_FONT_SIZE: f32 = 30.0;
const LABEL_FONT_SIZE: f32 = 20.0;
const TICK_FONT_SIZE: u16 = 16;

const IDLE_MESSAGE: &str = "Gráfico fechado. Continue no terminal.";

const GRID_COLOR: Color = Color::new(0.85, 0.86, 0.88, 1.0);
const AXIS_COLOR: Color = Color::new(0.1, 0.1, 0.12, 1.0);
const SERIES_COLOR: Color = Color::new(0.2, 0.6, 0.86, 1.0);
const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);

/// Draws charts into the process-wide macroquad window.
///
/// miniquad can open its native display only once per process, so the
/// viewer never creates a window itself: the caller opens one with
/// [`MacroquadViewer::window_conf`] and the viewer draws inside it for as
/// long as the session lasts.
pub struct MacroquadViewer {
    settings: ChartSettings,
}

impl MacroquadViewer {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: CHART_TITLE.to_string(),
            window_width: self.settings.window_width,
            window_height: self.settings.window_height,
            high_dpi: true,
            sample_count: self.settings.sample_count,
            ..Default::default()
        }
    }
}

impl ChartSurface for MacroquadViewer {
    async fn show(&mut self, chart: &VelocityChart) {
        log::info!("showing chart '{}'", chart.title);
        // Closing the window only dismisses the chart; the session goes on.
        prevent_quit();

        loop {
            if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
                break;
            }

            clear_background(WHITE);
            let coords = ChartCoords::new(chart, screen_width(), screen_height());
            draw_grid(&coords);
            draw_zero_lines(&coords);
            draw_series(&chart.points, &coords, self.settings.line_thickness);
            draw_axis_tick_labels(&coords);
            draw_labels(chart, &coords);
            next_frame().await;
        }

        draw_idle();
        next_frame().await;
        log::info!("chart dismissed");
    }
}

/// Whether a native window can be opened at all.
pub fn display_available() -> bool {
    #[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "android")))]
    {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|key| std::env::var_os(key).is_some_and(|value| !value.is_empty()))
    }
    #[cfg(not(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "android"))))]
    {
        true
    }
}

fn draw_idle() {
    clear_background(WHITE);
    let size = measure_text(IDLE_MESSAGE, None, LABEL_FONT_SIZE as u16, 1.0);
    draw_text(
        IDLE_MESSAGE,
        (screen_width() - size.width) * 0.5,
        screen_height() * 0.5,
        LABEL_FONT_SIZE,
        LABEL_COLOR,
    );
}

/// Maps data space onto the plot rectangle of the current frame.
struct ChartCoords {
    x: RangedCoordf64,
    y: RangedCoordf64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl ChartCoords {
    fn new(chart: &VelocityChart, screen_w: f32, screen_h: f32) -> Self {
        let window = chart.window;
        let left = LEFT_MARGIN;
        let top = TOP_MARGIN;
        Self {
            x: (window.x_min..window.x_max).into(),
            y: (window.y_min..window.y_max).into(),
            left,
            right: (screen_w - RIGHT_MARGIN).max(left + 1.0),
            top,
            bottom: (screen_h - BOTTOM_MARGIN).max(top + 1.0),
        }
    }

    fn screen_x(&self, x: f64) -> f32 {
        self.x.map(&x, (self.left as i32, self.right as i32)) as f32
    }

    fn screen_y(&self, y: f64) -> f32 {
        self.y.map(&y, (self.bottom as i32, self.top as i32)) as f32
    }

    fn to_screen(&self, point: (f64, f64)) -> Vec2 {
        vec2(self.screen_x(point.0), self.screen_y(point.1))
    }
}

fn format_axis_value(value: f64, span: f64) -> String {
    if span >= 1000.0 {
        format!("{value:.0}")
    } else if span >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn draw_grid(coords: &ChartCoords) {
    for x in coords.x.key_points(X_TICK_HINT) {
        let sx = coords.screen_x(x);
        draw_line(sx, coords.top, sx, coords.bottom, 1.0, GRID_COLOR);
    }
    for y in coords.y.key_points(Y_TICK_HINT) {
        let sy = coords.screen_y(y);
        draw_line(coords.left, sy, coords.right, sy, 1.0, GRID_COLOR);
    }
    draw_rectangle_lines(
        coords.left,
        coords.top,
        coords.right - coords.left,
        coords.bottom - coords.top,
        1.0,
        LABEL_COLOR,
    );
}

fn draw_zero_lines(coords: &ChartCoords) {
    let zero_x = coords.screen_x(0.0);
    let zero_y = coords.screen_y(0.0);
    draw_line(zero_x, coords.top, zero_x, coords.bottom, 1.5, AXIS_COLOR);
    draw_line(coords.left, zero_y, coords.right, zero_y, 1.5, AXIS_COLOR);
}

fn draw_series(points: &[(f64, f64)], coords: &ChartCoords, thickness: f32) {
    for pair in points.windows(2) {
        if !(pair[0].1.is_finite() && pair[1].1.is_finite()) {
            continue;
        }
        let a = coords.to_screen(pair[0]);
        let b = coords.to_screen(pair[1]);
        draw_line(a.x, a.y, b.x, b.y, thickness, SERIES_COLOR);
    }
}

fn draw_axis_tick_labels(coords: &ChartCoords) {
    let x_span = coords.x.range().end - coords.x.range().start;
    let y_span = coords.y.range().end - coords.y.range().start;

    for x in coords.x.key_points(X_TICK_HINT) {
        let label = format_axis_value(x, x_span);
        let size = measure_text(&label, None, TICK_FONT_SIZE, 1.0);
        draw_text(
            &label,
            coords.screen_x(x) - (size.width * 0.5),
            coords.bottom + 22.0,
            TICK_FONT_SIZE as f32,
            LABEL_COLOR,
        );
    }
    for y in coords.y.key_points(Y_TICK_HINT) {
        let label = format_axis_value(y, y_span);
        let size = measure_text(&label, None, TICK_FONT_SIZE, 1.0);
        draw_text(
            &label,
            (coords.left - 8.0) - size.width,
            coords.screen_y(y) + (size.height * 0.35),
            TICK_FONT_SIZE as f32,
            LABEL_COLOR,
        );
    }
}

fn draw_labels(chart: &VelocityChart, coords: &ChartCoords) {
    let title_size = measure_text(&chart.title, None, TITLE_FONT_SIZE as u16, 1.0);
    draw_text(
        &chart.title,
        (coords.left + coords.right - title_size.width) * 0.5,
        TOP_MARGIN * 0.5,
        TITLE_FONT_SIZE,
        AXIS_COLOR,
    );

    let x_label_size = measure_text(&chart.x_label, None, LABEL_FONT_SIZE as u16, 1.0);
    draw_text(
        &chart.x_label,
        (coords.left + coords.right - x_label_size.width) * 0.5,
        coords.bottom + 52.0,
        LABEL_FONT_SIZE,
        LABEL_COLOR,
    );
    draw_text(
        &chart.y_label,
        coords.left + 10.0,
        coords.top - 10.0,
        LABEL_FONT_SIZE,
        LABEL_COLOR,
    );

    let note_size = measure_text(&chart.annotation, None, LABEL_FONT_SIZE as u16, 1.0);
    let note_x = coords.left + 16.0;
    let note_y = coords.top + 16.0;
    draw_rectangle(
        note_x,
        note_y,
        note_size.width + 20.0,
        note_size.height + 16.0,
        Color::new(1.0, 1.0, 1.0, 0.85),
    );
    draw_rectangle_lines(
        note_x,
        note_y,
        note_size.width + 20.0,
        note_size.height + 16.0,
        1.0,
        SERIES_COLOR,
    );
    draw_text(
        &chart.annotation,
        note_x + 10.0,
        note_y + 8.0 + note_size.offset_y,
        LABEL_FONT_SIZE,
        AXIS_COLOR,
    );

    draw_text(
        "Esc para fechar",
        coords.right - 120.0,
        coords.bottom + 52.0,
        TICK_FONT_SIZE as f32,
        LABEL_COLOR,
    );
}
