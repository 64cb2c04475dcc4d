const X_PADDING_RATIO: f64 = 0.04;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Data-space bounds of a chart. Always contains the origin so both
/// zero-reference lines are on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

fn padded_range(min: f64, max: f64, ratio: f64) -> (f64, f64) {
    let min = min.min(0.0);
    let max = max.max(0.0);
    let span = (max - min).max(MIN_SPAN);
    let pad = span * ratio;

    // Only pad away from zero on a side that carries data.
    let lo = if min < 0.0 { min - pad } else { 0.0 };
    let hi = if max > 0.0 || min == 0.0 { max + pad } else { 0.0 };

    if hi - lo < MIN_SPAN {
        (lo, lo + MIN_SPAN)
    } else {
        (lo, hi)
    }
}

pub fn axis_window(points: &[(f64, f64)]) -> AxisWindow {
    let finite = points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite());

    let (mut x_min, mut x_max, mut y_min, mut y_max) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    for &(x, y) in finite {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let (x_min, x_max) = padded_range(x_min, x_max, X_PADDING_RATIO);
    let (y_min, y_max) = padded_range(y_min, y_max, Y_PADDING_RATIO);
    AxisWindow {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
