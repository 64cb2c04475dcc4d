use crate::core::kinematics::{displacement, final_velocity};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub position_m: f64,
    pub velocity_mps: f64,
}

pub fn sample_at(v0: f64, a: f64, time_s: f64) -> TrajectorySample {
    TrajectorySample {
        time_s,
        position_m: displacement(v0, a, time_s),
        velocity_mps: final_velocity(v0, a, time_s),
    }
}

/// Evaluates `points` samples evenly spaced over `[0, total_time_s]`, both
/// ends included. Every sample comes straight from the formulas.
pub fn sample_trajectory(
    v0: f64,
    a: f64,
    total_time_s: f64,
    points: usize,
) -> Vec<TrajectorySample> {
    let intervals = points.max(2) - 1;
    (0..=intervals)
        .map(|i| {
            let t = (i as f64 * total_time_s) / intervals as f64;
            sample_at(v0, a, t)
        })
        .collect()
}

pub fn velocity_series(v0: f64, a: f64, total_time_s: f64, points: usize) -> Vec<(f64, f64)> {
    sample_trajectory(v0, a, total_time_s, points)
        .into_iter()
        .map(|sample| (sample.time_s, sample.velocity_mps))
        .collect()
}
