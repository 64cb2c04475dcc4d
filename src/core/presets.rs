use crate::core::kinematics::{KinematicsError, acceleration, displacement, final_velocity};

/// Which quantities a preset fixes; the rest are solved for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresetGiven {
    VelocitiesAndTime { v0: f64, v: f64, t: f64 },
    AccelerationAndTime { v0: f64, a: f64, t: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub given: PresetGiven,
}

/// Every quantity of one motion, fully solved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSummary {
    pub v0: f64,
    pub v: f64,
    pub a: f64,
    pub t: f64,
    pub s: f64,
}

pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "Aceleração Positiva",
        given: PresetGiven::VelocitiesAndTime {
            v0: 0.0,
            v: 20.0,
            t: 5.0,
        },
    },
    Preset {
        name: "Desaceleração",
        given: PresetGiven::VelocitiesAndTime {
            v0: 30.0,
            v: 0.0,
            t: 6.0,
        },
    },
    Preset {
        name: "Queda Livre",
        given: PresetGiven::AccelerationAndTime {
            v0: 0.0,
            a: 9.8,
            t: 3.0,
        },
    },
];

impl Preset {
    pub fn describe_given(&self) -> String {
        match self.given {
            PresetGiven::VelocitiesAndTime { v0, v, t } => {
                format!("v0: {v0} m/s, v: {v} m/s, t: {t} s")
            }
            PresetGiven::AccelerationAndTime { v0, a, t } => {
                format!("v0: {v0} m/s, a: {a} m/s², t: {t} s")
            }
        }
    }

    pub fn solve(&self) -> Result<MotionSummary, KinematicsError> {
        let (v0, v, a, t) = match self.given {
            PresetGiven::VelocitiesAndTime { v0, v, t } => (v0, v, acceleration(v0, v, t)?, t),
            PresetGiven::AccelerationAndTime { v0, a, t } => (v0, final_velocity(v0, a, t), a, t),
        };

        Ok(MotionSummary {
            v0,
            v,
            a,
            t,
            s: displacement(v0, a, t),
        })
    }
}

/// Looks a preset up by its 1-based menu number.
pub fn preset_by_number(token: &str) -> Option<&'static Preset> {
    let index = token.trim().parse::<usize>().ok()?;
    PRESETS.get(index.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::{PRESETS, preset_by_number};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn positive_acceleration_covers_fifty_meters() {
        let summary = PRESETS[0].solve().expect("preset should solve");

        assert_close(summary.a, 4.0, 1e-12);
        assert_close(summary.s, 50.0, 1e-9);
    }

    #[test]
    fn deceleration_covers_ninety_meters() {
        let summary = PRESETS[1].solve().expect("preset should solve");

        assert_close(summary.a, -5.0, 1e-12);
        assert_close(summary.s, 90.0, 1e-9);
    }

    #[test]
    fn free_fall_covers_forty_four_meters() {
        let summary = PRESETS[2].solve().expect("preset should solve");

        assert_close(summary.v, 29.4, 1e-9);
        assert_close(summary.s, 44.1, 1e-9);
    }

    #[test]
    fn lookup_is_one_based() {
        assert_eq!(preset_by_number("1").map(|p| p.name), Some("Aceleração Positiva"));
        assert_eq!(preset_by_number(" 3\n").map(|p| p.name), Some("Queda Livre"));
        assert!(preset_by_number("0").is_none());
        assert!(preset_by_number("4").is_none());
        assert!(preset_by_number("abc").is_none());
    }

    #[test]
    fn given_values_are_described() {
        assert_eq!(
            PRESETS[2].describe_given(),
            "v0: 0 m/s, a: 9.8 m/s², t: 3 s"
        );
    }
}
