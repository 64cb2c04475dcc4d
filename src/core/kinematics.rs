//! Closed-form equations of uniformly accelerated rectilinear motion.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KinematicsError {
    #[error("O tempo não pode ser zero!")]
    ZeroTime,
    #[error("A aceleração não pode ser zero!")]
    ZeroAcceleration,
}

/// a = (v - v0) / t
pub fn acceleration(v0: f64, v: f64, t: f64) -> Result<f64, KinematicsError> {
    if t == 0.0 {
        return Err(KinematicsError::ZeroTime);
    }
    Ok((v - v0) / t)
}

/// v = v0 + a*t
pub fn final_velocity(v0: f64, a: f64, t: f64) -> f64 {
    v0 + a * t
}

/// t = (v - v0) / a
pub fn time(v0: f64, v: f64, a: f64) -> Result<f64, KinematicsError> {
    if a == 0.0 {
        return Err(KinematicsError::ZeroAcceleration);
    }
    Ok((v - v0) / a)
}

/// s = v0*t + 0.5*a*t^2
pub fn displacement(v0: f64, a: f64, t: f64) -> f64 {
    v0 * t + 0.5 * a * t * t
}
