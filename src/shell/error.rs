use std::io;

use crate::core::kinematics::KinematicsError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    InvalidInput(#[from] KinematicsError),
    #[error("valor numérico inválido: '{0}'")]
    Parse(String),
    #[error("a entrada terminou inesperadamente (EOF)")]
    InputClosed,
    #[error("falha de E/S: {0}")]
    Io(#[from] io::Error),
}
