use thiserror::Error;

/// Ошибки настройки параметров сети
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// Доля прореживания вне [0, 1)
    #[error("pruning ratio {0} is outside [0, 1): a ratio of 1 or higher would remove all connections")]
    InvalidRatio(f64),
}
