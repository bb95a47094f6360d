use gt_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration rejected: {0}")]
    Config(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
