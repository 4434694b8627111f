use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset contains no chartable points")]
    EmptyDataset,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
