use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("answer value {0} is outside the answer scale [0, 4]")]
    AnswerOutOfRange(u8),

    #[error("unknown answer label: {0}")]
    UnknownAnswerLabel(String),

    #[error("unknown category label: {0}")]
    UnknownCategory(String),
}
