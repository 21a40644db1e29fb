use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown screener: {0}")]
    UnknownScreener(String),

    #[error("unknown reading module: {0}")]
    UnknownModule(String),

    #[error("profile '{profile_id}' has no questions")]
    InvalidProfile { profile_id: String },

    #[error("unknown question '{question_id}' for profile '{profile_id}'")]
    UnknownQuestion {
        profile_id: String,
        question_id: String,
    },

    #[error("assessment run for '{profile_id}' is already completed")]
    RunCompleted { profile_id: String },
}
