use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Engine(#[from] split_engine::SplitError),
    #[error("{0}")]
    Command(#[from] crate::commands::ParseError),
    #[error("missing session file: pass --session or set SPLITTER_SESSION")]
    MissingSession,
}
