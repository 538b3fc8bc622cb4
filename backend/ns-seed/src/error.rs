use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Config error: {0}")]
    Config(#[from] ns_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] ns_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, SeedError>;
