use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Easing function \"{0}\" not found.")]
    EasingNotFound(String),

    #[error("Could not find injected goto instance")]
    MissingInstance,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
