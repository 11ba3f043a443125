use thiserror::Error;

/// errors reported by the engine core
///
/// none of these abort a frame: callers log them and carry on with a degraded
/// result (no object registered, widget lookup skipped, default config).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("cannot create game object without a texture")]
    MissingTexture,
    #[error("unknown ui widget {0}")]
    UnknownWidget(u32),
    #[error("unknown game object {0}")]
    UnknownObject(u32),
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
