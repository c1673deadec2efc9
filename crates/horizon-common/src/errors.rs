use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("sphere radius must be positive and finite, got {value}")]
    Radius { value: f64 },

    #[error("sphere needs at least 1 segment along {axis}, got {value}")]
    Segments { axis: &'static str, value: u32 },

    #[error("polar sweep out of range: start {start} rad, length {length} rad")]
    ThetaRange { start: f64, length: f64 },

    #[error("azimuthal sweep must be within (0, 2pi], got {length} rad")]
    PhiLength { length: f64 },

    #[error("non-finite value in field '{field}'")]
    NonFinite { field: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HorizonError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
