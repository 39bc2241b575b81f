use thiserror::Error;

/// Errors produced by the engine.
#[derive(Error, Debug)]
pub enum LifeError {
    /// A grid needs at least one row and one column
    #[error("Invalid grid dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A character that is neither a live nor a dead marker
    #[error("Invalid cell character: {0:?}")]
    InvalidCell(char),

    /// Malformed map contents
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Simulation has not started! Call `start` to start the simulation.")]
    NotStarted,

    #[error("Simulation is finished! Call `start` to run it again.")]
    AlreadyFinished,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
