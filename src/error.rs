use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid {0}")]
    InvalidConfig(&'static str),

    #[error("unknown scene <{0}>")]
    UnknownScene(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ppm writer is unable to {action}, {reason}")]
    PpmMisuse {
        action: &'static str,
        reason: &'static str,
    },

    #[error("framebuffer size mismatch, expected {expected} bytes but got {actual}")]
    Framebuffer { expected: usize, actual: usize },

    #[error("{0} render worker(s) panicked")]
    Worker(usize),
}
