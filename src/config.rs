use crate::error::EngineError;

/// Validated render parameters. Construction is the only place the
/// positivity rules are checked, so a `RenderConfig` in hand is always safe
/// to hand to the renderer.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub samples: usize,
    pub recursions: u32,
    pub threads: usize,
    /// When set, worker samplers derive from `seed + tile index` and the
    /// render is reproducible; otherwise every worker seeds from entropy.
    pub seed: Option<u64>,
}

impl RenderConfig {
    pub fn new(
        width: usize,
        height: usize,
        samples: usize,
        recursions: u32,
        threads: usize,
    ) -> Result<RenderConfig, EngineError> {
        if width == 0 {
            return Err(EngineError::InvalidConfig("card width"));
        }
        if height == 0 {
            return Err(EngineError::InvalidConfig("card height"));
        }
        if samples == 0 {
            return Err(EngineError::InvalidConfig("sample count"));
        }
        if recursions == 0 {
            return Err(EngineError::InvalidConfig("recursion count"));
        }
        if threads == 0 {
            return Err(EngineError::InvalidConfig("thread count"));
        }
        Ok(RenderConfig {
            width,
            height,
            samples,
            recursions,
            threads,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> RenderConfig {
        self.seed = seed;
        self
    }
}
