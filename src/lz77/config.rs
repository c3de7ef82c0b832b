/// Tunables for one compression pass. A config is an immutable snapshot; the
/// engine never writes back to it.
#[derive(Debug, Clone)]
pub struct Lz77Config {
    /// Search horizon - how far past the window start the engine looks for a run.
    pub window_size: usize,
    /// Shortest run worth a token. Matches must be strictly longer than this.
    pub minimum_match_length: usize,
    /// Reserved escape byte for a future literal run-length mode. Carried in the
    /// config but not consulted by the current engine.
    pub run_length_code: u8,
}

impl Lz77Config {
    pub fn new() -> Self {
        Self {
            window_size: 4096,
            minimum_match_length: 3,
            run_length_code: 0,
        }
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::new()
    }
}
