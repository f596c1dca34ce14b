/// Aggregated view of session progress, useful for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionProgress {
    pub total: usize,
    pub solved: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// `solved / total`, or `0.0` for an empty game. Always within `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.solved as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}
