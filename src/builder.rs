use crate::counters::Strategy;
use crate::record::DEFAULT_UNFOLD_COPIES;
use crate::Session;

pub struct SessionBuilder {
    strategy: Strategy,
    copies: Option<usize>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            copies: None,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    pub fn with_copies(mut self, copies: usize) -> Self {
        self.copies = Some(copies);
        self
    }
    pub fn build(self) -> Session<Strategy> {
        let copies = self.copies.unwrap_or(DEFAULT_UNFOLD_COPIES);
        Session::with_copies(self.strategy, copies)
    }
}
