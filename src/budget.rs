use std::time::{Duration, Instant};

/// Wall-clock budget shared by extraction and attribution.
///
/// The deadline is fixed when a run starts and checked at file and function
/// boundaries. Expiry never raises an error: the current loop exits and
/// everything accumulated so far becomes the final answer. A single slow
/// blame or scan can still overrun; the budget only stops new units of work.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    deadline: Option<Instant>,
}

impl Budget {
    /// Start a budget of `seconds`, or an unlimited one for `None`.
    pub fn start(seconds: Option<u64>) -> Self {
        match seconds {
            Some(s) => Self {
                deadline: Some(Instant::now() + Duration::from_secs(s)),
            },
            None => Self::unlimited(),
        }
    }

    pub fn unlimited() -> Self {
        Self { deadline: None }
    }

    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
#[path = "budget_test.rs"]
mod tests;
