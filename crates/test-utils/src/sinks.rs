use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use taskstack::engine::{Outcome, OutcomeSink};

/// Sink that keeps every outcome it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    outcomes: Arc<Mutex<Vec<Outcome>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutcomeSink for RecordingSink {
    fn record(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        self.outcomes.lock().unwrap().push(outcome);
        Ok(())
    }
}

/// Sink that counts calls and then fails every one of them.
#[derive(Debug, Clone, Default)]
pub struct FailingSink {
    calls: Arc<AtomicUsize>,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OutcomeSink for FailingSink {
    fn record(&mut self, _outcome: Outcome) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("outcome store unavailable")
    }
}
