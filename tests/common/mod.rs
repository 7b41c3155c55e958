//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqlog::logging::{Level, Sink};
use serde_json::Value;

/// One recorded sink call: message plus extra arguments.
pub type LogCall = (Value, Vec<Value>);

/// Sink that records every call per level.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<HashMap<Level, Vec<LogCall>>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Calls recorded at `level`.
    pub fn calls(&self, level: Level) -> Vec<LogCall> {
        self.calls
            .lock()
            .unwrap()
            .get(&level)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, level: Level) -> usize {
        self.calls(level).len()
    }

    /// Forget calls recorded at `level`.
    pub fn clear(&self, level: Level) {
        self.calls.lock().unwrap().remove(&level);
    }
}

impl Sink for RecordingSink {
    fn emit(&self, level: Level, message: &Value, args: &[Value]) {
        self.calls
            .lock()
            .unwrap()
            .entry(level)
            .or_default()
            .push((message.clone(), args.to_vec()));
    }
}
