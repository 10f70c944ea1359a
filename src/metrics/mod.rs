use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Counters accumulated across layout passes.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    passes: u64,
    instructions: u64,
    steps: u64,
    purged_states: u64,
    purged_instructions: u64,
    adopted_children: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    /// One instruction finished its step loop after `steps` legal steps.
    pub fn record_instruction(&mut self, steps: u64) {
        self.instructions = self.instructions.saturating_add(1);
        self.steps = self.steps.saturating_add(steps);
    }

    pub fn record_purged(&mut self, states: usize, instructions: usize) {
        self.purged_states = self.purged_states.saturating_add(states as u64);
        self.purged_instructions = self.purged_instructions.saturating_add(instructions as u64);
    }

    pub fn record_adopted(&mut self, count: usize) {
        if count > 0 {
            self.adopted_children = self.adopted_children.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            passes: self.passes,
            instructions: self.instructions,
            steps: self.steps,
            purged_states: self.purged_states,
            purged_instructions: self.purged_instructions,
            adopted_children: self.adopted_children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub passes: u64,
    pub instructions: u64,
    pub steps: u64,
    pub purged_states: u64,
    pub purged_instructions: u64,
    pub adopted_children: u64,
}

impl MetricsSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("instructions".to_string(), json!(self.instructions));
        map.insert("steps".to_string(), json!(self.steps));
        map.insert("purged_states".to_string(), json!(self.purged_states));
        map.insert(
            "purged_instructions".to_string(),
            json!(self.purged_instructions),
        );
        map.insert(
            "adopted_children".to_string(),
            json!(self.adopted_children),
        );
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target,
            "layout_metrics".to_string(),
            self.as_fields(),
        )
    }
}
