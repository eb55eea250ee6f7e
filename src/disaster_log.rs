//! # Disaster Record Store
//!
//! Append-only ordered log of reported disasters. Records are never mutated
//! and never removed except by a full-system reset.

use crate::models::disaster::Disaster;

#[derive(Debug, Default)]
pub struct DisasterLog {
    entries: Vec<Disaster>,
}

impl DisasterLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, disaster: Disaster) {
        self.entries.push(disaster);
    }

    pub fn entries(&self) -> &[Disaster] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered rendering of the log in arrival order, one record per line
    pub fn render_text(&self) -> String {
        let mut log = String::new();
        for (i, disaster) in self.entries.iter().enumerate() {
            log.push_str(&format!("{}. {}\n", i + 1, disaster.summary()));
        }
        log
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
