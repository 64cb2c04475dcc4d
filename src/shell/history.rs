use std::collections::VecDeque;
use std::io::{self, Write};

use chrono::{DateTime, Local};

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub at: DateTime<Local>,
    pub operation: &'static str,
    pub result: String,
}

/// Most recent calculations of the session, oldest first. Never persisted.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, operation: &'static str, result: String) {
        self.push(HistoryEntry {
            at: Local::now(),
            operation,
            result,
        });
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "\nNenhum cálculo realizado ainda.");
        }

        writeln!(out, "\nHistórico da sessão:")?;
        for entry in self.entries() {
            writeln!(
                out,
                "[{}] {}: {}",
                entry.at.format("%H:%M:%S"),
                entry.operation,
                entry.result
            )?;
        }
        Ok(())
    }
}
