use crate::domain::model::Ticket;
use crate::domain::ports::TicketSink;
use crate::utils::error::{CinemaError, Result};
use async_trait::async_trait;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Append-only audit trail of issued tickets, one JSON line per ticket.
#[derive(Debug, Clone)]
pub struct TicketLog {
    path: PathBuf,
}

impl TicketLog {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            path: base_path.into().join("tickets.jsonl"),
        }
    }
}

#[async_trait]
impl TicketSink for TicketLog {
    async fn record(&self, ticket: &Ticket) -> Result<()> {
        let persistence_error = |err: &dyn std::fmt::Display| CinemaError::PersistenceFailure {
            message: format!("{}: {}", self.path.display(), err),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| persistence_error(&e))?;
        }

        let line = serde_json::to_string(ticket).map_err(|e| persistence_error(&e))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| persistence_error(&e))?;
        writeln!(file, "{}", line).map_err(|e| persistence_error(&e))?;
        Ok(())
    }
}
