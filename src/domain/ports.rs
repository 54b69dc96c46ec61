use crate::domain::model::{Screen, Ticket};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable storage contract for screens: the ticket office's persistence
/// port. Writes are per-entity upserts keyed by id, never a rewrite of the
/// whole collection.
pub trait ScreenStore: Send + Sync {
    fn load_all(&self) -> impl std::future::Future<Output = Result<Vec<Screen>>> + Send;
    fn upsert(
        &self,
        screen: &Screen,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Fails with `ScreenIdNotFound` if no screen with that id is stored.
    fn delete(&self, id: i32) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Sink for issued tickets (audit trail). The engine never depends on this;
/// front ends wire it in.
#[async_trait]
pub trait TicketSink: Send + Sync {
    async fn record(&self, ticket: &Ticket) -> Result<()>;
}
