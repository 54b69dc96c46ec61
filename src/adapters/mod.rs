// Adapters layer: concrete implementations for external systems (screen
// storage, ticket audit log).

pub mod json_store;
pub mod ticket_log;

pub use json_store::JsonScreenStore;
pub use ticket_log::TicketLog;
