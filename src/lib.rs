pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{JsonScreenStore, TicketLog};
pub use crate::config::{CliConfig, Command};
pub use crate::core::TicketOffice;
pub use crate::domain::model::{Screen, ScreenDetails, SeatGrid, Ticket};
pub use crate::domain::ports::{ScreenStore, TicketSink};
pub use crate::utils::error::{CinemaError, Result};
