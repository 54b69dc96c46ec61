pub mod office;

pub use crate::domain::model::{Screen, ScreenDetails, SeatGrid, Ticket};
pub use crate::domain::ports::{ScreenStore, TicketSink};
pub use crate::utils::error::Result;
pub use office::TicketOffice;
