use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinemaError {
    #[error("Seat grid dimensions invalid: {columns} columns by {rows} rows")]
    InvalidDimensions { columns: u32, rows: u32 },

    #[error("Screen parameters invalid: id {id}, {columns} columns by {rows} rows")]
    InvalidScreenParameters { id: i32, columns: u32, rows: u32 },

    #[error("Ticket cost invalid: {cents} cents")]
    InvalidPrice { cents: i64 },

    #[error("Screen with id {id} already exists")]
    ScreenIdAlreadyExists { id: i32 },

    #[error("Screen with id {id} does not exist")]
    ScreenIdNotFound { id: i32 },

    #[error("Screen {id} is already showing '{title}'")]
    ScreeningAlreadyAssigned { id: i32, title: String },

    #[error("Seat position ({column}, {row}) out of range for seat grid ({columns}, {rows})")]
    OutOfRange {
        column: u32,
        row: u32,
        columns: u32,
        rows: u32,
    },

    #[error("Seat ({column}, {row}) is unavailable")]
    SeatUnavailable { column: u32, row: u32 },

    #[error("No available seats on screen {screen_id}: all seats are booked")]
    NoSeatsAvailable { screen_id: i32 },

    #[error("Movie '{title}' is not being screened")]
    MovieNotFound { title: String },

    #[error("Persistence failure: {message}")]
    PersistenceFailure { message: String },

    #[error("Configuration error: {field}: {reason}")]
    ConfigError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CinemaError>;
