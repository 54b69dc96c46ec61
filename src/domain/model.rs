use crate::utils::error::{CinemaError, Result};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangular grid of seat availability for one screen.
///
/// Coordinates are 1-indexed at the API boundary and 0-indexed internally.
/// The grid carries no locking of its own; serialising access is the
/// ticket office's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatGrid {
    columns: u32,
    rows: u32,
    // available[column][row]
    available: Vec<Vec<bool>>,
}

impl SeatGrid {
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        if columns < 1 || rows < 1 {
            return Err(CinemaError::InvalidDimensions { columns, rows });
        }

        Ok(Self {
            columns,
            rows,
            available: vec![vec![true; rows as usize]; columns as usize],
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    pub fn capacity(&self) -> u32 {
        self.columns * self.rows
    }

    fn index(&self, column: u32, row: u32) -> Result<(usize, usize)> {
        if column < 1 || column > self.columns || row < 1 || row > self.rows {
            return Err(CinemaError::OutOfRange {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(((column - 1) as usize, (row - 1) as usize))
    }

    pub fn is_available(&self, column: u32, row: u32) -> Result<bool> {
        let (c, r) = self.index(column, row)?;
        Ok(self.available[c][r])
    }

    /// Mark a seat as booked. No partial effects on failure: an out-of-range
    /// or already-booked seat leaves the grid untouched.
    pub fn book(&mut self, column: u32, row: u32) -> Result<()> {
        let (c, r) = self.index(column, row)?;
        if !self.available[c][r] {
            return Err(CinemaError::SeatUnavailable { column, row });
        }
        self.available[c][r] = false;
        Ok(())
    }

    /// Make every seat available again.
    pub fn reset(&mut self) {
        for column in &mut self.available {
            column.fill(true);
        }
    }

    pub fn count_available(&self) -> u32 {
        self.available
            .iter()
            .map(|column| column.iter().filter(|seat| **seat).count() as u32)
            .sum()
    }

    /// All currently available positions, 1-indexed, in column-major order.
    pub fn available_positions(&self) -> Vec<(u32, u32)> {
        let mut positions = Vec::new();
        for (c, column) in self.available.iter().enumerate() {
            for (r, seat) in column.iter().enumerate() {
                if *seat {
                    positions.push((c as u32 + 1, r as u32 + 1));
                }
            }
        }
        positions
    }
}

/// One auditorium: a seat grid plus the movie currently assigned to it.
///
/// Invariant: `has_screening` is true exactly when `movie_title` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    id: i32,
    movie_title: Option<String>,
    ticket_cost_cents: i64,
    has_screening: bool,
    seats: SeatGrid,
}

impl Screen {
    pub fn new(id: i32, columns: u32, rows: u32) -> Result<Self> {
        if id < 1 {
            return Err(CinemaError::InvalidScreenParameters { id, columns, rows });
        }

        let seats = SeatGrid::new(columns, rows).map_err(|_| {
            CinemaError::InvalidScreenParameters { id, columns, rows }
        })?;

        Ok(Self {
            id,
            movie_title: None,
            ticket_cost_cents: 0,
            has_screening: false,
            seats,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn movie_title(&self) -> Option<&str> {
        self.movie_title.as_deref()
    }

    pub fn has_screening(&self) -> bool {
        self.has_screening
    }

    pub fn ticket_cost_cents(&self) -> i64 {
        self.ticket_cost_cents
    }

    pub fn seats(&self) -> &SeatGrid {
        &self.seats
    }

    /// Exact case-insensitive title match. Substring matching is deliberately
    /// not supported; it makes short queries ambiguous across screens.
    pub fn is_showing(&self, title: &str) -> bool {
        self.movie_title
            .as_deref()
            .is_some_and(|current| current.to_lowercase() == title.to_lowercase())
    }

    /// Start showing a movie. Every seat is released: a new screening always
    /// begins with an empty auditorium.
    pub fn assign_movie(&mut self, title: &str, cost_cents: i64) -> Result<()> {
        if cost_cents < 0 {
            return Err(CinemaError::InvalidPrice { cents: cost_cents });
        }

        self.movie_title = Some(title.to_string());
        self.ticket_cost_cents = cost_cents;
        self.has_screening = true;
        self.seats.reset();
        Ok(())
    }

    /// Stop showing the current movie and release every seat.
    pub fn remove_movie(&mut self) {
        self.movie_title = None;
        self.ticket_cost_cents = 0;
        self.has_screening = false;
        self.seats.reset();
    }

    /// Book a specific seat and issue a ticket stamped with the current time.
    pub fn book_seat(&mut self, column: u32, row: u32) -> Result<Ticket> {
        self.seats.book(column, row)?;
        Ok(Ticket::new(
            self.id,
            self.movie_title.clone().unwrap_or_default(),
            column,
            row,
            self.ticket_cost_cents,
            Utc::now(),
        ))
    }

    /// Book a uniformly random seat among those currently available.
    ///
    /// Selection draws from the available positions only, so a single free
    /// seat in a large grid is found in one attempt rather than by retrying
    /// against already-booked seats.
    pub fn book_random_seat<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Ticket> {
        let positions = self.seats.available_positions();
        let (column, row) = positions
            .choose(rng)
            .copied()
            .ok_or(CinemaError::NoSeatsAvailable { screen_id: self.id })?;

        self.book_seat(column, row)
    }

    pub fn details(&self) -> ScreenDetails {
        let (columns, rows) = self.seats.dimensions();
        ScreenDetails {
            id: self.id,
            movie_title: self.movie_title.clone(),
            columns,
            rows,
            capacity: self.seats.capacity(),
            available_seats: self.seats.count_available(),
            ticket_cost_cents: self.ticket_cost_cents,
        }
    }
}

/// Read-only projection of a screen, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenDetails {
    pub id: i32,
    pub movie_title: Option<String>,
    pub columns: u32,
    pub rows: u32,
    pub capacity: u32,
    pub available_seats: u32,
    pub ticket_cost_cents: i64,
}

impl fmt::Display for ScreenDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screen: {}", self.id)?;
        match &self.movie_title {
            Some(title) => writeln!(f, "Current Movie: '{}'", title)?,
            None => writeln!(f, "Current Movie: none")?,
        }
        writeln!(
            f,
            "Seat capacity: {} columns, by {} rows.",
            self.columns, self.rows
        )?;
        writeln!(f, "Available Seat Capacity: {}", self.available_seats)?;
        write!(
            f,
            "Ticket Cost: \u{a3}{}.{:02}",
            self.ticket_cost_cents / 100,
            self.ticket_cost_cents % 100
        )
    }
}

/// Immutable receipt for one successfully booked seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    screen_id: i32,
    movie_title: String,
    column: u32,
    row: u32,
    cost_cents: i64,
    issued_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(
        screen_id: i32,
        movie_title: String,
        column: u32,
        row: u32,
        cost_cents: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            screen_id,
            movie_title,
            column,
            row,
            cost_cents,
            issued_at,
        }
    }

    pub fn screen_id(&self) -> i32 {
        self.screen_id
    }

    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    /// Column number, i.e. how far across a given row the seat is.
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn cost_cents(&self) -> i64 {
        self.cost_cents
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Deterministic, human-readable rendering with a fixed field order.
    pub fn format_receipt(&self) -> String {
        let dashes = "===============================";
        format!(
            "{dashes}\n\
             Screen ID: {}\n\
             Movie Title: {}\n\
             Row Number: {}\n\
             Seat Number: {}\n\
             Cost: {}\n\
             Date: {}\n\
             {dashes}",
            self.screen_id,
            self.movie_title,
            self.row,
            self.column,
            self.cost_cents,
            self.issued_at.format("%Y-%m-%d : %H:%M:%S"),
        )
    }
}
