use crate::domain::model::{Screen, ScreenDetails, Ticket};
use crate::domain::ports::ScreenStore;
use crate::utils::error::{CinemaError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// The ticket office: authoritative collection of screens and the sole
/// concurrency boundary of the engine.
///
/// The registry map sits behind an `RwLock`; each screen behind its own
/// `Mutex`. Seat-state mutations hold the map read guard plus the target
/// screen's lock across check, mutate and persist, so callers hitting the
/// same screen are serialised while different screens proceed in parallel.
/// Ascending-id iteration of the `BTreeMap` keeps title resolution and
/// listings deterministic.
pub struct TicketOffice<S: ScreenStore> {
    store: S,
    screens: RwLock<BTreeMap<i32, Arc<Mutex<Screen>>>>,
}

impl<S: ScreenStore> TicketOffice<S> {
    /// Load every screen from the store and open the office.
    pub async fn open(store: S) -> Result<Self> {
        let loaded = store.load_all().await?;
        let mut screens = BTreeMap::new();
        for screen in loaded {
            let id = screen.id();
            if screens.insert(id, Arc::new(Mutex::new(screen))).is_some() {
                return Err(CinemaError::PersistenceFailure {
                    message: format!("duplicate screen id {} in storage", id),
                });
            }
        }

        tracing::info!("Loaded {} screens from storage", screens.len());
        Ok(Self {
            store,
            screens: RwLock::new(screens),
        })
    }

    /// Register a new screen. The screen is persisted before it becomes
    /// visible to other callers.
    pub async fn add_screen(&self, id: i32, columns: u32, rows: u32) -> Result<()> {
        let screen = Screen::new(id, columns, rows)?;

        let mut screens = self.screens.write().await;
        if screens.contains_key(&id) {
            return Err(CinemaError::ScreenIdAlreadyExists { id });
        }

        self.store.upsert(&screen).await?;
        screens.insert(id, Arc::new(Mutex::new(screen)));
        tracing::info!("Added screen {} ({} x {})", id, columns, rows);
        Ok(())
    }

    /// Delete a screen. The entry is dropped from the registry only after
    /// the store delete succeeds.
    pub async fn remove_screen(&self, id: i32) -> Result<()> {
        let mut screens = self.screens.write().await;
        if !screens.contains_key(&id) {
            return Err(CinemaError::ScreenIdNotFound { id });
        }

        self.store.delete(id).await?;
        screens.remove(&id);
        tracing::info!("Removed screen {}", id);
        Ok(())
    }

    /// Start showing a movie on a screen. A screen that already has a
    /// screening is rejected; the existing screening must be removed first.
    pub async fn assign_movie(&self, id: i32, title: &str, cost_cents: i64) -> Result<()> {
        let screens = self.screens.read().await;
        let slot = screens
            .get(&id)
            .ok_or(CinemaError::ScreenIdNotFound { id })?;
        let mut screen = slot.lock().await;

        if let Some(current) = screen.movie_title() {
            return Err(CinemaError::ScreeningAlreadyAssigned {
                id,
                title: current.to_string(),
            });
        }

        let snapshot = screen.clone();
        screen.assign_movie(title, cost_cents)?;
        if let Err(err) = self.store.upsert(&screen).await {
            *screen = snapshot;
            return Err(err);
        }

        tracing::info!("Screen {} now showing '{}'", id, title);
        Ok(())
    }

    /// Stop the screening on a screen and release its seats. Clearing a
    /// screen with no screening is permitted.
    pub async fn remove_screening(&self, id: i32) -> Result<()> {
        let screens = self.screens.read().await;
        let slot = screens
            .get(&id)
            .ok_or(CinemaError::ScreenIdNotFound { id })?;
        let mut screen = slot.lock().await;

        let snapshot = screen.clone();
        screen.remove_movie();
        if let Err(err) = self.store.upsert(&screen).await {
            *screen = snapshot;
            return Err(err);
        }

        tracing::info!("Removed screening from screen {}", id);
        Ok(())
    }

    /// Snapshot of a screen's current state.
    pub async fn find_screen(&self, id: i32) -> Result<Screen> {
        let screens = self.screens.read().await;
        let slot = screens
            .get(&id)
            .ok_or(CinemaError::ScreenIdNotFound { id })?;
        let screen = slot.lock().await;
        Ok(screen.clone())
    }

    /// Book a specific seat for a movie. The showing screen is resolved by
    /// ascending id; the first match wins.
    pub async fn book_ticket(&self, movie_title: &str, column: u32, row: u32) -> Result<Ticket> {
        let screens = self.screens.read().await;
        for slot in screens.values() {
            let mut screen = slot.lock().await;
            if !screen.is_showing(movie_title) {
                continue;
            }

            let snapshot = screen.clone();
            let ticket = screen.book_seat(column, row)?;
            if let Err(err) = self.store.upsert(&screen).await {
                *screen = snapshot;
                return Err(err);
            }

            tracing::debug!(
                "Booked seat ({}, {}) on screen {}",
                column,
                row,
                screen.id()
            );
            return Ok(ticket);
        }

        Err(CinemaError::MovieNotFound {
            title: movie_title.to_string(),
        })
    }

    /// Book a uniformly random available seat for a movie.
    pub async fn book_random_ticket(&self, movie_title: &str) -> Result<Ticket> {
        let screens = self.screens.read().await;
        for slot in screens.values() {
            let mut screen = slot.lock().await;
            if !screen.is_showing(movie_title) {
                continue;
            }

            let snapshot = screen.clone();
            let ticket = {
                let mut rng = rand::thread_rng();
                screen.book_random_seat(&mut rng)?
            };
            if let Err(err) = self.store.upsert(&screen).await {
                *screen = snapshot;
                return Err(err);
            }

            tracing::debug!(
                "Booked random seat ({}, {}) on screen {}",
                ticket.column(),
                ticket.row(),
                screen.id()
            );
            return Ok(ticket);
        }

        Err(CinemaError::MovieNotFound {
            title: movie_title.to_string(),
        })
    }

    /// Details of every screen currently showing a movie, ascending by id.
    pub async fn list_screenings(&self) -> Vec<ScreenDetails> {
        let screens = self.screens.read().await;
        let mut listings = Vec::new();
        for slot in screens.values() {
            let screen = slot.lock().await;
            if screen.has_screening() {
                listings.push(screen.details());
            }
        }
        listings
    }
}
