use crate::domain::model::Screen;
use crate::domain::ports::ScreenStore;
use crate::utils::error::{CinemaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Screen store backed by a data directory holding one JSON document per
/// screen (`screen-<id>.json`). Upsert overwrites the document in place, so
/// a write never touches any other screen's state.
#[derive(Debug, Clone)]
pub struct JsonScreenStore {
    base_path: PathBuf,
}

impl JsonScreenStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn screen_path(&self, id: i32) -> PathBuf {
        self.base_path.join(format!("screen-{}.json", id))
    }

    fn persistence_error(path: &Path, err: impl std::fmt::Display) -> CinemaError {
        CinemaError::PersistenceFailure {
            message: format!("{}: {}", path.display(), err),
        }
    }
}

impl ScreenStore for JsonScreenStore {
    async fn load_all(&self) -> Result<Vec<Screen>> {
        // A missing data directory is an empty cinema, not an error.
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| Self::persistence_error(&self.base_path, e))?;

        let mut screens = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Self::persistence_error(&self.base_path, e))?;
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("screen-") || !name.ends_with(".json") {
                continue;
            }

            let data = fs::read(&path).map_err(|e| Self::persistence_error(&path, e))?;
            let screen: Screen =
                serde_json::from_slice(&data).map_err(|e| Self::persistence_error(&path, e))?;
            screens.push(screen);
        }

        screens.sort_by_key(|screen| screen.id());
        tracing::debug!(
            "Loaded {} screen documents from {}",
            screens.len(),
            self.base_path.display()
        );
        Ok(screens)
    }

    async fn upsert(&self, screen: &Screen) -> Result<()> {
        fs::create_dir_all(&self.base_path)
            .map_err(|e| Self::persistence_error(&self.base_path, e))?;

        let path = self.screen_path(screen.id());
        let data = serde_json::to_vec_pretty(screen)
            .map_err(|e| Self::persistence_error(&path, e))?;
        fs::write(&path, data).map_err(|e| Self::persistence_error(&path, e))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let path = self.screen_path(id);
        if !path.exists() {
            return Err(CinemaError::ScreenIdNotFound { id });
        }
        fs::remove_file(&path).map_err(|e| Self::persistence_error(&path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_all_on_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScreenStore::new(temp_dir.path().join("nothing-here"));
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_screen_round_trip_preserves_every_field() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScreenStore::new(temp_dir.path());

        let mut screen = Screen::new(4, 6, 8).unwrap();
        screen.assign_movie("Nova", 1250).unwrap();
        screen.book_seat(2, 3).unwrap();
        screen.book_seat(6, 8).unwrap();
        store.upsert(&screen).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        let restored = &loaded[0];
        assert_eq!(restored.id(), 4);
        assert_eq!(restored.movie_title(), Some("Nova"));
        assert_eq!(restored.ticket_cost_cents(), 1250);
        assert!(restored.has_screening());
        assert_eq!(restored.seats().dimensions(), (6, 8));
        assert_eq!(restored.seats().count_available(), 46);
        assert!(!restored.seats().is_available(2, 3).unwrap());
        assert!(!restored.seats().is_available(6, 8).unwrap());
    }

    #[tokio::test]
    async fn test_load_all_sorted_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScreenStore::new(temp_dir.path());

        for id in [7, 2, 5] {
            store.upsert(&Screen::new(id, 2, 2).unwrap()).await.unwrap();
        }

        let ids: Vec<i32> = store
            .load_all()
            .await
            .unwrap()
            .iter()
            .map(|screen| screen.id())
            .collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    #[tokio::test]
    async fn test_delete_missing_screen_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScreenStore::new(temp_dir.path());

        assert!(matches!(
            store.delete(3).await,
            Err(CinemaError::ScreenIdNotFound { id: 3 })
        ));

        store.upsert(&Screen::new(3, 2, 2).unwrap()).await.unwrap();
        store.delete(3).await.unwrap();
        assert!(store.load_all().await.unwrap().is_empty());
    }
}
