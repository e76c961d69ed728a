#![allow(clippy::missing_errors_doc)]

use std::{
    cmp::Reverse,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use liftplan_domain::{self as domain, ExerciseRepository, HistoryRepository};
use log::debug;
use strum::AsRefStr;

use crate::json;

/// Repository backed by JSON files on the local file system.
///
/// Without a catalog file the built-in catalog is used; without a history
/// file no user has any history.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    catalog_path: Option<PathBuf>,
    history_path: Option<PathBuf>,
}

#[derive(AsRefStr, Clone, Copy, Debug)]
pub enum Document {
    #[strum(serialize = "catalog")]
    Catalog,
    #[strum(serialize = "history")]
    History,
}

impl JsonStore {
    #[must_use]
    pub fn new(catalog_path: Option<PathBuf>, history_path: Option<PathBuf>) -> Self {
        Self {
            catalog_path,
            history_path,
        }
    }

    pub fn read_catalog(&self) -> Result<domain::Catalog, domain::StorageError> {
        let Some(path) = &self.catalog_path else {
            return Ok(domain::Catalog::builtin().clone());
        };
        let records: Vec<json::Exercise> = read(Document::Catalog, path)?;
        let mut exercises = Vec::with_capacity(records.len());
        for record in records {
            let name = record.name.clone();
            exercises.push(domain::Exercise::try_from(record).map_err(|err| {
                domain::StorageError::Corrupt(format!("{}: {name}: {err}", path.display()))
            })?);
        }
        Ok(domain::Catalog::new(exercises))
    }

    pub fn read_history(&self) -> Result<Vec<json::HistoryEntry>, domain::StorageError> {
        match &self.history_path {
            Some(path) if path.exists() => read(Document::History, path),
            Some(path) => {
                debug!("no history at {}", path.display());
                Ok(vec![])
            }
            None => Ok(vec![]),
        }
    }

    /// Appends the exercises of a session to the history file.
    pub fn record_session(
        &self,
        user_id: domain::UserID,
        date: NaiveDate,
        exercises: Vec<String>,
    ) -> Result<(), domain::StorageError> {
        let Some(path) = &self.history_path else {
            return Err(domain::StorageError::Unavailable(
                "no history file configured".to_string(),
            ));
        };
        let mut history = self.read_history()?;
        history.push(json::HistoryEntry {
            user_id: *user_id,
            date,
            exercises,
        });
        write(Document::History, path, &history)
    }
}

impl ExerciseRepository for JsonStore {
    async fn find_exercises(
        &self,
        filter: &domain::ExerciseFilter,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        if self.catalog_path.is_none() {
            return domain::Catalog::builtin().find_exercises(filter).await;
        }
        Ok(self
            .read_catalog()?
            .find(filter)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl HistoryRepository for JsonStore {
    async fn read_recent_exercises(
        &self,
        user_id: domain::UserID,
        window: usize,
    ) -> Result<Vec<String>, domain::ReadError> {
        let mut sessions = self
            .read_history()?
            .into_iter()
            .rev()
            .filter(|e| e.user_id == *user_id)
            .collect::<Vec<_>>();
        sessions.sort_by_key(|e| Reverse(e.date));
        Ok(sessions
            .into_iter()
            .take(window)
            .flat_map(|e| e.exercises)
            .collect())
    }
}

fn read<T: serde::de::DeserializeOwned>(
    document: Document,
    path: &Path,
) -> Result<T, domain::StorageError> {
    let content = fs::read_to_string(path).map_err(|err| io_error(path, err))?;
    let value = serde_json::from_str(&content).map_err(|err| {
        domain::StorageError::Corrupt(format!("{}: {err}", path.display()))
    })?;
    debug!("read {} from {}", document.as_ref(), path.display());
    Ok(value)
}

fn write<T: serde::Serialize>(
    document: Document,
    path: &Path,
    value: &T,
) -> Result<(), domain::StorageError> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|err| domain::StorageError::Other(Box::new(err)))?;
    fs::write(path, content).map_err(|err| io_error(path, err))?;
    debug!("wrote {} to {}", document.as_ref(), path.display());
    Ok(())
}

fn io_error(path: &Path, err: io::Error) -> domain::StorageError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            domain::StorageError::Unavailable(format!("{}: {err}", path.display()))
        }
        _ => domain::StorageError::Other(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use crate::tests::data::{EXERCISE, EXERCISES, HISTORY, history_entry};

    use super::*;

    fn store_with(catalog: Option<&str>, history: Option<&str>) -> (TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = catalog.map(|content| {
            let path = dir.path().join("catalog.json");
            fs::write(&path, content).unwrap();
            path
        });
        let history_path = history.map(|content| {
            let path = dir.path().join("history.json");
            fs::write(&path, content).unwrap();
            path
        });
        (dir, JsonStore::new(catalog_path, history_path))
    }

    fn catalog_json() -> String {
        serde_json::to_string(
            &EXERCISES
                .iter()
                .map(json::Exercise::from)
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn test_find_exercises_builtin() {
        let store = JsonStore::default();
        let filter = domain::ExerciseFilter::default();
        assert_eq!(
            block_on(store.find_exercises(&filter)).unwrap().len(),
            domain::Catalog::builtin().len()
        );
        assert_eq!(store.read_catalog().unwrap(), *domain::Catalog::builtin());
    }

    #[test]
    fn test_find_exercises_from_file() {
        let (_dir, store) = store_with(Some(&catalog_json()), None);
        let filter = domain::ExerciseFilter {
            categories: [domain::Category::Main].into(),
            ..domain::ExerciseFilter::default()
        };
        assert_eq!(
            block_on(store.find_exercises(&filter)).unwrap(),
            vec![EXERCISE.clone()]
        );
        assert_eq!(store.read_catalog().unwrap().len(), 2);
    }

    #[test]
    fn test_find_exercises_filters_equipment() {
        let (_dir, store) = store_with(Some(&catalog_json()), None);
        let filter = domain::ExerciseFilter::available_with(&BTreeSet::new());
        assert_eq!(
            block_on(store.find_exercises(&filter))
                .unwrap()
                .iter()
                .map(|e| e.name.to_string())
                .collect::<Vec<_>>(),
            vec!["Bird Dog".to_string()]
        );
    }

    #[rstest]
    #[case::not_json("catalog")]
    #[case::wrong_shape(r#"{"name": "Plank"}"#)]
    #[case::invalid_record(
        r#"[{"id": "00000000-0000-0000-0000-000000000001", "name": "Plank", "bodyPart": "neck",
            "category": "main", "force": "static", "mechanic": "isolation", "load": "light"}]"#
    )]
    fn test_read_catalog_corrupt(#[case] content: &str) {
        let (_dir, store) = store_with(Some(content), None);
        assert!(matches!(
            store.read_catalog(),
            Err(domain::StorageError::Corrupt(_))
        ));
        assert!(matches!(
            block_on(store.find_exercises(&domain::ExerciseFilter::default())),
            Err(domain::ReadError::Storage(domain::StorageError::Corrupt(_)))
        ));
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(Some(dir.path().join("missing.json")), None);
        assert!(matches!(
            store.read_catalog(),
            Err(domain::StorageError::Unavailable(_))
        ));
    }

    #[rstest]
    #[case::newest_first(1, 2, vec!["Push Up", "Lat Pulldown"])]
    #[case::whole_window(1, 5, vec!["Push Up", "Lat Pulldown", "Goblet Squat", "Plank"])]
    #[case::other_user(2, 3, vec!["Deadlift"])]
    #[case::unknown_user(3, 3, vec![])]
    #[case::empty_window(1, 0, vec![])]
    fn test_read_recent_exercises(
        #[case] user: u128,
        #[case] window: usize,
        #[case] expected: Vec<&str>,
    ) {
        let (_dir, store) = store_with(None, Some(&serde_json::to_string(&*HISTORY).unwrap()));
        assert_eq!(
            block_on(store.read_recent_exercises(user.into(), window)).unwrap(),
            expected
        );
    }

    #[test]
    fn test_read_recent_exercises_without_history() {
        let dir = tempfile::tempdir().unwrap();
        for store in [
            JsonStore::default(),
            JsonStore::new(None, Some(dir.path().join("history.json"))),
        ] {
            assert_eq!(
                block_on(store.read_recent_exercises(1.into(), 3)).unwrap(),
                Vec::<String>::new()
            );
        }
    }

    #[test]
    fn test_record_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(None, Some(dir.path().join("history.json")));
        let date = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        store
            .record_session(1.into(), date, vec!["Plank".to_string()])
            .unwrap();
        store
            .record_session(1.into(), date, vec!["Bird Dog".to_string()])
            .unwrap();
        assert_eq!(
            store.read_history().unwrap(),
            vec![
                history_entry(1, (2026, 10, 12), &["Plank"]),
                history_entry(1, (2026, 10, 12), &["Bird Dog"]),
            ]
        );
        assert_eq!(
            block_on(store.read_recent_exercises(1.into(), 1)).unwrap(),
            vec!["Bird Dog".to_string()]
        );
    }

    #[test]
    fn test_record_session_without_history_file() {
        assert!(matches!(
            JsonStore::default().record_session(
                1.into(),
                NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
                vec![]
            ),
            Err(domain::StorageError::Unavailable(_))
        ));
    }
}
