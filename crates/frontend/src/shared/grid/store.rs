use super::record::{GridRecord, RecordId};
use std::collections::BTreeSet;

/// Локальная копия коллекции записей одной страницы.
///
/// Id в хранилище уникальны. `version` растёт при каждом изменении и
/// служит сигналом для пересчёта модели строк.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
    version: u64,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            version: 0,
        }
    }
}

impl<T: GridRecord> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(GridRecord::record_id).collect()
    }

    /// Полная замена коллекции. При повторе id остаётся последняя запись.
    pub fn replace_all(&mut self, records: Vec<T>) {
        let mut seen = BTreeSet::new();
        let mut unique: Vec<T> = Vec::with_capacity(records.len());
        for record in records {
            let id = record.record_id();
            if seen.insert(id) {
                unique.push(record);
            } else {
                log::warn!("duplicate record id {} in list response", id);
                if let Some(slot) = unique.iter_mut().find(|r| r.record_id() == id) {
                    *slot = record;
                }
            }
        }
        self.records = unique;
        self.bump();
    }

    /// Добавляет запись в конец; запись с тем же id заменяется на месте
    pub fn apply_created(&mut self, record: T) {
        let id = record.record_id();
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(slot) => {
                log::warn!("created record {} already present, replacing", id);
                *slot = record;
            }
            None => self.records.push(record),
        }
        self.bump();
    }

    /// Заменяет запись с тем же id. Отсутствующий id ничего не меняет.
    pub fn apply_updated(&mut self, record: T) -> bool {
        let id = record.record_id();
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(slot) => {
                *slot = record;
                self.bump();
                true
            }
            None => {
                log::debug!("update for missing record {} ignored", id);
                false
            }
        }
    }

    pub fn apply_deleted(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        if self.records.len() != before {
            self.bump();
            true
        } else {
            false
        }
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::test_support::row;

    #[test]
    fn test_replace_all_dedupes_ids() {
        let mut store = RecordStore::new();
        store.replace_all(vec![row(1, "a", 1), row(2, "b", 1), row(1, "c", 1)]);
        assert_eq!(store.ids(), vec![1, 2]);
        assert_eq!(store.get(1).map(|r| r.name.as_str()), Some("c"));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_created_is_upsert() {
        let mut store = RecordStore::new();
        store.apply_created(row(1, "a", 1));
        store.apply_created(row(1, "b", 1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).map(|r| r.name.as_str()), Some("b"));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = RecordStore::new();
        store.apply_created(row(1, "a", 1));
        let version = store.version();
        assert!(!store.apply_updated(row(5, "x", 1)));
        assert_eq!(store.version(), version);
        assert!(!store.contains(5));
        assert!(store.apply_updated(row(1, "z", 2)));
        assert_eq!(store.get(1), Some(&row(1, "z", 2)));
    }

    #[test]
    fn test_delete_twice() {
        let mut store = RecordStore::new();
        store.replace_all(vec![row(1, "a", 1), row(2, "b", 1)]);
        assert!(store.apply_deleted(1));
        let version = store.version();
        assert!(!store.apply_deleted(1));
        assert_eq!(store.version(), version);
        assert_eq!(store.ids(), vec![2]);
    }
}
