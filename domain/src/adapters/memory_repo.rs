use std::sync::{Mutex, MutexGuard};

use crate::{CoreError, Document, Record, RecordId, Repository};

/// Ordered in-memory collection. Records keep their insertion order, mirroring
/// the arrays the admin panel renders.
pub struct InMemoryCollection<T: Record> {
    inner: Mutex<Vec<T>>,
}

/// In-memory holder for a single-valued document.
pub struct InMemoryDocument<T> {
    inner: Mutex<T>,
}

fn poisoned() -> CoreError {
    CoreError::Repository("mutex poisoned".into())
}

impl<T: Record> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            inner: Mutex::new(records),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, CoreError> {
        self.inner.lock().map_err(|_| poisoned())
    }

    fn position(records: &[T], id: &RecordId) -> Option<usize> {
        records.iter().position(|r| r.id() == id)
    }
}

impl<T: Record> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryCollection<T> {
    fn get(&self, id: &RecordId) -> Result<Option<T>, CoreError> {
        let records = self.lock()?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<T>, CoreError> {
        Ok(self.lock()?.clone())
    }

    fn insert(&self, record: T) -> Result<(), CoreError> {
        let mut records = self.lock()?;
        if Self::position(&records, record.id()).is_some() {
            return Err(CoreError::AlreadyExists);
        }
        records.push(record);
        Ok(())
    }

    fn replace(&self, record: T) -> Result<(), CoreError> {
        let mut records = self.lock()?;
        match Self::position(&records, record.id()) {
            Some(idx) => {
                records[idx] = record;
                Ok(())
            }
            None => Err(CoreError::NotFound(T::KIND)),
        }
    }

    fn remove(&self, id: &RecordId) -> Result<(), CoreError> {
        let mut records = self.lock()?;
        let initial_len = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == initial_len {
            return Err(CoreError::NotFound(T::KIND));
        }
        Ok(())
    }

    fn len(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }
}

impl<T: Clone + Send> InMemoryDocument<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }
}

impl<T: Clone + Send> Document<T> for InMemoryDocument<T> {
    fn load(&self) -> Result<T, CoreError> {
        let value = self.inner.lock().map_err(|_| poisoned())?;
        Ok(value.clone())
    }

    fn save(&self, value: T) -> Result<(), CoreError> {
        let mut current = self.inner.lock().map_err(|_| poisoned())?;
        *current = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeroContent;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: RecordId,
        text: &'static str,
    }

    impl Record for Note {
        const KIND: &'static str = "note";

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }
    }

    fn note(id: &str, text: &'static str) -> Note {
        Note {
            id: RecordId::new(id).unwrap(),
            text,
        }
    }

    #[test]
    fn insert_get_roundtrip() {
        let repo = InMemoryCollection::new();
        repo.insert(note("a", "first")).unwrap();
        let got = repo.get(&RecordId::new("a").unwrap()).unwrap().unwrap();
        assert_eq!(got.text, "first");
    }

    #[test]
    fn insert_rejects_duplicate() {
        let repo = InMemoryCollection::new();
        repo.insert(note("dup", "one")).unwrap();
        let err = repo.insert(note("dup", "two")).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyExists));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let repo = InMemoryCollection::new();
        for id in ["c", "a", "b"] {
            repo.insert(note(id, "x")).unwrap();
        }
        let ids: Vec<_> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|n| n.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn replace_in_place_and_missing() {
        let repo = InMemoryCollection::from_records(vec![note("a", "old"), note("b", "keep")]);
        repo.replace(note("a", "new")).unwrap();
        let list = repo.list().unwrap();
        assert_eq!(list[0].text, "new");
        assert_eq!(list[1].text, "keep");

        let err = repo.replace(note("zzz", "x")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound("note")));
    }

    #[test]
    fn remove_shrinks_by_one() {
        let repo = InMemoryCollection::from_records(vec![note("a", "1"), note("b", "2")]);
        repo.remove(&RecordId::new("a").unwrap()).unwrap();
        assert_eq!(repo.len().unwrap(), 1);
        assert!(repo.remove(&RecordId::new("a").unwrap()).is_err());
        assert!(!repo.is_empty().unwrap());
    }

    #[test]
    fn document_save_overwrites() {
        let doc = InMemoryDocument::new(HeroContent::default());
        let mut hero = doc.load().unwrap();
        hero.title = "Yeni".into();
        doc.save(hero).unwrap();
        assert_eq!(doc.load().unwrap().title, "Yeni");
    }
}
