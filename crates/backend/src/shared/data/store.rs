use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use contracts::domain::common::{next_sequence, Record};

/// In-memory collection of one record type.
///
/// Reads hand out clones; the vector itself never leaves the lock. Every
/// operation takes the lock once and does no I/O while holding it.
pub struct Repository<T: Record> {
    items: RwLock<Vec<T>>,
    /// Sequence used for the first id when the collection is empty.
    first_sequence: u64,
}

impl<T: Record> Repository<T> {
    pub fn new(first_sequence: u64) -> Self {
        Self::with_items(Vec::new(), first_sequence)
    }

    pub fn with_items(items: Vec<T>, first_sequence: u64) -> Self {
        Self {
            items: RwLock::new(items),
            first_sequence,
        }
    }

    // A poisoned lock only means another request panicked mid-write; the
    // vector itself is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    /// Allocate the next id, store the record and return the stored copy.
    pub fn insert(&self, mut record: T) -> T {
        let mut items = self.write();
        let sequence = next_sequence(&items, self.first_sequence);
        record.assign_id(sequence);
        items.push(record.clone());
        record
    }

    /// Replace the record with the same id; `None` when there is none.
    pub fn replace(&self, record: T) -> Option<T> {
        let mut items = self.write();
        let id = record.id();
        let slot = items.iter_mut().find(|r| r.id() == id)?;
        *slot = record.clone();
        Some(record)
    }

    /// Read-modify-write under one lock.
    pub fn update_with<F>(&self, id: &str, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.write();
        let slot = items.iter_mut().find(|r| r.id() == id)?;
        apply(slot);
        Some(slot.clone())
    }

    pub fn remove(&self, id: &str) -> Option<T> {
        let mut items = self.write();
        let index = items.iter().position(|r| r.id() == id)?;
        Some(items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        const ENTITY: &'static str = "notes";

        fn id(&self) -> String {
            self.id.clone()
        }

        fn title(&self) -> &str {
            &self.text
        }

        fn assign_id(&mut self, sequence: u64) {
            self.id = format!("N{sequence:03}");
        }
    }

    fn note(text: &str) -> Note {
        Note {
            id: String::new(),
            text: text.into(),
        }
    }

    #[test]
    fn test_insert_allocates_sequential_ids() {
        let repo = Repository::new(1);
        assert_eq!(repo.insert(note("a")).id, "N001");
        assert_eq!(repo.insert(note("b")).id, "N002");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_insert_continues_after_max() {
        let repo = Repository::with_items(
            vec![
                Note { id: "N007".into(), text: "x".into() },
                Note { id: "N003".into(), text: "y".into() },
            ],
            1,
        );
        assert_eq!(repo.insert(note("z")).id, "N008");
    }

    #[test]
    fn test_ids_are_not_reused_after_removing_the_max() {
        let repo = Repository::new(1);
        repo.insert(note("a"));
        let b = repo.insert(note("b"));
        repo.insert(note("c"));
        repo.remove(&b.id);
        assert_eq!(repo.insert(note("d")).id, "N004");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let repo = Repository::new(1);
        repo.insert(note("a"));
        let mut snapshot = repo.list();
        snapshot[0].text = "changed".into();
        snapshot.clear();
        assert_eq!(repo.list()[0].text, "a");
    }

    #[test]
    fn test_replace_update_remove() {
        let repo = Repository::new(1);
        let a = repo.insert(note("a"));

        let mut edited = a.clone();
        edited.text = "edited".into();
        assert!(repo.replace(edited).is_some());
        assert_eq!(repo.get("N001").unwrap().text, "edited");

        let updated = repo.update_with("N001", |n| n.text.push('!')).unwrap();
        assert_eq!(updated.text, "edited!");

        assert!(repo.replace(Note { id: "N999".into(), text: "?".into() }).is_none());
        assert!(repo.remove("N001").is_some());
        assert!(repo.remove("N001").is_none());
        assert!(repo.is_empty());
    }
}
