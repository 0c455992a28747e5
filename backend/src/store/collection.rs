//! Id-assigning list guarded by a lock.

use tokio::sync::RwLock;

use super::{IdPolicy, Record};

struct Entries<T> {
    items: Vec<T>,
    /// Highest id handed out so far.
    issued: u64,
}

/// An insertion-ordered collection of records.
///
/// Id assignment and append happen under the same write guard, so concurrent
/// creates never observe the same length.
pub struct Collection<T> {
    entries: RwLock<Entries<T>>,
    policy: IdPolicy,
}

impl<T: Record> Collection<T> {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            entries: RwLock::new(Entries {
                items: Vec::new(),
                issued: 0,
            }),
            policy,
        }
    }

    /// Assign the next id, build the record with it and append it.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut entries = self.entries.write().await;
        let id = match self.policy {
            IdPolicy::LengthPlusOne => entries.items.len() as u64 + 1,
            IdPolicy::Monotonic => entries.issued + 1,
        };
        entries.issued = entries.issued.max(id);

        let record = build(id);
        entries.items.push(record.clone());
        record
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.entries.read().await.items.clone()
    }

    /// First record carrying `id`.
    pub async fn get(&self, id: u64) -> Option<T> {
        self.entries
            .read()
            .await
            .items
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Remove the first record carrying `id`.
    pub async fn remove(&self, id: u64) -> Option<T> {
        let mut entries = self.entries.write().await;
        let index = entries.items.iter().position(|r| r.id() == id)?;
        Some(entries.items.remove(index))
    }
}
