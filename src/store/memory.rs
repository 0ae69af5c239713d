//! In-memory repository backed by a `Vec` behind an async lock

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{Record, Repository};

struct Inner<T> {
    records: Vec<T>,
    next_id: u64,
}

/// Volatile repository; contents live only as long as the process
pub struct MemoryRepository<T> {
    inner: RwLock<Inner<T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records. Ids continue after the largest seeded id
    /// and are never handed out twice, even after removals.
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        MemoryRepository {
            inner: RwLock::new(Inner { records, next_id }),
        }
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn all(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    async fn find(&self, id: u64) -> Option<T> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|r| r.id() == id).cloned()
    }

    async fn filter(&self, predicate: &(dyn for<'a> Fn(&'a T) -> bool + Send + Sync)) -> Vec<T> {
        let inner = self.inner.read().await;
        inner.records.iter().filter(|&r| predicate(r)).cloned().collect()
    }

    async fn insert(&self, mut record: T) -> T {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        record.set_id(id);
        inner.records.push(record.clone());
        tracing::debug!(id, total = inner.records.len(), "Record inserted");
        record
    }

    async fn update(
        &self,
        id: u64,
        apply: Box<dyn for<'a> FnOnce(&'a mut T) + Send>,
    ) -> Option<T> {
        let mut inner = self.inner.write().await;
        let record = inner.records.iter_mut().find(|r| r.id() == id)?;
        apply(record);
        // The record keeps its identity whatever the closure did
        record.set_id(id);
        Some(record.clone())
    }

    async fn remove(&self, id: u64) -> Option<T> {
        let mut inner = self.inner.write().await;
        let index = inner.records.iter().position(|r| r.id() == id)?;
        let removed = inner.records.remove(index);
        tracing::debug!(id, total = inner.records.len(), "Record removed");
        Some(removed)
    }

    async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_insert_appends_with_next_id() {
        let repo = MemoryRepository::with_records(vec![user(1, "a"), user(2, "b")]);
        let created = repo.insert(user(0, "c")).await;
        assert_eq!(created.id, 3);

        let all = repo.all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().unwrap().name, "c");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let repo = MemoryRepository::with_records(vec![user(1, "a"), user(2, "b")]);
        repo.remove(2).await.unwrap();
        let created = repo.insert(user(0, "c")).await;
        assert_eq!(created.id, 3);

        let ids: Vec<u64> = repo.all().await.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_remove_missing_leaves_records() {
        let repo = MemoryRepository::with_records(vec![user(1, "a")]);
        assert!(repo.remove(42).await.is_none());
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let repo = MemoryRepository::with_records(vec![user(1, "a")]);
        let updated = repo
            .update(
                1,
                Box::new(|u: &mut User| {
                    u.name = "z".into();
                    u.id = 99;
                }),
            )
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(repo.find(1).await.unwrap().name, "z");
        assert!(repo.find(99).await.is_none());
    }

    #[tokio::test]
    async fn test_returned_records_are_copies() {
        let repo = MemoryRepository::with_records(vec![user(1, "a")]);
        let mut found = repo.find(1).await.unwrap();
        found.name.push_str("-changed");
        assert_eq!(repo.find(1).await.unwrap().name, "a");
    }

    #[tokio::test]
    async fn test_filter_preserves_order() {
        let repo = MemoryRepository::with_records(vec![user(1, "a"), user(2, "b"), user(3, "a")]);
        let matches = repo.filter(&|u: &User| u.name == "a").await;
        let ids: Vec<u64> = matches.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(repo.filter(&|u: &User| u.age > 100).await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = std::sync::Arc::new(MemoryRepository::<User>::new());
        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(user(0, &format!("u{}", i))).await.id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_trait_object_filter_and_update() {
        let repo: std::sync::Arc<dyn Repository<User>> =
            std::sync::Arc::new(MemoryRepository::with_records(vec![user(1, "a"), user(2, "b")]));

        let wanted = String::from("b");
        let matches = repo.filter(&|u: &User| u.name == wanted).await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);

        let updated = repo
            .update(2, Box::new(|u: &mut User| u.age += 1))
            .await
            .unwrap();
        assert_eq!(updated.age, 31);
        assert_eq!(repo.find(2).await.unwrap().age, 31);
        assert!(repo.update(9, Box::new(|u: &mut User| u.age = 0)).await.is_none());
        assert_eq!(repo.count().await, 2);
    }
}
