//! Storage layer - typed record repositories
//!
//! The API layer only talks to `Repository` trait objects, so the in-memory
//! backing used by the demo can be swapped without touching callers.

pub mod memory;
pub mod seed;

use async_trait::async_trait;

use crate::models::{Comment, Post, User};

pub use memory::MemoryRepository;

/// A record with an integer identity assigned by its repository
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for Post {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for Comment {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// CRUD over one ordered collection of records.
///
/// Every method hands out owned copies; nothing returned aliases the stored
/// data. Implementations must serialize mutations on the same collection.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records in insertion order
    async fn all(&self) -> Vec<T>;

    /// Record with the given id
    async fn find(&self, id: u64) -> Option<T>;

    /// Records matching `predicate`, in insertion order
    async fn filter(&self, predicate: &(dyn for<'a> Fn(&'a T) -> bool + Send + Sync)) -> Vec<T>;

    /// Append a record, overwriting its id with a freshly assigned one
    async fn insert(&self, record: T) -> T;

    /// Mutate the record in place and return the result
    async fn update(&self, id: u64, apply: Box<dyn for<'a> FnOnce(&'a mut T) + Send>) -> Option<T>;

    /// Remove the record and return its prior content
    async fn remove(&self, id: u64) -> Option<T>;

    /// Number of stored records
    async fn count(&self) -> usize;
}
