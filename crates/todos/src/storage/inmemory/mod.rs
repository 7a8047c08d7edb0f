//! In-memory storage backend.
//!
//! Stores todos in a `HashMap` wrapped in `Arc<RwLock<_>>`. Used by tests and
//! by local runs built with the `inmemory` feature.
//!
//! ```rust,ignore
//! use todos::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
