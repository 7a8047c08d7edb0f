//! Storage backend implementations.
//!
//! Concrete implementations of [`todos_core::storage::TodoRepository`]. The
//! backend the binaries run against is selected at compile time via feature
//! flags; the in-memory backend is always compiled so tests can use it.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local backend, data is lost on shutdown
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build against DynamoDB (default):
//! ```bash
//! cargo build -p todos
//! ```
//!
//! Build against the in-memory store:
//! ```bash
//! cargo build -p todos --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p todos --no-default-features --features inmemory"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;
