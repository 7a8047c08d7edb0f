//! DynamoDB storage backend.
//!
//! Single table, partition key `id` (S), no sort key and no secondary
//! indexes. Each todo is one item whose attributes match the JSON field
//! names.

mod client;
mod conversions;
mod error;
mod repository;

pub use client::build_client;
pub use conversions::{item_to_todo, todo_to_item, PARTITION_KEY};
pub use repository::DynamoDbRepository;
