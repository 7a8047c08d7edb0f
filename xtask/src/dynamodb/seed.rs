//! Seed command implementation.

use chrono::{DateTime, Duration, Utc};
use todos_core::storage::TodoRepository;
use todos_core::Todo;

use super::error::Result;

const SEED_TODOS: [(&str, &str); 8] = [
    ("Buy groceries", "Milk, eggs, bread and coffee"),
    ("Renew passport", "Book an appointment before the summer"),
    ("Water the plants", ""),
    ("Call the plumber", "Kitchen sink is dripping again"),
    ("Write weekly report", "Summarize the on-call incidents"),
    ("Pay electricity bill", ""),
    ("Plan weekend hike", "Check the weather and trail conditions"),
    ("Return library books", "Due on Friday"),
];

/// Generate `count` demo todos.
///
/// Creation times are spread one minute apart ending at `now`, and every
/// third todo is already completed.
pub fn generate_seed_todos(count: u32, now: DateTime<Utc>) -> Vec<Todo> {
    (0..count)
        .map(|i| {
            let (title, description) = SEED_TODOS[i as usize % SEED_TODOS.len()];
            let round = i as usize / SEED_TODOS.len();
            let title = if round == 0 {
                title.to_string()
            } else {
                format!("{} (#{})", title, round + 1)
            };

            let created_at = now - Duration::minutes(i64::from(count - 1 - i));
            Todo::new(title, description, created_at).with_completed(i % 3 == 2)
        })
        .collect()
}

/// Write the todos through the repository. Returns how many were written.
pub async fn seed_todos(repository: &dyn TodoRepository, todos: &[Todo]) -> Result<usize> {
    for todo in todos {
        repository.put_todo(todo).await?;
    }
    Ok(todos.len())
}
