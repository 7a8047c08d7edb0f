use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use todos_core::todo::{validate_create, validate_id, validate_update};
use todos_core::{ApiResponse, CreateTodoRequest, TodoError, UpdateTodoRequest};

use crate::{handlers::AppError, state::AppState};

/// Unwraps a JSON body, turning extractor rejections into validation errors.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, TodoError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(TodoError::Validation("Invalid request format".to_string()))
        }
    }
}

/// Create a new todo (POST /api/v1/todos).
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = json_body(payload)?;
    validate_create(&request)?;

    let todo = state.todos.create_todo(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Todo created successfully", todo)),
    ))
}

/// List all todos (GET /api/v1/todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state.todos.list_todos().await?;

    Ok(Json(ApiResponse::success(
        "Todos retrieved successfully",
        todos,
    )))
}

/// Get a single todo by ID (GET /api/v1/todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_id(&id)?;

    let todo = state.todos.get_todo(&id).await?;
    let todo = todo.ok_or(TodoError::NotFound(id))?;

    Ok(Json(ApiResponse::success("Todo retrieved successfully", todo)))
}

/// Update a todo by ID (PUT /api/v1/todos/{id}).
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    validate_id(&id)?;
    let request = json_body(payload)?;
    validate_update(&request)?;

    let todo = state.todos.update_todo(&id, request).await?;
    let todo = todo.ok_or(TodoError::NotFound(id))?;

    Ok(Json(ApiResponse::success("Todo updated successfully", todo)))
}

/// Delete a todo by ID (DELETE /api/v1/todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_id(&id)?;

    state.todos.delete_todo(&id).await?;

    Ok(Json(ApiResponse::<()>::message("Todo deleted successfully")))
}
