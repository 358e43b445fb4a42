//! Expense API endpoints.

use api_types::expense::{ExpenseCreate, ExpenseUpdate, ExpenseView};
use api_types::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        description: expense.description,
        amount: expense.amount,
        category: expense.category,
        date: expense.date,
        created_at: expense.created_at,
        updated_at: expense.updated_at,
    }
}

fn parse_id(raw: &str) -> Result<u64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::InvalidId(raw.to_string()))
}

fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServerError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(ServerError::Validation(rejection.body_text())),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseCreate>, JsonRejection>,
) -> Result<Json<ApiResponse<ExpenseView>>, ServerError> {
    let payload = require_body(payload)?;
    if payload.description.is_empty() {
        return Err(ServerError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    if payload.amount <= 0.0 {
        return Err(ServerError::Validation(
            "amount must be greater than zero".to_string(),
        ));
    }
    if payload.category.is_empty() {
        return Err(ServerError::Validation(
            "category must not be empty".to_string(),
        ));
    }

    let mut engine = state.engine.write().await;
    let expense = engine.add_expense(
        &payload.description,
        payload.amount,
        &payload.category,
        &payload.date,
    )?;

    Ok(Json(ApiResponse::ok(
        "Expense created successfully",
        map_expense(expense),
    )))
}

pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<ExpenseView>>> {
    let engine = state.engine.read().await;
    let expenses = engine.expenses().into_iter().map(map_expense).collect();

    Json(ApiResponse::ok(
        "All expenses retrieved successfully",
        expenses,
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ExpenseView>>, ServerError> {
    let id = parse_id(&id)?;

    let engine = state.engine.read().await;
    let expense = engine.expense(id)?;

    Ok(Json(ApiResponse::ok(
        "Expense retrieved successfully",
        map_expense(expense),
    )))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<ExpenseView>>, ServerError> {
    let id = parse_id(&id)?;
    let payload = require_body(payload)?;
    if let Some(description) = &payload.description {
        if description.is_empty() {
            return Err(ServerError::Validation(
                "description must not be empty".to_string(),
            ));
        }
    }
    if let Some(amount) = payload.amount {
        if amount <= 0.0 {
            return Err(ServerError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }
    }
    if let Some(category) = &payload.category {
        if category.is_empty() {
            return Err(ServerError::Validation(
                "category must not be empty".to_string(),
            ));
        }
    }

    let mut engine = state.engine.write().await;
    let expense = engine.update_expense(
        id,
        payload.description.as_deref(),
        payload.amount,
        payload.category.as_deref(),
        payload.date.as_deref(),
    )?;

    Ok(Json(ApiResponse::ok(
        "Expense updated successfully",
        map_expense(expense),
    )))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ServerError> {
    let id = parse_id(&id)?;

    let mut engine = state.engine.write().await;
    engine.delete_expense(id)?;

    Ok(Json(ApiResponse::ok("Expense deleted successfully", ())))
}
