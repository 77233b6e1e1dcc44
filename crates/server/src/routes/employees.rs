use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::employee::{self, EmployeeDetails};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

/// 列出所有员工
#[utoipa::path(
    get, path = "/employees", tag = "employees",
    responses(
        (status = 200, description = "All stored employees", body = [crate::openapi::EmployeeDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<employee::Model>>, ApiError> {
    let all = state.employees.get_all_employees().await?;
    info!(count = all.len(), "list employees");
    Ok(Json(all))
}

/// 获取指定员工
#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<employee::Model>, ApiError> {
    state
        .employees
        .get_employee_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// 创建员工（请求体中的 id 仅用于覆盖已存在记录）
#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = crate::openapi::EmployeeDetailsDoc,
    responses(
        (status = 200, description = "Created, with the generated id", body = crate::openapi::EmployeeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<EmployeeDetails>,
) -> Result<Json<employee::Model>, ApiError> {
    let created = state.employees.create_employee(input).await?;
    Ok(Json(created))
}

/// 全量更新：四个字段全部以请求体为准，缺省字段写入 null
#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeDetailsDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(details): Json<EmployeeDetails>,
) -> Result<Json<employee::Model>, ApiError> {
    let Some(mut existing) = state.employees.get_employee_by_id(id).await? else {
        return Err(ApiError::NotFound);
    };
    existing.name = details.name;
    existing.age = details.age;
    existing.salary = details.salary;
    existing.department = details.department;
    let saved = state.employees.create_employee(existing.into()).await?;
    Ok(Json(saved))
}

/// 删除员工；先查询以区分 204 与 404
#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let existing = state
        .employees
        .get_employee_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    state.employees.delete_employee(existing.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
