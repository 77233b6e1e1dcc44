use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Employee as stored; every field but `id` may be null.
#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub department: Option<String>,
}

/// Request body for create and update. Omitted fields are stored as null.
#[derive(ToSchema)]
pub struct EmployeeDetailsDoc {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub department: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeeDetailsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees", description = "Employee CRUD")
    )
)]
pub struct ApiDoc;
