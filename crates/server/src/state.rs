use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::employee::{EmployeeService, SeaOrmEmployeeRepository};

pub type AppEmployeeService = EmployeeService<SeaOrmEmployeeRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<AppEmployeeService>,
}

impl ServerState {
    /// Wire repository -> service for a connected pool.
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmEmployeeRepository::new(db));
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }
}
