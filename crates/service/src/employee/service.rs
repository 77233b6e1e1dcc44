use std::sync::Arc;

use models::employee::{self, EmployeeDetails};
use tracing::{info, instrument};

use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Application service over the employee repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all_employees(&self) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<employee::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Persist `record` as-is. Also the write path for full overwrites.
    #[instrument(skip_all, fields(id = ?record.id))]
    pub async fn create_employee(&self, record: EmployeeDetails) -> Result<employee::Model, ServiceError> {
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "employee_saved");
        Ok(saved)
    }

    /// Overwrite name, age, salary and department of an existing row with
    /// `details`, absent values included. `None` when no row has `id`.
    #[instrument(skip(self, details))]
    pub async fn update_employee(
        &self,
        id: i64,
        details: EmployeeDetails,
    ) -> Result<Option<employee::Model>, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        existing.name = details.name;
        existing.age = details.age;
        existing.salary = details.salary;
        existing.department = details.department;
        let saved = self.repo.save(existing.into()).await?;
        info!(id = saved.id, "employee_updated");
        Ok(Some(saved))
    }

    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "employee_deleted");
        Ok(())
    }
}
