use async_trait::async_trait;
use models::employee::{self, EmployeeDetails};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

/// Storage contract for employee rows, keyed by id.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<employee::Model>, ServiceError>;
    /// Insert when `record.id` is unset or unknown (storage assigns the id),
    /// otherwise overwrite the row with that id.
    async fn save(&self, record: EmployeeDetails) -> Result<employee::Model, ServiceError>;
    /// No-op when the id does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn save(&self, record: EmployeeDetails) -> Result<employee::Model, ServiceError> {
        let exists = match record.id {
            Some(id) => employee::Entity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };
        if exists {
            overwrite_or_insert(&self.db, record).await
        } else {
            insert_new(&self.db, record).await
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        employee::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

/// Insert under a database-generated id; any supplied id is dropped.
async fn insert_new(db: &DatabaseConnection, mut record: EmployeeDetails) -> Result<employee::Model, ServiceError> {
    record.id = None;
    Ok(record.into_active_model().insert(db).await?)
}

/// Overwrite the row with `record.id`. A row deleted since the caller's
/// lookup updates nothing; the record is then stored as a new row.
async fn overwrite_or_insert(db: &DatabaseConnection, record: EmployeeDetails) -> Result<employee::Model, ServiceError> {
    match record.clone().into_active_model().update(db).await {
        Ok(saved) => Ok(saved),
        Err(DbErr::RecordNotUpdated) => insert_new(db, record).await,
        Err(e) => Err(e.into()),
    }
}
