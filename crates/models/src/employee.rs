use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

/// Persisted employee row. Every column except `id` is nullable and stored as given.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub salary: Option<f64>,
    pub department: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Incoming employee payload. Missing JSON fields deserialize as `None`;
/// `id` is only honoured by `save`, never required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeDetails {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub department: Option<String>,
}

impl EmployeeDetails {
    /// Every column is `Set`, so an update overwrites all four fields.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: match self.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(self.name),
            age: Set(self.age),
            salary: Set(self.salary),
            department: Set(self.department),
        }
    }
}

impl From<Model> for EmployeeDetails {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            age: m.age,
            salary: m.salary,
            department: m.department,
        }
    }
}
