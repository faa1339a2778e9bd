use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Donation candidate row. The wire contract uses camelCase keys
/// (`fullName`, `bloodGroup`, ...); the table uses snake_case columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidate")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub age: i32,
    pub blood_group: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}
