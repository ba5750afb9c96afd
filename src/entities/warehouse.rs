use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "warehouses")]
#[schema(as = Warehouse)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub contact_position: String,
    /// Always stored as `+D (DDD) DDD-DDDD`
    pub contact_phone: String,
    pub contact_email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory::Entity")]
    Inventories,
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
