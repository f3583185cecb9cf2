use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "food_name")]
    pub food_name: Option<String>,
    #[sea_orm(column_name = "food_image")]
    pub food_image: Option<String>,
    #[sea_orm(column_name = "food_quantity")]
    pub food_quantity: Option<Json>,
    #[sea_orm(column_name = "pickup_location")]
    pub pickup_location: Option<String>,
    #[sea_orm(column_name = "expired_date_time")]
    pub expired_date_time: Option<Json>,
    #[sea_orm(column_name = "expires_at_ms")]
    pub expires_at_ms: Option<i64>,
    #[sea_orm(column_name = "additional_notes")]
    pub additional_notes: Option<String>,
    pub donor: Json,
    #[sea_orm(column_name = "donor_email")]
    pub donor_email: String,
    #[sea_orm(column_name = "food_status")]
    pub food_status: Option<String>,
    #[sea_orm(column_name = "request_date")]
    pub request_date: Option<Json>,
    #[sea_orm(column_name = "benefactor_email")]
    pub benefactor_email: Option<String>,
    #[sea_orm(column_name = "benefactor_name")]
    pub benefactor_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
