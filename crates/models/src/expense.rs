use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// `restaurant_id` is free text; it is not constrained to an existing restaurant.
/// Every column is nullable: a client may send any field as `null`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expense")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub restaurant_id: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub amount: Option<f64>,
    pub payment_method: Option<String>,
    pub mode: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    restaurant_id: Option<&str>,
    amount: Option<f64>,
    payment_method: Option<&str>,
    mode: Option<&str>,
) -> Result<Model, errors::ModelError> {
    if amount.is_some_and(|a| !a.is_finite()) {
        return Err(errors::ModelError::Validation("amount must be finite".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        restaurant_id: Set(restaurant_id.map(str::to_string)),
        amount: Set(amount),
        payment_method: Set(payment_method.map(str::to_string)),
        mode: Set(mode.map(str::to_string)),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().all(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected == 1)
}
