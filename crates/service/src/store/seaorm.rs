//! PostgreSQL backend on top of the `models` entities.

use std::sync::Arc;

use async_trait::async_trait;
use models::{expense, restaurant};
use sea_orm::DatabaseConnection;
use serde_json::Number;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::domain::{Expense, Record, Restaurant};
use crate::store::{Collection, Stores};

/// SeaORM-backed store; the connection is a pool and is cheap to clone.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub fn stores(self) -> Stores {
        let shared = Arc::new(self);
        Stores { restaurants: shared.clone(), expenses: shared }
    }
}

impl From<restaurant::Model> for Record<Restaurant> {
    fn from(m: restaurant::Model) -> Self {
        Record::new(m.id, Restaurant { name: m.name, location: m.location })
    }
}

/// The `amount` column is a double, so rows read back carry a float amount.
impl From<expense::Model> for Record<Expense> {
    fn from(m: expense::Model) -> Self {
        Record::new(
            m.id,
            Expense {
                restaurant_id: m.restaurant_id,
                amount: m.amount.and_then(Number::from_f64),
                payment_method: m.payment_method,
                mode: m.mode,
            },
        )
    }
}

#[async_trait]
impl Collection<Restaurant> for SeaOrmStore {
    async fn find_all(&self) -> Result<Vec<Record<Restaurant>>, ServiceError> {
        Ok(restaurant::list(&self.db).await?.into_iter().map(Record::from).collect())
    }

    async fn insert_one(&self, doc: Restaurant) -> Result<Record<Restaurant>, ServiceError> {
        Ok(restaurant::create(&self.db, &doc.name, &doc.location).await?.into())
    }

    async fn delete_one(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(restaurant::delete(&self.db, id).await?)
    }
}

#[async_trait]
impl Collection<Expense> for SeaOrmStore {
    async fn find_all(&self) -> Result<Vec<Record<Expense>>, ServiceError> {
        Ok(expense::list(&self.db).await?.into_iter().map(Record::from).collect())
    }

    /// Echoes `doc` with the new id so the caller sees the amount exactly as sent.
    async fn insert_one(&self, doc: Expense) -> Result<Record<Expense>, ServiceError> {
        let amount = match &doc.amount {
            Some(n) => Some(n.as_f64().ok_or_else(|| ServiceError::Validation("amount is not a finite number".into()))?),
            None => None,
        };
        let row = expense::create(
            &self.db,
            doc.restaurant_id.as_deref(),
            amount,
            doc.payment_method.as_deref(),
            doc.mode.as_deref(),
        )
        .await?;
        Ok(Record::new(row.id, doc))
    }

    async fn delete_one(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(expense::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_store_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let stores = SeaOrmStore::new(db).stores();

        let r = stores.restaurants.insert_one(Restaurant { name: "Dim Sum House".into(), location: "Hong Kong".into() }).await?;
        let e = stores
            .expenses
            .insert_one(Expense {
                restaurant_id: Some(r.id.to_string()),
                amount: Number::from_f64(42.5),
                payment_method: Some("card".into()),
                mode: Some("lunch".into()),
            })
            .await?;
        let echoed = stores
            .expenses
            .insert_one(Expense { restaurant_id: None, amount: Some(Number::from(10)), payment_method: None, mode: None })
            .await?;
        assert_eq!(echoed.doc.amount, Some(Number::from(10)));
        assert!(stores.restaurants.find_all().await?.contains(&r));

        // no cascade from restaurants to expenses
        assert!(stores.restaurants.delete_one(r.id).await?);
        assert!(stores.expenses.find_all().await?.contains(&e));
        assert!(stores.expenses.delete_one(e.id).await?);
        assert!(!stores.expenses.delete_one(e.id).await?);
        assert!(stores.expenses.delete_one(echoed.id).await?);
        Ok(())
    }
}
