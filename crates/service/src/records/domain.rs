use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Number;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::validation::{field, require_fields, Requirement};

/// A record kind stored in its own collection.
pub trait Document: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, used for logs, metrics and file names.
    const COLLECTION: &'static str;
    /// Human label used in not-found messages.
    const LABEL: &'static str;

    /// Request body accepted by the create endpoint.
    type Input: Send;

    /// Validate a create request and turn it into a document.
    fn from_input(input: Self::Input) -> Result<Self, ServiceError>;
}

/// A persisted document with its store-assigned identifier.
///
/// Serializes flat: `{"id": "...", <document fields>}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<D> {
    pub id: Uuid,
    #[serde(flatten)]
    pub doc: D,
}

impl<D> Record<D> {
    pub fn new(id: Uuid, doc: D) -> Self { Self { id, doc } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantInput {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl Document for Restaurant {
    const COLLECTION: &'static str = "restaurants";
    const LABEL: &'static str = "Restaurant";
    type Input = CreateRestaurantInput;

    fn from_input(input: CreateRestaurantInput) -> Result<Self, ServiceError> {
        require_fields(
            &[field("name", &input.name), field("location", &input.location)],
            Requirement::NonEmpty,
            |missing| format!("Missing fields: {}", missing.join(", ")),
        )?;
        Ok(Self {
            name: input.name.unwrap_or_default(),
            location: input.location.unwrap_or_default(),
        })
    }
}

/// `restaurant_id` is kept verbatim and never checked against the restaurants collection.
/// A field is `None` when the client sent it as `null`; it is stored and echoed that way.
/// `amount` keeps the number exactly as received (integer or float).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub restaurant_id: Option<String>,
    pub amount: Option<Number>,
    pub payment_method: Option<String>,
    pub mode: Option<String>,
}

/// Outer `None`: key absent. `Some(None)`: key sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseInput {
    #[serde(default, deserialize_with = "present")]
    pub restaurant_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present")]
    pub payment_method: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub mode: Option<Option<String>>,
}

/// Only called when the key exists, so an explicit `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Document for Expense {
    const COLLECTION: &'static str = "expenses";
    const LABEL: &'static str = "Expense";
    type Input = CreateExpenseInput;

    fn from_input(input: CreateExpenseInput) -> Result<Self, ServiceError> {
        require_fields(
            &[
                field("restaurantId", &input.restaurant_id),
                field("amount", &input.amount),
                field("paymentMethod", &input.payment_method),
                field("mode", &input.mode),
            ],
            Requirement::Present,
            |_| "Missing fields".to_string(),
        )?;
        Ok(Self {
            restaurant_id: input.restaurant_id.flatten(),
            amount: input.amount.flatten(),
            payment_method: input.payment_method.flatten(),
            mode: input.mode.flatten(),
        })
    }
}
