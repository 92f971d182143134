use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RestaurantDoc { pub id: Uuid, pub name: String, pub location: String }

#[derive(ToSchema)]
pub struct CreateRestaurantRequest { pub name: String, pub location: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ExpenseDoc {
    pub id: Uuid,
    pub restaurantId: Option<String>,
    pub amount: Option<f64>,
    pub paymentMethod: Option<String>,
    pub mode: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
/// Every key is required; values may be `null`.
pub struct CreateExpenseRequest {
    #[schema(nullable)]
    pub restaurantId: String,
    #[schema(nullable)]
    pub amount: f64,
    #[schema(nullable)]
    pub paymentMethod: String,
    #[schema(nullable)]
    pub mode: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::create,
        crate::routes::restaurants::delete,
        crate::routes::expenses::list,
        crate::routes::expenses::create,
        crate::routes::expenses::delete,
    ),
    components(
        schemas(
            HealthResponse,
            RestaurantDoc,
            CreateRestaurantRequest,
            ExpenseDoc,
            CreateExpenseRequest,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "expenses")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
