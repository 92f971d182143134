use service::{Expense, RecordService, Restaurant, Stores};

/// Shared handler state: one service per collection over the injected stores.
#[derive(Clone)]
pub struct AppState {
    pub restaurants: RecordService<Restaurant>,
    pub expenses: RecordService<Expense>,
}

impl From<Stores> for AppState {
    fn from(stores: Stores) -> Self {
        Self {
            restaurants: RecordService::new(stores.restaurants),
            expenses: RecordService::new(stores.expenses),
        }
    }
}
