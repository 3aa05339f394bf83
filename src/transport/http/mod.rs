pub mod router;
pub mod types;
pub mod handlers {
    pub mod events;
    pub mod forms;
    pub mod health;
    pub mod messages;
    pub mod participants;
    pub mod users;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
