//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  get_crisis_resources, get_emotions, health_check, post_chat, post_counseling_chat, root,
};
pub use routes::{cors_layer, create_router, run_server};
pub use state::AppState;
