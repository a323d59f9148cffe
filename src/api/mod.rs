pub mod dispatcher;
pub mod event;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dispatcher::handle_event;
pub use event::{GatewayEvent, GatewayResponse};
pub use routes::create_router;
pub use state::AppState;
