pub mod api;
pub mod components;
pub mod routes;
pub mod session;
pub mod state;

pub use api::*;
pub use components::*;
pub use routes::*;
pub use session::*;
pub use state::*;
