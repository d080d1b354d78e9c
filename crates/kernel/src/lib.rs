pub mod settings;
pub mod state;
pub mod store;

pub use state::ViewState;
pub use store::{StateCell, Ticket};
