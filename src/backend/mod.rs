mod interface;
mod json_store;
mod pin_store;

pub use interface::StateStore;
pub use json_store::{JsonStore, DEFAULT_STATE_FILE};
pub use pin_store::{PinStore, DEFAULT_SECRET_FILE};
