//! Application service layer.
//!
//! Services sit between the command layer and the address book. They keep
//! the state a user interface needs on top of the data, such as the current
//! find filter.

mod model_manager;

pub use model_manager::{ModelManager, PersonFilter};
