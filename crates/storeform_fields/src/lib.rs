pub mod error;
pub mod field;
pub mod layout;
pub mod placement;
pub mod store;

pub use error::*;
pub use field::*;
pub use layout::*;
pub use placement::{DragToken, Operation, Outcome, Rejection, Transition};
pub use store::*;
