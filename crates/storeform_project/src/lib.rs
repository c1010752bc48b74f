pub mod catalog;
pub mod defaults;
pub mod errors;
pub mod file_format;
pub mod session;

pub use catalog::*;
pub use defaults::*;
pub use errors::*;
pub use file_format::*;
pub use session::*;
