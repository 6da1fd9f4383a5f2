pub use crate::cli::{Cli, Command, EditCommand};
pub use crate::domain::{contact::Contact, store::ContactBook};
pub use crate::errors::AppError;
