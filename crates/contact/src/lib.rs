mod command;
mod error;
mod mailer;
mod notification;
pub mod sanitize;
mod submission;

pub use command::*;
pub use error::*;
pub use mailer::*;
pub use notification::*;
pub use submission::*;
