mod check;
mod server;

pub use check::summary;
pub use server::{app_state, serve};
