mod database;
mod recipe;
mod server;

pub use database::{migrate, reset};
pub use recipe::import_recipes;
pub use server::serve;
