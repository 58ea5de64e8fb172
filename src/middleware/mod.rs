pub mod auth;

pub use auth::{Auth, USER_ID_HEADER, auth_middleware};
