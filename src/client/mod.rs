//! Client-side route table: URL paths the shop front end navigates to and the
//! page component each one renders.

mod pages;
mod routes;

pub use routes::{client_routes, NavigationError};
