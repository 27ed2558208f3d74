#[allow(clippy::module_inception)]
pub mod routes;

pub use routes::init_routes;
