pub mod client;
pub mod routes;
pub mod static_data;
