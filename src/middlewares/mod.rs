pub mod admin_middleware;
pub mod cors_middleware;
