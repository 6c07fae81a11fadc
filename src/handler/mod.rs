pub mod contact_handler;
pub mod offer_handler;
pub mod prefix_handler;
pub mod prefs_handler;
pub mod proxy_handler;
pub mod static_handler;
pub mod user_handler;
pub mod visit_handler;
