pub mod contact_router;
pub mod offer_router;
pub mod prefix_router;
pub mod prefs_router;
pub mod proxy_router;
pub mod user_router;
pub mod visit_router;
