pub mod contact_service;
pub mod offer_service;
pub mod prefix_service;
pub mod user_service;
pub mod visit_service;
