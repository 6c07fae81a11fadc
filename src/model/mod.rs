pub mod contact;
pub mod country_prefix;
pub mod offer;
pub mod user;
pub mod visit;
