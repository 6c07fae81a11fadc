pub mod contact_dto;
pub mod offer_dto;
pub mod prefix_dto;
pub mod visit_dto;
