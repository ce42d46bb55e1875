pub mod recommend_service;
pub mod travel_service;
