pub mod base_types;
pub mod spot;
pub mod spots;
pub mod vehicle;
