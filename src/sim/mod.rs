pub mod coupling;
pub mod integrate;
pub mod params;
pub mod trajectory;
