pub mod csv;
pub mod plot3d;
