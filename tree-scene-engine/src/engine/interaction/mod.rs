pub mod picking;
pub mod ray;
pub mod shortcuts;
