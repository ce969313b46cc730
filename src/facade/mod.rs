pub mod handler;

pub use handler::{Garage, GarageHandler};
