pub mod error;
pub mod traits;

pub use error::{GarageError, Result};
pub use traits::{Criteria, Keyed, Kinded, keys_match};
