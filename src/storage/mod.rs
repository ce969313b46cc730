pub mod registry;
pub mod slotted;

pub use registry::{CollectionRegistry, Located};
pub use slotted::SlottedCollection;
