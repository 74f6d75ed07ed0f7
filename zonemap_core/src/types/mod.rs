mod blob;
mod data_location;

pub use blob::*;
pub use data_location::*;
