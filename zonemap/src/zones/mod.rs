mod collection;
mod names;
mod zone;

pub use collection::*;
pub use names::*;
pub use zone::*;
