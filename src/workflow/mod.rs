pub mod definition;
pub mod extract;

pub use definition::*;
pub use extract::*;
