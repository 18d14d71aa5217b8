pub mod deck;
pub mod generator;
pub mod id;
pub mod option;

pub use deck::*;
pub use generator::*;
pub use id::*;
pub use option::*;
