pub mod entities;
pub mod ports;
pub mod rules;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use rules::generate;
pub use value_objects::*;
