//! Share package aggregate: lots, their lock countdown and the trade math.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
