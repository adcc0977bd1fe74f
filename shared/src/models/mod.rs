//! Domain models for the Plant Care Assistant

mod conditions;
mod plant;
mod reminder;
mod suggestion;

pub use conditions::*;
pub use plant::*;
pub use reminder::*;
pub use suggestion::*;
