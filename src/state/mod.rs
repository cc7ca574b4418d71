//! Application state module

mod app_state;
mod contact;
mod effects;
mod profile;

pub use app_state::*;
pub use contact::*;
pub use effects::*;
pub use profile::*;
