//! Business handlers wired into the route registry. Authorization is
//! enforced by the dispatcher composition, never inside a handler.

mod health;
mod profile;

pub use health::health;
pub use profile::user_profile;
