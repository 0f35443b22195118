pub mod gate;
pub mod sessions;
pub mod token;

pub use gate::{Access, AccessGate};
pub use sessions::Identity;
