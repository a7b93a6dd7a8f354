pub mod callback;
pub mod deploy;
pub mod progress;
