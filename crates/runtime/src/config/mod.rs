pub mod secrets;

pub use secrets::{AuthSecrets, Secrets};
