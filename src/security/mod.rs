//! Security module - zeroized in-memory secret handling

mod secure_string;

pub use secure_string::SecureString;
