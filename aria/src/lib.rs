//! ARIA block cipher (RFC 5794) for the `symmetric_cipher` engine.

pub mod crypto;

pub use crypto::aria::{
    Aria, Aria128, Aria128Policy, Aria192, Aria192Policy, Aria256, Aria256Policy, AriaPolicy,
};
pub use crypto::key_schedule::RoundKeys;
