pub mod accumulator;
pub mod algorithm;
pub mod cipher_context;
pub mod cipher_io;
pub mod cipher_key;
pub mod cipher_traits;
pub mod cipher_types;
pub mod cipher_value;
pub mod error;
pub mod modes;
pub mod padding;
pub mod utils;
