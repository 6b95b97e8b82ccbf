//! Note encryption, key storage and PIN hashing.

pub mod cipher;
pub mod keystore;
pub mod pin;

pub use cipher::NoteCipher;
pub use keystore::{FileKeyStore, KeyStore, MasterKey, MemoryKeyStore};
pub use pin::{hash_pin, validate_pin};
