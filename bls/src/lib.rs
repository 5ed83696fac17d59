pub use crate::{
    consts::DOMAIN_SEPARATION_TAG, error::Error, public_key::PublicKey,
    public_key_bytes::PublicKeyBytes, secret_key::SecretKey, secret_key_bytes::SecretKeyBytes,
    signature::Signature, signature_bytes::SignatureBytes,
};

pub mod traits;

mod consts;
mod error;
mod public_key;
mod public_key_bytes;
mod secret_key;
mod secret_key_bytes;
mod signature;
mod signature_bytes;
