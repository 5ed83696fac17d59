use blst::BLST_ERROR;
use derive_more::From;
use thiserror::Error;

#[derive(Debug, From, Error)]
pub enum Error {
    #[error("decompression failed: {0:?}")]
    DecompressionFailed(BLST_ERROR),
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid secret key")]
    InvalidSecretKey,
}
