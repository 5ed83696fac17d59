use core::fmt::{Debug, Formatter, Result as FmtResult};

use blst::min_pk::SecretKey as RawSecretKey;

use crate::{
    consts::DOMAIN_SEPARATION_TAG, error::Error, public_key::PublicKey,
    secret_key_bytes::SecretKeyBytes, signature::Signature,
};

// `RawSecretKey` already implements `Zeroize` (with `zeroize(drop)`):
// <https://github.com/supranational/blst/blob/v0.3.10/bindings/rust/src/lib.rs#L458-L460>
pub struct SecretKey(RawSecretKey);

impl Debug for SecretKey {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("SecretKey([REDACTED])")
    }
}

impl TryFrom<SecretKeyBytes> for SecretKey {
    type Error = Error;

    #[inline]
    fn try_from(secret_key_bytes: SecretKeyBytes) -> Result<Self, Self::Error> {
        RawSecretKey::from_bytes(secret_key_bytes.as_ref())
            .map(Self)
            .map_err(|_| Error::InvalidSecretKey)
    }
}

impl SecretKey {
    #[inline]
    #[must_use]
    pub fn to_public_key(&self) -> PublicKey {
        self.as_raw().sk_to_pk().into()
    }

    #[inline]
    #[must_use]
    pub fn sign(&self, message: impl AsRef<[u8]>) -> Signature {
        self.as_raw()
            .sign(message.as_ref(), DOMAIN_SEPARATION_TAG, &[])
            .into()
    }

    const fn as_raw(&self) -> &RawSecretKey {
        &self.0
    }
}
