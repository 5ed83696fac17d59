use blst::min_pk::PublicKey as RawPublicKey;
use derive_more::From;

use crate::{Error, PublicKeyBytes};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, From)]
pub struct PublicKey(RawPublicKey);

impl From<PublicKey> for PublicKeyBytes {
    #[inline]
    fn from(public_key: PublicKey) -> Self {
        Self(public_key.as_raw().compress())
    }
}

impl TryFrom<PublicKeyBytes> for PublicKey {
    type Error = Error;

    #[inline]
    fn try_from(bytes: PublicKeyBytes) -> Result<Self, Self::Error> {
        let raw =
            RawPublicKey::uncompress(bytes.as_bytes()).map_err(|_| Error::InvalidPublicKey)?;

        // `uncompress` does not check that the point is in the correct subgroup.
        // See <https://github.com/supranational/blst/issues/11>.
        raw.validate().map_err(|_| Error::InvalidPublicKey)?;

        Ok(Self(raw))
    }
}

impl PublicKey {
    pub(crate) const fn as_raw(&self) -> &RawPublicKey {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use tap::{Conv as _, TryConv as _};

    use crate::{SecretKey, SecretKeyBytes};

    use super::*;

    #[test]
    fn public_key_bytes_round_trip() {
        let public_key = secret_key().to_public_key();

        let bytes = public_key.conv::<PublicKeyBytes>();

        let decompressed = bytes
            .try_conv::<PublicKey>()
            .expect("compressed public key is valid");

        assert_eq!(decompressed, public_key);
    }

    #[test]
    fn malformed_public_key_bytes_fail_to_decompress() {
        PublicKeyBytes::repeat_byte(0xff)
            .try_conv::<PublicKey>()
            .expect_err("0xff repeated is not a valid compressed public key");
    }

    fn secret_key() -> SecretKey {
        (*b"????????????????????????????????")
            .conv::<SecretKeyBytes>()
            .try_conv::<SecretKey>()
            .expect("bytes encode a valid secret key")
    }
}
