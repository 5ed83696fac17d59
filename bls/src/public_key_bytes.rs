use fixed_hash::construct_fixed_hash;
use impl_serde::impl_fixed_hash_serde;

pub const COMPRESSED_SIZE: usize = 48;

construct_fixed_hash! {
    #[derive(derive_more::AsRef)]
    pub struct PublicKeyBytes(COMPRESSED_SIZE);
}

impl_fixed_hash_serde!(PublicKeyBytes, COMPRESSED_SIZE);
