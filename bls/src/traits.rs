use core::fmt::Debug;

/// Signature aggregation as an abstract capability.
///
/// The aggregation caches only need aggregation and verification, so they can
/// be written against this trait without committing to a curve implementation.
pub trait Signature: Clone + Copy + PartialEq + Eq + Debug + Default + 'static {
    type SignatureBytes: Copy;
    type PublicKey;

    fn verify(&self, message: impl AsRef<[u8]>, public_key: &Self::PublicKey) -> bool;

    #[must_use]
    fn aggregate(mut self, other: Self) -> Self {
        self.aggregate_in_place(other);
        self
    }

    fn aggregate_in_place(&mut self, other: Self);
}
