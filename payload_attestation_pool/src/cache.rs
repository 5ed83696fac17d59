use anyhow::Result;
use bitfields::BitVector;
use bls::{traits::Signature as _, Signature};
use enum_map::EnumMap;
use log::debug;
use types::{
    gloas::{
        containers::{PayloadAttestation, PayloadAttestationMessage},
        primitives::PayloadStatus,
    },
    phase0::primitives::{Slot, H256},
    preset::Preset,
};

/// Running payload attestation aggregates for the block root currently being built on.
///
/// The cache tracks exactly one root at a time. A message for any other root
/// discards everything accumulated so far and starts tracking the new root.
/// Signature verification happens upstream; the cache only aggregates.
#[derive(Clone, Debug, Default)]
pub struct PayloadAttestationCache<P: Preset> {
    root: H256,
    attestations: EnumMap<PayloadStatus, Option<PayloadAttestation<P>>>,
}

impl<P: Preset> PayloadAttestationCache<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a verified message into the aggregate for its payload status.
    ///
    /// `ptc_index` is the sender's position within the PTC and must be below
    /// `P::PtcSize`; the caller validates committee membership. Re-adding an
    /// already aggregated position is a no-op. The only failure is malformed
    /// signature bytes, and a failed call leaves the aggregate untouched.
    pub fn add(&mut self, message: &PayloadAttestationMessage, ptc_index: usize) -> Result<()> {
        let PayloadAttestationMessage {
            data, signature, ..
        } = *message;

        if data.beacon_block_root != self.root {
            self.attestations = EnumMap::default();
            self.root = data.beacon_block_root;
        }

        match &mut self.attestations[data.payload_status] {
            Some(attestation) => {
                if attestation.aggregation_bits.get(ptc_index) == Some(true) {
                    debug!(
                        "duplicate payload attestation message \
                         (data: {data:?}, ptc_index: {ptc_index})",
                    );

                    return Ok(());
                }

                // Decompress both operands before mutating anything so that malformed
                // bytes cannot leave a bit set without its signature aggregated.
                let existing = Signature::try_from(attestation.signature)?;
                let incoming = Signature::try_from(signature)?;

                attestation.aggregation_bits.set(ptc_index, true);
                attestation.signature = existing.aggregate(incoming).into();
            }
            slot @ None => {
                let mut aggregation_bits = BitVector::default();
                aggregation_bits.set(ptc_index, true);

                *slot = Some(PayloadAttestation {
                    aggregation_bits,
                    data,
                    signature,
                });
            }
        }

        Ok(())
    }

    /// True if the position has contributed to the tracked root under any payload status.
    ///
    /// This is the deduplication contract gossip validation relies on, which
    /// is why a contribution under one status counts as seen under all of them.
    #[must_use]
    pub fn seen(&self, root: H256, ptc_index: usize) -> bool {
        root == self.root
            && self
                .attestations
                .values()
                .flatten()
                .any(|attestation| attestation.aggregation_bits.get(ptc_index) == Some(true))
    }

    /// The aggregate for `payload_status`, or `None` on a root mismatch or
    /// when no contribution has arrived under that status. Pure read.
    #[must_use]
    pub fn get(&self, root: H256, payload_status: PayloadStatus) -> Option<&PayloadAttestation<P>> {
        if root != self.root {
            return None;
        }

        self.attestations[payload_status].as_ref()
    }

    /// The populated aggregate with the most contributors, for block assembly.
    #[must_use]
    pub fn best(&self, root: H256) -> Option<&PayloadAttestation<P>> {
        if root != self.root {
            return None;
        }

        self.attestations
            .values()
            .flatten()
            .max_by_key(|attestation| attestation.aggregation_bits.count_ones())
    }

    /// The slot the tracked aggregates attest to, if any contribution has arrived.
    #[must_use]
    pub fn tracked_slot(&self) -> Option<Slot> {
        self.attestations
            .values()
            .flatten()
            .map(|attestation| attestation.data.slot)
            .next()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
