use anyhow::Result;
use tokio::sync::RwLock;
use types::{
    gloas::{
        containers::{PayloadAttestation, PayloadAttestationMessage},
        primitives::PayloadStatus,
    },
    phase0::primitives::{Slot, H256},
    preset::Preset,
};

use crate::cache::PayloadAttestationCache;

/// Shared ownership of a [`PayloadAttestationCache`].
///
/// Gossip validation tasks insert concurrently while block assembly reads;
/// every `add` runs as one critical section under the write lock.
#[derive(Default)]
pub struct Pool<P: Preset> {
    cache: RwLock<PayloadAttestationCache<P>>,
}

impl<P: Preset> Pool<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards aggregates once the slot they attest to falls behind the previous slot.
    pub async fn on_slot(&self, slot: Slot) {
        let mut cache = self.cache.write().await;

        match (cache.tracked_slot(), slot.checked_sub(1)) {
            (Some(tracked_slot), Some(previous)) if tracked_slot < previous => cache.reset(),
            _ => {}
        }
    }

    pub async fn insert_payload_attestation_message(
        &self,
        message: &PayloadAttestationMessage,
        ptc_index: usize,
    ) -> Result<()> {
        self.cache.write().await.add(message, ptc_index)
    }

    pub async fn seen(&self, root: H256, ptc_index: usize) -> bool {
        self.cache.read().await.seen(root, ptc_index)
    }

    pub async fn payload_attestation(
        &self,
        root: H256,
        payload_status: PayloadStatus,
    ) -> Option<PayloadAttestation<P>> {
        self.cache.read().await.get(root, payload_status).copied()
    }

    pub async fn best_payload_attestation(&self, root: H256) -> Option<PayloadAttestation<P>> {
        self.cache.read().await.best(root).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bls::{SecretKey, SecretKeyBytes};
    use futures::future::try_join_all;
    use tap::{Conv as _, TryConv as _};
    use types::{gloas::containers::PayloadAttestationData, preset::Mainnet};

    use super::*;

    const ROOT: H256 = H256::repeat_byte(1);

    #[tokio::test]
    async fn concurrent_inserts_for_one_status_all_land() -> Result<()> {
        let pool = Arc::new(Pool::<Mainnet>::new());
        let data = payload_attestation_data(1);

        let handles = (0..16_u8)
            .map(|index| {
                let pool = Arc::clone(&pool);
                let message = message_for(data, index);

                tokio::spawn(async move {
                    pool.insert_payload_attestation_message(&message, usize::from(index))
                        .await
                })
            })
            .collect::<Vec<_>>();

        for result in try_join_all(handles).await? {
            result?;
        }

        let attestation = pool
            .payload_attestation(ROOT, PayloadStatus::Present)
            .await
            .expect("every insert has landed");

        assert_eq!(attestation.aggregation_bits.count_ones(), 16);
        assert!(pool.seen(ROOT, 15).await);
        assert!(!pool.seen(ROOT, 16).await);

        Ok(())
    }

    #[tokio::test]
    async fn on_slot_keeps_the_previous_slot_and_discards_older_ones() -> Result<()> {
        let pool = Pool::<Mainnet>::new();
        let data = payload_attestation_data(1);

        pool.insert_payload_attestation_message(&message_for(data, 5), 5)
            .await?;

        pool.on_slot(2).await;

        assert!(
            pool.payload_attestation(ROOT, PayloadStatus::Present)
                .await
                .is_some(),
            "aggregates for the previous slot are still candidates for inclusion",
        );

        pool.on_slot(3).await;

        assert_eq!(
            pool.payload_attestation(ROOT, PayloadStatus::Present).await,
            None,
        );
        assert!(!pool.seen(ROOT, 5).await);

        Ok(())
    }

    #[tokio::test]
    async fn on_slot_does_not_overflow_at_slot_bounds() -> Result<()> {
        let pool = Pool::<Mainnet>::new();
        let data = payload_attestation_data(Slot::MAX);

        pool.insert_payload_attestation_message(&message_for(data, 5), 5)
            .await?;

        pool.on_slot(Slot::MAX).await;
        pool.on_slot(0).await;

        assert!(
            pool.payload_attestation(ROOT, PayloadStatus::Present)
                .await
                .is_some(),
            "neither slot transition is far enough ahead to discard the aggregate",
        );

        Ok(())
    }

    #[tokio::test]
    async fn best_payload_attestation_prefers_more_contributors() -> Result<()> {
        let pool = Pool::<Mainnet>::new();

        let mut withheld = payload_attestation_data(1);
        withheld.payload_status = PayloadStatus::Withheld;

        pool.insert_payload_attestation_message(&message_for(withheld, 17), 17)
            .await?;

        let present = payload_attestation_data(1);

        pool.insert_payload_attestation_message(&message_for(present, 5), 5)
            .await?;
        pool.insert_payload_attestation_message(&message_for(present, 7), 7)
            .await?;

        let best = pool
            .best_payload_attestation(ROOT)
            .await
            .expect("aggregates are present");

        assert_eq!(best.data.payload_status, PayloadStatus::Present);

        Ok(())
    }

    fn payload_attestation_data(slot: Slot) -> PayloadAttestationData {
        PayloadAttestationData {
            beacon_block_root: ROOT,
            slot,
            payload_status: PayloadStatus::Present,
        }
    }

    fn message_for(data: PayloadAttestationData, index: u8) -> PayloadAttestationMessage {
        let mut bytes = [0; 32];
        bytes[31] = index + 1;

        let secret_key = bytes
            .conv::<SecretKeyBytes>()
            .try_conv::<SecretKey>()
            .expect("bytes encode a valid secret key");

        PayloadAttestationMessage {
            validator_index: index.into(),
            data,
            signature: secret_key.sign("payload").into(),
        }
    }
}
