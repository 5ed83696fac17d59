use std::sync::Arc;

use types::{
    gloas::{
        containers::{PayloadAttestation, PayloadAttestationMessage},
        primitives::PayloadStatus,
    },
    phase0::primitives::{Slot, H256},
    preset::Preset,
};

use crate::{
    misc::PoolTask,
    pool::Pool,
    tasks::{HandleSlotTask, InsertPayloadAttestationTask},
};

/// Drives a [`Pool`] from the surrounding pipeline.
///
/// Inserts and slot transitions run as detached tasks so gossip validation
/// never waits on the pool lock; reads for block assembly stay direct.
pub struct Manager<P: Preset> {
    pool: Arc<Pool<P>>,
}

impl<P: Preset> Manager<P> {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pool: Arc::new(Pool::new()),
        })
    }

    pub fn on_slot(&self, slot: Slot) {
        self.spawn_detached(HandleSlotTask {
            pool: Arc::clone(&self.pool),
            slot,
        });
    }

    pub fn insert_payload_attestation(
        &self,
        message: Arc<PayloadAttestationMessage>,
        ptc_index: usize,
    ) {
        self.spawn_detached(InsertPayloadAttestationTask {
            pool: Arc::clone(&self.pool),
            message,
            ptc_index,
        });
    }

    pub async fn seen(&self, root: H256, ptc_index: usize) -> bool {
        self.pool.seen(root, ptc_index).await
    }

    pub async fn payload_attestation(
        &self,
        root: H256,
        payload_status: PayloadStatus,
    ) -> Option<PayloadAttestation<P>> {
        self.pool.payload_attestation(root, payload_status).await
    }

    pub async fn best_payload_attestation(&self, root: H256) -> Option<PayloadAttestation<P>> {
        self.pool.best_payload_attestation(root).await
    }

    fn spawn_detached<T: PoolTask>(&self, task: T) {
        drop(tokio::spawn(task.run()));
    }
}
