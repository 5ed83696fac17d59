use std::sync::Arc;

use anyhow::Result;
use log::warn;
use types::{
    gloas::containers::PayloadAttestationMessage, phase0::primitives::Slot, preset::Preset,
};

use crate::{misc::PoolTask, pool::Pool};

pub struct HandleSlotTask<P: Preset> {
    pub pool: Arc<Pool<P>>,
    pub slot: Slot,
}

impl<P: Preset> PoolTask for HandleSlotTask<P> {
    type Output = ();

    async fn run(self) -> Result<Self::Output> {
        let Self { pool, slot } = self;

        pool.on_slot(slot).await;

        Ok(())
    }
}

pub struct InsertPayloadAttestationTask<P: Preset> {
    pub pool: Arc<Pool<P>>,
    pub message: Arc<PayloadAttestationMessage>,
    pub ptc_index: usize,
}

impl<P: Preset> PoolTask for InsertPayloadAttestationTask<P> {
    type Output = ();

    async fn run(self) -> Result<Self::Output> {
        let Self {
            pool,
            message,
            ptc_index,
        } = self;

        if let Err(error) = pool
            .insert_payload_attestation_message(&message, ptc_index)
            .await
        {
            warn!(
                "failed to aggregate payload attestation message from validator {}: {error}",
                message.validator_index,
            );
        }

        Ok(())
    }
}
