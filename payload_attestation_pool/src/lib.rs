pub use crate::{
    cache::PayloadAttestationCache, manager::Manager, misc::PoolTask, pool::Pool,
};

mod cache;
mod manager;
mod misc;
mod pool;
mod tasks;
