use core::{fmt::Debug, hash::Hash};

use bitfields::BitVectorBits;
use typenum::{U2, U512};

/// Compile-time configuration variables.
///
/// See [presets in `consensus-specs`](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets).
pub trait Preset: Copy + Eq + Ord + Hash + Default + Debug + Send + Sync + 'static {
    /// Number of members in the Payload Timeliness Committee for one slot.
    type PtcSize: BitVectorBits + Eq + Debug + Send + Sync;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Mainnet;

impl Preset for Mainnet {
    type PtcSize = U512;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Minimal;

impl Preset for Minimal {
    type PtcSize = U2;
}
