pub use primitive_types::H256;

pub type Epoch = u64;
pub type Slot = u64;
pub type ValidatorIndex = u64;
