pub use crate::{
    bit_vector::{BitVector, Bits, TooLongError},
    type_level::BitVectorBits,
};

mod bit_vector;
mod type_level;
