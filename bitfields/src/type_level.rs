// This is the best we can do until feature `generic_const_exprs` is stabilized.

use core::ops::{Add, Shr};

use generic_array::ArrayLength;
use typenum::{op, Sum, Unsigned, U3, U7};

pub type BitsToBytes<N> = op!((N + U7) >> U3);

pub trait BitVectorBits: Unsigned {
    type Bytes: ArrayLength<u8, ArrayType: Copy>;
}

impl<N> BitVectorBits for N
where
    Self: Add<U7> + Unsigned,
    Sum<Self, U7>: Shr<U3>,
    BitsToBytes<Self>: ArrayLength<u8, ArrayType: Copy>,
{
    type Bytes = BitsToBytes<Self>;
}
