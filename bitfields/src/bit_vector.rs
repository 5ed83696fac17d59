use core::{
    fmt::{Debug, Formatter, Result as FmtResult},
    iter::FusedIterator,
    marker::PhantomData,
    ops::Index,
};

use thiserror::Error;

use bit_field::BitArray as _;
use bitvec::{order::Lsb0, view::BitView as _};
use derivative::Derivative;
use generic_array::GenericArray;
use serde::{
    de::{Error as _, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use typenum::Unsigned as _;

use crate::type_level::BitVectorBits;

#[derive(Debug, Error)]
#[error("bit vector too long (capacity: {capacity}, highest set bit: {highest})")]
pub struct TooLongError {
    capacity: usize,
    highest: usize,
}

/// A bit vector with a type-level capacity.
///
/// Backed by a byte array to keep it `Copy`. `bitvec::array::BitArray` would
/// be a natural fit, but it requires a length for the primitive array backing
/// it, and type parameters cannot be used in `const` expressions yet.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    Default(bound = "")
)]
pub struct BitVector<N: BitVectorBits> {
    bytes: GenericArray<u8, N::Bytes>,
}

// Indices could be checked statically like in `sized-vec` and `type-vec`, but that would only
// add useless boilerplate.
impl<N: BitVectorBits> Index<usize> for BitVector<N> {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        let bit = self.get(index).unwrap_or_else(|| {
            panic!("index out of bounds (length: {}, index: {index})", N::USIZE)
        });

        if bit {
            &true
        } else {
            &false
        }
    }
}

impl<N: BitVectorBits> IntoIterator for BitVector<N> {
    type Item = bool;
    type IntoIter = Bits<N>;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            bit_vector: self,
            index: 0,
        }
    }
}

// This sort of code arguably belongs in an impl of `core::fmt::Binary` rather than `Debug`,
// but we don't ever format bit vectors directly and we need a `Debug` impl anyway.
impl<N: BitVectorBits> Debug for BitVector<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("0b")?;

        for bit in *self {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl<N: BitVectorBits> Serialize for BitVector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(const_hex::encode_prefixed(self.bytes.as_slice()).as_str())
        } else {
            serializer.serialize_bytes(self.bytes.as_slice())
        }
    }
}

impl<'de, N: BitVectorBits> Deserialize<'de> for BitVector<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BytesVisitor<N>(PhantomData<N>);

        impl<N: BitVectorBits> Visitor<'_> for BytesVisitor<N> {
            type Value = BitVector<N>;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("a string of hexadecimal digits prefixed with 0x")
            }

            fn visit_str<E: serde::de::Error>(self, string: &str) -> Result<Self::Value, E> {
                let digits = string
                    .strip_prefix("0x")
                    .ok_or_else(|| E::custom("string does not have hexadecimal prefix"))?;

                let mut bytes = GenericArray::default();
                const_hex::decode_to_slice(digits, &mut bytes).map_err(E::custom)?;

                BitVector::from_bytes(bytes).map_err(E::custom)
            }

            fn visit_bytes<E: serde::de::Error>(self, bytes: &[u8]) -> Result<Self::Value, E> {
                if bytes.len() != N::Bytes::USIZE {
                    return Err(E::custom(format!(
                        "expected {} bytes, found {}",
                        N::Bytes::USIZE,
                        bytes.len(),
                    )));
                }

                BitVector::from_bytes(GenericArray::clone_from_slice(bytes)).map_err(E::custom)
            }
        }

        let visitor = BytesVisitor(PhantomData);

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(visitor)
        } else {
            deserializer.deserialize_bytes(visitor)
        }
    }
}

impl<N: BitVectorBits> BitVector<N> {
    /// Constructs a `BitVector` from raw bytes, rejecting set bits past the capacity.
    pub fn from_bytes(bytes: GenericArray<u8, N::Bytes>) -> Result<Self, TooLongError> {
        match bytes.view_bits::<Lsb0>().last_one() {
            Some(highest) if highest >= N::USIZE => Err(TooLongError {
                capacity: N::USIZE,
                highest,
            }),
            _ => Ok(Self { bytes }),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        (index < N::USIZE).then(|| self.bytes.get_bit(index))
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.bytes.into_iter().any(|byte| byte > 0)
    }

    #[must_use]
    pub fn none(&self) -> bool {
        self.bytes.into_iter().all(|byte| byte == 0)
    }

    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.view_bits::<Lsb0>().count_ones()
    }

    // Indices could be checked statically like in `sized-vec` and `type-vec`, but that would only
    // add useless boilerplate.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < N::USIZE);

        self.bytes.set_bit(index, value)
    }

    /// Positions of set bits in ascending order.
    pub fn bit_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..N::USIZE).filter(|index| self.bytes.get_bit(*index))
    }
}

pub struct Bits<N: BitVectorBits> {
    bit_vector: BitVector<N>,
    index: usize,
}

impl<N: BitVectorBits> Iterator for Bits<N> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        (self.index < N::USIZE).then(|| {
            let bit = self.bit_vector.bytes.get_bit(self.index);
            self.index += 1;
            bit
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = N::USIZE - self.index;
        (length, Some(length))
    }
}

impl<N: BitVectorBits> ExactSizeIterator for Bits<N> {}

impl<N: BitVectorBits> FusedIterator for Bits<N> {}
