use core::{
    fmt::{Binary, Debug, Display, LowerExp, LowerHex, Octal, Pointer, UpperExp, UpperHex},
    ops::Deref,
};

use derive_more::{AsMut, AsRef, From};
use serde::Serialize;
use static_assertions::assert_not_impl_any;
use zeroize::{Zeroize, ZeroizeOnDrop};

// Unlike public keys and signatures, secret keys are not compressed.
pub const SIZE: usize = 32;

#[derive(Default, AsRef, AsMut, From, Zeroize, ZeroizeOnDrop)]
#[as_ref(forward)]
#[as_mut(forward)]
pub struct SecretKeyBytes {
    bytes: [u8; SIZE],
}

// Prevent `SecretKeyBytes` from implementing some traits to avoid leaking secret keys.
// This could also be done by wrapping it in `secrecy::Secret`.
assert_not_impl_any! {
    SecretKeyBytes:

    Clone,
    Copy,
    Deref,
    ToOwned,

    Debug,
    Binary,
    Display,
    LowerExp,
    LowerHex,
    Octal,
    Pointer,
    UpperExp,
    UpperHex,

    Serialize,
}
