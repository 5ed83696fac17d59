/// [`BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_`](https://github.com/ethereum/consensus-specs/blob/dc14b79a521fea5b7076c5bf4eb6b21d3b2ca316/specs/phase0/beacon-chain.md#bls-signatures)
pub const DOMAIN_SEPARATION_TAG: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";
