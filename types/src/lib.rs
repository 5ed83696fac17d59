pub mod preset;

pub mod phase0 {
    pub mod primitives;
}

pub mod gloas {
    pub mod consts;
    pub mod containers;
    pub mod primitives;
}
