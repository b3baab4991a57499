//! Command implementations for smb

pub(crate) mod generate;
