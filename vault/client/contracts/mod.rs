//! Typed wrappers around the contracts the client talks to.
//!
//! Every message is encoded as its 4-byte selector followed by the SCALE-encoded arguments.
//! The `*_call` builders exist so that the same messages can be batched into a multicall.

pub mod cake_vault;
pub mod ifo;
pub mod masterchef;
pub mod pottery;
pub mod psp22;
