//! IANA Definitions for DNS.
//!
//! This module contains types for the parameters defined in IANA registries
//! that appear in the header, question, and record wire format.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer with associated constants for all the
//! well-defined values. Since any integer may appear on the wire, a value
//! without a mnemonic is just as valid as one with it, and two values
//! compare equal whenever their integers do.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` convert from the mnemonics to the
//! values and back.
//!
//! Types also implement `parse()` and `compose()` functions for the wire
//! format.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here. This is mostly so we can have associated types like
//! `FromStrError` without having to resort to devilishly long names.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
