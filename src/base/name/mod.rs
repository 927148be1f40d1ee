//! Domain names.
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. In their wire-format representation labels are prefixed
//! with an octet containing the number of octets in the label. The last
//! label is always the empty *root label*.
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored elsewhere in the message. The [`Dname`] type resolves
//! these pointers while parsing and keeps the complete, uncompressed name.
//! Since pointers are attacker controlled, parsing only follows pointers
//! that point backwards in the message and gives up after a fixed number of
//! them.

pub use self::dname::{Dname, DnameError, LabelIter};
pub use self::label::LabelTypeError;

pub(crate) use self::label::LabelType;

mod dname;
mod label;
