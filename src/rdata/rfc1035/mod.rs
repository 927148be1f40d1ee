//! Record data from [RFC 1035]: initial record types.
//!
//! This RFC defines the initial set of record types. Of these, only the
//! A record is interpreted. All others are kept as unknown record data.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::a::A;

mod a;
