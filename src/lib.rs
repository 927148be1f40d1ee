//! Decoding and encoding of DNS messages.
//!
//! This crate turns the raw octets of a DNS message as received in a
//! datagram into an owned [`Message`] value and turns such a value back
//! into octets. The wire format is the one defined in section 4 of
//! [RFC 1035]: a twelve octet header followed by the question, answer,
//! authority, and additional sections.
//!
//! The crate knows nothing about transports. A listener receives a
//! datagram, hands the octets to [`decode`], and may build a reply which it
//! turns back into octets via [`encode`].
//!
//! ```
//! use core::str::FromStr;
//! use dns_datagram::base::{Dname, Header, Message, Question, Rtype};
//!
//! let mut msg = Message::new(Header::new());
//! msg.push_question(Question::new_in(
//!     Dname::from_str("www.example.com").unwrap(),
//!     Rtype::A,
//! )).unwrap();
//!
//! let octets = dns_datagram::encode(&msg);
//! assert_eq!(dns_datagram::decode(&octets).unwrap(), msg);
//! ```
//!
//! Decoding never panics on bad input. When it fails, the returned
//! [`DecodeError`] carries both the reason and an *error message*: a reply
//! with empty sections and a response code describing the failure that a
//! server can send back instead of silently dropping the request.
//!
//! # Modules
//!
//! * [base] contains the message, its header, questions, records, domain
//!   names, and the IANA code types,
//! * [rdata] contains the record data types.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serialization and deserialization of all data types
//!   via [serde](https://serde.rs/).
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [`Message`]: base::Message
//! [`DecodeError`]: base::message::DecodeError

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod rdata;

use self::base::message::DecodeError;
use self::base::Message;

/// Decodes a complete DNS message from its wire format.
///
/// This is a shortcut for [`Message::from_octets`].
pub fn decode(octets: &[u8]) -> Result<Message, DecodeError> {
    Message::from_octets(octets)
}

/// Encodes a DNS message into its wire format.
///
/// Domain names are always written uncompressed. This is a shortcut for
/// [`Message::to_vec`].
pub fn encode(msg: &Message) -> std::vec::Vec<u8> {
    msg.to_vec()
}
