//! Basics.
//!
//! This module provides types for working with DNS messages in their wire
//! format. The types allow creating such messages from scratch and
//! processing received ones.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages from other forms of representation conversion, we
//! use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Parsing happens on a buffer holding a complete DNS message. This is a
//! reasonable choice given the limited size of DNS messages and the need to
//! follow compressed domain names to other parts of the message. Parsing is
//! done with the [`Parser`][octseq::parse::Parser] from the `octseq` crate,
//! composing appends to any [`OctetsBuilder`][octseq::builder::OctetsBuilder].
//!
//! Unless you need to look at individual parts of a message, the
//! [`Message`] type is all you need. [`Message::from_octets`] takes a
//! complete message apart, [`Message::compose`] puts it back together.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data. Because they often
//! come with a number of support types, they are arranged in submodules:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the various codes assigned by IANA,
//! * [name] for domain names,
//! * [question] for questions,
//! * [record] for DNS resource records, and
//! * [rdata] for the basics of record data.
//!
//! The most important types of these modules are re-exported here.

pub use self::header::{Flags, Header, HeaderCounts};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::{DecodeError, Message, SectionOverflow};
pub use self::name::Dname;
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::ParseError;

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod rdata;
pub mod record;
pub mod wire;

mod dig_printer;
mod serde;
