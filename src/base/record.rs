//! Resource Records.
//!
//! This module defines types related to DNS resource records. The most
//! complete type is [`Record`] which contains a complete record.
//! [`RecordHeader`] contains the data from a record’s header, the first
//! couple of octets common to all records.

use super::iana::{Class, Rtype};
use super::name::Dname;
use super::rdata::{ComposeRecordData, RecordData as _};
use super::wire::{Compose, Parse, ParseError};
use crate::rdata::RecordData;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::vec::Vec;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. The domain name is called the *owner* of the record.
///
/// The record type describes the kind of data the record holds, such as IP
/// addresses. The class describes which sort of network the information is
/// for. In practice, the only relevant class is IN, the Internet.
///
/// The payload of a resource record is its data. Its purpose, meaning, and
/// format is determined by the record type. The record type is not kept
/// separately but taken from the [`RecordData`] value, so the two always
/// agree.
///
/// There is one more piece of data: the TTL or time to live. It says how
/// long, in seconds, a record may be cached. It is kept as the signed
/// value RFC 1035 describes it as.
///
/// Finally, the record keeps the length of its data as it was found in
/// the message. For A records, this may differ from the four octets
/// actually taken. When composing, the length is always recalculated from
/// the data.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner of the record.
    owner: Dname,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: i32,

    /// The record data length given in the message.
    rdlen: u16,

    /// The record data. The value also specifies the record’s type.
    data: RecordData,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    pub fn new(
        owner: Dname,
        class: Class,
        ttl: i32,
        data: impl Into<RecordData>,
    ) -> Self {
        let data = data.into();
        Record {
            owner,
            class,
            ttl,
            rdlen: data.rdlen(),
            data,
        }
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &Dname {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the record class.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Sets the record’s class.
    pub fn set_class(&mut self, class: Class) {
        self.class = class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    /// Sets the record’s time-to-live.
    pub fn set_ttl(&mut self, ttl: i32) {
        self.ttl = ttl
    }

    /// Returns the record data length.
    ///
    /// For a parsed record, this is the value found in the message.
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }

    /// Trades the record for its owner name and data.
    pub fn into_owner_and_data(self) -> (Dname, RecordData) {
        (self.owner, self.data)
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Takes a record from the beginning of the parser.
    ///
    /// The parser is left at the end of the record as given by the record
    /// data length, whatever the record data itself took.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        RecordHeader::parse(parser)?.parse_into_record(parser)
    }

    /// Takes `count` records from the beginning of the parser.
    ///
    /// The first record that fails to parse ends the whole section.
    pub fn parse_section<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
        count: u16,
    ) -> Result<Vec<Self>, ParseError> {
        // A record takes at least eleven octets, which limits how much
        // can be allocated up front for a bogus count.
        let mut res = Vec::with_capacity(
            usize::from(count).min(parser.remaining() / 11),
        );
        for _ in 0..count {
            res.push(Self::parse(parser)?);
        }
        Ok(res)
    }

    /// Appends the wire format of the record.
    ///
    /// The owner is never compressed and the record data length is
    /// calculated from the record data.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.owner.compose(target)?;
        self.rtype().compose(target)?;
        self.class.compose(target)?;
        self.ttl.compose(target)?;
        self.data.compose_len_rdata(target)
    }
}

//--- Display and Debug

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Record")
            .field("owner", &self.owner)
            .field("class", &self.class)
            .field("ttl", &self.ttl)
            .field("rdlen", &self.rdlen)
            .field("data", &self.data)
            .finish()
    }
}

//------------ RecordHeader --------------------------------------------------

/// The header of a resource record.
///
/// This type encapsulates the common header of a resource record. It
/// consists of the owner, record type, class, TTL, and the length of the
/// record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RecordHeader {
    owner: Dname,
    rtype: Rtype,
    class: Class,
    ttl: i32,
    rdlen: u16,
}

impl RecordHeader {
    /// Returns a reference to the owner of the record.
    pub fn owner(&self) -> &Dname {
        &self.owner
    }

    /// Returns the record type of the record.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL of the record.
    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    /// Returns the data length of the record.
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }

    /// Takes a record header from the beginning of the parser.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        Ok(RecordHeader {
            owner: Dname::parse(parser)?,
            rtype: Rtype::parse(parser)?,
            class: Class::parse(parser)?,
            ttl: i32::parse(parser)?,
            rdlen: u16::parse(parser)?,
        })
    }

    /// Parses the record data and combines it with the header.
    ///
    /// The parser needs to be positioned right after the header. It is
    /// left `rdlen` octets from there. If that is beyond the end of the
    /// message, the record is rejected even if its data was complete.
    pub fn parse_into_record<Octs: AsRef<[u8]> + ?Sized>(
        self,
        parser: &mut Parser<Octs>,
    ) -> Result<Record, ParseError> {
        let end = parser.pos() + usize::from(self.rdlen);
        let data = RecordData::parse(self.rtype, self.rdlen, parser)?;
        parser.seek(end)?;
        Ok(Record {
            owner: self.owner,
            class: self.class,
            ttl: self.ttl,
            rdlen: self.rdlen,
            data,
        })
    }
}

//============ Testing =======================================================
