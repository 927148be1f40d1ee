//! Resource data implementations.
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement. They are grouped into submodules for the RFCs they are
//! defined in and re-exported at the top level here.
//!
//! The [`RecordData`] enum is what records carry. It dispatches on the
//! record type: A records are interpreted, the data of every other type
//! is kept as is in [`UnknownRecordData`].

pub mod rfc1035;

pub use self::rfc1035::A;
pub use crate::base::rdata::{UnknownDataError, UnknownRecordData};

use crate::base::iana::Rtype;
use crate::base::rdata::ComposeRecordData;
use crate::base::rdata::RecordData as _;
use crate::base::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ RecordData ----------------------------------------------------

/// The data of a resource record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    /// The IPv4 address of an A record.
    A(A),

    /// The raw data of any other record type.
    Unknown(UnknownRecordData),
}

impl RecordData {
    /// Takes the record data for a record of type `rtype` from the parser.
    ///
    /// A records always take exactly four octets no matter what `rdlen`
    /// says. All other types take exactly `rdlen` octets. Either way, the
    /// parser is left wherever the data ended. Moving it to the end of the
    /// record is left to the caller.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        rtype: Rtype,
        rdlen: u16,
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        if rtype == A::RTYPE {
            A::parse(parser).map(RecordData::A)
        } else {
            UnknownRecordData::parse(rtype, rdlen, parser)
                .map(RecordData::Unknown)
        }
    }
}

//--- From

impl From<A> for RecordData {
    fn from(data: A) -> Self {
        RecordData::A(data)
    }
}

impl From<UnknownRecordData> for RecordData {
    fn from(data: UnknownRecordData) -> Self {
        RecordData::Unknown(data)
    }
}

//--- RecordData and ComposeRecordData

impl crate::base::rdata::RecordData for RecordData {
    fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(ref data) => data.rtype(),
            RecordData::Unknown(ref data) => data.rtype(),
        }
    }
}

impl ComposeRecordData for RecordData {
    fn rdlen(&self) -> u16 {
        match *self {
            RecordData::A(ref data) => data.rdlen(),
            RecordData::Unknown(ref data) => data.rdlen(),
        }
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match *self {
            RecordData::A(ref data) => data.compose_rdata(target),
            RecordData::Unknown(ref data) => data.compose_rdata(target),
        }
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref data) => fmt::Display::fmt(data, f),
            RecordData::Unknown(ref data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Testing =======================================================
