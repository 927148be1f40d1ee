//! Resource record data.
//!
//! Each resource record type has its own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! record types live in the top-level [rdata][crate::rdata] module.
//!
//! Any type that represents record data implements [`RecordData`]. If it
//! can be added to a message, it also implements [`ComposeRecordData`].
//!
//! The module also provides a type, [`UnknownRecordData`], that is used for
//! all record types whose content isn’t interpreted.

use super::iana::Rtype;
use super::wire::{Compose, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::vec::Vec;

//----------- RecordData -----------------------------------------------------

/// A type that represents record data.
///
/// The type needs to be able to provide the record type of a record with a
/// value’s data via the [`rtype`][Self::rtype] method.
pub trait RecordData {
    /// Returns the record type associated with this record data instance.
    ///
    /// This is a method rather than an associated function to allow one
    /// type to be used for several real record types.
    fn rtype(&self) -> Rtype;
}

impl<'a, T: RecordData> RecordData for &'a T {
    fn rtype(&self) -> Rtype {
        (*self).rtype()
    }
}

//----------- ComposeRecordData ----------------------------------------------

/// A type of record data that can be composed.
///
/// Since names in record data are never compressed, the length of the
/// record data is always known up front.
pub trait ComposeRecordData: RecordData {
    /// Returns the length of the wire format of the record data.
    fn rdlen(&self) -> u16;

    /// Appends the wire format of the record data into `target`.
    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;

    /// Appends the record data prefixed with its length.
    fn compose_len_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rdlen().compose(target)?;
        self.compose_rdata(target)
    }
}

impl<'a, T: ComposeRecordData> ComposeRecordData for &'a T {
    fn rdlen(&self) -> u16 {
        (*self).rdlen()
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose_rdata(target)
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// A type for any type of record data.
///
/// This type accepts any record type and stores the plain, unparsed record
/// data as an octets vec.
///
/// Because some record types allow compressed domain names in their record
/// data, data of these types may not make sense when moved into a different
/// message. [RFC 3597] limits the types for which compressed names are
/// allowed in the record data to those defined in [RFC 1035] itself.
///
/// Record types the crate interprets, currently only A, can’t be used with
/// this type. Their data always lives in its own record data type.
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates generic record data from an octets vec containing the data.
    ///
    /// Fails if `rtype` is a type with its own record data type or if the
    /// data is longer than 65535 octets.
    pub fn from_octets(
        rtype: Rtype,
        data: Vec<u8>,
    ) -> Result<Self, UnknownDataError> {
        if Self::is_interpreted(rtype) {
            Err(UnknownDataError::InterpretedType(rtype))
        } else if data.len() > 0xFFFF {
            Err(UnknownDataError::LongRecordData)
        } else {
            Ok(UnknownRecordData { rtype, data })
        }
    }

    /// Returns whether records of `rtype` have their own data type.
    fn is_interpreted(rtype: Rtype) -> bool {
        rtype == Rtype::A
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Converts the value into the record data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Takes `rdlen` octets of record data of type `rtype` from the parser.
    ///
    /// The caller makes sure `rtype` isn’t an interpreted type.
    pub(crate) fn parse<Octs: AsRef<[u8]> + ?Sized>(
        rtype: Rtype,
        rdlen: u16,
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        let mut data = vec![0; usize::from(rdlen)];
        parser.parse_buf(&mut data)?;
        Ok(UnknownRecordData { rtype, data })
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for UnknownRecordData {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

impl ComposeRecordData for UnknownRecordData {
    fn rdlen(&self) -> u16 {
        // Construction makes sure the data fits.
        self.data.len() as u16
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.data)
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnknownRecordData {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "UnknownRecordData")]
        struct Fields {
            rtype: Rtype,
            data: Vec<u8>,
        }

        let fields = Fields::deserialize(deserializer)?;
        UnknownRecordData::from_octets(fields.rtype, fields.data)
            .map_err(serde::de::Error::custom)
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in &self.data {
            write!(f, " {:02x}", *ch)?
        }
        Ok(())
    }
}

//--- Debug

impl fmt::Debug for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnknownRecordData({}, ", self.rtype)?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ UnknownDataError ----------------------------------------------

/// Generic record data could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnknownDataError {
    /// The record type has its own record data type.
    InterpretedType(Rtype),

    /// The octets sequence to be used for record data is too long.
    LongRecordData,
}

impl fmt::Display for UnknownDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UnknownDataError::InterpretedType(rtype) => {
                write!(f, "{} record data can’t be generic", rtype)
            }
            UnknownDataError::LongRecordData => {
                f.write_str("record data too long")
            }
        }
    }
}

impl std::error::Error for UnknownDataError {}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use core::fmt::Debug;
    use octseq::builder::infallible;
    use std::string::ToString;

    /// Check that `rdlen` produces the correct length.
    pub fn test_rdlen<R: ComposeRecordData>(data: R) {
        let mut buf = Vec::new();
        infallible(data.compose_rdata(&mut buf));
        assert_eq!(buf.len(), usize::from(data.rdlen()));
    }

    /// Check that composing and parsing are reverse operations.
    pub fn test_compose_parse<In, F, Out>(data: &In, parse: F)
    where
        In: ComposeRecordData + PartialEq<Out> + Debug,
        F: FnOnce(&mut Parser<[u8]>) -> Result<Out, ParseError>,
        Out: Debug,
    {
        let mut buf = Vec::new();
        infallible(data.compose_rdata(&mut buf));
        let mut parser = Parser::from_ref(buf.as_slice());
        let parsed = (parse)(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(*data, parsed);
    }

    #[test]
    fn unknown_compose_parse() {
        let rdata =
            UnknownRecordData::from_octets(Rtype::TXT, b"\x03foo".to_vec())
                .unwrap();
        test_rdlen(&rdata);
        test_compose_parse(&rdata, |parser| {
            UnknownRecordData::parse(Rtype::TXT, 4, parser)
        });
    }

    #[test]
    fn unknown_parse_short() {
        let mut parser = Parser::from_ref(b"\x01\x02".as_ref());
        assert_eq!(
            UnknownRecordData::parse(Rtype::NULL, 3, &mut parser),
            Err(ParseError::BufferTooShort)
        );
    }

    #[test]
    fn unknown_too_long() {
        assert!(
            UnknownRecordData::from_octets(Rtype::NULL, vec![0; 0x10000])
                .is_err()
        );
        assert!(
            UnknownRecordData::from_octets(Rtype::NULL, vec![0; 0xFFFF])
                .is_ok()
        );
    }

    #[test]
    fn unknown_rejects_a() {
        assert_eq!(
            UnknownRecordData::from_octets(Rtype::A, vec![1, 2, 3]),
            Err(UnknownDataError::InterpretedType(Rtype::A))
        );
        assert_eq!(
            UnknownRecordData::from_octets(Rtype::A, vec![192, 0, 2, 1]),
            Err(UnknownDataError::InterpretedType(Rtype::A))
        );
        assert_eq!(
            UnknownRecordData::from_octets(Rtype::NULL, vec![0; 0x10000]),
            Err(UnknownDataError::LongRecordData)
        );
    }

    #[test]
    fn unknown_display() {
        let rdata =
            UnknownRecordData::from_octets(Rtype::NULL, vec![0xde, 0xad])
                .unwrap();
        assert_eq!(rdata.to_string(), "\\# 2 de ad");
        let empty =
            UnknownRecordData::from_octets(Rtype::NULL, Vec::new()).unwrap();
        assert_eq!(empty.to_string(), "\\# 0");
    }
}
