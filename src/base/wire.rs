//! Creating and consuming data in wire format.

use super::iana::Rcode;
use super::name::LabelTypeError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::{Parser, ShortInput};
use std::net::Ipv4Addr;

//------------ Compose -------------------------------------------------------

/// A type that can be appended to an octets builder in wire format.
pub trait Compose {
    /// The length of the wire format if it is the same for all values.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(i32);
compose_to_be_bytes!(u32);

impl Compose for Ipv4Addr {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a parser.
///
/// The trait is a companion to [`Parser`]: it allows a type to use a
/// parser to create a value of itself. The parser always works on the
/// complete message so that compression pointers can be followed.
pub trait Parse<'a, Octs: ?Sized>: Sized {
    /// Extracts a value from the beginning of `parser`.
    ///
    /// If parsing fails and an error is returned, the parser’s position
    /// should be considered to be undefined.
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError>;
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u8 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u16 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for i32 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_i32_be().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u32 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for Ipv4Addr {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 4];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
///
/// Each variant maps onto the response code a server should use when it
/// has to refuse a message it could not parse. See [`rcode`][Self::rcode].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A domain name reached 255 octets.
    ///
    /// The length counts the label content plus one length octet per label
    /// across all compression pointers followed.
    NameTooLong,

    /// The message ended in the middle of a domain name.
    NameTruncated,

    /// A fixed-size field or record data went beyond the end of the message.
    BufferTooShort,

    /// A label used one of the unsupported label types.
    BadLabelType(LabelTypeError),

    /// A compression pointer did not point backwards or too many pointers
    /// were used in a single name.
    ExcessiveCompression,
}

impl ParseError {
    /// Returns the response code for a reply to an unparseable message.
    ///
    /// An overly long name is a format error, everything else is reported
    /// as a server failure.
    pub fn rcode(self) -> Rcode {
        match self {
            ParseError::NameTooLong => Rcode::FORMERR,
            _ => Rcode::SERVFAIL,
        }
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::BufferTooShort
    }
}

impl From<LabelTypeError> for ParseError {
    fn from(err: LabelTypeError) -> Self {
        ParseError::BadLabelType(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::NameTooLong => {
                f.write_str("domain name exceeds 255 octets")
            }
            ParseError::NameTruncated => {
                f.write_str("message ended before the end of a domain name")
            }
            ParseError::BufferTooShort => {
                f.write_str("unexpected end of input")
            }
            ParseError::BadLabelType(ref err) => err.fmt(f),
            ParseError::ExcessiveCompression => {
                f.write_str("invalid compression pointer")
            }
        }
    }
}

impl std::error::Error for ParseError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;
    use std::vec::Vec;

    #[test]
    fn compose_big_endian() {
        let mut buf = Vec::new();
        infallible(0x1234u16.compose(&mut buf));
        infallible((-2i32).compose(&mut buf));
        infallible(Ipv4Addr::new(192, 0, 2, 1).compose(&mut buf));
        assert_eq!(
            buf,
            [0x12, 0x34, 0xff, 0xff, 0xff, 0xfe, 192, 0, 2, 1]
        );
        assert_eq!(u16::COMPOSE_LEN, 2);
        assert_eq!(i32::COMPOSE_LEN, 4);
    }

    #[test]
    fn parse_big_endian() {
        let octets = [0x12, 0x34, 0xff, 0xff, 0xff, 0xfe, 7];
        let mut parser = Parser::from_ref(octets.as_ref());
        assert_eq!(u16::parse(&mut parser), Ok(0x1234));
        assert_eq!(i32::parse(&mut parser), Ok(-2));
        assert_eq!(u16::parse(&mut parser), Err(ParseError::BufferTooShort));
    }

    #[test]
    fn rcode_mapping() {
        assert_eq!(ParseError::NameTooLong.rcode(), Rcode::FORMERR);
        assert_eq!(ParseError::NameTruncated.rcode(), Rcode::SERVFAIL);
        assert_eq!(ParseError::BufferTooShort.rcode(), Rcode::SERVFAIL);
        assert_eq!(
            ParseError::ExcessiveCompression.rcode(),
            Rcode::SERVFAIL
        );
        assert_eq!(
            ParseError::BadLabelType(LabelTypeError::Undefined).rcode(),
            Rcode::SERVFAIL
        );
    }
}
