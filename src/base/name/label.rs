//! Label types and their wire format.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::super::wire::ParseError;
use core::fmt;
use octseq::parse::Parser;

//------------ LabelType -----------------------------------------------------

/// The type of a label as indicated by its first octet.
///
/// The top two bits of the first octet select the label type. `0b00` is a
/// normal label whose length is given by the remaining six bits. `0b11` is
/// a compression pointer whose remaining fourteen bits, together with the
/// next octet, give the position of the rest of the name in the message.
/// The other two types were never put to use and are rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LabelType {
    /// A normal label with its size in octets.
    Normal(usize),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// The maximum length of a normal label.
    pub const MAX_LEN: usize = 63;

    /// Attempts to take a label type from the beginning of `parser`.
    ///
    /// Running out of input, including in the middle of a pointer, is
    /// reported as [`ParseError::NameTruncated`].
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        let ltype = parser
            .parse_u8()
            .map_err(|_| ParseError::NameTruncated)?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype.into())),
            0xC0..=0xFF => {
                let res = parser
                    .parse_u8()
                    .map_err(|_| ParseError::NameTruncated)?;
                let res = usize::from(res) | (usize::from(ltype & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            0x40..=0x7F => Err(LabelTypeError::Extended(ltype).into()),
            _ => Err(LabelTypeError::Undefined.into()),
        }
    }
}

//============ Error Types ===================================================

//------------ LabelTypeError ------------------------------------------------

/// A bad label type was encountered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelTypeError {
    /// The label was of the undefined type `0b10`.
    Undefined,

    /// The label was of the extended label type given.
    ///
    /// The type value will be in the range `0x40` to `0x7F`, that is, it
    /// includes the original label type bits `0b01`.
    Extended(u8),
}

//--- Display and Error

impl fmt::Display for LabelTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LabelTypeError::Undefined => f.write_str("undefined label type"),
            LabelTypeError::Extended(value) => {
                write!(f, "unknown extended label 0x{:02x}", value)
            }
        }
    }
}

impl std::error::Error for LabelTypeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse(octets: &[u8]) -> Result<LabelType, ParseError> {
        LabelType::parse(&mut Parser::from_ref(octets))
    }

    #[test]
    fn label_types() {
        assert_eq!(parse(b"\x00"), Ok(LabelType::Normal(0)));
        assert_eq!(parse(b"\x3f"), Ok(LabelType::Normal(63)));
        assert_eq!(parse(b"\xc0\x04"), Ok(LabelType::Compressed(4)));
        assert_eq!(parse(b"\xff\xff"), Ok(LabelType::Compressed(0x3fff)));
        assert_eq!(
            parse(b"\x41"),
            Err(ParseError::BadLabelType(LabelTypeError::Extended(0x41)))
        );
        assert_eq!(
            parse(b"\x80"),
            Err(ParseError::BadLabelType(LabelTypeError::Undefined))
        );
    }

    #[test]
    fn truncated_label_type() {
        assert_eq!(parse(b""), Err(ParseError::NameTruncated));
        assert_eq!(parse(b"\xc0"), Err(ParseError::NameTruncated));
    }
}
