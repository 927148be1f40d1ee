//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//!
//! The header is split into the message ID, the [`Flags`] which pack the
//! one-bit flags together with opcode and response code into sixteen bits,
//! and the [`HeaderCounts`] with the four section counts. The [`Header`]
//! type combines all three.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Header --------------------------------------------------------

/// The header of a DNS message.
///
/// The data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    QDCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ANCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    NSCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ARCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// The counts can only be changed from within the crate. A
/// [`Message`][super::Message] keeps them equal to the lengths of its
/// sections.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    id: u16,
    flags: Flags,
    counts: HeaderCounts,
}

/// # Creation and Conversion
///
impl Header {
    /// The length of the header in its wire format.
    pub const LEN: usize = 12;

    /// Creates a new header.
    ///
    /// The new header has all fields as either zero or false. Thus, the
    /// opcode will be [`Opcode::QUERY`] and the response code will be
    /// [`Rcode::NOERROR`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new header with the given ID and flags and zero counts.
    pub fn with_flags(id: u16, flags: Flags) -> Self {
        Header {
            id,
            flags,
            counts: HeaderCounts::default(),
        }
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    pub fn id(self) -> u16 {
        self.id
    }

    /// Sets the value of the ID field.
    pub fn set_id(&mut self, value: u16) {
        self.id = value
    }

    /// Returns the flags, including opcode and response code.
    pub fn flags(self) -> Flags {
        self.flags
    }

    /// Sets the flags, including opcode and response code.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags
    }

    /// Returns the value of the Opcode field.
    pub fn opcode(self) -> Opcode {
        self.flags.opcode
    }

    /// Returns the value of the RCODE field.
    pub fn rcode(self) -> Rcode {
        self.flags.rcode
    }

    /// Sets the value of the RCODE field.
    pub fn set_rcode(&mut self, rcode: Rcode) {
        self.flags.rcode = rcode
    }

    /// Returns the section counts.
    pub fn counts(self) -> HeaderCounts {
        self.counts
    }

    pub(crate) fn set_counts(&mut self, counts: HeaderCounts) {
        self.counts = counts
    }

    pub(crate) fn counts_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }

    /// Returns the number of entries in the question section.
    pub fn qdcount(self) -> u16 {
        self.counts.qdcount
    }

    /// Returns the number of records in the answer section.
    pub fn ancount(self) -> u16 {
        self.counts.ancount
    }

    /// Returns the number of records in the authority section.
    pub fn nscount(self) -> u16 {
        self.counts.nscount
    }

    /// Returns the number of records in the additional section.
    pub fn arcount(self) -> u16 {
        self.counts.arcount
    }
}

/// # Parsing and Composing
///
impl Header {
    /// Parses the header from the beginning of a message.
    ///
    /// Fails with [`ParseError::BufferTooShort`] if fewer than twelve octets
    /// are left in the parser.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        if parser.remaining() < Self::LEN {
            return Err(ParseError::BufferTooShort);
        }
        Ok(Header {
            id: u16::parse(parser)?,
            flags: Flags::from_int(u16::parse(parser)?),
            counts: HeaderCounts::parse(parser)?,
        })
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.id.compose(target)?;
        self.flags.to_int().compose(target)?;
        self.counts.compose(target)
    }
}

//--- Display

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            self.opcode(),
            self.rcode(),
            self.id
        )?;
        write!(f, ";; flags: {}", self.flags)?;
        if self.flags.z != 0 {
            write!(f, " Z={}", self.flags.z)?;
        }
        write!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.counts.qdcount,
            self.counts.ancount,
            self.counts.nscount,
            self.counts.arcount
        )
    }
}

//------------ Flags ---------------------------------------------------------

/// The second sixteen bits of the message header.
///
/// This type unpacks the flags word into its fields. [`from_int`] and
/// [`to_int`] are the only places that know about the bit positions, and
/// they are exact inverses: every one of the sixteen bits belongs to a
/// field, so `Flags::from_int(x).to_int() == x` for any `x`.
///
/// The opcode, Z, and response code fields can hold values that are too
/// big for their part of the word. Only their lower four, three, and four
/// bits, respectively, are composed.
///
/// [`from_int`]: Self::from_int
/// [`to_int`]: Self::to_int
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    pub qr: bool,

    /// The kind of query this message contains.
    pub opcode: Opcode,

    /// Using the `AA` bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name, ie., whether this
    /// response is an *authoritative answer.* The field has no meaning in a
    /// query.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available
    /// then fit into the message.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the
    /// name server to try and recursively gather a response if it doesn’t
    /// have the data available locally. The bit’s value is copied into the
    /// response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether
    /// the responding name server supports recursion. It has no meaning in
    /// a query.
    pub ra: bool,

    /// The three reserved bits.
    ///
    /// These should be zero but are kept as received.
    pub z: u8,

    /// The response code.
    pub rcode: Rcode,
}

impl Flags {
    const QR: u16 = 0x8000;
    const OPCODE_SHIFT: u16 = 11;
    const AA: u16 = 0x0400;
    const TC: u16 = 0x0200;
    const RD: u16 = 0x0100;
    const RA: u16 = 0x0080;
    const Z_SHIFT: u16 = 4;
    const Z_MASK: u16 = 0x0007;
    const NIBBLE_MASK: u16 = 0x000F;

    /// Creates new flags.
    ///
    /// All flags will be unset, opcode and response code are zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unpacks the flags from the second word of the header.
    pub fn from_int(value: u16) -> Self {
        Flags {
            qr: value & Self::QR != 0,
            opcode: Opcode::from_int(
                ((value >> Self::OPCODE_SHIFT) & Self::NIBBLE_MASK) as u8,
            ),
            aa: value & Self::AA != 0,
            tc: value & Self::TC != 0,
            rd: value & Self::RD != 0,
            ra: value & Self::RA != 0,
            z: ((value >> Self::Z_SHIFT) & Self::Z_MASK) as u8,
            rcode: Rcode::from_int((value & Self::NIBBLE_MASK) as u8),
        }
    }

    /// Packs the flags into the second word of the header.
    pub fn to_int(self) -> u16 {
        let mut res = 0;
        if self.qr {
            res |= Self::QR;
        }
        res |= (u16::from(self.opcode.to_int()) & Self::NIBBLE_MASK)
            << Self::OPCODE_SHIFT;
        if self.aa {
            res |= Self::AA;
        }
        if self.tc {
            res |= Self::TC;
        }
        if self.rd {
            res |= Self::RD;
        }
        if self.ra {
            res |= Self::RA;
        }
        res |= (u16::from(self.z) & Self::Z_MASK) << Self::Z_SHIFT;
        res | (u16::from(self.rcode.to_int()) & Self::NIBBLE_MASK)
    }
}

//--- Display

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message.
///
/// The counters are arranged in the same order as the sections themselves:
/// QDCOUNT for the question section, ANCOUNT for the answer section,
/// NSCOUNT for the authority section, and ARCOUNT for the additional section.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderCounts {
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl HeaderCounts {
    /// Creates a new value from the four counts in section order.
    pub fn new(qdcount: u16, ancount: u16, nscount: u16, arcount: u16) -> Self {
        HeaderCounts {
            qdcount,
            ancount,
            nscount,
            arcount,
        }
    }

    /// Returns the number of entries in the question section.
    pub fn qdcount(self) -> u16 {
        self.qdcount
    }

    /// Returns the number of records in the answer section.
    pub fn ancount(self) -> u16 {
        self.ancount
    }

    /// Returns the number of records in the authority section.
    pub fn nscount(self) -> u16 {
        self.nscount
    }

    /// Returns the number of records in the additional section.
    pub fn arcount(self) -> u16 {
        self.arcount
    }

    /// Returns whether all four counts are zero.
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }

    pub(crate) fn set_qdcount(&mut self, value: u16) {
        self.qdcount = value
    }

    pub(crate) fn set_ancount(&mut self, value: u16) {
        self.ancount = value
    }

    pub(crate) fn set_nscount(&mut self, value: u16) {
        self.nscount = value
    }

    pub(crate) fn set_arcount(&mut self, value: u16) {
        self.arcount = value
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        Ok(HeaderCounts {
            qdcount: u16::parse(parser)?,
            ancount: u16::parse(parser)?,
            nscount: u16::parse(parser)?,
            arcount: u16::parse(parser)?,
        })
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.qdcount.compose(target)?;
        self.ancount.compose(target)?;
        self.nscount.compose(target)?;
        self.arcount.compose(target)
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;
    use std::vec::Vec;

    macro_rules! test_field {
        ($get:ident, $field:ident, $default:expr, $($value:expr),*) => {
            $({
                let mut flags = Flags::new();
                assert_eq!(flags.$get, $default);
                flags.$field = $value;
                assert_eq!(Flags::from_int(flags.to_int()).$get, $value);
            })*
        }
    }

    #[test]
    fn flags_fields() {
        test_field!(qr, qr, false, true, false);
        test_field!(opcode, opcode, Opcode::QUERY, Opcode::NOTIFY);
        test_field!(aa, aa, false, true, false);
        test_field!(tc, tc, false, true, false);
        test_field!(rd, rd, false, true, false);
        test_field!(ra, ra, false, true, false);
        test_field!(z, z, 0, 5, 7, 0);
        test_field!(rcode, rcode, Rcode::NOERROR, Rcode::REFUSED);
    }

    #[test]
    fn flags_round_trip() {
        for value in 0..=u16::MAX {
            assert_eq!(Flags::from_int(value).to_int(), value);
        }
    }

    #[test]
    fn flags_bit_positions() {
        let flags = Flags::from_int(0b1_0101_1_0_1_0_011_1001);
        assert!(flags.qr);
        assert_eq!(flags.opcode, Opcode::from_int(5));
        assert!(flags.aa);
        assert!(!flags.tc);
        assert!(flags.rd);
        assert!(!flags.ra);
        assert_eq!(flags.z, 3);
        assert_eq!(flags.rcode, Rcode::from_int(9));
    }

    #[test]
    fn flags_masks_oversized_fields() {
        let flags = Flags {
            opcode: Opcode::from_int(0x1F),
            z: 0x0F,
            rcode: Rcode::from_int(0xF2),
            ..Default::default()
        };
        assert_eq!(flags.to_int(), 0x7872);
    }

    #[test]
    fn flags_display() {
        assert_eq!(format!("{}", Flags::new()), "");
        assert_eq!(format!("{}", Flags::from_int(0xFFFF)), "QR AA TC RD RA");
        let flags = Flags {
            rd: true,
            ra: true,
            ..Default::default()
        };
        assert_eq!(format!("{}", flags), "RD RA");
    }

    #[test]
    fn header_parse_compose() {
        let octets = [
            0x12, 0x34, 0x81, 0x80, 0, 1, 0, 2, 0, 3, 0, 4, 0xff,
        ];
        let mut parser = Parser::from_ref(octets.as_ref());
        let header = Header::parse(&mut parser).unwrap();
        assert_eq!(parser.pos(), Header::LEN);
        assert_eq!(header.id(), 0x1234);
        assert!(header.flags().qr);
        assert!(header.flags().rd);
        assert!(header.flags().ra);
        assert_eq!(header.rcode(), Rcode::NOERROR);
        assert_eq!(header.counts(), HeaderCounts::new(1, 2, 3, 4));

        let mut buf = Vec::new();
        infallible(header.compose(&mut buf));
        assert_eq!(buf, octets[..Header::LEN]);
    }

    #[test]
    fn short_header() {
        let octets = [0u8; 11];
        let mut parser = Parser::from_ref(octets.as_ref());
        assert_eq!(
            Header::parse(&mut parser),
            Err(ParseError::BufferTooShort)
        );
    }

    #[test]
    fn header_display() {
        let mut header = Header::with_flags(
            7,
            Flags {
                qr: true,
                rd: true,
                rcode: Rcode::NXDOMAIN,
                ..Default::default()
            },
        );
        header.set_counts(HeaderCounts::new(1, 0, 1, 0));
        assert_eq!(
            format!("{}", header),
            ";; ->>HEADER<<- opcode: QUERY, rcode: NXDOMAIN, id: 7\n\
             ;; flags: QR RD; QUERY: 1, ANSWER: 0, AUTHORITY: 1, \
             ADDITIONAL: 0"
        );
    }
}
