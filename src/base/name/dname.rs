//! Uncompressed, owned domain names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::super::wire::ParseError;
use super::label::LabelType;
use core::{fmt, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::vec::Vec;

//------------ Dname ---------------------------------------------------------

/// An owned domain name.
///
/// The name is kept in its uncompressed wire format: a sequence of labels,
/// each preceded by its length, ending in the empty root label. A name
/// taken from a message via [`parse`][Self::parse] has had all compression
/// pointers resolved, so composing it again always produces the
/// uncompressed form.
///
/// In text, a name is written as its labels separated by dots without a
/// trailing dot. Dots and backslashes inside a label are escaped with a
/// backslash, other octets that aren’t printable ASCII are written as a
/// backslash followed by three decimal digits. The root name is written as
/// a single dot.
///
/// Names compare equal if their octets are identical. No case folding
/// happens.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Dname {
    octets: Vec<u8>,
}

/// # Creation and Conversion
///
impl Dname {
    /// The maximum length of a name in wire format.
    pub const MAX_LEN: usize = 255;

    /// The maximum number of compression pointers followed for one name.
    ///
    /// A name has at most 127 labels, so any more pointers than that can
    /// only come from a loop.
    const MAX_POINTERS: usize = 127;

    /// Returns the root name.
    pub fn root() -> Self {
        Dname { octets: vec![0] }
    }

    /// Returns whether this is the root name.
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns the wire format of the name.
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Converts the name into its wire format.
    pub fn into_octets(self) -> Vec<u8> {
        self.octets
    }

    /// Returns the length of the wire format of the name.
    pub fn compose_len(&self) -> u16 {
        // A name is never longer than 255 octets.
        self.octets.len() as u16
    }

    /// Returns an iterator over the content of the labels.
    ///
    /// The root label is not included.
    pub fn iter_labels(&self) -> LabelIter {
        LabelIter {
            octets: &self.octets,
        }
    }

    /// Returns the number of labels, not counting the root label.
    pub fn label_count(&self) -> usize {
        self.iter_labels().count()
    }
}

/// # Parsing and Composing
///
impl Dname {
    /// Takes a possibly compressed name from the beginning of the parser.
    ///
    /// Labels are read until the root label or a compression pointer is
    /// found. In both cases, the parser is left right behind that label.
    /// A pointer is then followed on a copy of the parser so the remaining
    /// labels can be collected from elsewhere in the message.
    ///
    /// Each pointer has to point to a position before the pointer itself
    /// and no more than [`MAX_POINTERS`][Self::MAX_POINTERS] pointers are
    /// followed, otherwise the function fails with
    /// [`ParseError::ExcessiveCompression`]. Together with the limit on the
    /// length of the name this bounds the work done for malicious input.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        let mut octets = Vec::new();

        // Phase One: No compression pointers have been found yet.
        let mut ptr = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => {
                    octets.push(0);
                    return Ok(Dname { octets });
                }
                LabelType::Normal(label_len) => {
                    Self::append_label(parser, label_len, &mut octets)?;
                }
                LabelType::Compressed(ptr) => break ptr,
            }
        };

        // Phase Two: Compression has occurred.
        //
        // Parsers are copy, so this leaves the outer parser right behind
        // the first pointer.
        let mut parser = *parser;
        let mut pointers = 1;
        loop {
            // The pointer is two octets long and we are right behind it.
            if ptr >= parser.pos() - 2 || pointers > Self::MAX_POINTERS {
                tracing::debug!(
                    ptr,
                    pos = parser.pos() - 2,
                    "rejecting compression pointer"
                );
                return Err(ParseError::ExcessiveCompression);
            }
            tracing::trace!(ptr, "following compression pointer");
            parser.seek(ptr).map_err(|_| ParseError::NameTruncated)?;

            loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => {
                        octets.push(0);
                        return Ok(Dname { octets });
                    }
                    LabelType::Normal(label_len) => {
                        Self::append_label(
                            &mut parser,
                            label_len,
                            &mut octets,
                        )?;
                    }
                    LabelType::Compressed(new_ptr) => {
                        ptr = new_ptr;
                        pointers += 1;
                        break;
                    }
                }
            }
        }
    }

    /// Appends a label of the given length from the parser to `octets`.
    ///
    /// The length is checked before taking the label so that an overlong
    /// name is reported as such even if the message is truncated, too.
    fn append_label<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
        label_len: usize,
        octets: &mut Vec<u8>,
    ) -> Result<(), ParseError> {
        let start = octets.len();
        if start + label_len + 1 >= Self::MAX_LEN {
            return Err(ParseError::NameTooLong);
        }
        octets.resize(start + label_len + 1, 0);
        octets[start] = label_len as u8;
        parser
            .parse_buf(&mut octets[start + 1..])
            .map_err(|_| ParseError::NameTruncated)
    }

    /// Appends the uncompressed name to the target.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets)
    }
}

//--- FromStr

impl str::FromStr for Dname {
    type Err = DnameError;

    /// Creates a name from its text form.
    ///
    /// A trailing dot is accepted but not required. The empty string and
    /// a single dot are the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }

        // `label_start` is the position of the length octet of the label
        // currently being built.
        let mut octets = vec![0];
        let mut label_start = 0;
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            let octet = match ch {
                '.' => {
                    let len = octets.len() - label_start - 1;
                    if len == 0 {
                        return Err(DnameError::EmptyLabel);
                    }
                    octets[label_start] = len as u8;
                    label_start = octets.len();
                    octets.push(0);
                    continue;
                }
                '\\' => parse_escape(&mut chars)?,
                ch if ch.is_ascii() => ch as u8,
                _ => return Err(DnameError::BadChar),
            };
            octets.push(octet);
            if octets.len() - label_start - 1 > LabelType::MAX_LEN {
                return Err(DnameError::LongLabel);
            }
        }

        // Without a trailing dot, the last label still needs its length
        // and the root label. With it, the placeholder is the root label.
        let len = octets.len() - label_start - 1;
        if len > 0 {
            octets[label_start] = len as u8;
            octets.push(0);
        }
        if octets.len() > Self::MAX_LEN {
            return Err(DnameError::LongName);
        }
        Ok(Dname { octets })
    }
}

/// Parses the rest of an escape sequence after the backslash.
fn parse_escape(chars: &mut str::Chars) -> Result<u8, DnameError> {
    let ch = chars.next().ok_or(DnameError::BadEscape)?;
    if let Some(first) = ch.to_digit(10) {
        let mut value = first;
        for _ in 0..2 {
            let digit = chars
                .next()
                .and_then(|ch| ch.to_digit(10))
                .ok_or(DnameError::BadEscape)?;
            value = value * 10 + digit;
        }
        u8::try_from(value).map_err(|_| DnameError::BadEscape)
    } else if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(DnameError::BadEscape)
    }
}

//--- Display and Debug

impl fmt::Display for Dname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let mut sep = "";
        for label in self.iter_labels() {
            f.write_str(sep)?;
            for &ch in label {
                if ch == b'.' || ch == b'\\' {
                    write!(f, "\\{}", ch as char)?;
                } else if ch.is_ascii_graphic() {
                    write!(f, "{}", ch as char)?;
                } else {
                    write!(f, "\\{:03}", ch)?;
                }
            }
            sep = ".";
        }
        Ok(())
    }
}

impl fmt::Debug for Dname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dname({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Dname {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dname {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = <std::string::String as serde::Deserialize>::deserialize(
            deserializer,
        )?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels of a [`Dname`].
///
/// Each item is the content of a label without its length octet.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    octets: &'a [u8],
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.octets.split_first()?;
        let len = usize::from(len);
        if len == 0 || tail.len() < len {
            self.octets = &[];
            return None;
        }
        let (label, tail) = tail.split_at(len);
        self.octets = tail;
        Some(label)
    }
}

//============ Error Types ===================================================

//------------ DnameError ----------------------------------------------------

/// A domain name could not be created from its text form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DnameError {
    /// A label other than the last one was empty.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// An escape sequence was invalid.
    BadEscape,

    /// A character outside of ASCII was used without escaping.
    BadChar,
}

//--- Display and Error

impl fmt::Display for DnameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DnameError::EmptyLabel => "empty label",
            DnameError::LongLabel => "label exceeds 63 octets",
            DnameError::LongName => "domain name exceeds 255 octets",
            DnameError::BadEscape => "invalid escape sequence",
            DnameError::BadChar => "non-ASCII character",
        })
    }
}

impl std::error::Error for DnameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;
    use octseq::builder::infallible;

    const WWW_ANTOINEC_DEV: &[u8] = b"\x03www\x08antoinec\x03dev";

    fn parse_at(
        octets: &[u8],
        pos: usize,
    ) -> Result<(Dname, usize), ParseError> {
        let mut parser = Parser::from_ref(octets);
        parser.advance(pos).unwrap();
        let name = Dname::parse(&mut parser)?;
        Ok((name, parser.pos()))
    }

    fn compose(name: &Dname) -> Vec<u8> {
        let mut buf = Vec::new();
        infallible(name.compose(&mut buf));
        buf
    }

    #[test]
    fn parse_uncompressed() {
        let octets = b"\x03www\x08antoinec\x03dev\x00";
        let (name, pos) = parse_at(octets, 0).unwrap();
        assert_eq!(name.to_string(), "www.antoinec.dev");
        assert_eq!(pos, octets.len());
        assert_eq!(name.label_count(), 3);
    }

    #[test]
    fn parse_in_middle() {
        let octets = b"\x04\x03www\x06google\x03com\x00\xde\xad";
        let (name, pos) = parse_at(octets, 5).unwrap();
        assert_eq!(name.to_string(), "google.com");
        assert_eq!(pos, octets.len() - 2);
    }

    #[test]
    fn parse_compressed() {
        let octets = b"\x03www\x08antoinec\x03dev\x00\x04test\xc0\x04";
        let (name, pos) = parse_at(octets, 18).unwrap();
        assert_eq!(name.to_string(), "test.antoinec.dev");
        assert_eq!(pos, 25);
        assert_eq!(compose(&name), b"\x04test\x08antoinec\x03dev\x00");
    }

    #[test]
    fn parse_pointer_only() {
        let octets = b"\x03com\x00\x07example\xc0\x00\xc0\x05";
        let (name, pos) = parse_at(octets, 15).unwrap();
        assert_eq!(name.to_string(), "example.com");
        assert_eq!(pos, 17);
    }

    #[test]
    fn parse_chained_pointers() {
        let octets = b"\x03com\x00\x07example\xc0\x00\x03www\xc0\x05";
        let (name, pos) = parse_at(octets, 15).unwrap();
        assert_eq!(name.to_string(), "www.example.com");
        assert_eq!(pos, octets.len());
    }

    #[test]
    fn parse_root() {
        let (name, pos) = parse_at(b"\x00", 0).unwrap();
        assert!(name.is_root());
        assert_eq!(name.to_string(), ".");
        assert_eq!(pos, 1);
    }

    #[test]
    fn parse_truncated() {
        assert_eq!(
            parse_at(WWW_ANTOINEC_DEV, 0),
            Err(ParseError::NameTruncated)
        );
        assert_eq!(
            parse_at(b"\x03www\x08anto", 0),
            Err(ParseError::NameTruncated)
        );
        assert_eq!(parse_at(b"\x03www\xc0", 0), Err(ParseError::NameTruncated));
        assert_eq!(parse_at(b"", 0), Err(ParseError::NameTruncated));
    }

    #[test]
    fn parse_too_long() {
        let mut octets = Vec::new();
        for _ in 0..16 {
            octets.extend_from_slice(WWW_ANTOINEC_DEV);
        }
        octets.push(0);
        assert_eq!(parse_at(&octets, 0), Err(ParseError::NameTooLong));

        // The limit is checked before the label is read.
        octets.truncate(14 * WWW_ANTOINEC_DEV.len() + 14);
        assert_eq!(parse_at(&octets, 0), Err(ParseError::NameTooLong));
    }

    #[test]
    fn parse_longest_name() {
        // 4 * (63 + 1) - 2 = 254 octets of labels plus the root label.
        let mut octets = Vec::new();
        for _ in 0..3 {
            octets.push(63);
            octets.extend_from_slice(&[b'a'; 63]);
        }
        octets.push(61);
        octets.extend_from_slice(&[b'b'; 61]);
        octets.push(0);
        assert_eq!(octets.len(), 255);
        let (name, pos) = parse_at(&octets, 0).unwrap();
        assert_eq!(pos, 255);
        assert_eq!(name.as_slice(), octets.as_slice());
    }

    #[test]
    fn parse_too_long_through_pointers() {
        // Each half alone is fine, together they are too long.
        let mut octets = Vec::new();
        for _ in 0..2 {
            octets.push(63);
            octets.extend_from_slice(&[b'a'; 63]);
        }
        octets.push(0);
        for _ in 0..2 {
            octets.push(63);
            octets.extend_from_slice(&[b'b'; 63]);
        }
        octets.extend_from_slice(b"\xc0\x00");
        assert_eq!(parse_at(&octets, 129), Err(ParseError::NameTooLong));
    }

    #[test]
    fn parse_bad_pointers() {
        // Pointing to itself.
        assert_eq!(
            parse_at(b"\x03www\xc0\x04", 0),
            Err(ParseError::ExcessiveCompression)
        );
        // Pointing forward.
        assert_eq!(
            parse_at(b"\xc0\x02\x03www\x00", 0),
            Err(ParseError::ExcessiveCompression)
        );
        // Pointing past the end of the message.
        assert_eq!(
            parse_at(b"\x03www\xff\xff", 0),
            Err(ParseError::ExcessiveCompression)
        );
        // A loop between two pointers: 2 -> 0 is fine, the pointer at 0
        // then points forward.
        assert_eq!(
            parse_at(b"\xc0\x02\xc0\x00", 2),
            Err(ParseError::ExcessiveCompression)
        );
    }

    #[test]
    fn parse_label_loop_terminates() {
        // The pointer at 2 points back to the label at 0 which is followed
        // by the same pointer again. Only the length limit stops this.
        assert_eq!(
            parse_at(b"\x01a\xc0\x00", 0),
            Err(ParseError::NameTooLong)
        );
    }

    #[test]
    fn parse_too_many_pointers() {
        // A chain of 200 pointers, each pointing to the one before, and a
        // root label at the start.
        let mut octets = vec![0];
        for i in 0..200u16 {
            let target = if i == 0 { 0 } else { 1 + 2 * (i - 1) };
            octets.extend_from_slice(&(0xC000 | target).to_be_bytes());
        }
        let last = octets.len() - 2;
        assert_eq!(
            parse_at(&octets, last),
            Err(ParseError::ExcessiveCompression)
        );
        // A short chain is fine.
        let (name, _) = parse_at(&octets, 1 + 2 * 99).unwrap();
        assert!(name.is_root());
    }

    #[test]
    fn compose_round_trip() {
        for s in ["www.antoinec.dev", "a", "x.y.z.example.com"] {
            let name = Dname::from_str(s).unwrap();
            let octets = compose(&name);
            assert_eq!(octets.len(), usize::from(name.compose_len()));
            let (parsed, pos) = parse_at(&octets, 0).unwrap();
            assert_eq!(parsed, name);
            assert_eq!(parsed.to_string(), s);
            assert_eq!(pos, octets.len());
        }
    }

    #[test]
    fn compose_root() {
        assert_eq!(compose(&Dname::root()), b"\x00");
        assert_eq!(compose(&Dname::from_str("").unwrap()), b"\x00");
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Dname::from_str("www.antoinec.dev").unwrap().as_slice(),
            b"\x03www\x08antoinec\x03dev\x00"
        );
        assert_eq!(
            Dname::from_str("www.antoinec.dev.").unwrap(),
            Dname::from_str("www.antoinec.dev").unwrap()
        );
        assert_eq!(
            Dname::from_str("a\\.b.c").unwrap().as_slice(),
            b"\x03a.b\x01c\x00"
        );
        assert_eq!(
            Dname::from_str("\\000\\255").unwrap().as_slice(),
            b"\x02\x00\xff\x00"
        );
        assert_eq!(Dname::from_str("a..b"), Err(DnameError::EmptyLabel));
        assert_eq!(Dname::from_str(".a"), Err(DnameError::EmptyLabel));
        assert_eq!(Dname::from_str("\\256"), Err(DnameError::BadEscape));
        assert_eq!(Dname::from_str("a\\1"), Err(DnameError::BadEscape));
        assert_eq!(Dname::from_str("ä.com"), Err(DnameError::BadChar));
        assert_eq!(
            Dname::from_str(&"a".repeat(64)),
            Err(DnameError::LongLabel)
        );
        let long = vec!["a".repeat(63); 4].join(".");
        assert_eq!(Dname::from_str(&long), Err(DnameError::LongName));
    }

    #[test]
    fn display_escapes() {
        let (name, _) = parse_at(b"\x04a.b\\\x02\x00 \x00", 0).unwrap();
        assert_eq!(name.to_string(), "a\\.b\\\\.\\000\\032");
        assert_eq!(Dname::from_str(&name.to_string()).unwrap(), name);
    }
}
