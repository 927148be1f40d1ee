//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Dname;
use super::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: Dname,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three components.
    pub fn new(qname: Dname, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: Dname, qtype: Rtype) -> Self {
        Question {
            qname,
            qtype,
            qclass: Class::IN,
        }
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> Dname {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name in the question.
    pub fn qname(&self) -> &Dname {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        Ok(Question::new(
            Dname::parse(parser)?,
            Rtype::parse(parser)?,
            Class::parse(parser)?,
        ))
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.qname.compose(target)?;
        self.qtype.compose(target)?;
        self.qclass.compose(target)
    }
}

//--- From

impl From<(Dname, Rtype, Class)> for Question {
    fn from((name, rtype, class): (Dname, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl From<(Dname, Rtype)> for Question {
    fn from((name, rtype): (Dname, Rtype)) -> Self {
        Question::new(name, rtype, Class::IN)
    }
}

//--- Display and Debug

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Question")
            .field("qname", &self.qname)
            .field("qtype", &self.qtype)
            .field("qclass", &self.qclass)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;
    use octseq::builder::infallible;
    use std::string::ToString;
    use std::vec::Vec;

    #[test]
    fn parse_and_compose() {
        let octets = b"\x07example\x03com\x00\x00\x01\x00\x01\xff";
        let mut parser = Parser::from_ref(octets.as_ref());
        let question = Question::parse(&mut parser).unwrap();
        assert_eq!(parser.pos(), 13 + 4);
        assert_eq!(question.qname().to_string(), "example.com");
        assert_eq!(question.qtype(), Rtype::A);
        assert_eq!(question.qclass(), Class::IN);

        let mut buf = Vec::new();
        infallible(question.compose(&mut buf));
        assert_eq!(buf, &octets[..17]);
    }

    #[test]
    fn parse_compressed() {
        let octets = b"\x07example\x03com\x00\x03www\xc0\x00\x00\x1c\x00\x03";
        let mut parser = Parser::from_ref(octets.as_ref());
        parser.advance(13).unwrap();
        let question = Question::parse(&mut parser).unwrap();
        assert_eq!(parser.pos(), octets.len());
        assert_eq!(
            question,
            Question::new(
                Dname::from_str("www.example.com").unwrap(),
                Rtype::AAAA,
                Class::CH
            )
        );
    }

    #[test]
    fn parse_short() {
        let octets = b"\x07example\x03com\x00\x00\x01\x00";
        assert_eq!(
            Question::parse(&mut Parser::from_ref(octets.as_ref())),
            Err(ParseError::BufferTooShort)
        );
    }

    #[test]
    fn display() {
        let question =
            Question::new_in(Dname::from_str("example.com").unwrap(), Rtype::MX);
        assert_eq!(question.to_string(), "example.com\tIN\tMX");
    }
}
