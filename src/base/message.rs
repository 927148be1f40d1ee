//! Complete DNS messages.
//!
//! This module defines the [`Message`] type which owns a fully decoded
//! message: the header and the four sections.
//!
//! A message is taken from its wire format via [`Message::from_octets`].
//! Decoding walks through the message once, section by section. If any part
//! of the message is broken, decoding stops and a [`DecodeError`] is
//! returned. Besides the reason for the failure, the error carries a ready
//! made error response that can be sent back to whoever sent the broken
//! message.
//!
//! A message is turned into its wire format via [`Message::compose`] or
//! [`Message::to_vec`]. Domain names are never compressed.

use super::dig_printer::DigPrinter;
use super::header::{Header, HeaderCounts};
use super::iana::Rcode;
use super::question::Question;
use super::record::Record;
use super::wire::ParseError;
use core::fmt;
use octseq::builder::{infallible, OctetsBuilder};
use octseq::parse::Parser;
use std::vec::Vec;
use tracing::{debug, trace};

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// The message owns its header and the content of its four sections: the
/// question section and the answer, authority, and additional record
/// sections.
///
/// The counts in the header always match the number of entries in the
/// sections. The sections can only be changed through methods that keep
/// the counts up to date. Since the counts are sixteen bit values, no
/// section can hold more than 65535 entries.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Creation and Conversion
///
impl Message {
    /// Creates a message with the given header and empty sections.
    ///
    /// The counts of the header are reset to zero.
    pub fn new(mut header: Header) -> Self {
        header.set_counts(HeaderCounts::default());
        Message {
            header,
            ..Default::default()
        }
    }

    /// Creates a message from a header and the content of all sections.
    ///
    /// The counts of the header are replaced by the section lengths. If
    /// any of the sections has more than 65535 entries, an error is
    /// returned.
    pub fn from_sections(
        mut header: Header,
        questions: Vec<Question>,
        answers: Vec<Record>,
        authority: Vec<Record>,
        additional: Vec<Record>,
    ) -> Result<Self, SectionOverflow> {
        header.set_counts(HeaderCounts::new(
            section_count(&questions)?,
            section_count(&answers)?,
            section_count(&authority)?,
            section_count(&additional)?,
        ));
        Ok(Message {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Creates the response to a message that failed to decode.
    ///
    /// The response is a copy of `header` with all counts set to zero and
    /// the response code chosen from `err` via [`ParseError::rcode`]. All
    /// sections are empty.
    pub fn error_message(header: Header, err: ParseError) -> Self {
        let mut res = Message::new(header);
        res.header.set_rcode(err.rcode());
        res
    }

    /// Converts the message into its header and sections.
    pub fn into_sections(
        self,
    ) -> (Header, Vec<Question>, Vec<Record>, Vec<Record>, Vec<Record>) {
        (
            self.header,
            self.questions,
            self.answers,
            self.authority,
            self.additional,
        )
    }
}

/// # Header and Section Access
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the message header.
    ///
    /// The counts cannot be changed through the reference.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the header counts of the message.
    pub fn header_counts(&self) -> HeaderCounts {
        self.header.counts()
    }

    /// Returns whether the rcode of the header is NOERROR.
    pub fn no_error(&self) -> bool {
        self.header.rcode() == Rcode::NOERROR
    }

    /// Returns the question section.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question, if there is any.
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Appends a question to the question section.
    pub fn push_question(
        &mut self,
        question: Question,
    ) -> Result<(), SectionOverflow> {
        let count = section_count_after_push(&self.questions)?;
        self.questions.push(question);
        self.header.counts_mut().set_qdcount(count);
        Ok(())
    }

    /// Appends a record to the answer section.
    pub fn push_answer(
        &mut self,
        record: Record,
    ) -> Result<(), SectionOverflow> {
        let count = section_count_after_push(&self.answers)?;
        self.answers.push(record);
        self.header.counts_mut().set_ancount(count);
        Ok(())
    }

    /// Appends a record to the authority section.
    pub fn push_authority(
        &mut self,
        record: Record,
    ) -> Result<(), SectionOverflow> {
        let count = section_count_after_push(&self.authority)?;
        self.authority.push(record);
        self.header.counts_mut().set_nscount(count);
        Ok(())
    }

    /// Appends a record to the additional section.
    pub fn push_additional(
        &mut self,
        record: Record,
    ) -> Result<(), SectionOverflow> {
        let count = section_count_after_push(&self.additional)?;
        self.additional.push(record);
        self.header.counts_mut().set_arcount(count);
        Ok(())
    }
}

/// # Parsing and Composing
///
impl Message {
    /// Decodes a message from its wire format.
    ///
    /// The header is followed by as many questions and records as its
    /// counts announce. Octets left after the last record are ignored.
    ///
    /// If the message is broken, the error contains the reason together
    /// with an error response. If not even the header could be read, the
    /// response is built from an all-zero header.
    pub fn from_octets(octets: &[u8]) -> Result<Self, DecodeError> {
        let mut parser = Parser::from_ref(octets);
        let header = match Header::parse(&mut parser) {
            Ok(header) => header,
            Err(err) => {
                debug!(len = octets.len(), %err, "message header too short");
                return Err(DecodeError::new(Header::new(), err));
            }
        };
        match Self::parse_sections(header, &mut parser) {
            Ok(res) => {
                if parser.remaining() > 0 {
                    trace!(
                        remaining = parser.remaining(),
                        "ignoring octets after last section"
                    );
                }
                Ok(res)
            }
            Err(err) => {
                debug!(
                    id = header.id(),
                    pos = parser.pos(),
                    %err,
                    "failed to decode message"
                );
                Err(DecodeError::new(header, err))
            }
        }
    }

    /// Parses the four sections announced by `header`.
    fn parse_sections<Octs: AsRef<[u8]> + ?Sized>(
        header: Header,
        parser: &mut Parser<Octs>,
    ) -> Result<Self, ParseError> {
        let counts = header.counts();

        trace!(count = counts.qdcount(), pos = parser.pos(), "questions");
        let mut questions = Vec::with_capacity(
            usize::from(counts.qdcount()).min(parser.remaining() / 5),
        );
        for _ in 0..counts.qdcount() {
            questions.push(Question::parse(parser)?);
        }

        trace!(count = counts.ancount(), pos = parser.pos(), "answers");
        let answers = Record::parse_section(parser, counts.ancount())?;

        trace!(count = counts.nscount(), pos = parser.pos(), "authority");
        let authority = Record::parse_section(parser, counts.nscount())?;

        trace!(count = counts.arcount(), pos = parser.pos(), "additional");
        let additional = Record::parse_section(parser, counts.arcount())?;

        Ok(Message {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Appends the wire format of the message to the target.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.header.compose(target)?;
        for question in &self.questions {
            question.compose(target)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            record.compose(target)?;
        }
        Ok(())
    }

    /// Returns the wire format of the message in a new vec.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut res = Vec::new();
        infallible(self.compose(&mut res));
        res
    }
}

/// # Printing
///
impl Message {
    /// Returns a value that displays the message like dig does.
    pub fn display_dig_style(&self) -> impl fmt::Display + '_ {
        DigPrinter { msg: self }
    }
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display_dig_style(), f)
    }
}

//------------ Helper Functions ----------------------------------------------

fn section_count<T>(section: &[T]) -> Result<u16, SectionOverflow> {
    u16::try_from(section.len()).map_err(|_| SectionOverflow(()))
}

fn section_count_after_push<T>(
    section: &[T],
) -> Result<u16, SectionOverflow> {
    u16::try_from(section.len() + 1).map_err(|_| SectionOverflow(()))
}

//============ Error Types ===================================================

//------------ DecodeError ---------------------------------------------------

/// A message could not be decoded.
///
/// The error contains the [`ParseError`] that stopped decoding and the
/// message to send back in response. See [`Message::error_message`] for
/// what that message looks like.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    error: ParseError,
    message: Message,
}

impl DecodeError {
    fn new(header: Header, error: ParseError) -> Self {
        DecodeError {
            error,
            message: Message::error_message(header, error),
        }
    }

    /// Returns the reason decoding failed.
    pub fn error(&self) -> ParseError {
        self.error
    }

    /// Returns a reference to the error response.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Converts the error into the error response.
    pub fn into_message(self) -> Message {
        self.message
    }
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to decode message: {}", self.error)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

//------------ SectionOverflow -----------------------------------------------

/// A section would have had more than 65535 entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionOverflow(());

impl fmt::Display for SectionOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("too many entries in message section")
    }
}

impl std::error::Error for SectionOverflow {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Opcode, Rcode, Rtype};
    use crate::base::header::Flags;
    use crate::base::name::Dname;
    use crate::rdata::{RecordData, UnknownRecordData, A};
    use core::str::FromStr;
    use std::string::ToString;

    fn query() -> Message {
        let mut msg = Message::new(Header::with_flags(
            0xBEEF,
            Flags {
                rd: true,
                ..Default::default()
            },
        ));
        msg.push_question(Question::new_in(
            Dname::from_str("www.antoinec.dev").unwrap(),
            Rtype::A,
        ))
        .unwrap();
        msg
    }

    fn response() -> Message {
        let mut msg = query();
        let mut flags = msg.header().flags();
        flags.qr = true;
        flags.ra = true;
        msg.header_mut().set_flags(flags);
        msg.push_answer(Record::new(
            Dname::from_str("www.antoinec.dev").unwrap(),
            Class::IN,
            300,
            A::from_octets(192, 0, 2, 1),
        ))
        .unwrap();
        msg
    }

    #[test]
    fn new_resets_counts() {
        let mut header = Header::new();
        header.set_counts(HeaderCounts::new(1, 2, 3, 4));
        let msg = Message::new(header);
        assert!(msg.header_counts().is_empty());
    }

    #[test]
    fn push_updates_counts() {
        let mut msg = response();
        msg.push_authority(Record::new(
            Dname::from_str("antoinec.dev").unwrap(),
            Class::IN,
            3600,
            UnknownRecordData::from_octets(
                Rtype::NS,
                b"\x02ns\x08antoinec\x03dev\x00".to_vec(),
            )
            .unwrap(),
        ))
        .unwrap();
        assert_eq!(msg.header_counts(), HeaderCounts::new(1, 1, 1, 0));
        msg.push_additional(msg.answers()[0].clone()).unwrap();
        msg.push_additional(msg.answers()[0].clone()).unwrap();
        assert_eq!(msg.header_counts(), HeaderCounts::new(1, 1, 1, 2));
    }

    #[test]
    fn section_overflow() {
        let questions = vec![query().questions()[0].clone(); 0x10000];
        assert_eq!(
            Message::from_sections(
                Header::new(),
                questions,
                Vec::new(),
                Vec::new(),
                Vec::new()
            ),
            Err(SectionOverflow(()))
        );

        let mut questions = vec![query().questions()[0].clone(); 0xFFFF];
        let question = questions[0].clone();
        let mut msg = Message::new(Header::new());
        for _ in 0..0xFFFF {
            msg.push_question(question.clone()).unwrap();
        }
        assert_eq!(msg.header().qdcount(), 0xFFFF);
        assert_eq!(msg.push_question(question), Err(SectionOverflow(())));
        assert_eq!(msg.questions().len(), 0xFFFF);

        questions.truncate(3);
        let msg = Message::from_sections(
            Header::new(),
            questions,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(msg.header_counts(), HeaderCounts::new(3, 0, 0, 0));
    }

    #[test]
    fn round_trip() {
        let msg = response();
        let octets = msg.to_vec();
        assert_eq!(&octets[4..12], b"\x00\x01\x00\x01\x00\x00\x00\x00");
        let parsed = Message::from_octets(&octets).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.to_vec(), octets);
    }

    #[test]
    fn decode_with_compression() {
        let octets = b"\xbe\xef\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
                       \x03www\x08antoinec\x03dev\x00\x00\x01\x00\x01\
                       \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\
                       \xc0\x00\x02\x01\
                       trailing garbage";
        let msg = Message::from_octets(octets).unwrap();
        assert_eq!(msg.header().id(), 0xBEEF);
        assert_eq!(msg.header().opcode(), Opcode::QUERY);
        assert_eq!(msg.answers().len(), 1);
        let answer = &msg.answers()[0];
        assert_eq!(answer.owner().to_string(), "www.antoinec.dev");
        assert_eq!(answer.ttl(), 300);
        assert_eq!(answer.data(), &RecordData::A(A::from_octets(192, 0, 2, 1)));
        assert_eq!(msg, response());
    }

    #[test]
    fn decode_short_header() {
        let err = Message::from_octets(b"\xbe\xef\x01").unwrap_err();
        assert_eq!(err.error(), ParseError::BufferTooShort);
        assert_eq!(err.message().header().id(), 0);
        assert_eq!(err.message().header().rcode(), Rcode::SERVFAIL);
        assert!(err.message().header_counts().is_empty());
    }

    #[test]
    fn decode_error_message() {
        let mut octets = response().to_vec();
        octets.truncate(octets.len() - 2);
        let err = Message::from_octets(&octets).unwrap_err();
        assert_eq!(err.error(), ParseError::BufferTooShort);

        let message = err.into_message();
        assert_eq!(message.header().id(), 0xBEEF);
        assert!(message.header().flags().qr);
        assert!(message.header().flags().rd);
        assert_eq!(message.header().rcode(), Rcode::SERVFAIL);
        assert!(message.header_counts().is_empty());
        assert!(message.questions().is_empty());
        assert!(message.answers().is_empty());

        // The error message itself encodes to just a header.
        assert_eq!(message.to_vec().len(), Header::LEN);
    }

    #[test]
    fn error_message_for_long_name() {
        let msg =
            Message::error_message(query().header(), ParseError::NameTooLong);
        assert_eq!(msg.header().rcode(), Rcode::FORMERR);
        assert!(msg.header_counts().is_empty());
    }

    #[test]
    fn display() {
        let output = response().to_string();
        assert_eq!(
            output,
            ";; ->>HEADER<<- opcode: QUERY, rcode: NOERROR, id: 48879\n\
             ;; flags: QR RD RA; QUERY: 1, ANSWER: 1, AUTHORITY: 0, \
             ADDITIONAL: 0\n\
             \n\
             ;; QUESTION SECTION:\n\
             ;www.antoinec.dev\tIN\tA\n\
             \n\
             ;; ANSWER SECTION:\n\
             www.antoinec.dev\t300\tIN\tA\t192.0.2.1\n"
        );
    }
}
