//! DNS response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. The type [`Rcode`] defined herein
//! represents these codes. The extended codes carried in OPT records are
//! not supported.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The code is a 4 bit value and part of
    /// the header of a DNS message. The type can hold any `u8` but only the
    /// lower four bits make it into the wire format.
    ///
    /// All values are defined in the [IANA DNS RCODEs] registry.
    ///
    /// [IANA DNS RCODEs]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6
    =>
    Rcode, u8;

    /// No error condition.
    ///
    /// (Otherwise known as success.)
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refused to perform the operation requested by the
    /// query for policy reasons.
    (REFUSED => 5, "REFUSED")

    /// Name exists when it should not (RFC 2136).
    (YXDOMAIN => 6, "YXDOMAIN")

    /// RR set exists when it should not (RFC 2136).
    (YXRRSET => 7, "YXRRSET")

    /// RR set that should exist does not (RFC 2136).
    (NXRRSET => 8, "NXRRSET")

    /// Server not authoritative for zone or client not authorized.
    (NOTAUTH => 9, "NOTAUTH")

    /// Name not contained in zone (RFC 2136).
    (NOTZONE => 10, "NOTZONE")
}

int_enum_str_with_decimal!(Rcode, u8, "unknown rcode");

//--- Default

impl Default for Rcode {
    fn default() -> Self {
        Rcode::NOERROR
    }
}

#[cfg(test)]
mod test {
    use super::Rcode;
    use core::str::FromStr;

    #[test]
    fn display_from_str() {
        assert_eq!(format!("{}", Rcode::SERVFAIL), "SERVFAIL");
        assert_eq!(format!("{}", Rcode::from_int(13)), "13");
        assert_eq!(Rcode::from_str("nxdomain"), Ok(Rcode::NXDOMAIN));
        assert_eq!(Rcode::from_str("13"), Ok(Rcode::from_int(13)));
        assert!(Rcode::from_str("BADVERS").is_err());
    }
}
