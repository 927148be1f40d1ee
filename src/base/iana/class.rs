//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for different
    /// network types. That is, each class has its own separate record tree
    /// starting at the root. However, in practice, only the IN class is really
    /// relevant.
    ///
    /// In addition, there are query classes or QCLASSes that are used in
    /// questions or UPDATE queries, namely NONE and ANY (or *).
    ///
    /// Classes are represented by a 16 bit value. The type wraps these values.
    ///
    /// See [RFC 1034] for the introduction of classes and the
    /// [DNS CLASSes IANA registry] for an overview of assigned values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// CSNET (CS).
    ///
    /// Obsolete, listed in RFC 1035 for examples only.
    (CS => 2, "CS")

    /// Chaosnet (CH).
    ///
    /// A network protocol developed at MIT in the 1970s. Reused by BIND for
    /// built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information protocol part of MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class None.
    ///
    /// Defined in RFC 2136, this class is used in UPDATE queries to
    /// require that an RRset does not exist prior to the update.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "*")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Class;
    use core::str::FromStr;

    #[test]
    fn display_from_str() {
        assert_eq!(format!("{}", Class::IN), "IN");
        assert_eq!(format!("{}", Class::ANY), "*");
        assert_eq!(format!("{}", Class::from_int(42)), "CLASS42");
        assert_eq!(Class::from_str("in"), Ok(Class::IN));
        assert_eq!(Class::from_str("CLASS42"), Ok(Class::from_int(42)));
        assert_eq!(Class::from_str("class1"), Ok(Class::IN));
        assert!(Class::from_str("CLASS").is_err());
        assert!(Class::from_str("INTERNET").is_err());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class::from_int(69)), "Class(69)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        assert_eq!(serde_json::to_string(&Class::IN).unwrap(), "\"IN\"");
        assert_eq!(
            serde_json::to_string(&Class::from_int(5)).unwrap(),
            "\"CLASS5\""
        );
        assert_eq!(
            serde_json::from_str::<Class>("\"CH\"").unwrap(),
            Class::CH
        );
        assert_eq!(
            serde_json::from_str::<Class>("5").unwrap(),
            Class::from_int(5)
        );
    }
}
