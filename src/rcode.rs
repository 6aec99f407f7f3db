code_enum! {
    /// Response status, a 4-bit header field.
    Rcode, u8, "RCODE";

    /// No error condition.
    (NoError => 0, "NOERROR")
    /// The server could not interpret the query.
    (FormErr => 1, "FORMERR")
    /// The server failed to process the query.
    (ServFail => 2, "SERVFAIL")
    /// The queried name does not exist.
    (NxDomain => 3, "NXDOMAIN")
    /// The server does not support the requested opcode.
    (NotImp => 4, "NOTIMP")
    /// The server refuses to answer.
    (Refused => 5, "REFUSED")
    /// A name exists that ought not to [RFC2136]
    (YxDomain => 6, "YXDOMAIN")
    /// An RRset exists that ought not to [RFC2136]
    (YxRrSet => 7, "YXRRSET")
    /// An RRset that ought to exist does not [RFC2136]
    (NxRrSet => 8, "NXRRSET")
    /// The server is not authoritative for the zone [RFC2136]
    (NotAuth => 9, "NOTAUTH")
    /// A name is not within the zone [RFC2136]
    (NotZone => 10, "NOTZONE")
}

#[cfg(test)]
mod tests {
    use super::Rcode;

    #[test]
    fn conversions() {
        assert_eq!(Rcode::from(3u8), Rcode::NxDomain);
        assert_eq!(Rcode::from(11u8), Rcode::Unknown(11));
        assert_eq!(Rcode::default(), Rcode::NoError);
        assert_eq!(Rcode::ServFail.to_string(), "SERVFAIL");
        assert_eq!(Rcode::Unknown(12).to_string(), "RCODE12");
    }
}
