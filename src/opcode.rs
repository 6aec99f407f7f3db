code_enum! {
    /// The operation requested by a message, a 4-bit header field.
    ///
    /// Only the low four bits reach the wire.
    Opcode, u8, "OPCODE";

    /// Standard query [RFC1035]
    (Query => 0, "QUERY")
    /// Inverse query, obsolete [RFC3425]
    (IQuery => 1, "IQUERY")
    /// Server status request [RFC1035]
    (Status => 2, "STATUS")
    /// Zone change notification [RFC1996]
    (Notify => 4, "NOTIFY")
    /// Dynamic update [RFC2136]
    (Update => 5, "UPDATE")
    /// DNS stateful operations [RFC8490]
    (DnsStatefulOperations => 6, "DSO")
}

#[cfg(test)]
mod tests {
    use super::Opcode;

    #[test]
    fn unassigned_codes_are_kept() {
        assert_eq!(Opcode::from(3u8), Opcode::Unknown(3));
        assert_eq!(u8::from(Opcode::from(15u8)), 15);
        assert_eq!(Opcode::Unknown(4), Opcode::Notify);
    }

    #[test]
    fn display() {
        assert_eq!(Opcode::Update.to_string(), "UPDATE");
        assert_eq!(Opcode::Unknown(0).to_string(), "QUERY");
        assert_eq!(Opcode::from(7u8).to_string(), "OPCODE7");
    }
}
