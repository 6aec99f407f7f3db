code_enum! {
    /// Resource record type.
    RecordType, u16, "TYPE";

    /// IPv4 host address [RFC1035]
    (A => 1, "A")
    /// Authoritative name server [RFC1035]
    (Ns => 2, "NS")
    /// Mail destination, obsolete
    (Md => 3, "MD")
    /// Mail forwarder, obsolete
    (Mf => 4, "MF")
    /// Canonical name for an alias
    (Cname => 5, "CNAME")
    /// Start of a zone of authority
    (Soa => 6, "SOA")
    (Mb => 7, "MB")
    (Mg => 8, "MG")
    (Mr => 9, "MR")
    (Null => 10, "NULL")
    (Wks => 11, "WKS")
    (Ptr => 12, "PTR")
    (Hinfo => 13, "HINFO")
    (Minfo => 14, "MINFO")
    /// Mail exchange
    (Mx => 15, "MX")
    /// Text strings
    (Txt => 16, "TXT")
    (Rp => 17, "RP")
    (Afsdb => 18, "AFSDB")
    (X25 => 19, "X25")
    (Isdn => 20, "ISDN")
    (Rt => 21, "RT")
    (Nsap => 22, "NSAP")
    (NsapPtr => 23, "NSAP-PTR")
    (Sig => 24, "SIG")
    (Key => 25, "KEY")
    (Px => 26, "PX")
    (Gpos => 27, "GPOS")
    /// IPv6 host address [RFC3596]
    (Aaaa => 28, "AAAA")
    (Loc => 29, "LOC")
    (Nxt => 30, "NXT")
    (Eid => 31, "EID")
    (Nimloc => 32, "NIMLOC")
    /// Service locator [RFC2782]
    (Srv => 33, "SRV")
    (Atma => 34, "ATMA")
    (Naptr => 35, "NAPTR")
    (Kx => 36, "KX")
    (Cert => 37, "CERT")
    (A6 => 38, "A6")
    (Dname => 39, "DNAME")
    (Sink => 40, "SINK")
    /// EDNS pseudo-record [RFC6891]
    (Opt => 41, "OPT")
    (Apl => 42, "APL")
    (Ds => 43, "DS")
    (Sshfp => 44, "SSHFP")
    (Ipseckey => 45, "IPSECKEY")
    (Rrsig => 46, "RRSIG")
    (Nsec => 47, "NSEC")
    (Dnskey => 48, "DNSKEY")
    (Dhcid => 49, "DHCID")
    (Nsec3 => 50, "NSEC3")
    (Nsec3param => 51, "NSEC3PARAM")
    (Tlsa => 52, "TLSA")
    (Smimea => 53, "SMIMEA")
    (Hip => 55, "HIP")
    (Ninfo => 56, "NINFO")
    (Rkey => 57, "RKEY")
    (Talink => 58, "TALINK")
    (Cds => 59, "CDS")
    (Cdnskey => 60, "CDNSKEY")
    (Openpgpkey => 61, "OPENPGPKEY")
    (Csync => 62, "CSYNC")
    (Zonemd => 63, "ZONEMD")
    (Svcb => 64, "SVCB")
    (Https => 65, "HTTPS")
    (Spf => 99, "SPF")
    (Uinfo => 100, "UINFO")
    (Uid => 101, "UID")
    (Gid => 102, "GID")
    (Unspec => 103, "UNSPEC")
    (Nid => 104, "NID")
    (L32 => 105, "L32")
    (L64 => 106, "L64")
    (Lp => 107, "LP")
    (Eui48 => 108, "EUI48")
    (Eui64 => 109, "EUI64")
    (Tkey => 249, "TKEY")
    (Tsig => 250, "TSIG")
    /// Incremental zone transfer
    (Ixfr => 251, "IXFR")
    /// Full zone transfer
    (Axfr => 252, "AXFR")
    (Mailb => 253, "MAILB")
    (Maila => 254, "MAILA")
    /// Any record type
    (Any => 255, "ANY")
    (Uri => 256, "URI")
    (Caa => 257, "CAA")
    (Avc => 258, "AVC")
    (Doa => 259, "DOA")
    (Amtrelay => 260, "AMTRELAY")
    (Ta => 32768, "TA")
    (Dlv => 32769, "DLV")
}

#[cfg(test)]
mod tests {
    use super::RecordType;

    #[test]
    fn conversions() {
        assert_eq!(RecordType::from(28u16), RecordType::Aaaa);
        assert_eq!(u16::from(RecordType::Dlv), 32769);
        assert_eq!(RecordType::from(54u16), RecordType::Unknown(54));
    }

    #[test]
    fn display() {
        assert_eq!(RecordType::NsapPtr.to_string(), "NSAP-PTR");
        assert_eq!(RecordType::Unknown(1).to_string(), "A");
        assert_eq!(RecordType::Unknown(65280).to_string(), "TYPE65280");
    }
}
