code_enum! {
    /// Resource record class.
    Class, u16, "CLASS";

    /// Internet [RFC1035]
    (In => 1, "IN")
    /// Chaos
    (Ch => 2, "CH")
    /// Hesiod
    (Hs => 4, "HS")
    /// Query class NONE [RFC2136]
    (None => 254, "NONE")
    /// Query class ANY [RFC1035]
    (Any => 255, "ANY")
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn conversions() {
        assert_eq!(Class::from(1u16), Class::In);
        assert_eq!(u16::from(Class::Any), 255);
        assert_eq!(Class::from(3u16), Class::Unknown(3));
        assert_eq!(Class::Unknown(3).to_string(), "CLASS3");
    }
}
