/// Declares a protocol code table backed by an integer.
///
/// Assigned values get their own variant; everything else is kept verbatim
/// in `Unknown` so that unassigned codes survive a decode/encode pass.
/// Equality and hashing go through the raw value, so `Unknown(1)` and the
/// named variant for 1 compare equal.
macro_rules! code_enum {
    ($(#[$outer:meta])* $name:ident, $int:ty, $prefix:literal;
        $( $(#[$attr:meta])* ($variant:ident => $value:literal, $mnemonic:literal) )* ) => {

        $(#[$outer])*
        #[derive(Clone, Copy, Debug)]
        pub enum $name {
            $( $(#[$attr])* $variant, )*

            /// A value without an assigned meaning.
            Unknown($int),
        }

        impl $name {
            pub fn from_int(value: $int) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    _ => Self::Unknown(value),
                }
            }

            pub fn to_int(self) -> $int {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Unknown(value) => value,
                }
            }

            /// The registered mnemonic, also for assigned values that were
            /// built through `Unknown`.
            pub fn mnemonic(self) -> Option<&'static str> {
                match Self::from_int(self.to_int()) {
                    $( Self::$variant => Some($mnemonic), )*
                    Self::Unknown(_) => None,
                }
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                Self::from_int(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.to_int()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_int(0)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.to_int() == other.to_int()
            }
        }

        impl Eq for $name {}

        impl PartialEq<$int> for $name {
            fn eq(&self, other: &$int) -> bool {
                self.to_int() == *other
            }
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.to_int(), state)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.mnemonic() {
                    Some(mnemonic) => f.write_str(mnemonic),
                    None => write!(f, "{}{}", $prefix, self.to_int()),
                }
            }
        }
    };
}
