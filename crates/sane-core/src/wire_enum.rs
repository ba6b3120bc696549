//! The "has a wire code" capability.

/// A value that travels on the wire as an integer code.
///
/// The code is sent as a [`SaneWord`](crate::SaneWord); encoders do not
/// range-check it, so implementors are responsible for returning a
/// code the peer understands.
pub trait WireEnum {
    /// The integer the peer expects for this value.
    fn wire_code(&self) -> i32;
}

impl<T: WireEnum + ?Sized> WireEnum for &T {
    fn wire_code(&self) -> i32 {
        (**self).wire_code()
    }
}

/// Declares a fieldless protocol enum together with its wire codes and
/// the lowercase names used in scripts and logs.
///
/// Generates `WireEnum`, `from_wire_code`, `name`, `from_name` and `ALL`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in wire-code order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Look up the variant carrying `code`.
            pub fn from_wire_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Lowercase name, stable across releases.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a lowercase name produced by [`Self::name`].
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::wire_enum::WireEnum for $name {
            fn wire_code(&self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use wire_enum;
