/// Declare an enum whose variants travel as fixed strings
///
/// Generates serde renames, `as_str`, `Display`, a case-insensitive
/// `FromStr` (error: [`UnknownVariant`](crate::UnknownVariant)) and an `ALL`
/// slice. The calling crate must depend on `serde`.
///
/// ```ignore
/// auraflow_sdk::wire_enum! {
///     /// Lifecycle state of a tenant
///     pub enum TenantStatus {
///         Active => "ACTIVE",
///         Inactive => "INACTIVE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire name of the variant
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::UnknownVariant {
                    type_name: stringify!($name),
                    value: s.to_owned(),
                })
            }
        }
    };
}
