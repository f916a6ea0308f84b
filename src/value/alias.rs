use std::collections::HashMap;

/// An enumerated option whose variants render as canonical wire tokens.
///
/// Implement it with [`alias_enum!`](crate::alias_enum) rather than by hand: the macro
/// generates the variant list, the declared overrides and a per-type table cell.
pub trait Alias: Copy + 'static {
    /// Every declared variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The variant's declared Rust name, e.g. `Yuv420p`.
    fn variant_name(self) -> &'static str;

    /// Explicit wire token declared for the variant, if any.
    fn declared_token(self) -> Option<&'static str>;

    /// The process-wide table for this type, built on first use.
    fn alias_table() -> &'static AliasTable;

    /// Canonical wire token for this variant.
    fn command(self) -> &'static str {
        Self::alias_table().resolve(self.variant_name())
    }

    /// Reverse lookup from a wire token.
    fn from_command(token: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.command() == token)
    }
}

/// Immutable variant-name to wire-token mapping for one enumerated type.
#[derive(Debug)]
pub struct AliasTable {
    type_name: &'static str,
    tokens: HashMap<&'static str, String>,
}

impl AliasTable {
    /// Walk `T`'s declared variants once. A declared token wins over the lowercased name.
    pub fn build<T: Alias>() -> Self {
        let type_name = std::any::type_name::<T>();
        tracing::debug!(type_name, variants = T::VARIANTS.len(), "building alias table");
        let tokens = T::VARIANTS
            .iter()
            .map(|v| {
                let token = match v.declared_token() {
                    Some(token) => token.to_string(),
                    None => v.variant_name().to_ascii_lowercase(),
                };
                (v.variant_name(), token)
            })
            .collect();
        Self { type_name, tokens }
    }

    /// Token for `variant`, if it is declared.
    pub fn get(&self, variant: &str) -> Option<&str> {
        self.tokens.get(variant).map(String::as_str)
    }

    /// Token for `variant`.
    ///
    /// # Panics
    ///
    /// When `variant` is not declared on the table's type. That is a caller bug, not a
    /// recoverable condition.
    pub fn resolve(&self, variant: &str) -> &str {
        match self.get(variant) {
            Some(token) => token,
            None => panic!(
                "variant '{variant}' is not declared on enumerated type {}",
                self.type_name
            ),
        }
    }

    /// Number of declared variants.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the type declares no variants.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Resolve `variant_name` of `T` to its wire token through `T`'s memoized table.
pub fn resolve_alias<T: Alias>(variant_name: &str) -> &'static str {
    T::alias_table().resolve(variant_name)
}

/// Declare an enumerated option type with optional per-variant wire tokens.
///
/// ```
/// ffgraph::alias_enum! {
///     /// Example.
///     pub enum Interp {
///         Bilinear,
///         Lanczos = "lanczos",
///         FastBilinear = "fast_bilinear",
///     }
/// }
///
/// use ffgraph::Alias as _;
/// assert_eq!(Interp::Bilinear.command(), "bilinear");
/// assert_eq!(Interp::FastBilinear.command(), "fast_bilinear");
/// ```
#[macro_export]
macro_rules! alias_enum {
    (@token) => {
        ::core::option::Option::None
    };
    (@token $token:literal) => {
        ::core::option::Option::Some($token)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $token:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::Alias for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn variant_name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            fn declared_token(self) -> ::core::option::Option<&'static str> {
                match self {
                    $(Self::$variant => $crate::alias_enum!(@token $($token)?),)+
                }
            }

            fn alias_table() -> &'static $crate::AliasTable {
                static TABLE: ::std::sync::OnceLock<$crate::AliasTable> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init($crate::AliasTable::build::<Self>)
            }
        }

        impl ::core::convert::From<$name> for $crate::Value {
            fn from(v: $name) -> Self {
                $crate::Value::Alias($crate::Alias::command(v))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Alias::command(*self))
            }
        }
    };
}

#[cfg(test)]
#[path = "../../tests/unit/value/alias.rs"]
mod tests;
