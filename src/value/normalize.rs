use rust_decimal::{Decimal, RoundingStrategy};

/// Floats closer than this to their floor are rendered as integers.
pub const INTEGER_EPSILON: f64 = 1e-10;
/// Fractional digits kept when a float's shortest text is longer than this.
pub const MAX_FRACTION_DIGITS: usize = 3;
/// Fixed scale used for arbitrary-precision decimals.
pub const DECIMAL_SCALE: u32 = 2;

/// An option value before normalization.
///
/// Every value entering an argument list or a filter node passes through [`normalize`]
/// exactly once, at insertion time.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too wide for `Int`.
    UInt(u64),
    /// Floating point number (integer-snapped, at most three fractional digits).
    Float(f64),
    /// Arbitrary-precision decimal (always two fractional digits).
    Decimal(Decimal),
    /// Boolean flag value.
    Bool(bool),
    /// Canonical wire token of an enumerated constant.
    Alias(&'static str),
    /// Verbatim text.
    Text(String),
}

impl Value {
    /// Render this value into its canonical text.
    pub fn normalize(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => format_float(*v),
            Self::Decimal(v) => format_decimal(*v),
            Self::Bool(v) => v.to_string(),
            Self::Alias(token) => (*token).to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Normalize an optional value. `None` stays `None`.
pub fn normalize(value: Option<Value>) -> Option<String> {
    value.map(|v| v.normalize())
}

fn format_float(v: f64) -> String {
    let floor = v.floor();
    if (v - floor).abs() < INTEGER_EPSILON {
        // `+ 0.0` folds negative zero so it never renders as "-0".
        return format!("{:.0}", floor + 0.0);
    }
    let natural = v.to_string();
    let fraction_digits = natural.split_once('.').map_or(0, |(_, frac)| frac.len());
    if fraction_digits <= MAX_FRACTION_DIGITS {
        return natural;
    }
    // Exact binary ties (0.0625) round half-up, matching the decimal rule.
    match Decimal::from_f64_retain(v) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(
                MAX_FRACTION_DIGITS as u32,
                RoundingStrategy::MidpointAwayFromZero,
            );
            rounded.rescale(MAX_FRACTION_DIGITS as u32);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.to_string()
        }
        None => format!("{v:.3}"),
    }
}

fn format_decimal(v: Decimal) -> String {
    let mut rounded = v.round_dp_with_strategy(DECIMAL_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_SCALE);
    rounded.to_string()
}

macro_rules! value_from_int {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(<$wide>::from(v))
                }
            }
        )+
    };
}

value_from_int!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
value_from_int!(UInt as u64: u64);

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<&std::path::Path> for Value {
    fn from(v: &std::path::Path) -> Self {
        Self::Text(v.display().to_string())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalize())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/normalize.rs"]
mod tests;
