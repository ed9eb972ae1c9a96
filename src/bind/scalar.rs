//! Conversions from scalar text to typed field values.

use std::path::PathBuf;

/// A field type that can be assigned from a configuration scalar.
///
/// Strings take the scalar unmodified; other types parse its textual form.
pub trait FromScalar: Sized {
    /// Name of the expected value, used in diagnostics.
    const EXPECTED: &'static str;

    /// Convert the scalar text, or explain why it cannot be converted.
    fn from_scalar(text: &str) -> Result<Self, String>;

    /// Value to assign for an empty (`~`) scalar, if the type has one.
    fn from_null() -> Option<Self> {
        None
    }
}

impl FromScalar for String {
    const EXPECTED: &'static str = "string";

    fn from_scalar(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

impl FromScalar for PathBuf {
    const EXPECTED: &'static str = "path";

    fn from_scalar(text: &str) -> Result<Self, String> {
        Ok(PathBuf::from(text))
    }
}

impl FromScalar for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_scalar(text: &str) -> Result<Self, String> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => Ok(true),
            "false" | "no" | "off" => Ok(false),
            _ => Err("expected true or false".to_string()),
        }
    }
}

macro_rules! from_scalar_via_parse {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromScalar for $ty {
                const EXPECTED: &'static str = $name;

                fn from_scalar(text: &str) -> Result<Self, String> {
                    text.trim().parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

from_scalar_via_parse! {
    i32 => "integer",
    i64 => "integer",
    u8 => "unsigned integer",
    u16 => "unsigned integer",
    u32 => "unsigned integer",
    u64 => "unsigned integer",
    usize => "unsigned integer",
    f32 => "number",
    f64 => "number",
}

impl<T: FromScalar> FromScalar for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_scalar(text: &str) -> Result<Self, String> {
        T::from_scalar(text).map(Some)
    }

    fn from_null() -> Option<Self> {
        Some(None)
    }
}
