use std::fmt::{Display, Formatter, Result as FmtResult};

/// Execution mode of the site build.
///
/// Only [`Mode::Production`] enables cache busting. Any mode name other than
/// `production` is treated as development, including values that environment
/// parsers read as numbers or booleans (`ELEVENTY_ENV=1`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "String"))]
pub enum Mode {
    #[default]
    Development,
    Production,
}
impl Mode {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}
impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value.trim().eq_ignore_ascii_case("production") {
            true => Self::Production,
            false => Self::Development,
        }
    }
}
impl From<String> for Mode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
mod de {
    use super::Mode;
    use serde::de::{Deserialize, Deserializer, Error, Visitor};
    use std::fmt::{Formatter, Result as FmtResult};

    struct ModeVisitor;
    impl Visitor<'_> for ModeVisitor {
        type Value = Mode;

        fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
            f.write_str("a build mode name")
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Mode, E> {
            Ok(Mode::from(value))
        }

        fn visit_bool<E: Error>(self, _: bool) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_i64<E: Error>(self, _: i64) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_u64<E: Error>(self, _: u64) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_i128<E: Error>(self, _: i128) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_u128<E: Error>(self, _: u128) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_f64<E: Error>(self, _: f64) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_char<E: Error>(self, _: char) -> Result<Mode, E> {
            Ok(Mode::Development)
        }

        fn visit_unit<E: Error>(self) -> Result<Mode, E> {
            Ok(Mode::Development)
        }
    }

    impl<'de> Deserialize<'de> for Mode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ModeVisitor)
        }
    }
}
