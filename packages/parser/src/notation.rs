use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three notations an expression can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `a + b`
    Infix,
    /// `a b +` (reverse Polish)
    Postfix,
    /// `+ a b` (Polish)
    Prefix,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Infix, Notation::Postfix, Notation::Prefix];

    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Infix => "infix",
            Notation::Postfix => "postfix",
            Notation::Prefix => "prefix",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown Notation '{0}'")]
pub struct UnknownNotation(pub String);

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infix" => Ok(Notation::Infix),
            "postfix" => Ok(Notation::Postfix),
            "prefix" => Ok(Notation::Prefix),
            _ => Err(UnknownNotation(s.to_string())),
        }
    }
}
