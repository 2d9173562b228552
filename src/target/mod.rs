use std::fmt;
use std::str::FromStr;

use crate::errors::{LookupError, LookupErrorKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Compiler {
    Gcc,
    Clang,
}

impl Compiler {
    pub fn available() -> Vec<Compiler> {
        vec![Compiler::Gcc, Compiler::Clang]
    }

    /// The spelling accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Compiler::Gcc => "gcc",
            Compiler::Clang => "clang",
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compiler {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Compiler, Self::Err> {
        match s.to_uppercase().as_str() {
            "GCC" => Ok(Compiler::Gcc),
            "CLANG" => Ok(Compiler::Clang),
            _ => Err(LookupError::new(LookupErrorKind::Compiler, s)),
        }
    }
}
