use std::error::Error;
use std::fmt;

pub type LookupResult<T = ()> = Result<T, LookupError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LookupErrorKind {
    Compiler,
    BuildType,
    Language,
    OutputGroup,
}

impl LookupErrorKind {
    fn noun(&self) -> &'static str {
        match self {
            LookupErrorKind::Compiler => "compiler",
            LookupErrorKind::BuildType => "build type",
            LookupErrorKind::Language => "language",
            LookupErrorKind::OutputGroup => "output group",
        }
    }
}

impl fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error", self.noun())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupError {
    pub key: String,
    pub kind: LookupErrorKind,
}

impl LookupError {
    pub fn new<S: Into<String>>(kind: LookupErrorKind, key: S) -> LookupError {
        LookupError {
            key: key.into(),
            kind,
        }
    }

    pub fn message(&self) -> String {
        format!("`{}` is not a valid {}", self.key, self.kind.noun())
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message())
    }
}

impl Error for LookupError {}
