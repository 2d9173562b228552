use std::fmt;
use std::str::FromStr;

use crate::errors::{LookupError, LookupErrorKind, LookupResult};
use crate::target::Compiler;

mod table;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
    None,
}

impl BuildType {
    pub fn available() -> Vec<BuildType> {
        vec![
            BuildType::Debug,
            BuildType::Release,
            BuildType::RelWithDebInfo,
            BuildType::MinSizeRel,
            BuildType::None,
        ]
    }

    /// Build types that CMake keeps a per-configuration flags variable for.
    pub fn cmake_configurations() -> Vec<BuildType> {
        vec![
            BuildType::Debug,
            BuildType::Release,
            BuildType::RelWithDebInfo,
            BuildType::MinSizeRel,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "DEBUG",
            BuildType::Release => "RELEASE",
            BuildType::RelWithDebInfo => "RELWITHDEBINFO",
            BuildType::MinSizeRel => "MINSIZEREL",
            BuildType::None => "NONE",
        }
    }

    fn flags(&self) -> &'static [&'static str] {
        match self {
            BuildType::Debug => table::DEBUG,
            BuildType::Release => table::RELEASE,
            BuildType::RelWithDebInfo => table::RELWITHDEBINFO,
            BuildType::MinSizeRel => table::MINSIZEREL,
            BuildType::None => table::NONE,
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<BuildType, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(BuildType::Debug),
            "RELEASE" => Ok(BuildType::Release),
            "RELWITHDEBINFO" => Ok(BuildType::RelWithDebInfo),
            "MINSIZEREL" => Ok(BuildType::MinSizeRel),
            "NONE" => Ok(BuildType::None),
            _ => Err(LookupError::new(LookupErrorKind::BuildType, s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    C,
    Cxx,
}

impl Language {
    pub fn available() -> Vec<Language> {
        vec![Language::C, Language::Cxx]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cxx => "CXX",
        }
    }

    fn flags(&self) -> &'static [&'static str] {
        match self {
            Language::C => table::LANG_C,
            Language::Cxx => table::LANG_CXX,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Language, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" => Ok(Language::C),
            "CXX" => Ok(Language::Cxx),
            _ => Err(LookupError::new(LookupErrorKind::Language, s)),
        }
    }
}

fn target_flags(compiler: Compiler, language: Language) -> &'static [&'static str] {
    match (compiler, language) {
        (Compiler::Gcc, Language::C) => table::GCC_C,
        (Compiler::Gcc, Language::Cxx) => table::GCC_CXX,
        (Compiler::Clang, Language::C) => table::CLANG_C,
        (Compiler::Clang, Language::Cxx) => table::CLANG_CXX,
    }
}

/// Flags shared by every compiler and language. Strict mode prepends the
/// strict-only flags.
pub fn general(strict: bool) -> Vec<&'static str> {
    if strict {
        table::GENERAL_STRICT
            .iter()
            .chain(table::GENERAL)
            .copied()
            .collect()
    } else {
        table::GENERAL.to_vec()
    }
}

/// Flags that apply regardless of build type: general, then language, then
/// compiler-and-language specific.
pub fn compile_flags(compiler: Compiler, language: Language, strict: bool) -> Vec<&'static str> {
    let mut flags = general(strict);
    flags.extend_from_slice(language.flags());
    flags.extend_from_slice(target_flags(compiler, language));
    flags
}

pub fn build_type_flags(build_type: BuildType) -> Vec<&'static str> {
    build_type.flags().to_vec()
}

/// The single linker selection flag for `compiler`. Empty means the default
/// linker.
pub fn linker_flag(compiler: Compiler) -> &'static str {
    match compiler {
        Compiler::Gcc => table::GCC_LINKER,
        Compiler::Clang => table::CLANG_LINKER,
    }
}

/// The full flag list for one compiler, build type and language.
pub fn get_options_for(
    compiler: Compiler,
    build_type: BuildType,
    language: Language,
    strict: bool,
) -> Vec<&'static str> {
    log::debug!(
        "options for compiler={} build_type={} language={} strict={}",
        compiler,
        build_type,
        language,
        strict
    );
    let mut flags = compile_flags(compiler, language, strict);
    flags.extend_from_slice(build_type.flags());
    flags
}

pub fn get_cxx_options_for(
    compiler: Compiler,
    build_type: BuildType,
    strict: bool,
) -> Vec<&'static str> {
    get_options_for(compiler, build_type, Language::Cxx, strict)
}

pub fn get_c_options_for(
    compiler: Compiler,
    build_type: BuildType,
    strict: bool,
) -> Vec<&'static str> {
    get_options_for(compiler, build_type, Language::C, strict)
}

/// String-keyed variant of [`get_options_for`]. Keys are matched without
/// regard to case; the first unknown key is reported.
pub fn lookup(
    compiler: &str,
    build_type: &str,
    language: &str,
    strict: bool,
) -> LookupResult<Vec<&'static str>> {
    let compiler = compiler.parse::<Compiler>()?;
    let build_type = build_type.parse::<BuildType>()?;
    let language = language.parse::<Language>()?;
    Ok(get_options_for(compiler, build_type, language, strict))
}
