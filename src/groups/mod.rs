use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::errors::{LookupError, LookupErrorKind};
use crate::options::{self, BuildType, Language};
use crate::target::Compiler;

/// A CMake variable whose value can be generated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OutputGroup {
    /// `CMAKE_<LANG>_FLAGS`
    Flags(Language),
    /// `CMAKE_<LANG>_FLAGS_<CONFIG>`
    ConfigFlags(Language, BuildType),
    /// `CMAKE_EXE_LINKER_FLAGS`
    ExeLinkerFlags,
}

impl OutputGroup {
    pub fn available() -> Vec<OutputGroup> {
        let mut groups = vec![];
        for language in Language::available() {
            groups.push(OutputGroup::Flags(language));
            for build_type in BuildType::cmake_configurations() {
                groups.push(OutputGroup::ConfigFlags(language, build_type));
            }
        }
        groups.push(OutputGroup::ExeLinkerFlags);
        groups
    }

    pub fn name(&self) -> String {
        match self {
            OutputGroup::Flags(language) => format!("CMAKE_{}_FLAGS", language),
            OutputGroup::ConfigFlags(language, build_type) => {
                format!("CMAKE_{}_FLAGS_{}", language, build_type)
            }
            OutputGroup::ExeLinkerFlags => "CMAKE_EXE_LINKER_FLAGS".to_string(),
        }
    }

    /// The value of this variable for `compiler`, flags separated by single
    /// spaces. Per-configuration groups depend only on the build type.
    pub fn render(&self, compiler: Compiler, strict: bool) -> String {
        match *self {
            OutputGroup::Flags(language) => {
                options::compile_flags(compiler, language, strict)
                    .iter()
                    .join(" ")
            }
            OutputGroup::ConfigFlags(_, build_type) => {
                options::build_type_flags(build_type).iter().join(" ")
            }
            OutputGroup::ExeLinkerFlags => options::linker_flag(compiler).to_string(),
        }
    }
}

impl fmt::Display for OutputGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for OutputGroup {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<OutputGroup, Self::Err> {
        OutputGroup::available()
            .into_iter()
            .find(|group| group.name() == s)
            .ok_or_else(|| LookupError::new(LookupErrorKind::OutputGroup, s))
    }
}

#[cfg(test)]
mod tests {
    use super::OutputGroup;
    use crate::options::{self, BuildType, Language};
    use crate::target::Compiler;

    #[test]
    fn available_groups_in_order() {
        let names = OutputGroup::available()
            .iter()
            .map(OutputGroup::name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "CMAKE_C_FLAGS",
                "CMAKE_C_FLAGS_DEBUG",
                "CMAKE_C_FLAGS_RELEASE",
                "CMAKE_C_FLAGS_RELWITHDEBINFO",
                "CMAKE_C_FLAGS_MINSIZEREL",
                "CMAKE_CXX_FLAGS",
                "CMAKE_CXX_FLAGS_DEBUG",
                "CMAKE_CXX_FLAGS_RELEASE",
                "CMAKE_CXX_FLAGS_RELWITHDEBINFO",
                "CMAKE_CXX_FLAGS_MINSIZEREL",
                "CMAKE_EXE_LINKER_FLAGS",
            ]
        );
    }

    #[test]
    fn parses_exact_names_only() {
        assert_eq!(
            "CMAKE_CXX_FLAGS_MINSIZEREL".parse::<OutputGroup>().unwrap(),
            OutputGroup::ConfigFlags(Language::Cxx, BuildType::MinSizeRel)
        );
        assert!("cmake_c_flags".parse::<OutputGroup>().is_err());
        assert!("CMAKE_C_FLAGS_NONE".parse::<OutputGroup>().is_err());
        assert!("CMAKE_SHARED_LINKER_FLAGS".parse::<OutputGroup>().is_err());
    }

    #[test]
    fn renders_linker_flag() {
        let group = OutputGroup::ExeLinkerFlags;
        assert_eq!(group.render(Compiler::Gcc, true), "");
        assert_eq!(group.render(Compiler::Clang, true), "-fuse-ld=lld");
    }

    #[test]
    fn renders_language_flags_space_joined() {
        let rendered = OutputGroup::Flags(Language::Cxx).render(Compiler::Gcc, true);
        assert!(rendered.starts_with("-Wall -Wconversion "));
        assert!(rendered.ends_with(
            "-Wold-style-cast -Wlogical-op -Wstrict-null-sentinel -Wnoexcept"
        ));
        assert!(!rendered.contains("  "));
        assert_eq!(
            rendered,
            options::compile_flags(Compiler::Gcc, Language::Cxx, true).join(" ")
        );
    }

    #[test]
    fn config_groups_ignore_compiler_and_language() {
        for build_type in BuildType::cmake_configurations() {
            let c = OutputGroup::ConfigFlags(Language::C, build_type);
            let cxx = OutputGroup::ConfigFlags(Language::Cxx, build_type);
            assert_eq!(c.render(Compiler::Gcc, true), cxx.render(Compiler::Clang, false));
        }
        assert_eq!(
            OutputGroup::ConfigFlags(Language::C, BuildType::RelWithDebInfo)
                .render(Compiler::Gcc, true),
            "-O2 -g -DNDEBUG"
        );
    }
}
