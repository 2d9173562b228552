//! The hand-curated flag lists. Order within every list is significant and
//! is preserved verbatim in the emitted flag strings.

pub const DEBUG: &[&str] = &[
    // only useful without -O3, which inlines aggressively
    "-Winline",
    "-g",
];

pub const RELEASE: &[&str] = &["-O3", "-DNDEBUG"];

pub const RELWITHDEBINFO: &[&str] = &["-O2", "-g", "-DNDEBUG"];

pub const MINSIZEREL: &[&str] = &["-Os", "-DNDEBUG"];

/// Conan's `None` build type, which adds nothing.
pub const NONE: &[&str] = &[];

pub const GCC_C: &[&str] = &["-Wlogical-op"];

pub const GCC_CXX: &[&str] = &["-Wlogical-op", "-Wstrict-null-sentinel", "-Wnoexcept"];

/// Empty selects the toolchain's default linker.
/// Alternatives: `-fuse-ld=bfd`, `-fuse-ld=gold`, `-fuse-ld=lld`.
pub const GCC_LINKER: &str = "";

pub const CLANG_C: &[&str] = &["-Wextra-semi", "-Wextra-semi-stmt"];

pub const CLANG_CXX: &[&str] = &["-Wextra-semi", "-Wextra-semi-stmt"];

pub const CLANG_LINKER: &str = "-fuse-ld=lld";

pub const LANG_C: &[&str] = &[];

pub const LANG_CXX: &[&str] = &[
    "-Wctor-dtor-privacy",
    "-Wsign-promo",
    "-Woverloaded-virtual",
    "-Wold-style-cast",
];

/// Prepended to `GENERAL` in strict mode.
pub const GENERAL_STRICT: &[&str] = &[
    // "-Werror",
];

pub const GENERAL: &[&str] = &[
    "-Wall",
    "-Wconversion",
    "-Wfloat-equal",
    "-Wpedantic",
    "-Wpointer-arith",
    // "-Wswitch-enum" is too noisy with default labels
    "-Wswitch-default",
    "-Wpacked",
    "-Wextra",
    "-Winvalid-pch",
    "-Wmissing-field-initializers",
    "-Wunreachable-code",
    "-Wcast-align",
    "-Wcast-qual",
    "-Wdisabled-optimization",
    "-Wformat=2",
    "-Wformat-nonliteral",
    "-Wuninitialized",
    "-Wformat-security",
    "-Wformat-y2k",
    "-Winit-self",
    "-Wmissing-declarations",
    "-Wmissing-include-dirs",
    "-Wredundant-decls",
    "-Wstrict-overflow=5",
    "-Wundef",
    "-Wno-unused",
];
