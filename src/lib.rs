#[macro_use]
extern crate lazy_static;

pub mod cli;
pub mod errors;
pub mod groups;
pub mod logger;
pub mod options;
pub mod target;

pub use groups::OutputGroup;
pub use options::{
    get_c_options_for, get_cxx_options_for, get_options_for, lookup, BuildType, Language,
};
pub use target::Compiler;
