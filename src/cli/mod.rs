use crate::groups::OutputGroup;
use crate::logger;
use crate::target::Compiler;

use clap::AppSettings;
use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};
use std::process;
use structopt::StructOpt;

lazy_static! {
    static ref COMPILER_NAMES: Vec<&'static str> =
        Compiler::available().iter().map(Compiler::as_str).collect();
    static ref GROUP_NAMES: Vec<String> =
        OutputGroup::available().iter().map(OutputGroup::name).collect();
    static ref GROUP_NAME_REFS: Vec<&'static str> =
        GROUP_NAMES.iter().map(String::as_str).collect();
    static ref GROUP_HELP: String =
        format!("Possible choice of <group>:\n{}", GROUP_NAMES.join("\n"));
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "compiler-options",
    about = "Prints the compiler flags for a CMake flags variable",
    global_settings = &[AppSettings::ColoredHelp]
)]
pub struct Cli {
    #[structopt(
        short,
        long,
        help = "Type of the compiler",
        possible_values = COMPILER_NAMES.as_slice()
    )]
    compiler: Compiler,

    #[structopt(
        short,
        long,
        value_name = "group",
        help = "CMake variable to generate",
        long_help = GROUP_HELP.as_str(),
        possible_values = GROUP_NAME_REFS.as_slice(),
        hide_possible_values = true
    )]
    output: OutputGroup,

    #[structopt(
        short,
        long,
        help = "Relax general options (e.g. without -Werror)"
    )]
    relaxed: bool,

    #[structopt(
        long, env = "LOG_LEVEL",
        help = "Sets the log level",
        default_value = "warn",
        possible_values = &["off", "error", "warn", "info", "debug"]
    )]
    log_level: log::LevelFilter,
}

impl Cli {
    pub fn strict(&self) -> bool {
        !self.relaxed
    }

    /// The flag string to print.
    pub fn render(&self) -> String {
        log::debug!(
            "rendering {} for {} (strict: {})",
            self.output,
            self.compiler,
            self.strict()
        );
        self.output.render(self.compiler, self.strict())
    }
}

pub struct CmdError {
    msg: String,
}

impl<E: Error> From<E> for CmdError {
    fn from(e: E) -> Self {
        CmdError { msg: e.to_string() }
    }
}

fn write_flags(flags: &str) -> Result<(), CmdError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(flags.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn run() {
    // arguments are validated here, before any lookup
    let cli: Cli = Cli::from_args();

    if let Err(err) = logger::init(cli.log_level) {
        eprintln!("{} {}", "warning:".yellow(), err);
    }

    let flags = cli.render();
    log::info!("{} = \"{}\"", cli.output, flags);

    if let Err(err) = write_flags(&flags) {
        eprintln!("{} {}", "error:".red(), err.msg);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::groups::OutputGroup;
    use crate::options::{BuildType, Language};
    use crate::target::Compiler;
    use clap::ErrorKind;
    use structopt::StructOpt;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::from_iter_safe(std::iter::once("compiler-options").chain(args.iter().copied()))
    }

    #[test]
    fn parses_short_flags() {
        let cli = parse(&["-c", "clang", "-o", "CMAKE_CXX_FLAGS_DEBUG", "-r"]).unwrap();
        assert_eq!(cli.compiler, Compiler::Clang);
        assert_eq!(
            cli.output,
            OutputGroup::ConfigFlags(Language::Cxx, BuildType::Debug)
        );
        assert!(!cli.strict());
    }

    #[test]
    fn strict_by_default() {
        let cli = parse(&["--compiler", "gcc", "--output", "CMAKE_C_FLAGS"]).unwrap();
        assert!(cli.strict());
        assert_eq!(cli.render(), OutputGroup::Flags(Language::C).render(Compiler::Gcc, true));
    }

    #[test]
    fn compiler_and_output_are_required() {
        let err = parse(&["-o", "CMAKE_C_FLAGS"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredArgument);
        let err = parse(&["-c", "gcc"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_values_outside_the_choices() {
        for args in &[
            ["-c", "msvc", "-o", "CMAKE_C_FLAGS"],
            ["-c", "GCC", "-o", "CMAKE_C_FLAGS"],
            ["-c", "gcc", "-o", "CMAKE_Fortran_FLAGS"],
        ] {
            let err = parse(args).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidValue);
        }
    }
}
