use colored::{Color, ColoredString, Colorize};
use log::Level;

pub fn base(level: log::LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new().level(level)
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Blue,
        Level::Debug => Color::Magenta,
        Level::Trace => Color::Green,
    }
}

/// Formats records as `<level>: <message>` and sends them to stderr, leaving
/// stdout to the flag string.
pub fn stderr(base: fern::Dispatch) -> fern::Dispatch {
    base.format(move |out, message, record| {
        let level = record.level();
        out.finish(format_args!(
            "{} {}",
            ColoredString::from((level.to_string().to_lowercase() + ":").as_str())
                .color(level_color(level)),
            message
        ))
    })
    .chain(std::io::stderr())
}

pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    stderr(base(level)).apply()
}
