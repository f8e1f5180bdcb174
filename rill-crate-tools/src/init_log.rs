use std::io::Write;

fn level_color(level: log::Level) -> Option<anstyle::Color> {
    match level {
        log::Level::Error => Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)),
        log::Level::Warn => Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow)),
        log::Level::Info => Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green)),
        _ => None,
    }
}

pub fn init_log() {
    env_logger::Builder::new()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level()).fg_color(level_color(record.level()));
            let grey_style =
                anstyle::Style::new().fg_color(Some(anstyle::Color::Rgb(anstyle::RgbColor(110, 110, 110))));

            let time = chrono::Local::now().format("%H:%M:%S");
            let module = record.module_path().unwrap_or("");
            let level = record.level();

            writeln!(
                buf,
                "{level_style}[{time}] {level}{level_style:#} {grey_style}[{module}]{grey_style:#} {}",
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();
}
