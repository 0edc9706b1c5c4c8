//! Style constants and clap help styling configuration.

use anstyle::{AnsiColor, Effects, Style};

/// Green — success messages.
pub(crate) const SUCCESS: Style =
    Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)));

/// Red — errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));

/// Yellow — warnings.
pub(crate) const WARNING: Style =
    Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)));

/// Bold — label names in "Label: value" pairs.
pub(crate) const LABEL: Style = Style::new().effects(Effects::BOLD);

/// Dimmed — hints and guidance text.
pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

/// Custom clap styles for help output, matching our CLI palette.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let bold_green = Style::new()
        .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)))
        .effects(Effects::BOLD);
    let cyan = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan)));

    clap::builder::Styles::styled()
        .header(bold_green)
        .usage(bold_green)
        .literal(cyan)
        .placeholder(cyan)
        .error(
            Style::new()
                .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
        )
}
