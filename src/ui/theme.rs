use crossterm::style::{Color, Stylize};

/// Design tokens for the ojdrive CLI.
///
/// All colors and icons used in terminal output come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const BUILD: &str = "⚙";
    pub const TRASH: &str = "🗑";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const BUILD: &str = "[BUILD]";
    pub const TRASH: &str = "[DEL]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Build,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Build) => icons::BUILD,
            (true, Icon::Trash) => icons::TRASH,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Build) => icons_ascii::BUILD,
            (false, Icon::Trash) => icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Trash => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Build => colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// Dim secondary text (timings, paths) when color is enabled
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(colors::DIM))
    } else {
        text.to_string()
    }
}
