//! Styles for the roster CLI.
//!
//! Templates refer to semantic style names from [`names`]; the theme below maps them
//! to actual colors. Changing the look means editing this file only.
//!
//! Whether color is used at all is decided per render call, so every style here forces
//! styling and leaves terminal detection to `outstanding`.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

pub mod names {
    pub const HEADER: &str = "header";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const MUTED: &str = "muted";
    pub const TIME: &str = "time";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const WARNING: &str = "warning";
    pub const CONFIG_KEY: &str = "config-key";
    pub const CONFIG_VALUE: &str = "config-value";
}

fn style() -> Style {
    Style::new().force_styling(true)
}

pub static ROSTER_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = style().color256(rgb_to_ansi256((128, 128, 128)));
    let accent = style().color256(rgb_to_ansi256((196, 140, 0)));

    Theme::new()
        .add(names::HEADER, style().bold().underlined())
        .add(names::ID, accent.clone().bold())
        .add(names::NAME, style().bold())
        .add(names::EMAIL, style().cyan())
        .add(names::MUTED, muted.clone())
        .add(names::TIME, muted.clone().italic())
        .add(names::SUCCESS, style().green())
        .add(names::INFO, muted)
        .add(names::WARNING, style().yellow().bold())
        .add(names::CONFIG_KEY, accent)
        .add(names::CONFIG_VALUE, Style::new())
});
