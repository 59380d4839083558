//! Terminal color helpers.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(
        no_color_flag || std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal(),
    );
}

pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[90m";
}

pub struct Colors;

fn wrap_with_ansi(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len() + codes::RESET.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}

impl Colors {
    pub fn error(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, codes::RED)
        }
    }

    pub fn dim(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, codes::DIM)
        }
    }

    /// Truecolor background swatch; falls back to `fallback` when colors
    /// are disabled.
    pub fn swatch(rgb: (u8, u8, u8), text: &str, fallback: &str) -> String {
        if is_disabled() {
            fallback.to_string()
        } else {
            let (r, g, b) = rgb;
            wrap_with_ansi(text, &format!("\x1b[48;2;{r};{g};{b}m"))
        }
    }
}
