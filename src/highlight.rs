use inksac::prelude::*;

/// Colored rendering for the editor line and for diagnostics, degrading to
/// plain text when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    enabled: bool,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            enabled: !matches!(support, ColorSupport::NoColor),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Command name in cyan, flags in yellow, everything else untouched.
    pub fn command_line(&self, input: &str) -> String {
        if !self.enabled {
            return input.to_string();
        }

        let mut parts: Vec<String> = input.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return input.to_string();
        }

        let name_style = Style::builder().foreground(Color::Cyan).bold().build();
        let painted_name = self.paint(&parts[0], name_style);
        parts[0] = painted_name;

        for part in parts.iter_mut().skip(1) {
            if part.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                let painted = self.paint(part, flag_style);
                *part = painted;
            }
        }

        parts.join(" ")
    }

    pub fn error(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Red).bold().build();
        self.paint(text, style)
    }

    pub fn hint(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::RGB(128, 128, 128)).build();
        self.paint(text, style)
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
