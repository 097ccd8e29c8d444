use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use super::keybindings::Mode;

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Mode, HashMap<String, Style>>);

impl Styles {
    /// Style for `key` in `mode`, falling back to the global table and then
    /// to the default style
    pub fn get_style(&self, mode: Mode, key: &str) -> Style {
        self.0
            .get(&mode)
            .and_then(|styles| styles.get(key))
            .or_else(|| {
                self.0
                    .get(&Mode::Global)
                    .and_then(|styles| styles.get(key))
            })
            .copied()
            .unwrap_or_default()
    }

    pub fn merge_defaults(&mut self, defaults: &Styles) {
        for (mode, default_styles) in defaults.iter() {
            let user_styles = self.entry(*mode).or_default();
            for (style_key, style) in default_styles.iter() {
                user_styles
                    .entry(style_key.clone())
                    .or_insert_with(|| *style);
            }
        }
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Mode, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(mode, inner_map)| {
                let converted_inner_map = inner_map
                    .into_iter()
                    .map(|(str, style)| (str, parse_style(&style)))
                    .collect();
                (mode, converted_inner_map)
            })
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse strings like `bold yellow on black` into a [`Style`].
/// Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lowered = line.to_lowercase();
    let (foreground, background) = lowered
        .split_once(" on ")
        .map_or((lowered.as_str(), ""), |(fg, bg)| (fg, bg));

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Some(color) = parse_color(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.split_whitespace().find_map(parse_color) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    if let Some(index) = word.strip_prefix("color") {
        return index.parse::<u8>().ok().map(Color::Indexed);
    }
    if let Some(level) = word.strip_prefix("gray") {
        return level
            .parse::<u8>()
            .ok()
            .filter(|l| *l < 24)
            .map(|l| Color::Indexed(232 + l));
    }
    if word.starts_with('#') {
        return word.parse::<Color>().ok();
    }
    match word {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}
