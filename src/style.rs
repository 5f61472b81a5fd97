//! Kind → class/style mapping.

use colored::Color;
use rustc_hash::FxHashMap;
use syntaxhighlight_scanner::Kind;

use crate::annotator::ansi::sgr_for_color;

/// Default prefix for HTML class names (`kind-keyword`, `kind-string`, ...).
pub const DEFAULT_CLASS_PREFIX: &str = "kind-";

/// Maps each [`Kind`] to the string its format needs: a CSS class for HTML,
/// SGR parameters for ANSI. Kinds without an entry are rendered undecorated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    styles: FxHashMap<Kind, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        StyleMap::default()
    }

    /// `{prefix}{kind}` for every kind except whitespace.
    pub fn html_classes(prefix: &str) -> Self {
        Kind::ALL
            .into_iter()
            .filter(|kind| *kind != Kind::Whitespace)
            .map(|kind| (kind, format!("{prefix}{}", kind.as_str())))
            .collect()
    }

    /// Terminal palette: muted comments, green strings, magenta numbers,
    /// bold blue keywords and yellow operators.
    pub fn ansi_palette() -> Self {
        let mut map = StyleMap::new();
        map.set(Kind::Comment, sgr_for_color(Color::BrightBlack, false));
        map.set(Kind::String, sgr_for_color(Color::Green, false));
        map.set(Kind::Number, sgr_for_color(Color::Magenta, false));
        map.set(Kind::Keyword, sgr_for_color(Color::Blue, true));
        map.set(Kind::Operator, sgr_for_color(Color::Yellow, false));
        map
    }

    /// Set the style for `kind`. An empty style unmaps the kind.
    pub fn set(&mut self, kind: Kind, style: impl Into<String>) {
        let style = style.into();
        if style.is_empty() {
            self.styles.remove(&kind);
        } else {
            self.styles.insert(kind, style);
        }
    }

    pub fn remove(&mut self, kind: Kind) {
        self.styles.remove(&kind);
    }

    pub fn get(&self, kind: Kind) -> Option<&str> {
        self.styles.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Entries in [`Kind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Kind, &str)> {
        Kind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|style| (kind, style)))
    }
}

impl FromIterator<(Kind, String)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (Kind, String)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (kind, style) in iter {
            map.set(kind, style);
        }
        map
    }
}
