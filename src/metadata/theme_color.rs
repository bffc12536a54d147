//! Page accent color.
//!
//! Candidates are tried in priority order: `msapplication-TileColor` meta,
//! `<body bgcolor>`, then `theme-color` meta. The first one that parses and
//! is neither near-white nor near-black wins, so pure white and black are
//! never reported.

use dom_query::Document;

use crate::dom;

/// Channel value at or above which every channel counts as near-white.
const NEAR_WHITE: u8 = 240;
/// Channel value at or below which every channel counts as near-black.
const NEAR_BLACK: u8 = 20;

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("purple", (128, 0, 128)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("orange", (255, 165, 0)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("yellow", (255, 255, 0)),
    ("lime", (0, 255, 0)),
    ("aqua", (0, 255, 255)),
    ("fuchsia", (255, 0, 255)),
];

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a basic CSS color name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(args) = value
            .strip_prefix("rgb(")
            .or_else(|| value.strip_prefix("rgba("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let channels: Vec<u8> = args
                .split(',')
                .take(3)
                .filter_map(|c| c.trim().parse::<u8>().ok())
                .collect();
            return match channels[..] {
                [r, g, b] => Some(Self(r, g, b)),
                _ => None,
            };
        }
        if let Some((_, (r, g, b))) = NAMED_COLORS.iter().find(|(name, _)| *name == value) {
            return Some(Self(*r, *g, *b));
        }
        // Legacy bgcolor values are often bare hex digits.
        if value.len() == 6 || value.len() == 3 {
            return Self::parse_hex(&value);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Self(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_near_white(self) -> bool {
        self.0 >= NEAR_WHITE && self.1 >= NEAR_WHITE && self.2 >= NEAR_WHITE
    }

    #[must_use]
    pub fn is_near_black(self) -> bool {
        self.0 <= NEAR_BLACK && self.1 <= NEAR_BLACK && self.2 <= NEAR_BLACK
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Pick the first usable color from candidates given in priority order.
#[must_use]
pub fn choose_theme_color<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Option<String> {
    candidates
        .into_iter()
        .filter_map(Rgb::parse)
        .find(|c| !c.is_near_white() && !c.is_near_black())
        .map(Rgb::to_hex)
}

/// Theme color declared by the page, normalized to `#rrggbb`.
#[must_use]
pub fn extract_theme_color(doc: &Document) -> Option<String> {
    let tile = meta_content(doc, "msapplication-tilecolor");
    let bgcolor = dom::body(doc).and_then(|b| dom::attr_nonempty(&b, "bgcolor"));
    let theme = meta_content(doc, "theme-color");

    let candidates = [tile, bgcolor, theme];
    let chosen = choose_theme_color(candidates.iter().flatten().map(String::as_str));
    tracing::trace!(?candidates, ?chosen, "theme color");
    chosen
}

/// `content` of the first `<meta name=...>` whose name matches case-insensitively.
fn meta_content(doc: &Document, name: &str) -> Option<String> {
    doc.select("meta[name][content]")
        .nodes()
        .iter()
        .find(|node| {
            dom::attr(node, "name").is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
        })
        .and_then(|node| dom::attr_nonempty(node, "content"))
}
