//! LaTeX to Unicode conversion.
//!
//! The extractor only talks to the [`LatexConverter`] trait: detect
//! presence, convert every delimited occurrence in running text, and
//! convert a bare expression. [`UnicodeLatex`] is the built-in
//! implementation; callers with a richer converter pass their own through
//! [`crate::parse_with_converter`].

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Pure text conversion interface for LaTeX math.
pub trait LatexConverter: Send + Sync {
    /// Whether `text` contains delimited LaTeX math.
    fn contains_latex(&self, text: &str) -> bool;

    /// Replace every delimited LaTeX occurrence in `text`.
    fn process_text(&self, text: &str) -> String;

    /// Convert a bare expression (no delimiters).
    fn to_unicode(&self, latex: &str) -> String;
}

/// `$$..$$`, `\[..\]`, `\(..\)` and `$..$` spans, display forms first.
#[allow(clippy::expect_used)]
static DELIMITED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\$\$(.+?)\$\$|\\\[(.+?)\\\]|\\\((.+?)\\\)|\$([^\$\s](?:[^\$]*?[^\$\s])?)\$")
        .expect("DELIMITED regex")
});

#[allow(clippy::expect_used)]
static FRAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\[dt]?frac\{([^{}]*)\}\{([^{}]*)\}").expect("FRAC regex")
});

#[allow(clippy::expect_used)]
static SQRT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\sqrt\{([^{}]*)\}").expect("SQRT regex"));

#[allow(clippy::expect_used)]
static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\^_])(?:\{([^{}]*)\}|(\S))").expect("SCRIPT regex"));

#[allow(clippy::expect_used)]
static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([A-Za-z]+)\s?").expect("COMMAND regex"));

/// Command name to symbol.
const SYMBOLS: &[(&str, &str)] = &[
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("delta", "δ"),
    ("epsilon", "ε"),
    ("varepsilon", "ε"),
    ("zeta", "ζ"),
    ("eta", "η"),
    ("theta", "θ"),
    ("iota", "ι"),
    ("kappa", "κ"),
    ("lambda", "λ"),
    ("mu", "μ"),
    ("nu", "ν"),
    ("xi", "ξ"),
    ("pi", "π"),
    ("rho", "ρ"),
    ("sigma", "σ"),
    ("tau", "τ"),
    ("phi", "φ"),
    ("varphi", "φ"),
    ("chi", "χ"),
    ("psi", "ψ"),
    ("omega", "ω"),
    ("Gamma", "Γ"),
    ("Delta", "Δ"),
    ("Theta", "Θ"),
    ("Lambda", "Λ"),
    ("Pi", "Π"),
    ("Sigma", "Σ"),
    ("Phi", "Φ"),
    ("Psi", "Ψ"),
    ("Omega", "Ω"),
    ("times", "×"),
    ("cdot", "·"),
    ("div", "÷"),
    ("pm", "±"),
    ("mp", "∓"),
    ("leq", "≤"),
    ("le", "≤"),
    ("geq", "≥"),
    ("ge", "≥"),
    ("neq", "≠"),
    ("ne", "≠"),
    ("approx", "≈"),
    ("equiv", "≡"),
    ("sim", "∼"),
    ("infty", "∞"),
    ("sum", "∑"),
    ("prod", "∏"),
    ("int", "∫"),
    ("partial", "∂"),
    ("nabla", "∇"),
    ("in", "∈"),
    ("notin", "∉"),
    ("subset", "⊂"),
    ("subseteq", "⊆"),
    ("cup", "∪"),
    ("cap", "∩"),
    ("forall", "∀"),
    ("exists", "∃"),
    ("emptyset", "∅"),
    ("to", "→"),
    ("rightarrow", "→"),
    ("leftarrow", "←"),
    ("Rightarrow", "⇒"),
    ("Leftrightarrow", "⇔"),
    ("mapsto", "↦"),
    ("ldots", "…"),
    ("cdots", "⋯"),
    ("quad", " "),
    ("qquad", "  "),
    ("left", ""),
    ("right", ""),
    ("mathrm", ""),
    ("mathbf", ""),
    ("mathit", ""),
    ("text", ""),
    ("operatorname", ""),
];

const SUPERSCRIPTS: &[(char, char)] = &[
    ('0', '⁰'),
    ('1', '¹'),
    ('2', '²'),
    ('3', '³'),
    ('4', '⁴'),
    ('5', '⁵'),
    ('6', '⁶'),
    ('7', '⁷'),
    ('8', '⁸'),
    ('9', '⁹'),
    ('+', '⁺'),
    ('-', '⁻'),
    ('=', '⁼'),
    ('(', '⁽'),
    (')', '⁾'),
    ('n', 'ⁿ'),
    ('i', 'ⁱ'),
];

const SUBSCRIPTS: &[(char, char)] = &[
    ('0', '₀'),
    ('1', '₁'),
    ('2', '₂'),
    ('3', '₃'),
    ('4', '₄'),
    ('5', '₅'),
    ('6', '₆'),
    ('7', '₇'),
    ('8', '₈'),
    ('9', '₉'),
    ('+', '₊'),
    ('-', '₋'),
    ('=', '₌'),
    ('(', '₍'),
    (')', '₎'),
];

/// Built-in converter: Greek letters, common operators, fractions, roots
/// and digit super/subscripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeLatex;

impl LatexConverter for UnicodeLatex {
    fn contains_latex(&self, text: &str) -> bool {
        DELIMITED.is_match(text)
    }

    fn process_text(&self, text: &str) -> String {
        DELIMITED
            .replace_all(text, |caps: &Captures| {
                let inner = (1..=4)
                    .find_map(|i| caps.get(i))
                    .map_or("", |m| m.as_str());
                self.to_unicode(inner)
            })
            .into_owned()
    }

    fn to_unicode(&self, latex: &str) -> String {
        let mut out = latex.trim().to_string();
        // Innermost-first so nested fractions unwind.
        while FRAC.is_match(&out) {
            out = FRAC
                .replace_all(&out, |c: &Captures| format!("{}/{}", wrap(&c[1]), wrap(&c[2])))
                .into_owned();
        }
        out = SQRT.replace_all(&out, |c: &Captures| format!("√{}", wrap(&c[1]))).into_owned();
        out = COMMAND
            .replace_all(&out, |c: &Captures| {
                let name = &c[1];
                SYMBOLS
                    .iter()
                    .find(|(cmd, _)| *cmd == name)
                    .map_or_else(|| c[0].to_string(), |(_, sym)| (*sym).to_string())
            })
            .into_owned();
        out = SCRIPT
            .replace_all(&out, |c: &Captures| {
                let body = c.get(2).or_else(|| c.get(3)).map_or("", |m| m.as_str());
                let table = if &c[1] == "^" { SUPERSCRIPTS } else { SUBSCRIPTS };
                map_script(body, table).unwrap_or_else(|| format!("{}({body})", &c[1]))
            })
            .into_owned();
        out.replace(['{', '}'], "")
    }
}

/// Parenthesize multi-character operands of `/`.
fn wrap(operand: &str) -> String {
    let operand = operand.trim();
    if operand.chars().count() > 1 && operand.contains([' ', '+', '-']) {
        format!("({operand})")
    } else {
        operand.to_string()
    }
}

fn map_script(body: &str, table: &[(char, char)]) -> Option<String> {
    body.chars()
        .map(|ch| table.iter().find(|(from, _)| *from == ch).map(|(_, to)| *to))
        .collect()
}
