//! Natural-language request parsing - "2 cups to ml", "how many ml in 3 tsp"

use std::fmt;
use std::sync::LazyLock;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;
use lethimcook_core::ConversionError;
use crate::convert::convert;

/// Which request phrasing matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// `<number> <unit> to|in <unit>`
    ValueFirst,
    /// `convert <number> <unit> to <unit>`
    Convert,
    /// `how many <unit> in <number> <unit>`
    HowMany,
}

/// A request phrasing and where its value and unit phrases sit
struct Grammar {
    pattern: Pattern,
    regex: Regex,
    value: usize,
    from: usize,
    to: usize,
}

impl Grammar {
    fn new(pattern: Pattern, regex: &str, value: usize, from: usize, to: usize) -> Self {
        Grammar {
            pattern,
            regex: Regex::new(regex).expect("request grammar is a valid regex"),
            value,
            from,
            to,
        }
    }

    fn extract<'t>(&self, caps: &Captures<'t>) -> (&'t str, &'t str, &'t str) {
        let group = |i: usize| -> &'t str { caps.get(i).map_or("", |m| m.as_str()) };
        (group(self.value), group(self.from), group(self.to))
    }
}

/// Tried strictly in this order; the first match wins.
/// ValueFirst cannot match text starting with "convert", so Convert is
/// only reached for those requests.
static GRAMMARS: LazyLock<[Grammar; 3]> = LazyLock::new(|| [
    Grammar::new(
        Pattern::ValueFirst,
        r"^([0-9]+\.?[0-9]*)\s+([a-z\s]+?)\s+(?:to|in)\s+([a-z\s]+)",
        1, 2, 3,
    ),
    Grammar::new(
        Pattern::Convert,
        r"^convert\s+([0-9]+\.?[0-9]*)\s+([a-z\s]+?)\s+to\s+([a-z\s]+)",
        1, 2, 3,
    ),
    // Target unit comes first in this phrasing
    Grammar::new(
        Pattern::HowMany,
        r"^how\s+many\s+([a-z\s]+?)\s+in\s+([0-9]+\.?[0-9]*)\s+([a-z\s]+)",
        2, 3, 1,
    ),
]);

/// Value and unit phrases pulled out of a request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub pattern: Pattern,
}

/// A parsed request together with its converted value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NaturalConversion {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub result: f64,
}

impl fmt::Display for NaturalConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            format_number(self.request.value),
            self.request.from_unit,
            self.result,
            self.request.to_unit
        )
    }
}

/// Whole numbers print without a decimal part
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Parse a request without converting it
pub fn parse_request(text: &str) -> Result<ConversionRequest, ConversionError> {
    let normalized = text.trim().to_lowercase();
    let unparsable = || ConversionError::UnparsableInput(text.to_string());

    for grammar in GRAMMARS.iter() {
        let Some(caps) = grammar.regex.captures(&normalized) else {
            continue;
        };

        let (value, from, to) = grammar.extract(&caps);
        let value: f64 = value.parse().map_err(|_| unparsable())?;
        let request = ConversionRequest {
            value,
            from_unit: from.trim().to_string(),
            to_unit: to.trim().to_string(),
            pattern: grammar.pattern,
        };

        debug!(pattern = ?request.pattern, value, from = %request.from_unit, to = %request.to_unit, "parsed request");
        return Ok(request);
    }

    Err(unparsable())
}

/// Parse a request and run the conversion
pub fn natural_conversion(text: &str) -> Result<NaturalConversion, ConversionError> {
    let request = parse_request(text)?;
    let result = convert(request.value, &request.from_unit, &request.to_unit)?;
    Ok(NaturalConversion { request, result })
}

/// Convert using natural language, returning a readable sentence
///
/// ```
/// let sentence = lethimcook_units::convert_natural("2 cups to ml").unwrap();
/// assert_eq!(sentence, "2 cups = 473.18 ml");
/// ```
pub fn convert_natural(text: &str) -> Result<String, ConversionError> {
    natural_conversion(text).map(|c| c.to_string())
}
