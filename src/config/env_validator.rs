//! Environment variable validation with typo suggestions
//!
//! Invalid `BUILDPREP_*` values never abort a build. They produce a warning,
//! a "did you mean" hint when one is close, and fall back to the value the
//! config file already holds.

use std::io::Write;

/// Validator for one environment variable's accepted values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `fallback` (with a warning on stderr) if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse with a custom writer for the warning
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        fallback: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write + ?Sized,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name,
                    value,
                    self.suggest(value)
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                fallback
            }
        }
    }

    fn suggest(&self, value: &str) -> String {
        match closest(&value.to_lowercase(), self.valid_values) {
            Some(suggested) => format!(". Did you mean '{}'?", suggested),
            None => String::new(),
        }
    }
}

/// Accepted spellings for boolean environment values
pub const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

/// Parse a boolean environment value
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Closest candidate within two edits, excluding exact matches
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let mut best: Option<(&str, usize)> = None;

    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    match best {
        Some((suggested, dist)) if dist > 0 && dist <= 2 => Some(suggested),
        _ => None,
    }
}

/// Byte-wise Levenshtein distance
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
