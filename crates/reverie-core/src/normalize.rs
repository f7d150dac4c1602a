//! Response normalization: extraction and deterministic text repair.
//!
//! The generator's formatting is treated as untrusted, semi-structured
//! input. Extraction pulls the plain output text out of the Responses
//! payload; repair is an ordered list of tagged line-rewrite rules, not a
//! parser -- new defensive rules are appended to [`REPAIR_RULES`] without
//! disturbing existing ones.

use serde::Deserialize;

use reverie_types::error::GeneratorError;
use reverie_types::section::{CANONICAL_SECTIONS, HEADING_MARKER};

use crate::generator::UpstreamResponse;

/// Substituted when the generator returned no plain output text at all.
pub const FALLBACK_REFLECTION: &str = "No reflection text returned.";

/// Content kind retained during extraction.
const OUTPUT_TEXT_KIND: &str = "output_text";

// ---------------------------------------------------------------------------
// Responses payload shapes
//
// Only the fields extraction needs. Items and parts of other kinds
// (reasoning, refusals) deserialize to defaults and fall out in the filter,
// mirroring how absent fields are skipped rather than rejected.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ResponsesPayload {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Normalize a raw generator response into reflection text.
///
/// A non-success response fails with [`GeneratorError::Api`] carrying the
/// raw body; the body is never parsed in that case. A success body that
/// does not parse as the Responses payload fails with
/// [`GeneratorError::Malformed`].
pub fn normalize(response: &UpstreamResponse) -> Result<String, GeneratorError> {
    if !response.ok {
        return Err(GeneratorError::Api {
            body: response.body.clone(),
        });
    }

    let payload: ResponsesPayload = serde_json::from_str(&response.body)
        .map_err(|e| GeneratorError::Malformed(e.to_string()))?;

    Ok(repair(&extract_output_text(&payload)))
}

/// Flatten the payload's output items to plain text.
///
/// Content parts are filtered to kind `output_text` and their text joined
/// with a blank line between fragments. An empty result substitutes
/// [`FALLBACK_REFLECTION`].
fn extract_output_text(payload: &ResponsesPayload) -> String {
    let joined = payload
        .output
        .iter()
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == OUTPUT_TEXT_KIND)
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    if joined.is_empty() {
        FALLBACK_REFLECTION.to_string()
    } else {
        joined
    }
}

// ---------------------------------------------------------------------------
// Repair rules
// ---------------------------------------------------------------------------

/// A single line-rewrite rule. Returns `Some(rewritten)` when the rule
/// matched, `None` when the line is left alone. Every rewrite must change
/// the line; rules are re-applied until none matches.
struct RepairRule {
    name: &'static str,
    apply: fn(&str) -> Option<String>,
}

/// The repair pass, in application order.
const REPAIR_RULES: &[RepairRule] = &[
    RepairRule {
        name: "strip-enumerator",
        apply: strip_enumerator,
    },
    RepairRule {
        name: "strip-step-marker",
        apply: strip_step_marker,
    },
    RepairRule {
        name: "promote-bare-heading",
        apply: promote_bare_heading,
    },
];

/// Apply the repair pass to every line of `text`.
///
/// Idempotent: repairing already-repaired text yields the same text.
pub fn repair(text: &str) -> String {
    text.split('\n')
        .map(repair_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn repair_line(line: &str) -> String {
    let mut current = line.to_string();
    loop {
        let mut changed = false;
        for rule in REPAIR_RULES {
            while let Some(rewritten) = (rule.apply)(&current) {
                tracing::trace!(rule = rule.name, "repair rule rewrote line");
                current = rewritten;
                changed = true;
            }
        }
        if !changed {
            return current;
        }
    }
}

/// Strip a leading enumerator: optional whitespace, digits, optional
/// whitespace, one of `) . - :`, optional whitespace. Handles "1) ",
/// "2.", "3 -", "4:".
fn strip_enumerator(line: &str) -> Option<String> {
    let s = line.trim_start();
    let after_digits = s.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == s.len() {
        return None;
    }
    strip_separator(after_digits.trim_start())
}

/// Strip a leading case-insensitive "step <digits>" marker followed by one
/// of `) . - :` and optional whitespace.
fn strip_step_marker(line: &str) -> Option<String> {
    let s = line.trim_start();
    let marker = s.get(..4)?;
    if !marker.eq_ignore_ascii_case("step") {
        return None;
    }
    let after = s[4..].trim_start();
    let after_digits = after.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == after.len() {
        return None;
    }
    strip_separator(after_digits.trim_start())
}

/// Shared tail of the strip rules: consume one separator character and
/// any whitespace after it.
fn strip_separator(s: &str) -> Option<String> {
    let mut chars = s.chars();
    match chars.next() {
        Some(')' | '.' | '-' | ':') => Some(chars.as_str().trim_start().to_string()),
        _ => None,
    }
}

/// Rewrite a line that is exactly a canonical section name (case-insensitive,
/// optional trailing whitespace) into a proper heading. Sections absent from
/// the output are never fabricated.
fn promote_bare_heading(line: &str) -> Option<String> {
    let trimmed = line.trim_end();
    if trimmed.starts_with('#') {
        return None;
    }
    CANONICAL_SECTIONS
        .iter()
        .find(|name| trimmed.eq_ignore_ascii_case(name))
        .map(|_| format!("{HEADING_MARKER} {trimmed}"))
}
