//! Request validation and prompt construction.
//!
//! Turns an untyped inbound body into a [`DreamRequest`], then renders the
//! fixed three-message prompt: persona, format contract, and the
//! interpolated user payload. The format contract is rendered from the
//! canonical section table so the normalizer repairs exactly the headings
//! the builder asked for.

use serde_json::Value;

use reverie_types::dream::DreamRequest;
use reverie_types::error::PromptError;
use reverie_types::prompt::PromptPackage;
use reverie_types::section::{heading, CANONICAL_SECTIONS};

/// Persona instructions for the system message.
const PERSONA: &str = "\
You are a Gestalt-oriented dream reflection assistant.
Treat every dream element as an aspect of the dreamer.
Stay phenomenological: describe what is present, never diagnose.
Avoid symbolic certainty. Never present an interpretation as fact,
and make no definitive claims about what the dream means.
Use gentle, invitational language throughout.";

/// Per-section shape constraints, paired positionally with
/// [`CANONICAL_SECTIONS`].
const SECTION_SHAPES: [&str; 5] = [
    "3 to 5 short bullets naming concrete dream elements",
    "2 to 4 bullets, each phrased as a possibility, not a conclusion",
    "2 or 3 invitational questions, as bullets",
    "one short paragraph containing exactly one invitation; do not name \
     techniques and do not give timing estimates",
    "one short paragraph",
];

/// Validate an untyped request body into a [`DreamRequest`].
///
/// Accepts only bodies whose `dream` field is present and is a non-empty
/// string; anything else fails with [`PromptError::DreamRequired`] before
/// the generator is ever contacted. `context` is carried through as-is and
/// defaults to an empty object.
pub fn validate(body: &Value) -> Result<DreamRequest, PromptError> {
    let dream = body
        .get("dream")
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())
        .ok_or(PromptError::DreamRequired)?;

    let context = match body.get("context") {
        Some(Value::Null) | None => Value::Object(serde_json::Map::new()),
        Some(other) => other.clone(),
    };

    Ok(DreamRequest::with_context(dream, context))
}

/// Build the three-message prompt package for a validated request.
///
/// The user message embeds the dream text verbatim and a pretty-printed
/// JSON rendering of the context mapping.
pub fn build_prompt(request: &DreamRequest) -> PromptPackage {
    let context_json = serde_json::to_string_pretty(&request.context)
        .unwrap_or_else(|_| "{}".to_string());

    let user = format!(
        "Dream text:\n{}\n\nOptional context:\n{}",
        request.dream, context_json
    );

    PromptPackage::new(PERSONA.to_string(), format_contract(), user)
}

/// Render the developer message: the five-heading format contract.
fn format_contract() -> String {
    let mut contract = String::from(
        "Format the reflection as Markdown under exactly these headings, \
         in this order:\n",
    );
    for name in CANONICAL_SECTIONS {
        contract.push_str(&heading(name));
        contract.push('\n');
    }
    contract.push_str(
        "\nNever prefix a heading or any body line with a number or letter \
         (no \"1)\", \"2.\", \"Step 3:\").\nSection content:\n",
    );
    for (name, shape) in CANONICAL_SECTIONS.iter().zip(SECTION_SHAPES) {
        contract.push_str(&format!("- {name}: {shape}.\n"));
    }
    contract
}
