//! CLI-specific transforms
//!
//! Ways to look at a loaded glossary without generating a site. Each transform names a
//! stage and an output format (e.g., "tokens-json").

use glossary_parser::{cross_reference, tokenize, Fragment, Glossary, SeparatorSet};
use serde_json::json;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["terms", "glossary-json", "tokens-json", "xref-json"];

/// Execute a named transform on a loaded glossary
pub fn execute_transform(
    glossary: &Glossary,
    separators: &SeparatorSet,
    transform_name: &str,
) -> Result<String, String> {
    let value = match transform_name {
        "terms" => {
            let mut out = glossary.terms().join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            return Ok(out);
        }
        "glossary-json" => json!(glossary),
        "tokens-json" => tokens_to_json(glossary, separators),
        "xref-json" => xref_to_json(glossary, separators),
        _ => return Err(format!("Unknown transform: {}", transform_name)),
    };
    serde_json::to_string_pretty(&value)
        .map(|mut out| {
            out.push('\n');
            out
        })
        .map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Tokens of every definition
fn tokens_to_json(glossary: &Glossary, separators: &SeparatorSet) -> serde_json::Value {
    json!(glossary
        .iter()
        .map(|entry| {
            json!({
                "term": entry.term,
                "tokens": tokenize(entry.definition, separators).collect::<Vec<_>>(),
            })
        })
        .collect::<Vec<_>>())
}

/// Cross-referenced fragments of every definition
fn xref_to_json(glossary: &Glossary, separators: &SeparatorSet) -> serde_json::Value {
    json!(glossary
        .iter()
        .map(|entry| {
            let fragments = cross_reference(entry.definition, glossary, separators)
                .into_iter()
                .map(|fragment| match fragment {
                    Fragment::Text(text) => json!({ "text": text }),
                    Fragment::Link(target) => json!({ "link": target }),
                })
                .collect::<Vec<_>>();
            json!({ "term": entry.term, "fragments": fragments })
        })
        .collect::<Vec<_>>())
}
