//! Normalization of raw model output
//!
//! The model is instructed to return strict JSON but routinely wraps it
//! in code fences or prose, or ignores the contract entirely. `normalize`
//! turns whatever came back into one stable short message.

use drishti_core::{DetectedObject, Direction, Mode, NormalizedMessage, ObjectKind};
use serde_json::Value;
use tracing::debug;

/// Spoken when the response is empty or unusable.
pub const UNREADABLE_SCENE: &str = "Unable to analyze scene.";

// Model phrasings that mean "found nothing"; folded into the sentinel
// so the warning/denomination fields cannot smuggle them past the gate.
const NO_OBJECTS: &str = "no objects detected";
const NO_CURRENCY: &str = "no currency detected";

/// Turn one raw model response into a normalized message.
///
/// Pure function: identical inputs always yield identical outputs.
/// Malformed input degrades to best-effort text, never to an error.
pub fn normalize(raw: &str, mode: Mode) -> NormalizedMessage {
    let stripped = strip_fences(raw);

    if let Some(candidate) = json_candidate(&stripped) {
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => match mode {
                Mode::Street => return normalize_street(&value),
                Mode::Money => {
                    if let Some(message) = normalize_money(&value) {
                        return message;
                    }
                }
            },
            Err(e) => {
                debug!("response not valid JSON after sanitization: {}", e);
            }
        }
    }

    fallback_text(raw)
}

/// Street mode: prefer the model's own warning sentence, otherwise
/// describe the highest-priority detected object.
fn normalize_street(value: &Value) -> NormalizedMessage {
    if let Some(warning) = value.get("warning").and_then(Value::as_str) {
        let warning = warning.trim();
        if !warning.is_empty() {
            if warning.eq_ignore_ascii_case(NO_OBJECTS) {
                return NormalizedMessage::Nothing;
            }
            return NormalizedMessage::Alert(warning.to_string());
        }
    }

    if let Some(objects) = value.get("objects").and_then(Value::as_array) {
        // highest-priority canonical object wins regardless of array order;
        // ties go to the earliest entry
        let mut best: Option<DetectedObject> = None;
        for entry in objects {
            let kind = match entry
                .get("type")
                .and_then(Value::as_str)
                .and_then(ObjectKind::from_str)
            {
                Some(kind) => kind,
                None => continue,
            };
            let direction = entry
                .get("direction")
                .and_then(Value::as_str)
                .map(Direction::from_str)
                .unwrap_or(Direction::Unknown);

            let better = match best {
                Some(current) => kind.priority_rank() < current.kind.priority_rank(),
                None => true,
            };
            if better {
                best = Some(DetectedObject::new(kind, direction));
            }
        }

        if let Some(object) = best {
            return NormalizedMessage::Alert(object.describe());
        }

        // nothing canonical; describe the first entry with its raw strings
        if let Some(first) = objects.first() {
            let kind = first
                .get("type")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("object");
            let direction = first
                .get("direction")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("unknown");
            return NormalizedMessage::alert(format!("{} is {}", kind, direction));
        }
    }

    NormalizedMessage::Nothing
}

/// Money mode: the denomination string verbatim, or None to signal the
/// raw-text fallback.
fn normalize_money(value: &Value) -> Option<NormalizedMessage> {
    let denomination = value.get("denomination").and_then(Value::as_str)?;
    let denomination = denomination.trim();

    if denomination.is_empty() || denomination.eq_ignore_ascii_case(NO_CURRENCY) {
        return Some(NormalizedMessage::Nothing);
    }

    Some(NormalizedMessage::Alert(denomination.to_string()))
}

fn fallback_text(raw: &str) -> NormalizedMessage {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NormalizedMessage::Alert(UNREADABLE_SCENE.to_string())
    } else {
        NormalizedMessage::alert(trimmed)
    }
}

/// Remove triple-backtick fences, dropping a language tag attached to an
/// opening fence.
fn strip_fences(raw: &str) -> String {
    if !raw.contains("```") {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(idx) = rest.find("```") {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + 3..];
        let tag_len: usize = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.len_utf8())
            .sum();
        rest = &rest[tag_len..];
    }
    out.push_str(rest);
    out
}

/// Slice from the first '{' to the last '}' when both exist in order.
fn json_candidate(text: &str) -> Option<&str> {
    let first = text.find('{')?;
    let last = text.rfind('}')?;
    if first < last {
        Some(&text[first..=last])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_with_language_tag() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "\n{\"a\":1}\n");
        assert_eq!(strip_fences("```\n{\"a\":1}\n```"), "\n{\"a\":1}\n");
        assert_eq!(strip_fences("no fences here"), "no fences here");
    }

    #[test]
    fn test_json_candidate_slicing() {
        assert_eq!(json_candidate("noise {\"a\":1} trailing"), Some("{\"a\":1}"));
        assert_eq!(json_candidate("{\"a\":1}"), Some("{\"a\":1}"));
        assert_eq!(json_candidate("no braces"), None);
        assert_eq!(json_candidate("} reversed {"), None);
    }

    #[test]
    fn test_empty_input_becomes_unreadable_scene() {
        assert_eq!(
            normalize("", Mode::Street),
            NormalizedMessage::Alert(UNREADABLE_SCENE.to_string())
        );
        assert_eq!(
            normalize("   \n", Mode::Money),
            NormalizedMessage::Alert(UNREADABLE_SCENE.to_string())
        );
    }
}
