//! Mode-specific instruction prompts
//!
//! The prompts pin the model to a strict-JSON output contract so the
//! parser has something stable to aim at. The rest of the pipeline still
//! assumes the contract is routinely violated.

use drishti_core::Mode;

pub fn instruction_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Street => STREET_INSTRUCTION,
        Mode::Money => MONEY_INSTRUCTION,
    }
}

const STREET_INSTRUCTION: &str = r#"You are an assistant for a visually impaired person walking on an Indian street. Analyze this image and return a JSON object with exactly two fields:
{
  "warning": string,               // a single concise natural-sounding sentence like "An auto-rickshaw is approaching from the right" or "Stop! Large pothole detected directly ahead".
  "objects": [                     // an array of objects detected in the scene
     {"type": string, "direction": string}
  ]
}
Only output the JSON - no additional explanation, code fences, or chatter. Always be literal: only include objects you can confidently identify from the photo. If you are uncertain, return {"warning":"No objects detected","objects":[]}.
The "type" field must be one of these exactly: "person", "auto-rickshaw", "bike", "car", "pothole", "barrier", "bottle", "chair", or "other". The "direction" field should be one of "left", "right", "ahead", "behind", "center", or "unknown".
When constructing the warning sentence, do not invent anything; simply take the highest-priority object from the objects array and describe it (e.g. "An auto-rickshaw is approaching from the right").
Priority order for danger is: auto-rickshaw, bike, car, person, pothole, barrier, bottle, chair, other."#;

const MONEY_INSTRUCTION: &str = r#"You are an assistant that identifies Indian currency notes in an image. Look carefully for denomination numbers, colors, and Reserve Bank of India markings.
Return a JSON object of the form:
{
  "denomination": string           // e.g. "Five Hundred Rupees", "Twenty Rupees", "Ten Rupees", "One Hundred Rupees" or "No currency detected"
}
Only output the JSON, no markdown formatting, no extra text."#;
