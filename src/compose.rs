//! Builds the ordered multimodal part list sent to the model.
//!
//! Order is fixed: system instructions, question, inline image, image
//! instruction. The model conditions on that order, so composition is a pure
//! function of its inputs.

use crate::ai::mime::detect_base64_image_mime;
use crate::ai::{InlineData, Part};
use crate::models::{ChatRequest, Language};
use crate::prompts;

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Composes the parts for `language`, an optional question and an optional
/// data-URL image.
///
/// Image data that is not a `data:<mime>;base64,<payload>` URL is dropped
/// without error; the remaining parts are still produced.
pub fn compose(language: Language, message: Option<&str>, image_data: Option<&str>) -> Vec<Part> {
    let mut parts = vec![Part::text(prompts::system_instruction(language))];

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        parts.push(Part::text(format!(
            "{}{}{}",
            prompts::PART_SEPARATOR,
            prompts::question_label(language),
            message
        )));
    }

    if let Some(image_data) = image_data.filter(|d| !d.is_empty()) {
        match parse_data_url(image_data) {
            Some(inline_data) => {
                parts.push(Part::InlineData { inline_data });
                parts.push(Part::text(format!(
                    "{}{}",
                    prompts::PART_SEPARATOR,
                    prompts::image_instruction(language)
                )));
            }
            None => tracing::warn!(
                len = image_data.len(),
                "Ignoring image data that is not a base64 data URL"
            ),
        }
    }

    parts
}

/// Composes the parts for a validated request.
pub fn compose_request(request: &ChatRequest) -> Vec<Part> {
    compose(request.language, request.message(), request.image_data())
}

/// Splits `data:<mime>;base64,<payload>` into its MIME type and payload.
///
/// The MIME type is everything up to the first `;base64,`. An empty MIME type
/// is sniffed from the payload.
pub fn parse_data_url(image_data: &str) -> Option<InlineData> {
    let rest = image_data.strip_prefix(DATA_URL_SCHEME)?;
    let (mime_type, data) = rest.split_once(BASE64_MARKER)?;

    // Line terminators end the URL: `\n`, `\r`, U+2028 and U+2029.
    if mime_type.contains(LINE_TERMINATORS) || data.contains(LINE_TERMINATORS) {
        return None;
    }

    let mime_type = if mime_type.is_empty() {
        detect_base64_image_mime(data).to_string()
    } else {
        mime_type.to_string()
    };

    Some(InlineData {
        mime_type,
        data: data.to_string(),
    })
}
