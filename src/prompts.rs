//! Literal instruction blocks injected ahead of every farmer question.

use crate::models::Language;

pub const SYSTEM_MALAYALAM: &str = include_str!("../data/prompts/system_malayalam.txt");
pub const SYSTEM_ENGLISH: &str = include_str!("../data/prompts/system_english.txt");
pub const IMAGE_MALAYALAM: &str = include_str!("../data/prompts/image_malayalam.txt");
pub const IMAGE_ENGLISH: &str = include_str!("../data/prompts/image_english.txt");

/// Separator placed before every part that follows the system block.
pub const PART_SEPARATOR: &str = "\n\n";

/// Expert persona and regional context, including the "respond only in" rule.
pub fn system_instruction(language: Language) -> &'static str {
    match language {
        Language::Malayalam => SYSTEM_MALAYALAM,
        Language::English => SYSTEM_ENGLISH,
    }
}

/// Label prepended to the raw user question.
pub fn question_label(language: Language) -> &'static str {
    match language {
        Language::Malayalam => "ചോദ്യം: ",
        Language::English => "Question: ",
    }
}

/// Trailing instruction sent after an inline image.
pub fn image_instruction(language: Language) -> &'static str {
    match language {
        Language::Malayalam => IMAGE_MALAYALAM,
        Language::English => IMAGE_ENGLISH,
    }
}
