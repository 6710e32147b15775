//! Instruction prompts, one per supported language.
//!
//! Every prompt asks for a single JSON object with the keys
//! `extracted_text` and `corrected_text`.

use inkwiz_core::Language;

const ENGLISH_PROMPT: &str = r#"You are an expert OCR and grammar correction tool.
Extract the text exactly as it appears in the image, then correct its grammar and spelling.

Respond strictly with JSON:
{
    "extracted_text": "...",
    "corrected_text": "..."
}"#;

const HINDI_PROMPT: &str = r#"आप एक विशेषज्ञ OCR और व्याकरण सुधार प्रणाली हैं।
छवि से टेक्स्ट ज्यों का त्यों निकालें और फिर उसकी व्याकरण और वर्तनी सुधारें।

केवल JSON आउटपुट दें:
{
    "extracted_text": "...",
    "corrected_text": "..."
}"#;

/// Prompt for the given language.
pub fn prompt_for(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_PROMPT,
        Language::Hindi => HINDI_PROMPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_names_both_keys() {
        for language in [Language::English, Language::Hindi] {
            let prompt = prompt_for(language);
            assert!(prompt.contains("\"extracted_text\""));
            assert!(prompt.contains("\"corrected_text\""));
        }
    }

    #[test]
    fn hindi_prompt_is_distinct() {
        assert_ne!(prompt_for(Language::Hindi), prompt_for(Language::English));
        assert!(prompt_for(Language::Hindi).contains("छवि"));
    }

    #[test]
    fn unknown_tag_selects_english_prompt() {
        let language = Language::from_tag(Some("french"));
        assert_eq!(prompt_for(language), ENGLISH_PROMPT);
    }
}
