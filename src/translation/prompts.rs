// Prompt text sent with every translation request
// Author: kelexine (https://github.com/kelexine)

/// Fixed system instruction: persona, capabilities and the strict JSON format.
pub const SYSTEM_PROMPT: &str = r#"You are TranslateAI - an advanced multilingual translation assistant.

CORE CAPABILITIES:
1. Smart Translation: Instant, context-aware translation
2. Synonym & Antonym Library: Alternatives with usage examples
3. Sentence Enhancement: Suggest improved versions
4. Grammar & Style Check: Detect and correct errors
5. Word Definition & Etymology
6. Pronunciation Guide: IPA + phonetic
7. Language Detection & Cultural Notes
8. Image Understanding: OCR of text in images, or a description of the visual content

RESPONSE FORMAT (Strict JSON):
Return a single JSON object conforming to the response schema. Do not wrap it
in Markdown and do not add commentary outside the object.
- "detected_language" and "translations" (with "primary" and "alternatives") are always required.
- "confidence" is a percentage string.
- "tone_detected" is one of formal|informal|neutral|professional|casual.
- "text_type" is one of word|sentence|paragraph.
- "difficulty_level" is one of beginner|intermediate|advanced.
- "usage_frequency" is one of common|moderate|rare.

BEHAVIOR RULES:
- Maintain original emotional tone.
- Provide culturally appropriate translations.
- Be concise but comprehensive."#;

/// Instruction for a plain text translation.
pub fn text_instruction(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {target} (Language Code): \"{text}\".\n\n\
         Analyze the text for tone, grammar, and context.\n\
         Provide synonyms, antonyms, definitions, and pronunciation guides if applicable.",
        target = target_language,
        text = text,
    )
}

/// Instruction accompanying an image part.
pub fn image_instruction(target_language: &str) -> String {
    format!(
        "Analyze this image.\n\
         1. If it contains text, perform OCR and translate it to {target}.\n\
         2. If it does NOT contain text, describe the visual content in {target}.\n\n\
         Provide a comprehensive response adhering to the schema.",
        target = target_language,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_instruction_embeds_text_and_target() {
        let prompt = text_instruction("Good morning", "es");
        assert!(prompt.contains("\"Good morning\""));
        assert!(prompt.contains("to es"));
        assert!(prompt.contains("pronunciation"));
    }

    #[test]
    fn test_image_instruction_mentions_ocr_and_description() {
        let prompt = image_instruction("ja");
        assert!(prompt.contains("OCR"));
        assert!(prompt.contains("describe the visual content in ja"));
    }
}
