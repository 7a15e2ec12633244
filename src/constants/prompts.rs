pub const SUMMARY_INSTRUCTION: &str = "Summarize this text in clear and concise bullet points:";

pub const QUIZ_INSTRUCTION: &str = "Generate 5 multiple-choice questions from this text, with 4 answer choices each and the correct answer marked:";

pub const SUMMARY_MAX_TOKENS: u32 = 300;
pub const QUIZ_MAX_TOKENS: u32 = 500;

/// Shown in place of an artifact whenever the model reply is unusable.
pub const GENERATION_FALLBACK: &str = "Error generating response. Try again.";

pub fn summary_prompt(text: &str) -> String {
    format!("{}\n\n{}", SUMMARY_INSTRUCTION, text)
}

pub fn quiz_prompt(text: &str) -> String {
    format!("{}\n\n{}", QUIZ_INSTRUCTION, text)
}
