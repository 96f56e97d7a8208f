use crate::models::domain::blog::{Audience, Tone};

pub const TONE_DESCRIPTIONS: [(Tone, &str); 6] = [
    (
        Tone::Professional,
        "Use a professional, information-focused tone with formal language.",
    ),
    (
        Tone::Casual,
        "Use a friendly, casual tone, as if chatting directly with the reader.",
    ),
    (
        Tone::Humorous,
        "Use a humorous, light-hearted tone with well-placed jokes and playful analogies.",
    ),
    (
        Tone::Inspirational,
        "Use a motivating, inspirational tone with language that leaves the reader feeling positive.",
    ),
    (
        Tone::Educational,
        "Use an educational, explanatory tone that conveys concepts clearly and is easy to follow.",
    ),
    (
        Tone::Conversational,
        "Use a conversational tone with natural, approachable language that speaks to the reader directly.",
    ),
];

pub const AUDIENCE_DESCRIPTIONS: [(Audience, &str); 6] = [
    (
        Audience::General,
        "Write for the general public: keep jargon to a minimum so anyone can understand it.",
    ),
    (
        Audience::Beginners,
        "Write for beginners with no background in the topic: start from the basic concepts and explain every technical term.",
    ),
    (
        Audience::Intermediate,
        "Write for intermediate readers who know the basics and want to go deeper: trim the introductory material and include advanced content.",
    ),
    (
        Audience::Experts,
        "Write for experts in the field: include advanced concepts, current trends and in-depth analysis.",
    ),
    (
        Audience::Professionals,
        "Write for working professionals in the field: include concrete tips and cases they can apply on the job.",
    ),
    (
        Audience::Students,
        "Write for students with an educational purpose: explain concepts systematically and add examples that aid understanding.",
    ),
];

pub const CONCISE_STRUCTURE: &str = "Write a short, concise post that covers only the key points.";
pub const BALANCED_STRUCTURE: &str =
    "Write at a moderate length, explaining the main points fully while leaving out anything unnecessary.";
pub const DETAILED_STRUCTURE: &str =
    "Write in detail using an introduction, a body split into several subheadings, and a conclusion.";

pub const BLOG_WRITER_ROLE: &str =
    "You are a professional blog writer who produces high-quality, SEO-optimized blog posts.";

pub const BLOG_NO_DOLLAR_RULES: [&str; 2] = [
    "Very important: never use the $ symbol. If an amount or a math expression needs a dollar sign, write the word 'dollars' instead.",
    "In particular never write forms such as '$2'. Write just the number, for example '2'.",
];

pub const EMOJI_SYSTEM_MESSAGE: &str = "You will be provided with text, and your task is to translate it into emojis. Do not use any regular text. Do your best with emojis only.";

pub const COLOR_SYSTEM_MESSAGE: &str = r##"You will be provided with a description of a mood or theme, and your task is to generate three different colors that match it.
Write your output in json with an array of objects, each containing:
- "name" (a short color name)
- "css_code" (CSS color code)
- "description" (a brief description of the color, under 20 words)
Example output: {
  "colors": [
    {"name": "Warm Orange", "css_code": "#FF7F50", "description": "A bright tone full of lively energy"},
    {"name": "Soft Apricot", "css_code": "#FFDAB9", "description": "A cozy, sweet pastel"},
    {"name": "Deep Coral", "css_code": "#FF6B6B", "description": "A vivid, warm pink"}
  ]
}"##;

pub const DEFAULT_TRANSLATION_LANGUAGE: &str = "English";

pub fn translator_system_message(language: &str) -> String {
    format!(
        "You will be provided with a sentence, and your task is to translate it into {}. Only respond with the translation, no explanations.",
        language
    )
}
