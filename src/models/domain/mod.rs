pub mod analysis;
pub mod blog;
pub mod color;
pub mod quiz_answer;
pub mod quiz_question;
pub use analysis::QuizAnalysis;
pub use blog::{Audience, LengthBand, Tone};
pub use color::ColorPalette;
pub use quiz_answer::{GradeReport, QuizAnswerRecord};
pub use quiz_question::{GeneratedQuestion, QuizQuestion};
