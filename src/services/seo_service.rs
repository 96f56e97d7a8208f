use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

const BASE_SCORE: i32 = 70;
const IDEAL_DENSITY_MIN: f64 = 0.5;
const IDEAL_DENSITY_MAX: f64 = 3.0;
const LONG_PARAGRAPH_WORDS: usize = 100;

static H1_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#\s.+").expect("H1_LINE is a valid regex pattern"));
static H2_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##\s.+").expect("H2_LINE is a valid regex pattern"));
static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("MARKDOWN_LINK is a valid regex pattern"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("PARAGRAPH_BREAK is a valid regex pattern"));

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub score: u8,
    pub tips: Vec<String>,
    pub keyword_density: BTreeMap<String, f64>,
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whole-word, case-insensitive occurrences of `keyword` per 100 words, to one decimal.
fn keyword_density(content: &str, keyword: &str, words: usize) -> AppResult<f64> {
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
        .map_err(|e| AppError::InvalidArgumentError(format!("bad keyword '{}': {}", keyword, e)))?;
    let matches = pattern.find_iter(content).count();
    Ok((matches as f64 / words as f64 * 100.0 * 10.0).round() / 10.0)
}

/// Scores blog markdown on headings, keyword density, paragraph length, links and images.
pub fn analyze(content: &str, keywords: &str) -> AppResult<SeoReport> {
    if content.trim().is_empty() {
        return Err(AppError::ValidationError(
            "content must not be blank".to_string(),
        ));
    }

    let words = word_count(content).max(1);
    let mut keyword_density_map = BTreeMap::new();
    for keyword in keywords
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
    {
        let density = keyword_density(content, &keyword, words)?;
        keyword_density_map.insert(keyword, density);
    }

    let has_h1 = H1_LINE.is_match(content);
    let has_h2 = H2_LINE.is_match(content);
    let has_links = MARKDOWN_LINK.is_match(content);
    let has_images = content.contains("![");
    let long_paragraphs = PARAGRAPH_BREAK
        .split(content)
        .filter(|p| word_count(p) > LONG_PARAGRAPH_WORDS)
        .count();

    let mut tips = Vec::new();
    let mut score = BASE_SCORE;

    if has_h1 {
        score += 5;
    } else {
        tips.push("Add a main title with an H1 heading (#).".to_string());
    }
    if has_h2 {
        score += 5;
    } else {
        tips.push("Add subheadings with H2 headings (##).".to_string());
    }

    for (keyword, density) in &keyword_density_map {
        if (IDEAL_DENSITY_MIN..=IDEAL_DENSITY_MAX).contains(density) {
            score += 5;
            continue;
        }
        score -= 5;
        if *density < IDEAL_DENSITY_MIN {
            tips.push(format!(
                "The keyword '{}' has a low density ({}%). Between 1 and 2% is ideal.",
                keyword, density
            ));
        } else {
            tips.push(format!(
                "The keyword '{}' has a high density ({}%). It may be treated as keyword stuffing.",
                keyword, density
            ));
        }
    }

    if long_paragraphs > 0 {
        score -= 2 * long_paragraphs as i32;
        tips.push(format!(
            "Some paragraphs are too long. Keep them under {} words for readability.",
            LONG_PARAGRAPH_WORDS
        ));
    }
    if has_images {
        score += 5;
    } else {
        tips.push("Add images to make the post more appealing and improve SEO.".to_string());
    }
    if has_links {
        score += 5;
    } else {
        tips.push("Add internal or external links to improve the SEO score.".to_string());
    }

    Ok(SeoReport {
        score: score.clamp(0, 100) as u8,
        tips,
        keyword_density: keyword_density_map,
    })
}
