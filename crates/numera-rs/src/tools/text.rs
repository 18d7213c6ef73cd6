//! Text statistics and transform tools.
//!
//! Pure string utilities: no parsing engine, no state. The transform
//! operation names keep their Spanish aliases because that is what users
//! of the assistant actually type.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::ToolDef;
use crate::tools::core::{FnTool, Tool, ToolFuture, parse_tool_args};
use crate::tools::names;
use crate::tools::spec::ToolSpec;

/// Typed arguments for `text_stats`.
#[derive(Deserialize, JsonSchema)]
pub struct TextStatsArgs {
    /// The text to analyze.
    pub text: String,
}

/// Typed arguments for `text_transform`.
#[derive(Deserialize, JsonSchema)]
pub struct TextTransformArgs {
    /// Operation to apply: uppercase, lowercase, title, reverse,
    /// squeeze_spaces, count_vowels, strip_accents, word_count,
    /// char_count, initials (Spanish aliases accepted).
    pub operation: String,
    /// The text to transform.
    pub text: String,
}

/// Word/character/sentence statistics over a text.
pub struct TextStatsTool;

impl Tool for TextStatsTool {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::TEXT_STATS)
            .purpose("Compute statistics about a text")
            .when_to_use(
                "When asked how many words, characters, sentences, or paragraphs \
                 a text has, or which words are most frequent",
            )
            .when_not_to_use("To change the text itself — use text_transform instead")
            .parameters_for::<TextStatsArgs>()
            .example(
                "text_stats(text='Hello world. How are you?')",
                "word, character, and sentence counts",
            )
            .output_format("A multi-line statistics block")
            .build()
            .to_tool_def()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let arguments = arguments.to_string();
        Box::pin(async move {
            let args: TextStatsArgs = match parse_tool_args(&arguments) {
                Ok(a) => a,
                Err(e) => return e,
            };
            text_stats(&args.text)
        })
    }
}

fn text_stats(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return "Error: no text provided".to_string();
    }

    let char_count = text.chars().count();
    let char_count_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let paragraph_count = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    let longest_word = words
        .iter()
        .max_by_key(|w| w.chars().count())
        .copied()
        .unwrap_or("");
    let avg_word_length = if word_count > 0 {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
    } else {
        0.0
    };

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for word in &words {
        let cleaned: String = word
            .to_lowercase()
            .trim_matches(|c: char| c.is_ascii_punctuation())
            .to_string();
        if !cleaned.is_empty() {
            *frequencies.entry(cleaned).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let top: Vec<String> = ranked
        .into_iter()
        .take(5)
        .map(|(word, count)| format!("\"{word}\" ({count})"))
        .collect();

    format!(
        "Text statistics:\n\
         - characters (with spaces): {char_count}\n\
         - characters (without spaces): {char_count_no_spaces}\n\
         - words: {word_count}\n\
         - sentences: {sentence_count}\n\
         - paragraphs: {paragraph_count}\n\
         - average word length: {avg_word_length:.1}\n\
         - longest word: \"{longest_word}\"\n\
         - most frequent: {}",
        top.join(", ")
    )
}

/// Build the `text_transform` tool.
pub fn text_transform_tool() -> FnTool {
    let def = ToolSpec::builder(names::TEXT_TRANSFORM)
        .purpose("Transform a text with a named operation")
        .when_to_use(
            "To uppercase/lowercase/title-case a text, reverse it, squeeze \
             whitespace, strip accents, count vowels/words/characters, or \
             extract initials",
        )
        .when_not_to_use("For statistics about the text — use text_stats instead")
        .parameters_for::<TextTransformArgs>()
        .example("text_transform(operation='uppercase', text='hola mundo')", "HOLA MUNDO")
        .example("text_transform(operation='invertir', text='python')", "nohtyp")
        .output_format("The transformed text, or an 'Error: ...' line")
        .build()
        .to_tool_def();

    FnTool::new(def, |args: TextTransformArgs| async move {
        transform(&args.operation, &args.text)
    })
}

fn transform(operation: &str, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return "Error: no text provided".to_string();
    }

    match operation.trim().to_lowercase().as_str() {
        "mayusculas" | "mayúsculas" | "uppercase" | "upper" => text.to_uppercase(),
        "minusculas" | "minúsculas" | "lowercase" | "lower" => text.to_lowercase(),
        "titulo" | "título" | "title" | "capitalize" => title_case(text),
        "invertir" | "reverse" | "reverso" => text.chars().rev().collect(),
        "quitar_espacios" | "squeeze_spaces" | "trim" | "strip" => {
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        }
        "contar_vocales" | "vocales" | "count_vowels" | "vowels" => {
            let count = text.chars().filter(|c| is_vowel(*c)).count();
            format!("The text has {count} vowels")
        }
        "quitar_acentos" | "sin_acentos" | "strip_accents" | "remove_accents" => {
            text.chars().map(strip_accent).collect()
        }
        "palabras" | "contar_palabras" | "word_count" => {
            format!("The text has {} words", text.split_whitespace().count())
        }
        "caracteres" | "contar_caracteres" | "char_count" => {
            format!("The text has {} characters", text.chars().count())
        }
        "primera_letra" | "iniciales" | "initials" => {
            let initials: String = text
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .flat_map(|c| c.to_uppercase())
                .collect();
            format!("Initials: {initials}")
        }
        other => format!(
            "Error: unknown operation '{other}'. Available: uppercase, lowercase, \
             title, reverse, squeeze_spaces, count_vowels, strip_accents, \
             word_count, char_count, initials"
        ),
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_vowel(c: char) -> bool {
    "aeiouáéíóúAEIOUÁÉÍÓÚ".contains(c)
}

fn strip_accent(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        'Á' => 'A',
        'É' => 'E',
        'Í' => 'I',
        'Ó' => 'O',
        'Ú' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ü' => 'u',
        'Ü' => 'U',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_the_obvious_things() {
        let out = text_stats("Hello world. How are you?");
        assert!(out.contains("- words: 5"), "got: {out}");
        assert!(out.contains("- sentences: 2"), "got: {out}");
        assert!(out.contains("- paragraphs: 1"), "got: {out}");
    }

    #[test]
    fn stats_rank_frequent_words_case_insensitively() {
        let out = text_stats("Red red RED blue blue green");
        assert!(out.contains("\"red\" (3)"), "got: {out}");
        assert!(out.contains("\"blue\" (2)"), "got: {out}");
    }

    #[test]
    fn stats_reject_empty_text() {
        assert!(text_stats("   ").starts_with("Error:"));
    }

    #[test]
    fn transforms_cover_the_operation_table() {
        assert_eq!(transform("uppercase", "hola mundo"), "HOLA MUNDO");
        assert_eq!(transform("mayusculas", "hola"), "HOLA");
        assert_eq!(transform("lower", "HOLA"), "hola");
        assert_eq!(transform("title", "hola mundo"), "Hola Mundo");
        assert_eq!(transform("invertir", "python"), "nohtyp");
        assert_eq!(transform("squeeze_spaces", "a   b\t c"), "a b c");
        assert_eq!(transform("count_vowels", "murciélago"), "The text has 5 vowels");
        assert_eq!(transform("strip_accents", "canción"), "cancion");
        assert_eq!(transform("word_count", "one two three"), "The text has 3 words");
        assert_eq!(transform("initials", "juan garcía lópez"), "Initials: JGL");
    }

    #[test]
    fn unknown_operation_lists_the_available_ones() {
        let out = transform("rot13", "abc");
        assert!(out.starts_with("Error: unknown operation 'rot13'"));
        assert!(out.contains("uppercase"));
    }

    #[tokio::test]
    async fn transform_tool_dispatches() {
        let tool = text_transform_tool();
        assert_eq!(tool.name(), "text_transform");
        let out = tool
            .execute(r#"{"operation": "reverse", "text": "abc"}"#)
            .await;
        assert_eq!(out, "cba");
    }
}
