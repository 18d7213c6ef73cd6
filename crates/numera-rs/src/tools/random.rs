//! Random generation tool.
//!
//! Pattern-matches a free-text query (Spanish or English phrasings) and
//! generates accordingly: a number in a range, a dice roll, a coin flip,
//! a pick from a comma-separated list, a password, or a UUID. Anything
//! unmatched returns a usage summary.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;

use crate::ToolDef;
use crate::tools::core::{Tool, ToolFuture, parse_tool_args};
use crate::tools::names;
use crate::tools::spec::ToolSpec;

/// Typed arguments for `random`.
#[derive(Deserialize, JsonSchema)]
pub struct RandomArgs {
    /// A generation request, e.g. 'número entre 1 y 100', 'dado d20',
    /// 'coin', 'elegir: pizza, pasta', 'password de 16 caracteres'.
    pub query: String,
}

/// Generate random values from a free-text request.
pub struct RandomTool;

static NUMBER_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:n[úu]mero\s+entre|number\s+between)\s+(-?\d+)\s+(?:y|and)\s+(-?\d+)")
        .expect("pattern compiles")
});
static PASSWORD_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:contrase[ñn]a|password)\s+(?:de\s+|of\s+)?(\d+)").expect("pattern compiles")
});
static DICE_SIDES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bd(\d+)\b").expect("pattern compiles"));

const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";
const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 64;
const DEFAULT_PASSWORD_LEN: usize = 12;

impl Tool for RandomTool {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::RANDOM)
            .purpose("Generate random values")
            .when_to_use(
                "For a random number in a range, a dice roll, a coin flip, \
                 a random pick from a list, a password, or a UUID",
            )
            .when_not_to_use("For anything deterministic or reproducible")
            .parameters_for::<RandomArgs>()
            .example("random(query='número entre 1 y 100')", "a number in [1, 100]")
            .example("random(query='dado d20')", "a roll of a 20-sided die")
            .example("random(query='elegir: pizza, pasta, ensalada')", "one of the options")
            .output_format("A single line naming what was generated and the value")
            .build()
            .to_tool_def()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let arguments = arguments.to_string();
        Box::pin(async move {
            let args: RandomArgs = match parse_tool_args(&arguments) {
                Ok(a) => a,
                Err(e) => return e,
            };
            generate(&args.query)
        })
    }
}

fn generate(query: &str) -> String {
    let query_lower = query.trim().to_lowercase();
    let mut rng = rand::rng();

    if let Some(captures) = NUMBER_RANGE.captures(&query_lower) {
        let a: i64 = captures[1].parse().unwrap_or(0);
        let b: i64 = captures[2].parse().unwrap_or(0);
        let (low, high) = (a.min(b), a.max(b));
        let value = rng.random_range(low..=high);
        return format!("Random number between {a} and {b}: {value}");
    }

    if query_lower.contains("contraseña") || query_lower.contains("password") {
        let length = PASSWORD_LENGTH
            .captures(&query_lower)
            .and_then(|c| c[1].parse::<usize>().ok())
            .unwrap_or(DEFAULT_PASSWORD_LEN)
            .clamp(MIN_PASSWORD_LEN, MAX_PASSWORD_LEN);
        let password: String = (0..length)
            .map(|_| {
                let idx = rng.random_range(0..PASSWORD_CHARSET.len());
                PASSWORD_CHARSET[idx] as char
            })
            .collect();
        return format!("Generated password ({length} characters): {password}");
    }

    if query_lower.contains("uuid") {
        return format!("Generated UUID: {}", Uuid::new_v4());
    }

    for prefix in ["elegir:", "escoger:", "choose:", "pick:"] {
        if query_lower.starts_with(prefix) {
            let items: Vec<&str> = query
                .trim()
                .split_once(':')
                .map(|(_, rest)| rest)
                .unwrap_or("")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            return match items.choose(&mut rng) {
                Some(choice) => format!("Random choice: {choice}"),
                None => "Error: no options provided to choose from".to_string(),
            };
        }
    }

    if query_lower.contains("dado") || query_lower.contains("dice") || DICE_SIDES.is_match(&query_lower)
    {
        let sides = DICE_SIDES
            .captures(&query_lower)
            .and_then(|c| c[1].parse::<u32>().ok())
            .filter(|&s| s >= 2)
            .unwrap_or(6);
        let value = rng.random_range(1..=sides);
        return format!("Dice roll (d{sides}): {value}");
    }

    if query_lower.contains("moneda") || query_lower.contains("coin") || query_lower.contains("cara o cruz")
    {
        let side = if rng.random_bool(0.5) { "heads" } else { "tails" };
        return format!("Coin flip: {side}");
    }

    "Random generator. Options: \"número entre X y Y\", \"contraseña de N caracteres\", \
     \"uuid\", \"elegir: a, b, c\", \"dado\" or \"d20\", \"moneda\""
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_stays_in_the_requested_range() {
        for _ in 0..50 {
            let out = generate("número entre 1 y 100");
            let value: i64 = out.rsplit_once(": ").unwrap().1.parse().unwrap();
            assert!((1..=100).contains(&value), "got: {out}");
        }
        // Reversed bounds still work.
        let out = generate("number between 10 and 3");
        let value: i64 = out.rsplit_once(": ").unwrap().1.parse().unwrap();
        assert!((3..=10).contains(&value), "got: {out}");
    }

    #[test]
    fn dice_respect_the_side_count() {
        for _ in 0..50 {
            let out = generate("dado d20");
            let value: u32 = out.rsplit_once(": ").unwrap().1.parse().unwrap();
            assert!((1..=20).contains(&value), "got: {out}");
        }
        assert!(generate("tirar un dado").starts_with("Dice roll (d6):"));
    }

    #[test]
    fn coin_lands_on_a_named_side() {
        let out = generate("cara o cruz");
        assert!(out == "Coin flip: heads" || out == "Coin flip: tails", "got: {out}");
    }

    #[test]
    fn choice_picks_a_listed_option() {
        let out = generate("elegir: pizza, pasta, ensalada");
        let picked = out.rsplit_once(": ").unwrap().1;
        assert!(["pizza", "pasta", "ensalada"].contains(&picked), "got: {out}");
        assert!(generate("elegir: ").starts_with("Error:"));
    }

    #[test]
    fn password_length_is_clamped() {
        let out = generate("contraseña de 16 caracteres");
        let password = out.rsplit_once(": ").unwrap().1;
        assert_eq!(password.len(), 16);

        let out = generate("password of 200");
        assert!(out.contains("(64 characters)"), "got: {out}");
    }

    #[test]
    fn uuid_is_well_formed() {
        let out = generate("genera un uuid");
        let id = out.rsplit_once(": ").unwrap().1;
        assert!(Uuid::parse_str(id).is_ok(), "got: {out}");
    }

    #[test]
    fn unmatched_queries_return_usage() {
        assert!(generate("sorpréndeme").starts_with("Random generator. Options:"));
    }
}
