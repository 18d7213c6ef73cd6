//! Deterministic math and unit-conversion tools for LLM function-calling agents.
//!
//! `numera-rs` packages a sandboxed arithmetic evaluator and a natural-language
//! unit converter as [`Tool`](tools::core::Tool) implementors an agent
//! orchestrator can dispatch to. The tools never panic and never return a
//! non-string: every failure comes back as an `"Error: ..."` line the model
//! can read and recover from.
//!
//! # Getting started
//!
//! Add `numera-rs` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! numera-rs = { path = "../numera-rs" }
//! ```
//!
//! Then register the tools and dispatch calls:
//!
//! ```ignore
//! use numera_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let tools = ToolSet::new().with_builtin_tools();
//!
//!     // Definitions go to the LLM; execute() handles its calls.
//!     let defs = tools.definitions();
//!     let out = tools
//!         .execute("calculator", r#"{"expression": "sqrt(144) + 2 ** 3"}"#)
//!         .await;
//!     assert_eq!(out, "20");
//! }
//! ```
//!
//! Both engines are also callable directly, without the tool layer:
//!
//! ```
//! use numera_rs::{calc, convert};
//!
//! assert_eq!(calc::evaluate("25 * 4"), "100");
//! assert_eq!(convert::convert_query("100 km a millas"), "100 km = 62.1371 millas");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`calc`] | Sandboxed expression evaluator: denylist screen, restricted parser, fixed symbol table |
//! | [`convert`] | Unit conversion: query extraction, linear categories, affine temperature |
//! | [`tools`] | [`Tool`](tools::core::Tool) trait, [`ToolSet`](tools::core::ToolSet), [`FnTool`](tools::core::FnTool), the built-in tools |
//! | [`format`] | Significant-digit number formatting shared by both engines |
//!
//! # Design principles
//!
//! 1. **Strings in, strings out.** Tool results are plain text an LLM reads
//!    verbatim. Errors are part of that contract, not exceptions.
//!
//! 2. **Deny first, parse second.** The calculator screens raw input against
//!    a pattern denylist before any tokenization, and the grammar itself has
//!    no names beyond a fixed symbol table. There is no escape hatch.
//!
//! 3. **Tools are the unit of capability.** Each capability is a
//!    [`Tool`](tools::core::Tool) implementor with a JSON Schema definition
//!    and an async `execute` method. Adding a capability means implementing
//!    one trait.

pub mod calc;
pub mod convert;
pub mod format;
pub mod prelude;
pub mod tools;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Re-export schemars for downstream crates.
pub use schemars;

// ── Schema generation ──────────────────────────────────────────────

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`. This is the bridge between strong Rust types
/// and the `serde_json::Value` that the OpenAI function-calling API expects.
///
/// # Example
///
/// ```
/// use numera_rs::json_schema_for;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct CalculatorArgs {
///     expression: String,
/// }
///
/// let schema = json_schema_for::<CalculatorArgs>();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["required"].as_array().unwrap().contains(&"expression".into()));
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}

// ── Tool wire types ────────────────────────────────────────────────

/// The type of a tool definition. Currently always `Function`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ToolType {
    #[serde(rename = "function")]
    Function,
}

/// Tool definition sent to the API (OpenAI function-calling format).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ToolDef {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: FunctionDef,
}

impl ToolDef {
    /// Create a function-calling tool definition.
    ///
    /// This is the standard constructor — `ToolType` is always `Function` in
    /// the current API, so there's no reason to specify it manually.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDef {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
