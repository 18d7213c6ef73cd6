//! Tool abstractions for LLM function-calling agents.
//!
//! Every capability the orchestrator can invoke — evaluating an
//! expression, converting a unit, analysing text — is a [`Tool`] trait
//! implementor. Tools are collected into a [`ToolSet`] which handles
//! dispatch, validation, truncation, and timeouts.
//!
//! # Defining tools
//!
//! - **[`FnTool`]** — closure-based, auto-parses arguments. Best for
//!   simple tools (see [`text::text_transform_tool`]).
//! - **`impl Tool`** — full struct with manual [`Tool::definition()`]
//!   and [`Tool::execute()`]. Best for tools with state or a larger
//!   answer surface.
//!
//! # Submodules
//!
//! - [`core`] — [`Tool`] trait, [`ToolSet`], [`FnTool`].
//! - [`calculator`] — the `calculator` tool over [`crate::calc`].
//! - [`converter`] — the `convert_units` tool over [`crate::convert`].
//! - [`text`] — `text_stats` and `text_transform`.
//! - [`datetime`] — the `datetime` tool.
//! - [`random`] — the `random` generation tool.
//! - [`spec`] — [`ToolSpec`](spec::ToolSpec) builder for structured tool
//!   descriptions with `when_to_use` / `when_not_to_use` guidance.
//! - [`names`] — canonical tool name constants.

pub mod calculator;
pub mod converter;
pub mod core;
pub mod datetime;
pub mod names;
pub mod random;
pub mod spec;
pub mod text;

// Re-export commonly used items at the module level.
pub use calculator::CalculatorTool;
pub use converter::ConvertUnitsTool;
pub use core::{FnTool, Tool, ToolFuture, ToolSet};
pub use core::{
    DEFAULT_MAX_RESULT_BYTES, parse_tool_args, truncate_result, validate_tool_arguments,
};
pub use datetime::DateTimeTool;
pub use random::RandomTool;
pub use text::{TextStatsTool, text_transform_tool};
