//! Convenience re-exports for common `numera-rs` types.
//!
//! Meant to be glob-imported when wiring the tools into an agent:
//!
//! ```ignore
//! use numera_rs::prelude::*;
//! ```
//!
//! This pulls in the types needed for the vast majority of callers: the
//! [`Tool`] trait + [`ToolSet`], the wire-format [`ToolDef`], the built-in
//! tool types, and the two bare engine entry points. Specialized items
//! (symbol table introspection, category tables, the parser AST) are
//! intentionally excluded — import those from their modules directly.

// ── Wire types ──────────────────────────────────────────────────────
pub use crate::{ToolDef, json_schema_for};

// ── Tools ───────────────────────────────────────────────────────────
pub use crate::tools::spec::ToolSpec;
pub use crate::tools::{
    CalculatorTool, ConvertUnitsTool, DateTimeTool, FnTool, RandomTool, TextStatsTool, Tool,
    ToolFuture, ToolSet, parse_tool_args, text_transform_tool,
};

// ── Engines ─────────────────────────────────────────────────────────
pub use crate::calc::evaluate;
pub use crate::convert::convert_query;
