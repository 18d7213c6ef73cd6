//! Tool abstraction for LLM function-calling orchestrators.
//!
//! The [`Tool`] trait is the orchestrator boundary: a static definition
//! (name, description, JSON Schema) plus an async `execute` that takes
//! the raw JSON arguments string and returns a result string. Tools never
//! raise across this boundary — every outcome, success or failure, is the
//! returned string. A [`ToolSet`] collects tools and handles dispatch,
//! optional schema validation, timeouts, and result truncation.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use tracing::{debug, info, trace};

use crate::ToolDef;

/// Maximum size (in bytes) for tool output before truncation.
pub const DEFAULT_MAX_RESULT_BYTES: usize = 30_000;

/// Boxed future returned by [`Tool::execute`].
pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

/// A tool the orchestrator can invoke via function-calling.
pub trait Tool: Send + Sync {
    /// Static definition: name, description, parameter schema.
    fn definition(&self) -> ToolDef;

    /// Convenience accessor for the tool name.
    fn name(&self) -> String {
        self.definition().function.name
    }

    /// Run the tool against raw JSON arguments. Must always resolve to a
    /// string; failures are formatted error strings.
    fn execute(&self, arguments: &str) -> ToolFuture<'_>;
}

/// A named collection of tools with dispatch.
pub struct ToolSet {
    tools: HashMap<String, Box<dyn Tool>>,
    max_result_bytes: usize,
    validate_args: bool,
    default_timeout: Option<std::time::Duration>,
}

impl fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSet")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .field("max_result_bytes", &self.max_result_bytes)
            .finish()
    }
}

impl ToolSet {
    /// Create an empty tool set.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            max_result_bytes: DEFAULT_MAX_RESULT_BYTES,
            validate_args: false,
            default_timeout: None,
        }
    }

    /// Set the maximum result size in bytes before truncation.
    pub fn with_max_result_bytes(mut self, max: usize) -> Self {
        self.max_result_bytes = max;
        self
    }

    /// Enable JSON Schema argument validation before tool execution.
    pub fn with_arg_validation(mut self, enabled: bool) -> Self {
        self.validate_args = enabled;
        self
    }

    /// Set a default timeout applied to every tool call. `None` disables
    /// timeouts (the built-in tools are pure and fast; the knob matters
    /// when callers register their own).
    pub fn with_default_timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    /// Register a tool (builder pattern).
    pub fn with(mut self, tool: impl Tool + 'static) -> Self {
        self.register(tool);
        self
    }

    /// Conditionally register a tool (builder pattern).
    pub fn with_if(self, condition: bool, tool: impl Tool + 'static) -> Self {
        if condition { self.with(tool) } else { self }
    }

    /// Register every built-in tool: the sandboxed calculator, the unit
    /// converter, text statistics and transforms, the date/time tool, and
    /// the random generator.
    pub fn with_builtin_tools(self) -> Self {
        use crate::tools::{
            calculator::CalculatorTool, converter::ConvertUnitsTool, datetime::DateTimeTool,
            random::RandomTool,
            text::{TextStatsTool, text_transform_tool},
        };
        self.with(CalculatorTool)
            .with(ConvertUnitsTool)
            .with(TextStatsTool)
            .with(text_transform_tool())
            .with(DateTimeTool)
            .with(RandomTool)
    }

    /// Return all tool definitions for export to the orchestrator.
    pub fn definitions(&self) -> Vec<ToolDef> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool call by name.
    ///
    /// Applies argument validation (when enabled), the default timeout
    /// (when set), and result truncation. An unknown name returns an
    /// error string rather than failing the call chain.
    pub async fn execute(&self, name: &str, arguments: &str) -> String {
        let tool = match self.tools.get(name) {
            Some(t) => t,
            None => return format!("Error: unknown tool '{name}'"),
        };

        if self.validate_args
            && let Some(error) = validate_tool_arguments(tool.as_ref(), arguments)
        {
            return error;
        }

        log_tool_call(name, arguments);
        let start = std::time::Instant::now();

        let result = if let Some(limit) = self.default_timeout {
            match tokio::time::timeout(limit, tool.execute(arguments)).await {
                Ok(r) => r,
                Err(_) => {
                    info!(
                        "tool {name} timed out after {:.0}s",
                        limit.as_secs_f64()
                    );
                    format!(
                        "Error: tool '{name}' timed out after {:.0} seconds",
                        limit.as_secs_f64()
                    )
                }
            }
        } else {
            tool.execute(arguments).await
        };

        debug!(
            "tool {name} completed in {:.0}ms ({} bytes)",
            start.elapsed().as_secs_f64() * 1000.0,
            result.len()
        );
        truncate_result(result, self.max_result_bytes)
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new()
    }
}

// ── FnTool ─────────────────────────────────────────────────────────

/// Type-erased async handler for [`FnTool`].
type ErasedToolHandler =
    Box<dyn Fn(String) -> Pin<Box<dyn Future<Output = String> + Send>> + Send + Sync>;

/// A closure-based tool that auto-parses its arguments.
///
/// Avoids a struct + `impl Tool` for tools whose execute logic is a pure
/// async function. The constructor performs type erasure so `FnTool` is a
/// concrete, dyn-compatible type.
pub struct FnTool {
    def: ToolDef,
    handler: ErasedToolHandler,
}

impl FnTool {
    /// Create a closure-based tool. The handler receives arguments of
    /// type `A`, deserialized from the raw JSON string; parse failures
    /// are formatted for the orchestrator automatically.
    pub fn new<A, F, Fut>(def: ToolDef, handler: F) -> Self
    where
        A: serde::de::DeserializeOwned + Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        let erased = move |raw: String| -> Pin<Box<dyn Future<Output = String> + Send>> {
            match serde_json::from_str::<A>(&raw) {
                Ok(args) => Box::pin(handler(args)),
                Err(e) => Box::pin(async move {
                    format!(
                        "Error: invalid tool arguments: {e}. \
                         Provide valid JSON matching the tool's parameter schema."
                    )
                }),
            }
        };
        Self {
            def,
            handler: Box::new(erased),
        }
    }
}

impl Tool for FnTool {
    fn definition(&self) -> ToolDef {
        self.def.clone()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        Box::pin((self.handler)(arguments.to_string()))
    }
}

impl fmt::Debug for FnTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.def.function.name)
            .finish()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Validate arguments against the tool's declared JSON Schema.
///
/// Returns `None` if valid, or `Some(error_string)` formatted so the
/// orchestrator's model can self-correct.
pub fn validate_tool_arguments(tool: &dyn Tool, arguments: &str) -> Option<String> {
    let args_value: serde_json::Value = match serde_json::from_str(arguments) {
        Ok(v) => v,
        Err(e) => {
            return Some(format!(
                "Error: invalid JSON arguments for tool '{}': {e}",
                tool.name()
            ));
        }
    };

    let schema = tool.definition().function.parameters;
    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(_) => return None, // Unvalidatable schema: skip rather than block.
    };

    let errors: Vec<String> = validator
        .iter_errors(&args_value)
        .map(|e| format!("  - {}: {e}", e.instance_path()))
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(format!(
            "Error: argument validation failed for tool '{}':\n{}",
            tool.name(),
            errors.join("\n")
        ))
    }
}

/// Log a tool call at INFO level with a truncated argument preview.
pub fn log_tool_call(name: &str, arguments: &str) {
    let preview: String = arguments.chars().take(120).collect();
    info!(
        "[tool] {name}({preview}{})",
        if arguments.len() > 120 { "..." } else { "" }
    );
    trace!("[tool] {name} arguments: {arguments}");
}

/// Truncate a string to at most `max` bytes, appending a notice if trimmed.
pub fn truncate_result(s: String, max: usize) -> String {
    if s.len() > max {
        let cut: String = s.chars().take_while({
            let mut used = 0;
            move |c| {
                used += c.len_utf8();
                used <= max
            }
        }).collect();
        format!("{cut}...\n[truncated: {} bytes total]", s.len())
    } else {
        s
    }
}

/// Parse raw JSON arguments into a typed struct, formatting the failure
/// for direct return from [`Tool::execute`].
pub fn parse_tool_args<T: serde::de::DeserializeOwned>(arguments: &str) -> Result<T, String> {
    serde_json::from_str(arguments).map_err(|e| {
        format!(
            "Error: invalid tool arguments: {e}. \
             Provide valid JSON matching the tool's parameter schema."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_schema_for;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct EchoArgs {
        message: String,
    }

    fn echo_tool() -> FnTool {
        FnTool::new(
            ToolDef::new("echo", "Echo the message back", json_schema_for::<EchoArgs>()),
            |args: EchoArgs| async move { args.message },
        )
    }

    #[tokio::test]
    async fn dispatch_by_name() {
        let tools = ToolSet::new().with(echo_tool());
        assert_eq!(tools.execute("echo", r#"{"message": "hi"}"#).await, "hi");
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error_string() {
        let tools = ToolSet::new();
        assert_eq!(tools.execute("nope", "{}").await, "Error: unknown tool 'nope'");
    }

    #[tokio::test]
    async fn fn_tool_reports_bad_arguments() {
        let tools = ToolSet::new().with(echo_tool());
        let out = tools.execute("echo", "not json").await;
        assert!(out.starts_with("Error: invalid tool arguments"), "got: {out}");
    }

    #[tokio::test]
    async fn validation_rejects_missing_required_fields() {
        let tools = ToolSet::new().with(echo_tool()).with_arg_validation(true);
        let out = tools.execute("echo", "{}").await;
        assert!(out.starts_with("Error: argument validation failed"), "got: {out}");
    }

    #[tokio::test]
    async fn results_are_truncated() {
        let big = FnTool::new(
            ToolDef::new("big", "Return a lot of text", json_schema_for::<EchoArgs>()),
            |_: EchoArgs| async move { "x".repeat(500) },
        );
        let tools = ToolSet::new().with(big).with_max_result_bytes(100);
        let out = tools.execute("big", r#"{"message": ""}"#).await;
        assert!(out.contains("[truncated: 500 bytes total]"));
    }

    #[test]
    fn with_if_registers_conditionally() {
        let tools = ToolSet::new()
            .with_if(false, echo_tool())
            .with_if(true, echo_tool());
        assert_eq!(tools.len(), 1);
    }

    #[test]
    fn builtin_set_is_complete() {
        let tools = ToolSet::new().with_builtin_tools();
        assert_eq!(tools.len(), 6);
        let names: Vec<String> = tools
            .definitions()
            .iter()
            .map(|d| d.function.name.clone())
            .collect();
        for expected in [
            "calculator",
            "convert_units",
            "text_stats",
            "text_transform",
            "datetime",
            "random",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
    }
}
