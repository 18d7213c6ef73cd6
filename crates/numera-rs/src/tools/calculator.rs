//! The sandboxed calculator tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::ToolDef;
use crate::calc;
use crate::tools::core::{Tool, ToolFuture, parse_tool_args};
use crate::tools::names;
use crate::tools::spec::ToolSpec;

/// Typed arguments for `calculator`.
#[derive(Deserialize, JsonSchema)]
pub struct CalculatorArgs {
    /// A math expression, e.g. '25 * 4', 'sqrt(144)', '15/100 * 200'.
    pub expression: String,
}

/// Evaluate untrusted math expressions in a sandbox.
///
/// Arbitrary code can never run: the expression is parsed into a
/// restricted tree over a fixed symbol registry. See [`crate::calc`].
pub struct CalculatorTool;

impl Tool for CalculatorTool {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::CALCULATOR)
            .purpose("Evaluate a mathematical expression")
            .when_to_use(
                "For arithmetic, percentages, powers, roots, trigonometry, \
                 logarithms, and other numeric calculations",
            )
            .when_not_to_use(
                "For unit conversions — use convert_units instead. For anything \
                 requiring variables or symbolic manipulation",
            )
            .parameters_for::<CalculatorArgs>()
            .example("calculator(expression='25 * 4')", "100")
            .example("calculator(expression='sqrt(144)')", "12")
            .example("calculator(expression='15/100 * 200')", "30")
            .output_format("The numeric result as a string, or an 'Error: ...' line")
            .build()
            .to_tool_def()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let arguments = arguments.to_string();
        Box::pin(async move {
            let args: CalculatorArgs = match parse_tool_args(&arguments) {
                Ok(a) => a,
                Err(e) => return e,
            };
            calc::evaluate(&args.expression)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_has_guidance() {
        let def = CalculatorTool.definition();
        assert_eq!(def.function.name, "calculator");
        assert!(def.function.description.contains("When NOT to use:"));
    }

    #[test]
    fn args_schema_requires_expression() {
        let schema = crate::json_schema_for::<CalculatorArgs>();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("expression")));
    }

    #[tokio::test]
    async fn evaluates_through_the_sandbox() {
        let out = CalculatorTool
            .execute(r#"{"expression": "25 * 4"}"#)
            .await;
        assert_eq!(out, "100");
    }

    #[tokio::test]
    async fn injection_comes_back_as_an_error_string() {
        let out = CalculatorTool
            .execute(r#"{"expression": "__import__('os')"}"#)
            .await;
        assert!(out.starts_with("Error:"), "got: {out}");
        assert!(out.contains("forbidden pattern"), "got: {out}");
    }

    #[tokio::test]
    async fn missing_expression_is_reported() {
        let out = CalculatorTool.execute("{}").await;
        assert!(out.starts_with("Error: invalid tool arguments"), "got: {out}");
    }
}
