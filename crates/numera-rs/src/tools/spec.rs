//! Structured tool descriptions.
//!
//! [`ToolSpec`] replaces free-form description strings with structured
//! metadata — purpose, when to use, when not to use, examples, output
//! format — rendered into the single description field the
//! function-calling wire format allows. Structured guidance measurably
//! improves the orchestrator's tool selection.

use crate::ToolDef;

/// A structured tool specification.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name (unique within a [`ToolSet`](crate::tools::ToolSet)).
    pub name: String,
    /// One-sentence imperative purpose.
    pub purpose: String,
    /// When this tool should be used.
    pub when_to_use: String,
    /// When this tool should NOT be used.
    pub when_not_to_use: String,
    /// JSON Schema for the parameters.
    pub parameters: serde_json::Value,
    /// (input, expected behavior) usage examples.
    pub examples: Vec<UsageExample>,
    /// Description of the output format.
    pub output_format: String,
}

/// A usage example for a tool.
#[derive(Debug, Clone)]
pub struct UsageExample {
    pub input: String,
    pub output: String,
}

impl ToolSpec {
    /// Start building a spec for the named tool.
    pub fn builder(name: impl Into<String>) -> ToolSpecBuilder {
        ToolSpecBuilder {
            name: name.into(),
            purpose: None,
            when_to_use: None,
            when_not_to_use: None,
            parameters: None,
            examples: Vec::new(),
            output_format: None,
        }
    }

    /// Render the structured fields into a description string.
    pub fn to_description(&self) -> String {
        let mut desc = format!("{}.", self.purpose);
        desc.push_str(&format!("\nWhen to use: {}", self.when_to_use));
        desc.push_str(&format!("\nWhen NOT to use: {}", self.when_not_to_use));
        if !self.examples.is_empty() {
            desc.push_str("\nExamples:");
            for example in &self.examples {
                desc.push_str(&format!("\n  - Input: {} → {}", example.input, example.output));
            }
        }
        if !self.output_format.is_empty() {
            desc.push_str(&format!("\nOutput format: {}", self.output_format));
        }
        desc
    }

    /// Convert to the wire-format [`ToolDef`].
    pub fn to_tool_def(&self) -> ToolDef {
        ToolDef::new(
            self.name.clone(),
            self.to_description(),
            self.parameters.clone(),
        )
    }
}

/// Builder for [`ToolSpec`]. `build()` panics if a required field is
/// missing, so incompleteness surfaces at registration time, not at the
/// first orchestrator call.
pub struct ToolSpecBuilder {
    name: String,
    purpose: Option<String>,
    when_to_use: Option<String>,
    when_not_to_use: Option<String>,
    parameters: Option<serde_json::Value>,
    examples: Vec<UsageExample>,
    output_format: Option<String>,
}

impl ToolSpecBuilder {
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn when_to_use(mut self, text: impl Into<String>) -> Self {
        self.when_to_use = Some(text.into());
        self
    }

    pub fn when_not_to_use(mut self, text: impl Into<String>) -> Self {
        self.when_not_to_use = Some(text.into());
        self
    }

    /// Set the parameter schema from a typed argument struct.
    pub fn parameters_for<T: schemars::JsonSchema>(mut self) -> Self {
        self.parameters = Some(crate::json_schema_for::<T>());
        self
    }

    /// Set the parameter schema explicitly.
    pub fn parameters(mut self, schema: serde_json::Value) -> Self {
        self.parameters = Some(schema);
        self
    }

    pub fn example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push(UsageExample {
            input: input.into(),
            output: output.into(),
        });
        self
    }

    pub fn output_format(mut self, text: impl Into<String>) -> Self {
        self.output_format = Some(text.into());
        self
    }

    /// Finish building the [`ToolSpec`].
    ///
    /// # Panics
    ///
    /// If purpose, when_to_use, when_not_to_use, or parameters are unset.
    pub fn build(self) -> ToolSpec {
        let name = self.name;
        ToolSpec {
            purpose: self.purpose.unwrap_or_else(|| panic!("ToolSpec '{name}': purpose is required")),
            when_to_use: self
                .when_to_use
                .unwrap_or_else(|| panic!("ToolSpec '{name}': when_to_use is required")),
            when_not_to_use: self
                .when_not_to_use
                .unwrap_or_else(|| panic!("ToolSpec '{name}': when_not_to_use is required")),
            parameters: self
                .parameters
                .unwrap_or_else(|| panic!("ToolSpec '{name}': parameters are required")),
            examples: self.examples,
            output_format: self.output_format.unwrap_or_default(),
            name,
        }
    }
}
