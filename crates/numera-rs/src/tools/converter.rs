//! The unit conversion tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::ToolDef;
use crate::convert;
use crate::tools::core::{Tool, ToolFuture, parse_tool_args};
use crate::tools::names;
use crate::tools::spec::ToolSpec;

/// Typed arguments for `convert_units`.
#[derive(Deserialize, JsonSchema)]
pub struct ConvertUnitsArgs {
    /// A conversion query like '100 km a millas' or '32 fahrenheit a celsius'.
    pub query: String,
}

/// Convert values between units of length, mass, volume, time, speed,
/// area, data, and temperature. See [`crate::convert`].
pub struct ConvertUnitsTool;

impl Tool for ConvertUnitsTool {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::CONVERT_UNITS)
            .purpose("Convert a value between units of measurement")
            .when_to_use(
                "For conversions within length, mass, volume, time, speed, area, \
                 data storage, or temperature",
            )
            .when_not_to_use(
                "For pure arithmetic — use calculator instead. For currencies \
                 or any unit not in the fixed category table",
            )
            .parameters_for::<ConvertUnitsArgs>()
            .example("convert_units(query='100 km a millas')", "100 km = 62.1371 millas")
            .example(
                "convert_units(query='32 fahrenheit a celsius')",
                "32 fahrenheit = 0.00 celsius",
            )
            .example("convert_units(query='1024 mb a gb')", "1024 mb = 1 gb")
            .output_format("'<value> <unit> = <result> <unit>', or an 'Error: ...' line")
            .build()
            .to_tool_def()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let arguments = arguments.to_string();
        Box::pin(async move {
            let args: ConvertUnitsArgs = match parse_tool_args(&arguments) {
                Ok(a) => a,
                Err(e) => return e,
            };
            convert::convert_query(&args.query)
        })
    }
}
