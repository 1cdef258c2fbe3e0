//! Tool handler plumbing.
//!
//! Every OpenSky tool implements [`OpenSkyTool`]: a typed params struct plus an
//! async `execute`. The generic helpers here turn an implementation into the
//! rmcp [`Tool`] model, a [`ToolRoute`], and a name-dispatchable call, so the
//! tool files only contain their own request and rendering logic.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::ToolError;
use super::definitions::common::error_result;
use crate::domains::opensky::FlightDataSource;

/// A tool backed by the OpenSky API.
pub trait OpenSkyTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; also the source of the published input schema.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Run the tool. Always yields exactly one text block.
    fn execute(
        params: Self::Params,
        source: &dyn FlightDataSource,
    ) -> impl Future<Output = CallToolResult> + Send;
}

/// Deserialize raw call arguments into a tool's params.
///
/// A missing arguments object is treated as `{}` so tools whose arguments are
/// all optional still work.
pub fn parse_params<P: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<P, ToolError> {
    let args = arguments.unwrap_or_default();
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Parse arguments and run a tool. Validation failures become a text block.
pub async fn call_tool<T: OpenSkyTool>(
    arguments: Option<JsonObject>,
    source: Arc<dyn FlightDataSource>,
) -> CallToolResult {
    match parse_params::<T::Params>(arguments) {
        Ok(params) => T::execute(params, source.as_ref()).await,
        Err(e) => {
            warn!(tool = T::NAME, error = %e, "Rejected tool arguments");
            error_result(&e)
        }
    }
}

/// Create the Tool model (metadata) for a tool.
pub fn tool_model<T: OpenSkyTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for the rmcp router.
pub fn tool_route<T, S>(source: Arc<dyn FlightDataSource>) -> ToolRoute<S>
where
    T: OpenSkyTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool_model::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone();
        let source = source.clone();
        async move { Ok(call_tool::<T>(args, source).await) }.boxed()
    })
}
