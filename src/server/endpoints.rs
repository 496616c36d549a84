//! The HTTP endpoints.

use std::sync::Arc;

use dropshot::{endpoint, HttpError, HttpResponseOk, Path, Query, RequestContext, TypedBody};
use gridparts::PartNode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::context::Context;
use crate::{EvaluateRequest, Evaluation, Plugin, ProductInfo, Tally};

/// Return the OpenAPI schema in JSON format.
#[endpoint {
    method = GET,
    path = "/",
    tags = ["meta"],
}]
pub async fn api_get_schema(
    rqctx: RequestContext<Arc<Context>>,
) -> Result<HttpResponseOk<serde_json::Value>, HttpError> {
    Ok(HttpResponseOk(rqctx.context().schema.clone()))
}

/// The response from the `/ping` endpoint.
#[derive(Deserialize, Debug, JsonSchema, Serialize)]
pub struct Pong {
    /// The pong response.
    pub message: String,
}

/** Return pong. */
#[endpoint {
    method = GET,
    path = "/ping",
    tags = ["meta"],
}]
pub async fn ping(_rqctx: RequestContext<Arc<Context>>) -> Result<HttpResponseOk<Pong>, HttpError> {
    Ok(HttpResponseOk(Pong {
        message: "pong".to_string(),
    }))
}

/// A product as listed in the catalog.
#[derive(Deserialize, Debug, Clone, JsonSchema, Serialize)]
pub struct ProductSummary {
    /// The product id.
    pub id: String,
    /// A human readable name.
    pub label: String,
    /// The ids of the product's presets.
    pub presets: Vec<String>,
    /// Behaviours the consumer should enable.
    pub plugins: Vec<Plugin>,
}

/// List every product in the catalog.
#[endpoint {
    method = GET,
    path = "/products",
    tags = ["products"],
}]
pub async fn list_products(
    rqctx: RequestContext<Arc<Context>>,
) -> Result<HttpResponseOk<Vec<ProductSummary>>, HttpError> {
    let ctx = rqctx.context();
    let products = ctx
        .catalog
        .iter()
        .map(|p| ProductSummary {
            id: p.id().to_string(),
            label: p.label().to_string(),
            presets: p.presets().into_iter().map(|preset| preset.id).collect(),
            plugins: p.plugins().to_vec(),
        })
        .collect();
    Ok(HttpResponseOk(products))
}

/// The path parameters for operations on a product.
#[derive(Deserialize, Debug, JsonSchema, Serialize)]
pub struct ProductPathParams {
    /// The product id.
    pub id: String,
}

/// Describe a product: its parameters, presets and plugins.
#[endpoint {
    method = GET,
    path = "/products/{id}",
    tags = ["products"],
}]
pub async fn get_product(
    rqctx: RequestContext<Arc<Context>>,
    path_params: Path<ProductPathParams>,
) -> Result<HttpResponseOk<ProductInfo>, HttpError> {
    let params = path_params.into_inner();
    let product = rqctx.context().catalog.get(&params.id)?;
    Ok(HttpResponseOk(product.info()))
}

/// Query parameters for building a product from a preset.
#[derive(Deserialize, Debug, Default, JsonSchema, Serialize)]
pub struct PartsQuery {
    /// The preset to build. Defaults to the product's first preset.
    pub preset: Option<String>,
    /// Return the parts as a flat list rather than nested groups.
    pub flat: Option<bool>,
}

fn flattened(mut evaluation: Evaluation) -> Evaluation {
    evaluation.parts = evaluation.flat().into_iter().map(PartNode::Part).collect();
    evaluation
}

/// Build a product from one of its presets.
#[endpoint {
    method = GET,
    path = "/products/{id}/parts",
    tags = ["products"],
}]
pub async fn get_product_parts(
    rqctx: RequestContext<Arc<Context>>,
    path_params: Path<ProductPathParams>,
    query: Query<PartsQuery>,
) -> Result<HttpResponseOk<Evaluation>, HttpError> {
    let params = path_params.into_inner();
    let query = query.into_inner();
    tracing::info!(id = params.id, preset = ?query.preset, "building product");

    let request = EvaluateRequest {
        preset: query.preset,
        ..Default::default()
    };
    let evaluation = rqctx.context().catalog.evaluate(&params.id, &request)?;
    if query.flat.unwrap_or(false) {
        return Ok(HttpResponseOk(flattened(evaluation)));
    }
    Ok(HttpResponseOk(evaluation))
}

/// Build a product from a preset and overridden values.
#[endpoint {
    method = POST,
    path = "/products/{id}/parts",
    tags = ["products"],
}]
pub async fn evaluate_product(
    rqctx: RequestContext<Arc<Context>>,
    path_params: Path<ProductPathParams>,
    body: TypedBody<EvaluateRequest>,
) -> Result<HttpResponseOk<Evaluation>, HttpError> {
    let params = path_params.into_inner();
    let request = body.into_inner();
    tracing::info!(id = params.id, preset = ?request.preset, "evaluating product");

    let evaluation = rqctx.context().catalog.evaluate(&params.id, &request).map_err(|e| {
        tracing::warn!(id = params.id, error = e.to_string(), "evaluation failed");
        e
    })?;
    Ok(HttpResponseOk(evaluation))
}

/// Count the beams, panels and fasteners a product needs.
#[endpoint {
    method = POST,
    path = "/products/{id}/tally",
    tags = ["products"],
}]
pub async fn tally_product(
    rqctx: RequestContext<Arc<Context>>,
    path_params: Path<ProductPathParams>,
    body: TypedBody<EvaluateRequest>,
) -> Result<HttpResponseOk<Tally>, HttpError> {
    let params = path_params.into_inner();
    let request = body.into_inner();

    let evaluation = rqctx.context().catalog.evaluate(&params.id, &request)?;
    Ok(HttpResponseOk(evaluation.tally()))
}
