//! # Route Registrar
//!
//! Binds each (method, path) to its action handler and its documentation
//! descriptor. Fifteen entity routes (three entities, five operations each)
//! plus the documentation endpoint. The registrar owns request extraction:
//! JSON bodies for create, query strings for update and delete, path
//! parameters for lookups.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::{Ack, ApiError, CatalogApi, DeleteQuery, UpdateQuery};
use crate::docs::{ApiDoc, OperationDoc, ParamDoc, ResponseMessageDoc};
use crate::entity::{CarrierDraft, EntityKind, ManufacturerDraft, PhoneDraft};
use crate::store::UpdateOutcome;

use super::write_gate::{require_api_key, WriteGate};

/// State shared by every route
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<CatalogApi>,
    pub doc: Arc<ApiDoc>,
    pub gate: Arc<WriteGate>,
}

/// Build the catalog router, with the write gate ahead of every route
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api-docs", get(api_docs))
        .route("/carrier/list", get(list_carriers))
        .route("/carrier/{carrierId}", get(get_carrier_by_id))
        .route("/carrier", post(add_carrier))
        .route("/carrier", put(update_carrier))
        .route("/carrier", delete(delete_carrier))
        .route("/manufacturer/list", get(list_manufacturers))
        .route("/manufacturer/{manufId}", get(get_manufacturer_by_id))
        .route("/manufacturer", post(add_manufacturer))
        .route("/manufacturer", put(update_manufacturer))
        .route("/manufacturer", delete(delete_manufacturer))
        .route("/phone/list", get(list_phones))
        .route("/phone/{phoneId}", get(get_phone_by_id))
        .route("/phone", post(add_phone))
        .route("/phone", put(update_phone))
        .route("/phone", delete(delete_phone))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
}

// ==================
// Documentation
// ==================

/// Serve the assembled API documentation
async fn api_docs(State(state): State<AppState>) -> Json<ApiDoc> {
    Json(state.doc.as_ref().clone())
}

// ==================
// Carrier handlers
// ==================

async fn list_carriers(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    state.api.list(EntityKind::Carrier).map(Json)
}

async fn get_carrier_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.api.get_by_id(EntityKind::Carrier, &id).map(Json)
}

async fn add_carrier(
    State(state): State<AppState>,
    body: Option<Json<CarrierDraft>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = state.api.create(body.map(|Json(draft)| draft))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_carrier(
    State(state): State<AppState>,
    Query(query): Query<UpdateQuery>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    state.api.update(EntityKind::Carrier, query).map(Json)
}

async fn delete_carrier(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Ack>, ApiError> {
    state.api.delete(EntityKind::Carrier, query).map(Json)
}

// ==================
// Manufacturer handlers
// ==================

async fn list_manufacturers(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    state.api.list(EntityKind::Manufacturer).map(Json)
}

async fn get_manufacturer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.api.get_by_id(EntityKind::Manufacturer, &id).map(Json)
}

async fn add_manufacturer(
    State(state): State<AppState>,
    body: Option<Json<ManufacturerDraft>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = state.api.create(body.map(|Json(draft)| draft))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    Query(query): Query<UpdateQuery>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    state.api.update(EntityKind::Manufacturer, query).map(Json)
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Ack>, ApiError> {
    state.api.delete(EntityKind::Manufacturer, query).map(Json)
}

// ==================
// Phone handlers
// ==================

async fn list_phones(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    state.api.list(EntityKind::Phone).map(Json)
}

async fn get_phone_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.api.get_by_id(EntityKind::Phone, &id).map(Json)
}

async fn add_phone(
    State(state): State<AppState>,
    body: Option<Json<PhoneDraft>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = state.api.create(body.map(|Json(draft)| draft))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_phone(
    State(state): State<AppState>,
    Query(query): Query<UpdateQuery>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    state.api.update(EntityKind::Phone, query).map(Json)
}

async fn delete_phone(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Ack>, ApiError> {
    state.api.delete(EntityKind::Phone, query).map(Json)
}

// ==================
// Route metadata
// ==================

/// Path parameter name of the get-by-id route
fn id_param(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Carrier => "carrierId",
        EntityKind::Manufacturer => "manufId",
        EntityKind::Phone => "phoneId",
    }
}

/// Documentation descriptors for every bound route
pub fn operation_docs() -> Vec<OperationDoc> {
    [
        EntityKind::Carrier,
        EntityKind::Manufacturer,
        EntityKind::Phone,
    ]
    .into_iter()
    .flat_map(entity_operation_docs)
    .collect()
}

/// The five operation descriptors of one entity
fn entity_operation_docs(kind: EntityKind) -> Vec<OperationDoc> {
    let label = kind.label();
    let plural = kind.collection();
    let model = kind.model();
    let base = format!("/{label}");

    vec![
        OperationDoc::new("GET", format!("{base}/list"), format!("List all {plural}"))
            .notes(format!("Returns a list of all {plural}"))
            .nickname(format!("getAll{model}s"))
            .response(ResponseMessageDoc::new(404, format!("invalid {plural}"))),
        OperationDoc::new(
            "GET",
            format!("{base}/{{{}}}", id_param(kind)),
            format!("Find {label} by ID"),
        )
        .notes(format!("Returns a {label} based on ID"))
        .nickname(format!("get{model}ById"))
        .param(ParamDoc::path(
            id_param(kind),
            format!("ID of the {label} to return"),
            "string",
        ))
        .response(ResponseMessageDoc::new(404, "invalid id"))
        .response(ResponseMessageDoc::new(404, format!("{label} not found"))),
        OperationDoc::new("POST", base.clone(), format!("Add a new {label}"))
            .notes(format!("Adds a new {label}"))
            .nickname(format!("add{model}"))
            .param(ParamDoc::body(
                "body",
                format!("JSON object representing the {label} to add"),
                model,
            ))
            .response(ResponseMessageDoc::new(400, format!("invalid {label} name")))
            .response(ResponseMessageDoc::new(500, format!("{label} not added"))),
        OperationDoc::new("PUT", base.clone(), format!("Update an existing {label}"))
            .notes(format!("Updates the name of an existing {label}"))
            .nickname(format!("update{model}"))
            .param(ParamDoc::query(
                "id",
                format!("ID of the {label} to update"),
                "string",
                true,
            ))
            .param(ParamDoc::query(
                "name",
                format!("New {label} name to use"),
                "string",
                true,
            ))
            .response(ResponseMessageDoc::new(400, format!("invalid {label} id")))
            .response(ResponseMessageDoc::new(400, format!("invalid {label} name")))
            .response(ResponseMessageDoc::new(500, format!("{label} not updated"))),
        OperationDoc::new("DELETE", base, format!("Delete an existing {label}"))
            .notes(format!("Deletes an existing {label}"))
            .nickname(format!("delete{model}"))
            .param(ParamDoc::query(
                "id",
                format!("ID of the {label} to delete"),
                "string",
                true,
            ))
            .response(ResponseMessageDoc::new(400, format!("invalid {label} id"))),
    ]
}
