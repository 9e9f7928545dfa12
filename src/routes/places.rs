use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::SelectionSettings;
use crate::core::{RandomSource, RngSource, Selector};
use crate::models::{
    ErrorResponse, EvaluatePlacesResponse, FilterPlacesRequest, FilterPlacesResponse, FilterSet,
    HealthResponse, SelectionMode, SuggestRequest, SuggestResponse, TraceEntry,
};
use crate::services::PlaceCatalog;

const WIDEN_FILTERS_HINT: &str = "Try widening your filters to see more places.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlaceCatalog>,
    pub selector: Selector,
    pub default_filters: FilterSet,
    pub default_mode: SelectionMode,
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(catalog: PlaceCatalog, selection: SelectionSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            selector: Selector::new(),
            default_filters: selection.defaults,
            default_mode: selection.default_mode,
            seed: selection.seed,
        }
    }
}

/// Configure all place-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/places", web::get().to(list_places))
        .route("/places/filter", web::post().to(filter_places))
        .route("/places/evaluate", web::post().to(evaluate_places))
        .route("/places/{id}", web::get().to(get_place))
        .route("/filters/defaults", web::get().to(default_filters))
        .route("/filters/options", web::get().to(filter_options))
        .route("/suggestions", web::post().to(suggest));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        place_count: state.catalog.len(),
    })
}

/// GET /api/v1/places
async fn list_places(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.list(None))
}

/// GET /api/v1/places/{id}
async fn get_place(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.get_by_id(&id) {
        Some(place) => HttpResponse::Ok().json(place),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("No place with id {}", id),
            status_code: 404,
        }),
    }
}

/// GET /api/v1/filters/defaults
async fn default_filters(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.default_filters)
}

/// GET /api/v1/filters/options
async fn filter_options(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.facets())
}

/// Filter places endpoint
///
/// POST /api/v1/places/filter
///
/// Request body:
/// ```json
/// {
///   "filters": {
///     "center": { "lat": 40.72, "lng": -74.0 },
///     "radiusKm": 5,
///     "minRating": 4,
///     "cuisines": ["italian"],
///     "themes": [],
///     "openNow": true,
///     "priceLevels": [1, 2]
///   }
/// }
/// ```
async fn filter_places(
    state: web::Data<AppState>,
    req: web::Json<FilterPlacesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for filter request: {:?}", errors);
        return validation_error(errors);
    }

    let filters = req.filters.as_ref().unwrap_or(&state.default_filters);
    let places = state.catalog.list(Some(filters));

    tracing::debug!("{} of {} places pass the filters", places.len(), state.catalog.len());

    HttpResponse::Ok().json(FilterPlacesResponse {
        total_results: places.len(),
        places,
    })
}

/// POST /api/v1/places/evaluate
async fn evaluate_places(
    state: web::Data<AppState>,
    req: web::Json<FilterPlacesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return validation_error(errors);
    }

    let filters = req.filters.as_ref().unwrap_or(&state.default_filters);
    let evaluations = state.catalog.evaluate(filters);
    let passing_count = evaluations.iter().filter(|e| e.passes).count();

    let entries = evaluations
        .into_iter()
        .map(|evaluation| TraceEntry {
            id: evaluation.place.id.clone(),
            score: None,
            distance_km: evaluation.distance_km,
            matches: evaluation.matches,
        })
        .collect();

    HttpResponse::Ok().json(EvaluatePlacesResponse {
        entries,
        passing_count,
    })
}

/// Suggestion endpoint
///
/// POST /api/v1/suggestions
///
/// Request body:
/// ```json
/// {
///   "filters": { "cuisines": ["cocktails"] },
///   "mode": "weighted",
///   "seed": 42
/// }
/// ```
async fn suggest(state: web::Data<AppState>, req: web::Json<SuggestRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for suggestion request: {:?}", errors);
        return validation_error(errors);
    }

    let filters = req.filters.as_ref().unwrap_or(&state.default_filters);
    let mode = req.mode.unwrap_or(state.default_mode);

    let mut rng: Box<dyn RandomSource> = match req.seed.or(state.seed) {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };

    let result = state
        .selector
        .select(state.catalog.places(), filters, mode, &mut *rng);

    match result.place {
        Some(place) => tracing::info!("Suggested {} ({})", place.id, result.debug.note),
        None => tracing::info!("No suggestion: {}", result.debug.note),
    }

    let hint = result.place.is_none().then(|| WIDEN_FILTERS_HINT.to_string());

    HttpResponse::Ok().json(SuggestResponse {
        place: result.place,
        debug: result.debug,
        hint,
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
