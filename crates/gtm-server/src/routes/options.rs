use axum::Json;
use gtm_core::options::{catalog, OptionCatalog};

/// GET /api/options: field choices, labels, defaults and an example input.
pub async fn get_options() -> Json<OptionCatalog> {
    Json(catalog())
}
