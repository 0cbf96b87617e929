use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use gtm_core::GtmPlan;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: GtmPlan,
}

/// POST /api/plan: normalize the JSON body and synthesize a plan.
///
/// The body is read as raw bytes so that malformed JSON and non-object
/// payloads both surface as a 400 with a JSON `error` message, rather than
/// axum's plain-text extractor rejection.
pub async fn generate_plan(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanResponse>, AppError> {
    let input = gtm_core::input::parse_payload(&body, app.enum_mode())?;
    let plan = gtm_core::generate_plan(&input);
    tracing::info!(
        product = %input.product_name,
        stage = %input.stage,
        budget = %input.budget_level,
        timeline = %input.launch_timeline,
        "generated plan"
    );
    Ok(Json(PlanResponse { plan }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtm_core::config::Config;
    use gtm_core::GtmError;

    fn lenient() -> AppState {
        AppState::new(Config::default())
    }

    #[tokio::test]
    async fn empty_object_generates_default_plan() {
        let result = generate_plan(State(lenient()), Bytes::from_static(b"{}"))
            .await
            .unwrap();
        let plan = result.0.plan;
        assert!(plan.executive_summary[0].starts_with("Your Product"));
        assert_eq!(plan.launch_timeline.len(), 4);
    }

    #[tokio::test]
    async fn array_body_is_invalid_payload() {
        let err = generate_plan(State(lenient()), Bytes::from_static(b"[1,2]"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.0.downcast_ref::<GtmError>(),
            Some(GtmError::InvalidPayload)
        ));
    }

    #[tokio::test]
    async fn strict_state_rejects_unknown_stage() {
        let app = AppState::new(Config {
            strict_options: true,
            ..Config::default()
        });
        let err = generate_plan(State(app), Bytes::from_static(br#"{"stage":"seed"}"#))
            .await
            .unwrap_err();
        assert!(matches!(
            err.0.downcast_ref::<GtmError>(),
            Some(GtmError::InvalidOption { .. })
        ));
    }
}
