use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::RoundError,
    game::evaluate_round,
    models::{Board, LetterGrid, NewlyPlaced},
    websocket::messages::WordResult,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub board: Board,
    #[serde(default)]
    pub newly_placed: NewlyPlaced,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Accepted,
    Rejected,
    NoTilesPlaced,
    NoWordsFormed,
    DictionaryUnavailable,
}

impl From<&RoundError> for RoundStatus {
    fn from(err: &RoundError) -> Self {
        match err {
            RoundError::NoTilesPlaced => RoundStatus::NoTilesPlaced,
            RoundError::NoWordsFormed => RoundStatus::NoWordsFormed,
            RoundError::DictionaryRejection { .. } => RoundStatus::Rejected,
            RoundError::DictionaryUnavailable => RoundStatus::DictionaryUnavailable,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub status: RoundStatus,
    pub words: Vec<WordResult>,
    pub score_delta: u32,
    pub message: String,
}

/// Check the words a turn would form on a posted board, without any session
pub async fn validate_board(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, StatusCode> {
    let ValidateRequest {
        board,
        newly_placed,
    } = payload;

    if let Some(pos) = newly_placed.iter().find(|pos| !board.contains(*pos)) {
        tracing::warn!("Rejecting validation request: {} is outside a {}x{} board", pos, board.size(), board.size());
        return Err(StatusCode::BAD_REQUEST);
    }

    let response = match evaluate_round(&board, &newly_placed, &state.dictionary) {
        Ok(round) => ValidateResponse {
            status: RoundStatus::Accepted,
            message: format!("Words accepted! +{} points", round.score_delta),
            score_delta: round.score_delta,
            words: round
                .words
                .into_iter()
                .map(|c| WordResult::new(c, true))
                .collect(),
        },
        Err(err) => ValidateResponse {
            status: RoundStatus::from(&err),
            words: WordResult::from_rejection(&err),
            score_delta: 0,
            message: err.to_string(),
        },
    };

    tracing::debug!(
        "Validated {} placed tiles: {:?}",
        newly_placed.len(),
        response.status
    );
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, dictionary::Dictionary, routes::create_routes};
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(words: &[&str]) -> Router {
        let state = Arc::new(AppState {
            config: Config::from_lookup(|_| None).unwrap(),
            dictionary: Dictionary::from_words(words),
        });
        create_routes().with_state(state)
    }

    async fn post_validate(app: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/validate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn kwan_request() -> Value {
        json!({
            "board": [
                ["k", "w", "a", "n"],
                [null, null, null, null],
                [null, null, null, null],
                [null, null, null, null]
            ],
            "newly_placed": [{"row": 0, "col": 0}, {"row": 0, "col": 2}]
        })
    }

    #[tokio::test]
    async fn test_accepted_word() {
        let (status, body) = post_validate(app(&["kwan"]), kwan_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "accepted");
        assert_eq!(body["score_delta"], 40);
        assert_eq!(body["words"][0]["word"], "kwan");
        assert_eq!(body["words"][0]["accepted"], true);
        assert_eq!(body["words"][0]["positions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_rejected_word() {
        let (status, body) = post_validate(app(&["nsu"]), kwan_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "rejected");
        assert_eq!(body["score_delta"], 0);
        assert_eq!(body["words"][0]["accepted"], false);
    }

    #[tokio::test]
    async fn test_no_tiles_placed() {
        let mut request = kwan_request();
        request["newly_placed"] = json!([]);
        let (_, body) = post_validate(app(&["kwan"]), request).await;
        assert_eq!(body["status"], "no_tiles_placed");
        assert_eq!(body["message"], "Place new tiles first");
    }

    #[tokio::test]
    async fn test_dictionary_unavailable() {
        let (_, body) = post_validate(app(&[]), kwan_request()).await;
        assert_eq!(body["status"], "dictionary_unavailable");
    }

    #[tokio::test]
    async fn test_out_of_bounds_position() {
        let mut request = kwan_request();
        request["newly_placed"] = json!([{"row": 4, "col": 0}]);
        let (status, _) = post_validate(app(&["kwan"]), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_square_board() {
        let request = json!({
            "board": [["k", "w"], [null]],
            "newly_placed": [{"row": 0, "col": 0}]
        });
        let (status, _) = post_validate(app(&["kwan"]), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_multi_letter_cell_is_refused() {
        let request = json!({
            "board": [["kwa", "n"], [null, null]],
            "newly_placed": [{"row": 0, "col": 1}]
        });
        let (status, _) = post_validate(app(&["kwan"]), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health_reports_dictionary_size() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(&["kwan", "nsu"]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["dictionary_words"], 2);
    }
}
