use std::collections::HashMap;

use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use werewolf_core::{DomainError, success_payload};
use werewolf_game::vote;

use crate::errors::ApiError;
use crate::extract::ValidatedJson;

pub fn router() -> Router {
    Router::new()
        .route("/games/crash", post(crash))
        .route("/games/tally", post(tally_ballots))
}

/// Handle `POST /games/crash`
///
/// Forces an unclassified fault so the internal fault boundary can be
/// exercised end to end.
async fn crash() -> Response {
    panic!("boom")
}

#[derive(Debug, Deserialize)]
struct TallyBody {
    /// seat -> vote target; `null` is an abstention
    #[serde(default)]
    ballots: HashMap<String, Option<u32>>,
}

/// Handle `POST /games/tally`
async fn tally_ballots(ValidatedJson(body): ValidatedJson<TallyBody>) -> Result<Json<Value>, ApiError> {
    let mut ballots = HashMap::with_capacity(body.ballots.len());
    for (seat, target) in body.ballots {
        let seat: u32 = seat
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid ballot seat: {seat}")))?;
        ballots.insert(seat, target);
    }

    let counts = vote::tally(&ballots);
    let (leaders, top) = vote::leaders(&counts);

    let counts: Map<String, Value> = counts
        .into_iter()
        .map(|(seat, count)| (seat.to_string(), Value::from(count)))
        .collect();

    Ok(Json(success_payload(json!({
        "counts": counts,
        "leaders": leaders,
        "top": top,
    }))))
}
