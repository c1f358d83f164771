use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};
use crate::blockchain::TARGET_BLOCK_TIME_MS;

#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let chain = state.chain.lock().expect("mutex poisoned");
    let blocks = chain.blocks();

    // interval between the two newest blocks, the one the last retarget used
    let last_interval_ms = match blocks {
        [.., older, newer] => Some(newer.timestamp() - older.timestamp()),
        _ => None,
    };

    HttpResponse::Ok().json(StatsResponse {
        height: chain.len(),
        difficulty: chain.difficulty(),
        reward: chain.miner_reward(),
        pending: chain.pending().len(),
        target_block_time_ms: TARGET_BLOCK_TIME_MS,
        last_interval_ms,
    })
}
