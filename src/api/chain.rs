use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, ChainResponse, MineRequest, MineResponse, ValidateResponse};

/// Get the full chain with the current difficulty and reward.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let chain = state.chain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        length: chain.len(),
        difficulty: chain.difficulty(),
        reward: chain.miner_reward(),
        chain: chain.blocks(),
    })
}

/// Audit the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let chain = state.chain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ValidateResponse {
        valid: chain.is_valid_chain(),
        length: chain.len(),
        difficulty: chain.difficulty(),
    })
}

/// Mine the pending pool into a new block.
/// The lock is held for the whole assemble/mine/validate/append sequence.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>, req: web::Json<MineRequest>) -> impl Responder {
    let miner_address = req.miner_address.trim();
    if miner_address.is_empty() {
        return HttpResponse::BadRequest().body("miner_address required");
    }

    let mut chain = state.chain.lock().expect("mutex poisoned");
    match chain.mine_next(miner_address) {
        Ok(block) => {
            info!(
                "MINER - sealed block #{} (hash={}, nonce={})",
                block.index(),
                block.hash(),
                block.nonce()
            );
            HttpResponse::Ok().json(MineResponse {
                block,
                difficulty: chain.difficulty(),
            })
        }
        Err(e) => {
            warn!("MINER - rejected: {e}");
            HttpResponse::Conflict().body(e.to_string())
        }
    }
}
