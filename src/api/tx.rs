use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, MempoolResponse, NewTxRequest, NewTxResponse};
use crate::transaction::Transaction;

/// Queue a transaction into the pending pool. No balance check here.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let tx: Transaction = body.into_inner().into();
    info!("POST /tx/ - {:?} -> {} ({})", tx.from, tx.to, tx.amount.raw());

    {
        let mut chain = state.chain.lock().expect("mutex poisoned");
        chain.create_tx(tx);
    }

    HttpResponse::Ok().json(NewTxResponse { result: "success" })
}

/// List the pending pool.
#[get("/mempool/")]
pub async fn get_mempool(state: web::Data<AppState>) -> impl Responder {
    let chain = state.chain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(MempoolResponse {
        size: chain.pending().len(),
        transactions: chain.pending(),
    })
}
