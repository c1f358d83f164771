use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, BalanceResponse};

#[get("/balance/{address}/")]
pub async fn get_balance(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let address = path.into_inner().0;

    let balance = {
        let chain = state.chain.lock().expect("mutex poisoned");
        chain.get_balance(&address)
    };

    HttpResponse::Ok().json(BalanceResponse { address, balance })
}
