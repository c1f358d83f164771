mod api;
mod blockchain;
mod config;
mod error;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use blockchain::Chain;
use config::Config;
use transaction::Transaction;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::from_env();
    let genesis = vec![Transaction::coinbase(
        cfg.genesis_address.clone(),
        cfg.genesis_amount,
    )];
    let chain = Chain::with_settings(genesis, cfg.chain);
    info!(
        "chain ready: difficulty={}, reward={}",
        chain.difficulty(),
        chain.miner_reward()
    );

    let state = web::Data::new(AppState::new(chain));

    info!("Starting ledger API at http://{}:{}", cfg.host, cfg.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((cfg.host.as_str(), cfg.port))?
    .run()
    .await
}
