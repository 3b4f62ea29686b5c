use cow_leaderboard_api::app;
use dotenv::dotenv;
use env_logger::Env;

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = app::create_app().await {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
