use dotenvy::dotenv;
use shop_browser::{build_server, create_pool, AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let pool = create_pool(&config.database_url().map_err(std::io::Error::other)?);

    log::info!(
        "Browsing {} on {}:{}, transcripts in {}",
        config.db_name,
        config.db_host,
        config.db_port,
        config.transcript_path.display()
    );
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(pool, &config)?.await
}
