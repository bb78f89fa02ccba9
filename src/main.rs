use roster_db::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Roster: Departments & Employees Server");

    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}, seed data={}, last name required={}",
        config.server.host,
        config.server.port,
        config.seed.enabled,
        config.validation.require_last_name
    );

    roster_db::run_server(&config).await?;

    Ok(())
}
