//! `seed` subcommand: migrate and populate the store catalog.

pub async fn run_seed() -> anyhow::Result<()> {
    let config = storefind_core::load_app_config_from_env()?;
    let pool_config = storefind_db::PoolConfig::from_app_config(&config);
    let pool = storefind_db::connect_pool(&config.database_url, pool_config).await?;

    let applied = storefind_db::run_migrations(&pool).await?;
    if applied > 0 {
        tracing::info!(applied, "applied pending migrations");
    }

    let seeded = storefind_db::seed_stores(&pool).await?;
    println!("seeded {seeded} catalog stores");
    Ok(())
}
