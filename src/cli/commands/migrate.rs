use crate::config;
use crate::database::PgStore;

pub async fn handle() -> anyhow::Result<()> {
    let database = &config::config().database;
    let Some(url) = database.url.as_deref() else {
        anyhow::bail!("DATABASE_URL must be set to run migrations");
    };

    let store = PgStore::connect(url, database).await?;
    store.migrate().await?;

    println!("✓ Migrations applied");
    Ok(())
}
