//! Common utilities for Postgres measurement tests

use anyhow::Result;
use keybench_storage_postgres::{PostgresConfig, PostgresDatabase};
use std::str::FromStr;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::{postgres, testcontainers::runners::AsyncRunner};
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt().with_max_level(Level::from_str(&level).unwrap()).with_test_writer().init();
    } else {
        tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init();
    }
}

pub async fn create_postgres_container() -> Result<(ContainerAsync<postgres::Postgres>, PostgresDatabase)> {
    // gen_random_uuid() needs PostgreSQL 13 or later
    let container: ContainerAsync<postgres::Postgres> = postgres::Postgres::default()
        .with_db_name("keybench")
        .with_user("postgres")
        .with_password("postgres")
        .with_tag("16-alpine")
        .start()
        .await?;

    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(5432).await?;
    let config = PostgresConfig::builder().host(host.to_string()).port(port).dbname("keybench").user("postgres").password("postgres").build();

    let database = PostgresDatabase::connect(&config).await?;

    Ok((container, database))
}
