mod common;

use anyhow::Result;
use keybench_core::{Database, MeasurementError, Memory, QueryError};

#[tokio::test]
async fn indexes_size_matches_engine() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    database.execute("create table sized (id bigint primary key, code text unique)").await?;
    database.execute("insert into sized select i, md5(i::text) from generate_series(1, 5000) as i").await?;

    let reported = database.execute("select pg_indexes_size('sized'::regclass)").await?;
    let expected: u64 = reported.scalar(0, 0).unwrap().parse()?;

    let size = database.measure_indexes_size("sized").await?;
    assert_eq!(size, Memory::new(expected));
    assert!(size.bytes() > 0);

    Ok(())
}

#[tokio::test]
async fn indexes_size_of_table_without_indexes_is_zero() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    database.execute("create table heap_only (payload text)").await?;
    assert_eq!(database.measure_indexes_size("heap_only").await?, Memory::ZERO);

    Ok(())
}

#[tokio::test]
async fn indexes_size_of_missing_table_fails() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    match database.measure_indexes_size("missing_table").await {
        Err(MeasurementError::IndexesSize { table, source }) => {
            assert_eq!(table, "missing_table");
            assert!(source.is_some());
        }
        other => panic!("expected a missing size error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn execution_time_of_trivial_query() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    let time = database.measure_execution_time("select 1").await?;
    // a constant select finishes well under a second
    assert!(time.microseconds() < 1_000_000, "unexpected execution time {time}");

    Ok(())
}

#[tokio::test]
async fn execution_time_of_failing_query() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    let err = database.measure_execution_time("select * from missing_table").await.unwrap_err();
    assert!(matches!(err, MeasurementError::ExecutionTime { ref query, .. } if query == "select * from missing_table"));

    Ok(())
}

#[tokio::test]
async fn execute_surfaces_engine_errors() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    let err = database.execute("selec 1").await.unwrap_err();
    assert!(matches!(&err, QueryError::Engine { query, .. } if query == "selec 1"));

    // the session is still usable afterwards
    let result = database.execute("select 'still alive'").await?;
    assert_eq!(result.scalar(0, 0), Some("still alive"));

    Ok(())
}

#[tokio::test]
async fn sequential_calls_do_not_interleave() -> Result<()> {
    let (_container, database) = common::create_postgres_container().await?;

    database.execute("create table sequential (id int primary key)").await?;

    for round in 0..5 {
        let first = database.execute(&format!("select {round} as round")).await?;
        let size = database.measure_indexes_size("sequential").await?;
        let time = database.measure_execution_time("select * from sequential").await;
        let second = database.execute("select 'after'").await?;

        assert_eq!(first.len(), 1);
        assert_eq!(first.scalar(0, 0), Some(round.to_string().as_str()));
        assert_eq!(first.columns(), ["round".to_owned()]);
        assert_eq!(size.bytes(), 8192);
        assert!(time.is_ok());
        assert_eq!(second.len(), 1);
        assert_eq!(second.scalar(0, 0), Some("after"));
    }

    database.close().await;
    Ok(())
}
