//! Integration tests for `PgEventoRepository`.
//!
//! These need a running `PostgreSQL` reachable through `DATABASE_URL`; run
//! them with `cargo test -- --ignored`.

use agenda_core::aggregate::AggregateRoot;
use agenda_core::error::DomainError;
use agenda_eventos::domain::aggregates::Evento;
use agenda_eventos::domain::repository::EventoRepository;
use agenda_eventos::domain::status::EventoStatus;
use agenda_eventos::domain::value_objects::{Artista, EventoId, LineUp, Localizacao};
use agenda_store::schema::apply_schema;
use agenda_store::{PgEventoRepository, StoreConfig};
use agenda_test_support::{FixedClock, fixed_now};
use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

fn new_evento(id: &str, line_up: Option<LineUp>) -> Evento {
    Evento::criar(
        EventoId::new(id).unwrap(),
        Localizacao::new("1", "Local Test", "Endereço Test", 100),
        Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
        line_up,
        Uuid::new_v4(),
        &FixedClock(fixed_now()),
    )
}

// --- find_by_id ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_returns_none_for_unknown_id(pool: PgPool) {
    let repo = PgEventoRepository::new(pool);

    let found = repo
        .find_by_id(&EventoId::new("non-existent-id").unwrap())
        .await
        .unwrap();

    assert!(found.is_none());
}

// --- save + find_by_id round-trip ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_save_and_find_round_trip(pool: PgPool) {
    // Arrange
    let repo = PgEventoRepository::new(pool);
    let line_up = LineUp::new(vec![
        Artista::new("1", "Artista Test", "Rock"),
        Artista::new("2", "Outro Artista", "Jazz"),
    ])
    .unwrap();
    let mut evento = new_evento("evento-1", Some(line_up));

    // Act
    repo.save(&evento).await.unwrap();
    evento.commit();
    let loaded = repo.find_by_id(evento.id()).await.unwrap().unwrap();

    // Assert
    assert_eq!(loaded.to_snapshot(), evento.to_snapshot());
    assert_eq!(loaded.version(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_save_persists_absent_line_up_as_null(pool: PgPool) {
    let repo = PgEventoRepository::new(pool.clone());
    let evento = new_evento("evento-1", None);

    repo.save(&evento).await.unwrap();

    let line_up_is_null: bool =
        sqlx::query_scalar("SELECT line_up IS NULL FROM eventos WHERE evento_id = $1")
            .bind("evento-1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(line_up_is_null);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_save_updates_existing_row(pool: PgPool) {
    // Arrange
    let repo = PgEventoRepository::new(pool);
    let clock = FixedClock(fixed_now());
    let mut evento = new_evento("evento-1", None);
    repo.save(&evento).await.unwrap();
    evento.commit();

    // Act
    evento.cancelar(Uuid::new_v4(), &clock).unwrap();
    repo.save(&evento).await.unwrap();
    evento.commit();

    // Assert
    let loaded = repo.find_by_id(evento.id()).await.unwrap().unwrap();
    assert_eq!(loaded.status(), EventoStatus::Cancelado);
    assert_eq!(loaded.version(), 2);
}

// --- concurrency ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_stale_writer_gets_concurrency_conflict(pool: PgPool) {
    // Arrange
    let repo = PgEventoRepository::new(pool);
    let clock = FixedClock(fixed_now());
    let mut evento = new_evento("evento-1", None);
    repo.save(&evento).await.unwrap();
    evento.commit();
    let mut first = repo.find_by_id(evento.id()).await.unwrap().unwrap();
    let mut second = repo.find_by_id(evento.id()).await.unwrap().unwrap();

    // Act
    first.cancelar(Uuid::new_v4(), &clock).unwrap();
    repo.save(&first).await.unwrap();
    second
        .remarcar(
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            Uuid::new_v4(),
            &clock,
        )
        .unwrap();
    let result = repo.save(&second).await;

    // Assert
    match result {
        Err(DomainError::ConcurrencyConflict {
            aggregate_id,
            expected,
            actual,
        }) => {
            assert_eq!(aggregate_id, "evento-1");
            assert_eq!(expected, 1);
            assert_eq!(actual, 2);
        }
        other => panic!("expected ConcurrencyConflict, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_creating_same_id_twice_conflicts(pool: PgPool) {
    let repo = PgEventoRepository::new(pool);
    repo.save(&new_evento("evento-1", None)).await.unwrap();

    let result = repo.save(&new_evento("evento-1", None)).await;

    assert!(matches!(
        result,
        Err(DomainError::ConcurrencyConflict {
            expected: 0,
            actual: 1,
            ..
        })
    ));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_status_in_row_is_a_validation_error(pool: PgPool) {
    let repo = PgEventoRepository::new(pool.clone());
    repo.save(&new_evento("evento-1", None)).await.unwrap();
    sqlx::query("UPDATE eventos SET status = 'ADIADO' WHERE evento_id = $1")
        .bind("evento-1")
        .execute(&pool)
        .await
        .unwrap();

    let result = repo.find_by_id(&EventoId::new("evento-1").unwrap()).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

// --- setup ---

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_config_connects_and_applies_schema() {
    let config = StoreConfig::from_env().unwrap();
    let pool = config.connect().await.unwrap();

    apply_schema(&pool).await.unwrap();
    apply_schema(&pool).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM eventos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(count >= 0);
}
