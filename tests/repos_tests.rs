use anyhow::Result;
use ats_score::{
    db::{make_db_pool, run_migrations},
    error::DatabaseError,
    repos::{
        PgUserRepo, UserRepository,
        user::CreateUserDbPayload,
    },
};
use std::time::Duration;
use uuid::Uuid;

async fn ensure_repo() -> Result<Option<PgUserRepo>> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Skipping repo tests: DATABASE_URL not set");
            return Ok(None);
        }
    };
    let pool = make_db_pool(&url, 5, Duration::from_secs(3)).await?;
    run_migrations(&pool).await?;
    Ok(Some(PgUserRepo::new(pool)))
}

#[tokio::test]
async fn user_repo_crud_smoke() -> Result<()> {
    let Some(repo) = ensure_repo().await? else {
        return Ok(());
    };
    repo.ping().await?;

    let email = format!("test+{}@example.com", Uuid::new_v4());
    let created = repo
        .create(CreateUserDbPayload {
            email: email.clone(),
        })
        .await?;
    assert_eq!(created.email, email);

    let fetched = repo.get(created.uid).await?;
    assert_eq!(fetched.uid, created.uid);

    let by_email = repo.get_by_email(&email).await?;
    assert_eq!(by_email.uid, created.uid);

    let listed = repo.list().await?;
    assert!(listed.iter().any(|u| u.uid == created.uid));
    assert!(repo.count().await? >= 1);

    Ok(())
}

#[tokio::test]
async fn user_repo_rejects_duplicate_email() -> Result<()> {
    let Some(repo) = ensure_repo().await? else {
        return Ok(());
    };

    let email = format!("dup+{}@example.com", Uuid::new_v4());
    repo.create(CreateUserDbPayload {
        email: email.clone(),
    })
    .await?;
    let second = repo.create(CreateUserDbPayload { email }).await;
    assert!(matches!(second, Err(DatabaseError::ConstraintViolation(_))));

    Ok(())
}

#[tokio::test]
async fn user_repo_unknown_uid_is_not_found() -> Result<()> {
    let Some(repo) = ensure_repo().await? else {
        return Ok(());
    };

    let missing = repo.get(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(DatabaseError::NotFound(_))));

    Ok(())
}
