mod common;

use recipegram::application::services::ShortLinkService;
use recipegram::domain::entities::NewShortLink;
use recipegram::domain::repositories::{ShortLinkInsert, ShortLinkRepository};
use recipegram::infrastructure::persistence::PgShortLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgShortLinkRepository {
    PgShortLinkRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_creates_row(pool: PgPool) {
    let repo = repo(pool);

    let outcome = repo
        .insert(NewShortLink {
            long_url: "https://recipegram.test/recipes/1".to_string(),
            short_url: "https://recipegram.test/sl/aaaa1111".to_string(),
        })
        .await
        .unwrap();

    let link = match outcome {
        ShortLinkInsert::Created(link) => link,
        other => panic!("expected Created, got {other:?}"),
    };
    assert_eq!(link.long_url, "https://recipegram.test/recipes/1");
    assert!(link.is_active);
}

#[sqlx::test]
async fn test_insert_duplicate_long_url(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(NewShortLink {
        long_url: "https://recipegram.test/recipes/1".to_string(),
        short_url: "https://recipegram.test/sl/aaaa1111".to_string(),
    })
    .await
    .unwrap();

    let outcome = repo
        .insert(NewShortLink {
            long_url: "https://recipegram.test/recipes/1".to_string(),
            short_url: "https://recipegram.test/sl/bbbb2222".to_string(),
        })
        .await
        .unwrap();

    assert!(matches!(outcome, ShortLinkInsert::DuplicateLongUrl));
}

#[sqlx::test]
async fn test_insert_duplicate_short_url(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(NewShortLink {
        long_url: "https://recipegram.test/recipes/1".to_string(),
        short_url: "https://recipegram.test/sl/aaaa1111".to_string(),
    })
    .await
    .unwrap();

    let outcome = repo
        .insert(NewShortLink {
            long_url: "https://recipegram.test/recipes/2".to_string(),
            short_url: "https://recipegram.test/sl/aaaa1111".to_string(),
        })
        .await
        .unwrap();

    assert!(matches!(outcome, ShortLinkInsert::DuplicateShortUrl));
}

#[sqlx::test]
async fn test_find_by_short_url(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(NewShortLink {
        long_url: "https://recipegram.test/recipes/1".to_string(),
        short_url: "https://recipegram.test/sl/aaaa1111".to_string(),
    })
    .await
    .unwrap();

    let found = repo
        .find_by_short_url("https://recipegram.test/sl/aaaa1111")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.long_url, "https://recipegram.test/recipes/1");

    let missing = repo
        .find_by_short_url("https://recipegram.test/sl/missing0")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_concurrent_create_or_get_yields_one_row(pool: PgPool) {
    let service = Arc::new(ShortLinkService::new(
        Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone()))),
        8,
        10,
    ));

    let long_url = "https://recipegram.test/recipes/77";

    let a = {
        let service = service.clone();
        tokio::spawn(async move { service.create_or_get(long_url).await })
    };
    let b = {
        let service = service.clone();
        tokio::spawn(async move { service.create_or_get(long_url).await })
    };

    let (link_a, _) = a.await.unwrap().unwrap();
    let (link_b, _) = b.await.unwrap().unwrap();

    assert_eq!(link_a.short_url, link_b.short_url);
    assert_eq!(common::count_short_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_or_get_round_trip(pool: PgPool) {
    let service = ShortLinkService::new(
        Arc::new(PgShortLinkRepository::new(Arc::new(pool))),
        8,
        10,
    );

    let long_url = "https://recipegram.test/recipes/5";
    let (created, is_new) = service.create_or_get(long_url).await.unwrap();
    assert!(is_new);

    let resolved = service.resolve(&created.short_url).await.unwrap();
    assert_eq!(resolved.long_url, long_url);
}
