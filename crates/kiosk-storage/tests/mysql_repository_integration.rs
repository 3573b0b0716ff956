use kiosk_core::ShortCode;
use kiosk_storage::{MySqlRepository, ReadRepository, Repository, StorageError, UrlRecord};
use kiosk_test_infra::mysql::{MySqlServer, MysqlConfig};

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let pool = mysql
            .pool_with_schema(include_str!("../ddl/mysql/short_urls.sql"))
            .await
            .expect("create schema");

        Self {
            _mysql: mysql,
            repo: MySqlRepository::new(pool),
        }
    }
}

#[tokio::test]
async fn insert_and_get_record() {
    let fixture = Fixture::start().await;
    let short_code = ShortCode::new_unchecked("abc123");
    let record = UrlRecord::new("https://example.com");

    fixture
        .repo
        .insert(&short_code, record.clone())
        .await
        .unwrap();

    let got = fixture.repo.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://example.com");
    assert_eq!(
        got.created_at.as_millisecond(),
        record.created_at.as_millisecond()
    );
}

#[tokio::test]
async fn insert_conflicts_when_code_already_exists() {
    let fixture = Fixture::start().await;
    let short_code = ShortCode::sequence(1);

    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://one.example"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://two.example"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Conflict(_)));
    assert_eq!(fixture.repo.len().await.unwrap(), 1);
}

#[tokio::test]
async fn find_by_url_returns_sequential_code() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(&ShortCode::sequence(7), UrlRecord::new("https://example.com"))
        .await
        .unwrap();

    let found = fixture
        .repo
        .find_by_url("https://example.com")
        .await
        .unwrap();
    assert_eq!(found, Some(ShortCode::sequence(7)));
}

#[tokio::test]
async fn highest_sequence_skips_slugs() {
    let fixture = Fixture::start().await;
    assert_eq!(fixture.repo.highest_sequence().await.unwrap(), None);

    for (code, url) in [
        (ShortCode::sequence(2), "https://a.example"),
        (ShortCode::sequence(10), "https://b.example"),
        (ShortCode::new_unchecked("x99"), "https://c.example"),
    ] {
        fixture.repo.insert(&code, UrlRecord::new(url)).await.unwrap();
    }

    assert_eq!(fixture.repo.highest_sequence().await.unwrap(), Some(10));
    assert!(fixture
        .repo
        .get(&ShortCode::parse("10").unwrap())
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn url_lookup_is_exact() {
    let fixture = Fixture::start().await;

    for (id, url) in [
        (1, "https://example.com/a"),
        (2, "https://example.com/A"),
        (3, "https://example.com/é"),
    ] {
        fixture
            .repo
            .insert(&ShortCode::sequence(id), UrlRecord::new(url))
            .await
            .unwrap();
    }

    for (url, expected) in [
        ("https://example.com/a", Some(ShortCode::sequence(1))),
        ("https://example.com/A", Some(ShortCode::sequence(2))),
        ("https://example.com/é", Some(ShortCode::sequence(3))),
        ("https://example.com/e", None),
    ] {
        assert_eq!(fixture.repo.find_by_url(url).await.unwrap(), expected, "{url}");
    }
}

#[tokio::test]
async fn slugs_are_case_sensitive() {
    let fixture = Fixture::start().await;
    let lower = ShortCode::new_unchecked("abc");
    let upper = ShortCode::new_unchecked("ABC");

    fixture
        .repo
        .insert(&lower, UrlRecord::new("https://lower.example"))
        .await
        .unwrap();
    assert!(fixture.repo.get(&upper).await.unwrap().is_none());

    fixture
        .repo
        .insert(&upper, UrlRecord::new("https://upper.example"))
        .await
        .unwrap();
    let got = fixture.repo.get(&upper).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://upper.example");
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let mysql = MySqlServer::new(MysqlConfig::builder().build())
        .await
        .expect("start mysql");
    let repo = MySqlRepository::new(mysql.pool().await.expect("connect"));

    repo.ensure_schema().await.unwrap();
    repo.ensure_schema().await.unwrap();

    assert_eq!(repo.len().await.unwrap(), 0);
}
