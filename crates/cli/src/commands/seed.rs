//! Seed the database with a demo card set.
//!
//! Inserts one ready-made card set so a fresh install has something to show
//! on the home page.

use secrecy::SecretString;

use memorycards_web::db::{self, CardRepository, CardSetRepository, RepositoryError};

const DEMO_TITLE: &str = "European capitals";

const DEMO_CARDS: [(&str, &str); 3] = [
    ("What is the capital of France?", "Paris"),
    ("What is the capital of Poland?", "Warsaw"),
    ("What is the capital of Portugal?", "Lisbon"),
];

/// Errors from the seed command.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Insert the demo card set and its cards.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MEMORYCARDS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("MEMORYCARDS_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let cards: Vec<(String, String)> = DEMO_CARDS
        .iter()
        .map(|(q, a)| ((*q).to_owned(), (*a).to_owned()))
        .collect();

    let count = i32::try_from(cards.len()).unwrap_or(i32::MAX);

    let id = CardSetRepository::new(&pool)
        .insert(DEMO_TITLE, count)
        .await?;

    CardRepository::new(&pool).insert_many(id, &cards).await?;

    tracing::info!(card_set_id = %id, "Demo card set created");
    Ok(())
}
