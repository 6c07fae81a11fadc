pub mod contact_repo;
pub mod country_prefix_repo;
pub mod offer_repo;
pub mod repository_error;
pub mod user_repo;
pub mod visit_repo;

use mongodb::{
    options::{ClientOptions, Credential},
    Client, Database,
};
use tracing::info;

use crate::config::MongoConfig;

/// Connect once and hand the database to every repository.
///
/// The driver keeps its own connection pool inside the client, so the
/// `Database` handle is cheap to clone and share across repositories.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(&config.uri).await?;
    client_options.app_name = Some("GozaMadridBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(std::time::Duration::from_secs(
        config.connection_timeout_secs,
    ));
    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }
    let client = Client::with_options(client_options)?;
    info!("Connected to MongoDB database: {}", config.database);
    Ok(client.database(&config.database))
}

/// Current timestamp used for created_at/updated_at stamps
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
