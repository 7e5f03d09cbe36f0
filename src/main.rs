use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use bizadvisor::application::ports::{ChatRepository, FileRepository, UserRepository};
use bizadvisor::application::services::{
    AdvisorService, ChatService, DocumentService, ModelGateway, ProfileService,
};
use bizadvisor::infrastructure::llm::LlmClientFactory;
use bizadvisor::infrastructure::observability::{TracingConfig, init_tracing};
use bizadvisor::infrastructure::persistence::{
    InMemoryRepository, PgChatRepository, PgFileRepository, PgUserRepository, create_pool,
    run_migrations,
};
use bizadvisor::infrastructure::storage::LocalFileStore;
use bizadvisor::infrastructure::text_processing::CompositeFileLoader;
use bizadvisor::presentation::config::{DatabaseProvider, DatabaseSettings};
use bizadvisor::presentation::{AppState, Settings, create_router};

struct Repositories {
    users: Arc<dyn UserRepository>,
    files: Arc<dyn FileRepository>,
    chats: Arc<dyn ChatRepository>,
}

async fn build_repositories(settings: &DatabaseSettings) -> anyhow::Result<Repositories> {
    match settings.provider {
        DatabaseProvider::Postgres => {
            let pool = create_pool(&settings.url, settings.max_connections)
                .await
                .context("Failed to connect to PostgreSQL")?;
            if settings.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
            }
            Ok(Repositories {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                files: Arc::new(PgFileRepository::new(pool.clone())),
                chats: Arc::new(PgChatRepository::new(pool)),
            })
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            let repository = Arc::new(InMemoryRepository::new());
            Ok(Repositories {
                users: repository.clone(),
                files: repository.clone(),
                chats: repository,
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (environment, settings) = Settings::load().context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let repositories = build_repositories(&settings.database).await?;

    let staging_store = Arc::new(
        LocalFileStore::new(PathBuf::from(&settings.storage.root))
            .context("Failed to prepare file storage")?,
    );

    let providers =
        LlmClientFactory::create_all(&settings.llm).context("Invalid completion providers")?;
    let gateway = Arc::new(ModelGateway::new(providers));
    tracing::info!(
        providers = gateway.provider_count(),
        "Model gateway ready"
    );

    let advisor = Arc::new(AdvisorService::new(
        Arc::new(CompositeFileLoader::standard()),
        staging_store.clone(),
        gateway,
    ));

    let state = AppState {
        profile_service: Arc::new(ProfileService::new(repositories.users.clone())),
        document_service: Arc::new(DocumentService::new(
            repositories.users.clone(),
            repositories.files.clone(),
            staging_store,
        )),
        chat_service: Arc::new(ChatService::new(
            repositories.users,
            repositories.files,
            repositories.chats,
            advisor,
        )),
    };

    let router = create_router(state, &settings.server);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
