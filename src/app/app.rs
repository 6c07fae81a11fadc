use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::admin_user_conf::AdminUserConfig;
use crate::config::app_conf::AppConfig;
use crate::config::cookie_conf::CookieConfig;
use crate::config::email_conf::EmailConfig;
use crate::config::jwt_conf::JwtConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::config::upstream_conf::UpstreamConfig;
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::middlewares::cors_middleware::cors;
use crate::model::user::{User, UserRole};
use crate::proxy::client::ProxyClient;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::cookies::PreferenceStore;
use crate::util::email::{EmailSender, SmtpEmailService};

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_service: Arc<UserServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();

        use crate::handler::proxy_handler::ProxyState;
        use crate::repository::contact_repo::MongoContactRepository;
        use crate::repository::country_prefix_repo::MongoCountryPrefixRepository;
        use crate::repository::offer_repo::MongoOfferRepository;
        use crate::repository::user_repo::MongoUserRepository;
        use crate::repository::visit_repo::MongoVisitRepository;
        use crate::service::contact_service::ContactServiceImpl;
        use crate::service::offer_service::OfferServiceImpl;
        use crate::service::prefix_service::PrefixServiceImpl;
        use crate::service::visit_service::VisitServiceImpl;
        use crate::util::jwt::JwtTokenUtilsImpl;

        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let upstream_config = UpstreamConfig::from_env().expect("Upstream config error");
        let cookie_config = CookieConfig::from_env().expect("Cookie config error");

        // A single client and database handle shared by every repository.
        let db = crate::repository::connect(&mongo_config)
            .await
            .expect("MongoDB connection error");

        let contact_repo = Arc::new(MongoContactRepository::new(&db));
        let offer_repo = Arc::new(MongoOfferRepository::new(&db));
        let visit_repo = Arc::new(MongoVisitRepository::new(&db));
        let prefix_repo = Arc::new(MongoCountryPrefixRepository::new(&db));
        let user_repo = Arc::new(MongoUserRepository::new(&db));

        // SMTP is optional; without it visits are stored but no confirmation
        // email goes out.
        let email_sender: Option<Arc<dyn EmailSender>> = match EmailConfig::from_env() {
            Ok(email_config) => match SmtpEmailService::new(email_config) {
                Ok(service) => Some(Arc::new(service)),
                Err(e) => {
                    warn!("SMTP transport not available: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("Email config not loaded: {e}");
                None
            }
        };

        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let contact_service = Arc::new(ContactServiceImpl::new(contact_repo));
        let offer_service = Arc::new(OfferServiceImpl::new(offer_repo));
        let visit_service = Arc::new(VisitServiceImpl::new(visit_repo, email_sender));
        let prefix_service = Arc::new(PrefixServiceImpl::new(prefix_repo));
        let user_service = Arc::new(UserServiceImpl::new(user_repo, jwt_utils.clone()));

        let proxy_client = ProxyClient::new(upstream_config).expect("Proxy client error");
        let proxy_state = Arc::new(ProxyState { client: proxy_client });
        let preference_store = Arc::new(PreferenceStore::new(cookie_config));

        let admin_auth_state = Arc::new(AdminAuthState {
            jwt_utils: jwt_utils.clone(),
        });

        let router = Self::create_router(
            contact_service,
            offer_service,
            visit_service,
            prefix_service,
            user_service.clone(),
            proxy_state,
            preference_store,
            admin_auth_state,
        );

        let app = App { config, router, user_service };
        app.create_first_admin_user().await;
        app
    }

    fn create_router(
        contact_service: Arc<crate::service::contact_service::ContactServiceImpl>,
        offer_service: Arc<crate::service::offer_service::OfferServiceImpl>,
        visit_service: Arc<crate::service::visit_service::VisitServiceImpl>,
        prefix_service: Arc<crate::service::prefix_service::PrefixServiceImpl>,
        user_service: Arc<UserServiceImpl>,
        proxy_state: Arc<crate::handler::proxy_handler::ProxyState>,
        preference_store: Arc<PreferenceStore>,
        admin_auth_state: Arc<AdminAuthState>,
    ) -> Router {
        use crate::router::contact_router::contact_router;
        use crate::router::offer_router::offer_router;
        use crate::router::prefix_router::prefix_router;
        use crate::router::prefs_router::prefs_router;
        use crate::router::proxy_router::proxy_router;
        use crate::router::user_router::user_router;
        use crate::router::visit_router::visit_router;

        Router::new()
            .merge(contact_router(contact_service, admin_auth_state.clone()))
            .merge(offer_router(offer_service, admin_auth_state.clone()))
            .merge(visit_router(visit_service, admin_auth_state.clone()))
            .merge(prefix_router(prefix_service, admin_auth_state))
            .merge(user_router(user_service))
            .merge(proxy_router(proxy_state))
            .merge(prefs_router(preference_store))
            .route("/health", get(|| async { "OK" }))
            .layer(middleware::from_fn(cors))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        // Check if the admin user already exists by email
        use crate::repository::user_repo::UserRepository;
        match self.user_service.user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => { /* continue to create */ }
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let user = User {
            id: None,
            username: admin_conf.username.clone(),
            email: admin_conf.email.clone(),
            password_hash: String::new(), // Will be set by register
            role: UserRole::Admin,
            created_at: None,
            updated_at: None,
        };
        match self.user_service.register(user, admin_conf.password.clone()).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}
