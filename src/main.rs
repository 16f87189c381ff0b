use std::{net::SocketAddr, sync::Arc};

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gravity_backend::config::Config;
use gravity_backend::db::{
    contact_repository::ContactRepository, postgres_contact_repository::PostgresContactRepository,
    postgres_service_repository::PostgresServiceRepository,
    postgres_user_repository::PostgresUserRepository,
    postgres_work_repository::PostgresWorkRepository, service_repository::ServiceRepository,
    user_repository::UserRepository, work_repository::WorkRepository,
};
use gravity_backend::responses::JsonResponse;
use gravity_backend::routes::auth::guard::{admin_gate, hr_gate};
use gravity_backend::routes::auth::{handle_issue_token, handle_logout};
use gravity_backend::routes::contact::store_contact_message;
use gravity_backend::routes::employees::{list_employees, verify_employee};
use gravity_backend::routes::payments::create_payment_intent;
use gravity_backend::routes::services::{get_service, list_services};
use gravity_backend::routes::users::{
    fire_user, get_user, list_users, update_user_role, upsert_user,
};
use gravity_backend::routes::work::{
    list_work_entries, list_work_entries_for_employee, submit_work_entry,
};
use gravity_backend::services::payments::{LivePaymentService, PaymentService};
use gravity_backend::state::AppState;
use gravity_backend::utils::jwt::JwtKeys;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config = Arc::new(Config::from_env());

    // A missing or weak signing secret is fatal here, before any request.
    let jwt = JwtKeys::from_env().expect("invalid token signing configuration");

    let rate_limit_ms: u64 = std::env::var("RATE_LIMITER_MILLISECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(200);
    let rate_limit_burst: u32 = std::env::var("RATE_LIMITER_BURST")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(20);
    let global_governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(rate_limit_ms)
            .burst_size(rate_limit_burst)
            .use_headers()
            .error_handler(|_err| {
                JsonResponse::too_many_requests(
                    "Too many requests. Please wait a moment and try again.",
                )
                .into_response()
            })
            .finish()
            .unwrap(),
    );

    // Stricter limiter for token issuance.
    let auth_governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(1)
            .burst_size(10)
            .use_headers()
            .error_handler(|_err| {
                JsonResponse::too_many_requests(
                    "Too many requests. Please wait a moment and try again.",
                )
                .into_response()
            })
            .finish()
            .unwrap(),
    );

    let pg_pool = establish_connection(&config.database_url).await;
    let users = Arc::new(PostgresUserRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn UserRepository>;
    let services = Arc::new(PostgresServiceRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn ServiceRepository>;
    let work = Arc::new(PostgresWorkRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn WorkRepository>;
    let contacts = Arc::new(PostgresContactRepository {
        pool: pg_pool.clone(),
    }) as Arc<dyn ContactRepository>;

    let payments = Arc::new(LivePaymentService::new(config.stripe_secret_key.clone()))
        as Arc<dyn PaymentService>;

    let state = AppState {
        users,
        services,
        work,
        contacts,
        payments,
        jwt,
        config: config.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let auth_routes = Router::new()
        .route("/token", post(handle_issue_token))
        .route("/logout", post(handle_logout))
        .layer(GovernorLayer {
            config: auth_governor_conf,
        });

    // Admin area: exact `admin` role required, resolved from the store on
    // every request.
    let admin_user_routes = Router::new()
        .route("/", get(list_users))
        .route("/{email}/role", patch(update_user_role))
        .route("/{id}/fire", put(fire_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate));

    let user_routes = Router::new()
        .route("/", put(upsert_user))
        .route("/{email}", get(get_user))
        .merge(admin_user_routes);

    let employee_routes = Router::new()
        .route("/", get(list_employees))
        .route("/{id}/verify", put(verify_employee))
        .route_layer(middleware::from_fn_with_state(state.clone(), hr_gate));

    let service_routes = Router::new()
        .route("/", get(list_services))
        .route("/{id}", get(get_service));

    let hr_work_routes = Router::new()
        .route("/", get(list_work_entries))
        .route_layer(middleware::from_fn_with_state(state.clone(), hr_gate));

    let work_routes = Router::new()
        .route("/", post(submit_work_entry))
        .route("/{email}", get(list_work_entries_for_employee))
        .merge(hr_work_routes);

    let payment_routes = Router::new()
        .route("/intent", post(create_payment_intent))
        .route_layer(middleware::from_fn_with_state(state.clone(), hr_gate));

    let app = Router::new()
        .route("/", get(root))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/employees", employee_routes)
        .nest("/api/services", service_routes)
        .nest("/api/work", work_routes)
        .nest("/api/payments", payment_routes)
        .route("/api/contact", post(store_contact_message))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(GovernorLayer {
            config: global_governor_conf,
        })
        .layer(cors);

    let make_service = app.into_make_service_with_connect_info::<SocketAddr>();
    let addr = SocketAddr::from(([127, 0, 0, 1], config.bind_port));

    let listener = TcpListener::bind(addr).await.unwrap();
    info!("Gravity is running on http://{}", addr);
    axum::serve(listener, make_service).await.unwrap();
}

/// A simple root route.
async fn root() -> Response {
    JsonResponse::success("Hello from Gravity running server").into_response()
}

/// Establish a connection to the database and verify it.
async fn establish_connection(database_url: &str) -> PgPool {
    let pool = PgPool::connect(database_url)
        .await
        .expect("Failed to connect to the database");

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .expect("Failed to verify database connection");

    info!("Successfully connected to the database");
    pool
}
