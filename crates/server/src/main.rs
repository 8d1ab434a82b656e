// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono_tz::Tz;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use ponto_ops::{ContractFilter, DEFAULT_PAGE_SIZE, DashboardSnapshot, SortColumn, StatusFilter};
use ponto_ops_api::{
    ApiError, AuthenticationService, ChallengeVerifier, InsecureAcceptAll, LoginOutcome,
    SignupPolicy, SignupRequest, lookup_colaborador, signup,
};
use ponto_ops_domain::{
    ClassifiedRow, ClassifierRules, Filial, FunctionGroup, ViewerProfile, decimal_hours_to_hhmm,
    format_pair, resolve_scope,
};
use ponto_ops_persistence::SqlitePersistence;

mod dashboard;
mod live;
mod session;

use dashboard::{DashboardHandle, spawn_dashboard_session};
use live::RefreshBroadcaster;
use session::SessionViewer;

/// Ponto-Ops Server - HTTP server for the Ponto-Ops portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to a JSON configuration file overriding the defaults.
    #[arg(short, long)]
    config: Option<String>,
}

/// Server configuration.
///
/// Every field has a production default; a `--config` JSON file may
/// override any subset, including the classifier keyword tables and the
/// signup eligibility tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Seconds between automatic dashboard refreshes.
    pub refresh_interval_secs: u64,
    /// Rows requested per feed page.
    pub page_size: usize,
    /// Timezone used for operator-facing timestamps.
    pub display_timezone: String,
    /// Job-title classification tables.
    pub classifier: ClassifierRules,
    /// Signup eligibility tables.
    pub signup: SignupPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 300,
            page_size: DEFAULT_PAGE_SIZE,
            display_timezone: String::from("America/Sao_Paulo"),
            classifier: ClassifierRules::default(),
            signup: SignupPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration, overlaying the file on the defaults when
    /// one is given.
    fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let raw: String = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer.
    pub persistence: Arc<Mutex<SqlitePersistence>>,
    /// Live dashboard sessions, keyed by session token.
    pub sessions: Arc<Mutex<HashMap<String, DashboardHandle>>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Display timezone parsed from the configuration.
    pub tz: Tz,
    /// The human-verification boundary.
    pub challenge: Arc<dyn ChallengeVerifier + Send + Sync>,
    /// Live refresh event broadcaster.
    pub broadcaster: Arc<RefreshBroadcaster>,
}

impl AppState {
    /// Wall-clock label in the display timezone, as shown to operators.
    #[must_use]
    pub fn now_label(&self) -> String {
        chrono::Utc::now()
            .with_timezone(&self.tz)
            .format("%H:%M:%S")
            .to_string()
    }
}

// --- API DTOs ---

/// API request for logging in.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoginApiRequest {
    /// Login email.
    email: String,
    /// Account password.
    password: String,
}

/// Viewer profile as exposed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileApiResponse {
    /// Canonical profile identifier.
    id: i64,
    /// Employee id.
    matricula: String,
    /// Display name.
    nome: Option<String>,
    /// Home base code.
    filial: Option<String>,
    /// Job title.
    funcao: Option<String>,
    /// Portal role (`admin` or `user`).
    role: String,
    /// Whether the viewer may see every base.
    can_view_all_bases: bool,
}

impl ProfileApiResponse {
    fn from_profile(profile: &ViewerProfile) -> Self {
        let scope = resolve_scope(profile);
        Self {
            id: profile.id,
            matricula: profile.matricula.clone(),
            nome: profile.nome.clone(),
            filial: profile.filial.as_ref().map(|f| f.value().to_string()),
            funcao: profile.funcao.clone(),
            role: profile.role.as_str().to_string(),
            can_view_all_bases: scope.can_view_all_bases,
        }
    }
}

/// API response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginApiResponse {
    /// Bearer token for subsequent requests.
    session_token: String,
    /// The authenticated viewer.
    profile: ProfileApiResponse,
}

/// Query parameters for the registry lookup.
#[derive(Debug, Deserialize)]
struct ColaboradorQuery {
    /// The matricula to look up.
    matricula: String,
}

/// API response for the registry lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ColaboradorApiResponse {
    /// Masked display name.
    nome: String,
    /// Home base code.
    filial: String,
    /// Job title.
    funcao: String,
    /// Whether the matricula may sign up.
    allow_signup: bool,
    /// The refusal reason when signup is not allowed.
    allow_reason: Option<String>,
}

/// API request for signing up.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SignupApiRequest {
    /// Employee id.
    matricula: String,
    /// Login email.
    email: String,
    /// Account password.
    password: String,
    /// Proof-of-humanity token.
    captcha_token: String,
}

/// API response for a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SignupApiResponse {
    /// The created profile's identifier.
    profile_id: i64,
    /// The role the account was created with.
    role: String,
    /// A success message.
    message: String,
}

/// One dashboard row, formatted for the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DashboardRowApiResponse {
    /// Employee id.
    matricula: Option<String>,
    /// Display name.
    nome: Option<String>,
    /// Job title.
    funcao: Option<String>,
    /// Home base code.
    filial: Option<String>,
    /// Classified function group.
    grupo: String,
    /// Contracted weekly hours.
    carga_horaria: Option<i32>,
    /// Scheduled start/end pair.
    escala: String,
    /// First punch pair.
    batidas: String,
    /// Second punch pair.
    retorno: String,
    /// Worked hours as `H:MM`.
    horas_trabalhadas: String,
    /// Overtime hours as `H:MM`.
    hora_extra: String,
    /// Wire status value.
    status: Option<String>,
    /// Operator-facing status label.
    status_label: String,
}

impl DashboardRowApiResponse {
    fn from_row(row: &ClassifiedRow, tz: Tz) -> Self {
        Self {
            matricula: row.row.matricula.clone(),
            nome: row.row.nome.clone(),
            funcao: row.row.funcao.clone(),
            filial: row.row.colaborador_filial.clone(),
            grupo: row.grupo.as_str().to_string(),
            carga_horaria: row.row.carga_horaria,
            escala: format_pair(
                row.row.entrada_escala.as_deref(),
                row.row.saida_escala.as_deref(),
                " -> ",
                tz,
            ),
            batidas: format_pair(
                row.row.entrada1.as_deref(),
                row.row.saida1.as_deref(),
                " / ",
                tz,
            ),
            retorno: format_pair(
                row.row.entrada2.as_deref(),
                row.row.saida2.as_deref(),
                " / ",
                tz,
            ),
            horas_trabalhadas: decimal_hours_to_hhmm(row.row.horas_trabalhadas),
            hora_extra: decimal_hours_to_hhmm(row.row.hora_extra),
            status: row.row.status.map(|status| status.as_str().to_string()),
            status_label: row
                .row
                .status
                .map_or_else(|| String::from("-"), |status| status.label().to_string()),
        }
    }
}

/// Summary counters for the dashboard tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DashboardCountsApiResponse {
    /// Visible rows after the status filter.
    total: usize,
    /// Overtime total over the visible rows, as `H:MM`.
    hora_extra_total: String,
    /// Scoped rows waiting for a punch.
    aguardando: usize,
    /// Scoped rows currently in overtime.
    em_hora_extra: usize,
    /// Scoped rows currently within expected hours.
    em_jornada: usize,
    /// Scoped rows finished either way.
    finalizados: usize,
}

/// Filter state echoed back to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FilterStateApiResponse {
    /// Search text.
    search: String,
    /// Selected base; absent means all bases.
    base: Option<String>,
    /// Status selection wire value.
    status: String,
    /// Contract selection wire value.
    contrato: String,
    /// Group selection wire values (`todas` or concrete groups).
    grupos: Vec<String>,
}

/// Sort state echoed back to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SortStateApiResponse {
    /// Active column wire name.
    column: String,
    /// `asc` or `desc`.
    direction: String,
}

/// The full dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DashboardSnapshotApiResponse {
    /// Whether a profile load or fetch is in flight.
    loading: bool,
    /// Blocking profile-load failure, if any.
    profile_error: Option<String>,
    /// Non-blocking fetch failure, if any; stale rows remain usable.
    fetch_error: Option<String>,
    /// Wall-clock label of the last successful refresh.
    last_updated: Option<String>,
    /// Summary counters.
    counts: DashboardCountsApiResponse,
    /// Current filter state.
    filters: FilterStateApiResponse,
    /// Current sort state.
    sort: SortStateApiResponse,
    /// Selectable bases for the base filter.
    base_options: Vec<String>,
    /// Visible rows in display order.
    rows: Vec<DashboardRowApiResponse>,
}

fn snapshot_response(snapshot: &DashboardSnapshot, tz: Tz) -> DashboardSnapshotApiResponse {
    DashboardSnapshotApiResponse {
        loading: snapshot.loading,
        profile_error: snapshot.profile_error.clone(),
        fetch_error: snapshot.fetch_error.clone(),
        last_updated: snapshot.last_updated.clone(),
        counts: DashboardCountsApiResponse {
            total: snapshot.counts.total,
            hora_extra_total: decimal_hours_to_hhmm(Some(snapshot.counts.hora_extra_total)),
            aguardando: snapshot.counts.por_status.aguardando,
            em_hora_extra: snapshot.counts.por_status.em_hora_extra,
            em_jornada: snapshot.counts.por_status.em_jornada,
            finalizados: snapshot.counts.por_status.finalizados(),
        },
        filters: FilterStateApiResponse {
            search: snapshot.filters.search.clone(),
            base: snapshot
                .filters
                .base
                .as_ref()
                .map(|base| base.value().to_string()),
            status: snapshot.filters.status.as_str().to_string(),
            contrato: snapshot.filters.contrato.as_str().to_string(),
            grupos: snapshot
                .filters
                .grupos
                .as_wire()
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
        sort: SortStateApiResponse {
            column: snapshot.sort.column.as_str().to_string(),
            direction: snapshot.sort.direction.as_str().to_string(),
        },
        base_options: snapshot
            .base_options
            .iter()
            .map(|base| base.value().to_string())
            .collect(),
        rows: snapshot
            .visible
            .iter()
            .map(|row| DashboardRowApiResponse::from_row(row, tz))
            .collect(),
    }
}

/// API request for updating filter dimensions.
///
/// Every field is optional; present fields are applied in order, `reset`
/// first. An empty `base` clears the base selection; `toggle_grupo` with
/// `todas` clears the group selection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct FilterUpdateApiRequest {
    /// Restore the scope defaults before applying anything else.
    reset: Option<bool>,
    /// New search text.
    search: Option<String>,
    /// New base selection; empty string means all bases.
    base: Option<String>,
    /// New status selection wire value.
    status: Option<String>,
    /// New contract selection wire value.
    contrato: Option<String>,
    /// Group to toggle, or `todas` to clear the selection.
    toggle_grupo: Option<String>,
}

/// API request for a column-header click.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SortApiRequest {
    /// The clicked column's wire name.
    column: String,
}

/// API response for the planning stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BasesApiResponse {
    /// Selectable bases.
    bases: Vec<String>,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    /// A human-readable message.
    message: String,
}

/// Error body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// A human-readable error.
    error: String,
}

/// Wrapper converting [`ApiError`] into an HTTP response.
struct HttpError(ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status: StatusCode = match &self.0 {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidInput { .. } | ApiError::ChallengeFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::SignupNotAllowed { .. } => StatusCode::FORBIDDEN,
            ApiError::AlreadyRegistered { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "Internal error");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

fn invalid_input(field: &str, err: &ponto_ops::CoreError) -> HttpError {
    HttpError(ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

// --- handlers ---

/// Returns the session's dashboard handle, creating it if this is the
/// first dashboard request of the session (e.g. after a server restart
/// with a still-valid token).
async fn ensure_dashboard(state: &AppState, token: &str, profile: &ViewerProfile) -> DashboardHandle {
    let mut sessions = state.sessions.lock().await;
    if let Some(handle) = sessions.get(token) {
        return handle.clone();
    }
    let handle: DashboardHandle = spawn_dashboard_session(state, profile.clone());
    sessions.insert(token.to_string(), handle.clone());
    handle
}

async fn login_handler(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<LoginApiRequest>,
) -> Result<Json<LoginApiResponse>, HttpError> {
    let outcome: LoginOutcome = {
        let mut persistence = state.persistence.lock().await;
        AuthenticationService::login(&mut persistence, &request.email, &request.password)
            .map_err(|e| HttpError(ApiError::from(e)))?
    };

    // The dashboard session (view model + refresh timer) lives as long as
    // the session token.
    ensure_dashboard(&state, &outcome.session_token, &outcome.profile).await;

    info!(matricula = %outcome.profile.matricula, "Login successful");
    Ok(Json(LoginApiResponse {
        profile: ProfileApiResponse::from_profile(&outcome.profile),
        session_token: outcome.session_token,
    }))
}

async fn logout_handler(
    AxumState(state): AxumState<AppState>,
    viewer: SessionViewer,
) -> Result<Json<MessageResponse>, HttpError> {
    {
        let mut persistence = state.persistence.lock().await;
        AuthenticationService::logout(&mut persistence, &viewer.token)
            .map_err(|e| HttpError(ApiError::from(e)))?;
    }

    // Tear the refresh timer down with the session.
    if let Some(handle) = state.sessions.lock().await.remove(&viewer.token) {
        handle.shutdown();
    }

    info!(matricula = %viewer.profile.matricula, "Logout");
    Ok(Json(MessageResponse {
        message: String::from("Logged out"),
    }))
}

async fn me_handler(viewer: SessionViewer) -> Json<ProfileApiResponse> {
    Json(ProfileApiResponse::from_profile(&viewer.profile))
}

async fn colaborador_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ColaboradorQuery>,
) -> Result<Json<ColaboradorApiResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let lookup = lookup_colaborador(&mut persistence, &state.config.signup, &query.matricula)?;
    Ok(Json(ColaboradorApiResponse {
        nome: lookup.nome,
        filial: lookup.filial,
        funcao: lookup.funcao,
        allow_signup: lookup.allow_signup,
        allow_reason: lookup.allow_reason,
    }))
}

async fn signup_handler(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<SignupApiRequest>,
) -> Result<Json<SignupApiResponse>, HttpError> {
    let signup_request: SignupRequest = SignupRequest {
        matricula: request.matricula,
        email: request.email,
        password: request.password,
        captcha_token: request.captcha_token,
        remote_ip: None,
    };

    let mut persistence = state.persistence.lock().await;
    let response = signup(
        &mut persistence,
        &state.config.signup,
        state.challenge.as_ref(),
        &signup_request,
    )?;

    Ok(Json(SignupApiResponse {
        profile_id: response.profile_id,
        role: response.role.as_str().to_string(),
        message: String::from("Signup created."),
    }))
}

async fn dashboard_snapshot_handler(
    AxumState(state): AxumState<AppState>,
    viewer: SessionViewer,
) -> Json<DashboardSnapshotApiResponse> {
    let handle: DashboardHandle = ensure_dashboard(&state, &viewer.token, &viewer.profile).await;
    let snapshot: DashboardSnapshot = handle.view_model.lock().await.snapshot();
    Json(snapshot_response(&snapshot, state.tz))
}

async fn dashboard_refresh_handler(
    AxumState(state): AxumState<AppState>,
    viewer: SessionViewer,
) -> Json<MessageResponse> {
    let handle: DashboardHandle = ensure_dashboard(&state, &viewer.token, &viewer.profile).await;
    handle.request_refresh();
    Json(MessageResponse {
        message: String::from("Refresh scheduled"),
    })
}

async fn dashboard_filters_handler(
    AxumState(state): AxumState<AppState>,
    viewer: SessionViewer,
    Json(request): Json<FilterUpdateApiRequest>,
) -> Result<Json<DashboardSnapshotApiResponse>, HttpError> {
    let handle: DashboardHandle = ensure_dashboard(&state, &viewer.token, &viewer.profile).await;
    let mut model = handle.view_model.lock().await;

    if request.reset == Some(true) {
        model.reset_filters();
    }
    if let Some(search) = &request.search {
        model.set_search(search);
    }
    if let Some(base) = &request.base {
        let base: &str = base.trim();
        model.set_base(if base.is_empty() {
            None
        } else {
            Some(Filial::new(base))
        });
    }
    if let Some(status) = &request.status {
        let parsed: StatusFilter = status
            .parse()
            .map_err(|e| invalid_input("status", &e))?;
        model.set_status(parsed);
    }
    if let Some(contrato) = &request.contrato {
        let parsed: ContractFilter = contrato
            .parse()
            .map_err(|e| invalid_input("contrato", &e))?;
        model.set_contrato(parsed);
    }
    if let Some(grupo) = &request.toggle_grupo {
        if grupo.trim().eq_ignore_ascii_case("todas") {
            model.clear_grupos();
        } else {
            let parsed: FunctionGroup = grupo.parse().map_err(|e| {
                invalid_input("toggle_grupo", &ponto_ops::CoreError::from(e))
            })?;
            model.toggle_grupo(parsed);
        }
    }

    Ok(Json(snapshot_response(&model.snapshot(), state.tz)))
}

async fn dashboard_sort_handler(
    AxumState(state): AxumState<AppState>,
    viewer: SessionViewer,
    Json(request): Json<SortApiRequest>,
) -> Result<Json<DashboardSnapshotApiResponse>, HttpError> {
    let handle: DashboardHandle = ensure_dashboard(&state, &viewer.token, &viewer.profile).await;
    let mut model = handle.view_model.lock().await;

    let column: SortColumn = request
        .column
        .parse()
        .map_err(|e| invalid_input("column", &e))?;
    model.sort_by(column);

    Ok(Json(snapshot_response(&model.snapshot(), state.tz)))
}

/// Planning stub: only the base list is implemented.
async fn planejamento_bases_handler(
    AxumState(state): AxumState<AppState>,
    viewer: SessionViewer,
) -> Json<BasesApiResponse> {
    let scope = resolve_scope(&viewer.profile);

    // Scoped viewers stick to their own base; all-base viewers get the
    // bases present in the current feed.
    let bases: Vec<String> = if scope.can_view_all_bases {
        let handle: DashboardHandle =
            ensure_dashboard(&state, &viewer.token, &viewer.profile).await;
        let snapshot: DashboardSnapshot = handle.view_model.lock().await.snapshot();
        snapshot
            .base_options
            .iter()
            .map(|base| base.value().to_string())
            .collect()
    } else {
        scope
            .default_base
            .map(|base| base.value().to_string())
            .into_iter()
            .collect()
    };

    Json(BasesApiResponse { bases })
}

/// Builds the application router.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(login_handler))
        .route("/api/logout", post(logout_handler))
        .route("/api/me", get(me_handler))
        .route("/api/colaboradores", get(colaborador_handler))
        .route("/api/signup", post(signup_handler))
        .route("/api/dashboard", get(dashboard_snapshot_handler))
        .route("/api/dashboard/refresh", post(dashboard_refresh_handler))
        .route("/api/dashboard/filters", post(dashboard_filters_handler))
        .route("/api/dashboard/sort", post(dashboard_sort_handler))
        .route("/api/planejamento/bases", get(planejamento_bases_handler))
        .route("/api/live", get(live::live_events_handler))
        .with_state(state)
}

fn build_state(
    persistence: SqlitePersistence,
    config: ServerConfig,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let tz: Tz = config
        .display_timezone
        .parse()
        .map_err(|e| format!("Invalid display_timezone '{}': {e}", config.display_timezone))?;

    Ok(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        sessions: Arc::new(Mutex::new(HashMap::new())),
        config: Arc::new(config),
        tz,
        challenge: Arc::new(InsecureAcceptAll),
        broadcaster: Arc::new(RefreshBroadcaster::new()),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Ponto-Ops Server");

    let config: ServerConfig = ServerConfig::load(args.config.as_deref())?;

    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = build_state(persistence, config)?;
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
