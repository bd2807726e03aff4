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
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use staffdesk::{
    AssignUserToDepartment, CommandResult, CoreError, CreateUser, DeleteUser, DepartmentDto,
    Dispatcher, GetUserById, ListDepartments, ListRecentUsers, ListUserAssignments, ListUsers,
    RemoveUserAssignment, UpdateUser, UserAssignmentDto, UserDto, dispatcher, shared,
};
use staffdesk_domain::{DepartmentId, DomainError, UserDetails, UserId, validate_user_details};
use staffdesk_persistence::Persistence;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// staffdesk server - HTTP front end for the staff roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Insert the default departments if the database has none
    #[arg(long)]
    seed_departments: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Routes requests to the roster handlers.
    dispatcher: Dispatcher,
    /// Cancelled on shutdown. Every request runs under a child token.
    shutdown: CancellationToken,
}

impl AppState {
    fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}

/// API request for assigning a user to a department.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignmentApiRequest {
    user_id: UserId,
    department_id: DepartmentId,
}

/// API response for a created user.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateUserResponse {
    user_id: UserId,
}

/// API response for commands without a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    success: bool,
    message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// One message per problem.
    messages: Vec<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error messages.
    messages: Vec<String>,
}

impl HttpError {
    /// Maps rule violations to a status. The first violation decides.
    fn from_violations(errors: &[DomainError]) -> Self {
        let status: StatusCode = match errors.first() {
            Some(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Some(err) if err.is_conflict() => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            messages: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            messages: self.messages,
        });
        (self.status, body).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Cancelled => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                messages: vec![err.to_string()],
            },
            _ => {
                error!(error = %err, "Request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    messages: vec![err.to_string()],
                }
            }
        }
    }
}

/// Trims and validates user fields before they reach a command.
fn validated_details(details: &UserDetails) -> Result<UserDetails, HttpError> {
    let details: UserDetails = details.trimmed();
    validate_user_details(&details).map_err(|errors| {
        warn!(count = errors.len(), "Rejected invalid user fields");
        HttpError::from_violations(&errors)
    })?;
    Ok(details)
}

fn write_response(result: CommandResult, message: &str) -> Result<Json<WriteResponse>, HttpError> {
    result
        .into_result()
        .map_err(|errors| HttpError::from_violations(&errors))?;
    Ok(Json(WriteResponse {
        success: true,
        message: message.to_string(),
    }))
}

async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<UserDto>>, HttpError> {
    info!("Handling list_users request");
    let users = app_state
        .dispatcher
        .send(ListUsers, &app_state.request_token())
        .await?;
    Ok(Json(users))
}

async fn handle_list_recent_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<UserDto>>, HttpError> {
    info!("Handling list_recent_users request");
    let users = app_state
        .dispatcher
        .send(ListRecentUsers, &app_state.request_token())
        .await?;
    Ok(Json(users))
}

async fn handle_get_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserDto>, HttpError> {
    info!(user_id, "Handling get_user request");
    let user_id: UserId = UserId::new(user_id);
    let user: Option<UserDto> = app_state
        .dispatcher
        .send(GetUserById { user_id }, &app_state.request_token())
        .await?;
    user.map(Json)
        .ok_or_else(|| HttpError::from_violations(&[DomainError::UserNotFound { user_id }]))
}

async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UserDetails>,
) -> Result<(StatusCode, Json<CreateUserResponse>), HttpError> {
    info!("Handling create_user request");
    let details: UserDetails = validated_details(&req)?;
    let result = app_state
        .dispatcher
        .send(CreateUser { details }, &app_state.request_token())
        .await?;
    let user_id: UserId = result
        .into_result()
        .map_err(|errors| HttpError::from_violations(&errors))?;
    Ok((StatusCode::CREATED, Json(CreateUserResponse { user_id })))
}

async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UserDetails>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(user_id, "Handling update_user request");
    let details: UserDetails = validated_details(&req)?;
    let result = app_state
        .dispatcher
        .send(
            UpdateUser {
                user_id: UserId::new(user_id),
                details,
            },
            &app_state.request_token(),
        )
        .await?;
    write_response(result, "User updated")
}

async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(user_id, "Handling delete_user request");
    let result = app_state
        .dispatcher
        .send(
            DeleteUser {
                user_id: UserId::new(user_id),
            },
            &app_state.request_token(),
        )
        .await?;
    write_response(result, "User deleted")
}

async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<DepartmentDto>>, HttpError> {
    info!("Handling list_departments request");
    let departments = app_state
        .dispatcher
        .send(ListDepartments, &app_state.request_token())
        .await?;
    Ok(Json(departments))
}

async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<UserAssignmentDto>>, HttpError> {
    info!("Handling list_assignments request");
    let assignments = app_state
        .dispatcher
        .send(ListUserAssignments, &app_state.request_token())
        .await?;
    Ok(Json(assignments))
}

async fn handle_assign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignmentApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        user_id = %req.user_id,
        department_id = %req.department_id,
        "Handling assign request"
    );
    let result = app_state
        .dispatcher
        .send(
            AssignUserToDepartment {
                user_id: req.user_id,
                department_id: req.department_id,
            },
            &app_state.request_token(),
        )
        .await?;
    write_response(result, "User assigned to department")
}

async fn handle_remove_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path((user_id, department_id)): Path<(i64, i64)>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(user_id, department_id, "Handling remove_assignment request");
    let result = app_state
        .dispatcher
        .send(
            RemoveUserAssignment {
                user_id: UserId::new(user_id),
                department_id: DepartmentId::new(department_id),
            },
            &app_state.request_token(),
        )
        .await?;
    write_response(result, "Assignment removed")
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", get(handle_list_users).post(handle_create_user))
        .route("/users/recent", get(handle_list_recent_users))
        .route(
            "/users/{user_id}",
            get(handle_get_user)
                .put(handle_update_user)
                .delete(handle_delete_user),
        )
        .route("/departments", get(handle_list_departments))
        .route(
            "/assignments",
            get(handle_list_assignments).post(handle_assign),
        )
        .route(
            "/assignments/{user_id}/{department_id}",
            delete(handle_remove_assignment),
        )
        .with_state(app_state)
}

/// Waits for Ctrl-C, then cancels `shutdown` so in-flight requests stop
/// before committing.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown requested");
    shutdown.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing staffdesk server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.seed_departments {
        let inserted: usize = persistence.seed_default_departments()?;
        info!(inserted, "Department seeding finished");
    }

    let shutdown: CancellationToken = CancellationToken::new();
    let app_state: AppState = AppState {
        dispatcher: dispatcher(shared(persistence))?,
        shutdown: shutdown.clone(),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server stopped");
    Ok(())
}
