//! # Share Management Backend - REST API Server
//!
//! A small REST API for managing share records: an id, a name, a market
//! price and an issue date. Built with [Axum](https://crates.io/crates/axum)
//! and documented through OpenAPI/Swagger via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **CRUD API**: Create, list, fetch, re-price and delete shares.
//!
//! - **Pluggable Storage**: Shares live in PostgreSQL via
//!   [sqlx](https://crates.io/crates/sqlx) when a database URL is configured,
//!   otherwise in an in-memory store.
//!
//! - **OpenAPI Documentation**: Swagger UI at `/swagger-ui/`.
//!
//! - **CORS Support**: Restricted to a single configured frontend origin.
//!
//! - **Structured Logging**: Request tracing with `tower-http`.
//!
//! ## Architecture
//!
//! ```text
//! api (handlers) → service::ShareService → repository::ShareRepository
//!                                            ├── InMemoryShareRepository
//!                                            └── PgShareRepository (table `share`)
//! ```
//!
//! The service rejects creates whose `shareId` is already stored and reads,
//! updates or deletes of unknown ids. The repository enforces nothing.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`db`] | PostgreSQL pool and row types |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`repository`] | Storage adapter trait and implementations |
//! | [`service`] | Share service and its error type |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/share/addShare` | Create a share (201) |
//! | GET | `/api/share/getAllShares` | List all shares |
//! | GET | `/api/share/getShareById/{shareId}` | Get one share |
//! | PUT | `/api/share/updateShareMarketPrice` | Change a share's market price |
//! | DELETE | `/api/share/deleteShare/{shareId}` | Delete a share |
//!
//! Errors are returned as `{"error": "...", "code": "..."}` with status 404
//! (`NO_SUCH_SHARE`), 409 (`SHARE_ALREADY_EXISTS`) or 500.
//!
//! ## Example Usage
//!
//! ```bash
//! # In-memory store
//! cargo run
//!
//! # PostgreSQL store on a custom port
//! DATABASE_URL=postgres://localhost/shares PORT=3000 cargo run
//!
//! # Create a share
//! curl -X POST http://localhost:8080/api/share/addShare \
//!   -H "Content-Type: application/json" \
//!   -d '{"shareId": 1, "shareName": "ACME", "marketPrice": 100, "issueDate": "2024-01-01"}'
//!
//! # Re-price it
//! curl -X PUT http://localhost:8080/api/share/updateShareMarketPrice \
//!   -H "Content-Type: application/json" \
//!   -d '{"shareId": 1, "marketPrice": 150}'
//!
//! # Delete it
//! curl -X DELETE http://localhost:8080/api/share/deleteShare/1
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod state;
