//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tokio-cron-scheduler for the background lifecycle jobs.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Transactions and business rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication pass-through
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, metrics)
//! - **Startup** (`startup`) - Tracing, database and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document and Swagger UI
//! - **Scheduler** (`scheduler/`) - Cron jobs advancing event and track lifecycles
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; the auth middleware checks it with the auth service
//! 2. **Controller** converts the DTO to params and calls a service
//! 3. **Service** opens a transaction and applies business rules
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
