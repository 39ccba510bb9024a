//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the order service,
//! including API endpoints, business logic, and data access. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Order workflows, transactions and pricing
//! - **Data Layer** (`data/`) - Database queries over any connection or transaction
//! - **Model Layer** (`model/`) - Domain models and validated operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (connection pool, pricing)
//! - **Startup** (`startup`) - Tracing subscriber, connection pool and migrations
//! - **Router** (`router`) - Route table, API documentation and HTTP layers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the matching controller
//! 2. **Controller** extracts path and body, converts DTOs to params, calls service
//! 3. **Service** executes business logic, opening a transaction where writes must be atomic
//! 4. **Data** queries database and returns entity models or query rows
//! 5. **Service** converts them to domain models for the controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
