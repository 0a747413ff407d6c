//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into the entry points the view layer
//!   consumes: board CRUD plus the drag event handlers.
//! - Keep view/notification layers decoupled from store details.

pub mod board_service;
