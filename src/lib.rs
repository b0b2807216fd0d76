//! Core library exports for the resource API service.
//!
//! This crate exposes the domain types, persistence models, repositories,
//! forms, routes and service layers used by the resource HTTP application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
