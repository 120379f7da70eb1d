//! VORA - desktop client for the VORA dataset cleaning and forecasting API
//!
//! The heavy lifting (authentication, dataset cleaning, LSTM training)
//! happens on the server. This crate previews datasets locally, drives the
//! API, and turns forecast results into charts.
//!
//! ## Module Structure
//!
//! - [`preview`] - Tabular preview builder (delimiter sniffing, JSON records)
//! - [`series`] - Time series, chart downsampling and forecast summaries
//! - [`api`] - Blocking HTTP client and request/response payloads
//! - [`controller`] - Page controller driving every user flow
//! - [`render`] - Output capabilities the controller renders through
//! - [`state`] - Core application state types and constants
//! - [`session`] - Persisted logged-in user
//! - [`settings`] - User settings persistence
//! - [`validation`] - Form validation and size formatting
//! - [`mod@i18n`] - Internationalization support
//! - [`app`] - eframe::App implementation and background jobs
//! - [`ui`] - User interface components

#[macro_use]
extern crate rust_i18n;

// Initialize i18n with translation files from the i18n directory
// Fallback to English if a translation is missing
i18n!("i18n", fallback = "en");

pub mod api;
pub mod app;
pub mod controller;
pub mod i18n;
pub mod preview;
pub mod render;
pub mod series;
pub mod session;
pub mod settings;
pub mod state;
pub mod ui;
pub mod validation;
