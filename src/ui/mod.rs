//! UI rendering modules for the VORA desktop client.
//!
//! Each submodule adds `render_*` methods to `VoraApp`:
//!
//! - `auth` - Login, registration, demo access and the contact form
//! - `menu` - Top bar (language, theme, user menu)
//! - `tab_bar` - Platform tabs and routing to their content
//! - `data_panel` - Dataset selection, cleaning options, run buttons, assistant feed
//! - `preview_table` - Bounded preview of the current dataset
//! - `terminal` - Forecast run log
//! - `charts` - Forecast dashboard and fullscreen chart viewer
//! - `toast` - Toast notification system

pub mod auth;
pub mod charts;
pub mod data_panel;
pub mod menu;
pub mod preview_table;
pub mod tab_bar;
pub mod terminal;
pub mod toast;
