//! Localization service for client-mod plugins.
//!
//! See [`i18n`] for the lookup model and [`startup`] for how a localizer is
//! assembled from configuration.

pub mod config;
pub mod i18n;
pub mod startup;
