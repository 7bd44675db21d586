//! WAF coverage and load balancer reporting over collected ALB scan documents.
//!
//! The heavy lifting (document model, ingest, statistics) lives in
//! `alb-audit-core`. This crate adds what a terminal user needs on top:
//!
//! - [`config`] — Report settings: default sections and scan mode labels
//! - [`report`] — Colored text and JSON rendering of planned sections
//! - [`export`] — Flattened CSV export, one row per load balancer
//!
//! # Examples
//!
//! ```ignore
//! use alb_audit::config::default_report_config;
//! use alb_audit::report::{render_text_report, ReportPlan};
//! use alb_audit_core::ReportAggregator;
//!
//! let aggregator = ReportAggregator::load("alb_config.json".as_ref())?;
//! let config = default_report_config();
//! let plan = ReportPlan { sections: config.default_sections.clone(), search: None };
//! println!("{}", render_text_report(&aggregator, &plan, &config));
//! ```

pub mod config;
pub mod export;
pub mod report;
