//! Query result formatters.

pub mod json;
pub mod text;

pub use json::format_json;
pub use text::{
    format_advanced, format_coverage, format_load_balancers, format_region_distribution,
    format_search, format_type_distribution, format_without_waf,
};
