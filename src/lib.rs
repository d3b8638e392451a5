//! scholar-site
//!
//! Support library for the Scholar Nepal static site: translation lookup,
//! locale-prefixed URLs and the service mix chart.

pub mod chart;
pub mod config;
pub mod locale;
pub mod routing;
pub mod translation;

mod test_utils;

pub use locale::{
    Locale,
    get_alternate_locale,
    is_valid_locale,
};
pub use routing::{
    get_locale_from_path,
    get_locale_path,
};
pub use translation::{
    get_translations,
    t,
};
