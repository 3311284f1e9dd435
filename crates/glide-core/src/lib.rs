pub mod config;
pub mod dom;
pub mod error;
pub mod goto;
pub mod locale;
pub mod scroll;

pub use config::{AppConfig, ScrollConfig};
pub use error::{Error, Result};
pub use goto::{create_go_to, use_go_to, GoTo, GoToInstance, Scope};
pub use locale::{Locale, RtlFlag};
