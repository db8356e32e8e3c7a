//! Site configuration

mod site;

pub use site::SiteConfig;
