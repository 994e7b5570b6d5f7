// UI layer: the advisory form as a web page and as a terminal prompt.

#[cfg(feature = "web")]
pub mod render;
#[cfg(feature = "cli")]
pub mod terminal;
#[cfg(feature = "web")]
pub mod web;

pub const PAGE_TITLE: &str = "🌱 Agricultural Disease Advisory System";
pub const REPORT_HEADING: &str = "## 📋 Advisory Report";
pub const WAIT_MESSAGE: &str = "Generating scientifically accurate guidance...";
