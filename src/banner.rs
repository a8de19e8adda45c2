//! Startup banner and session summary display.

use crate::consts::REPO;
use crate::coordinator::SessionStats;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub backend: &'a str,
    pub endpoint: &'a str,
    pub settings: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║              S A L V E                ║
   ║       say hello, get hello back       ║
   ╚═══════════════════════════════════════╝

   version   {}
   repo      {}
   backend   {}
   endpoint  {}
   settings  {}
"#,
        env!("CARGO_PKG_VERSION"),
        REPO,
        info.backend,
        info.endpoint,
        info.settings,
    );
}

/// Print the session summary (submission counts + farewell).
pub fn print_session_summary(stats: SessionStats) {
    if stats.total() > 0 {
        println!(
            "session: {} greeted, {} failed",
            stats.completed, stats.failed
        );
    }
    println!("goodbye.");
}
