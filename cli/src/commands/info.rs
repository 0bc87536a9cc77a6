//! # gzpack Info Command
//!
//! File: cli/src/commands/info.rs
//!
//! `gzpack info` prints the version and the project URL, one per line.
//!
use crate::core::config::AppInfo;
use crate::core::error::Result;

pub fn handle_info(app: &AppInfo) -> Result<()> {
    print!("{}", render_info(app));
    Ok(())
}

fn render_info(app: &AppInfo) -> String {
    format!("{}\n{}\n", app.version, app.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_info() {
        let app = AppInfo {
            version: "1.2.3",
            url: "https://example.org/gzpack",
        };
        assert_eq!(render_info(&app), "1.2.3\nhttps://example.org/gzpack\n");
    }
}
