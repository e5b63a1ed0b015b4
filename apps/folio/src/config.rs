use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::effects::Viewport;

const HOME_ICON: &str = r#"<svg class="w-6 h-6 text-cyan-400" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"></path></svg>"#;
const TIMELINE_ICON: &str = r#"<svg class="w-6 h-6 text-cyan-400" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"></path></svg>"#;
const SKILLS_ICON: &str = r#"<svg class="w-6 h-6 text-cyan-400" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 3v4M3 5h4M6 17v4m-2-2h4m5-16v4m-2-2h4m6 10v4m-2-2h4M17 3l-4.5 4.5M17 17l-4.5-4.5M7 17l4.5-4.5M7 7l4.5 4.5"></path></svg>"#;
const PROJECTS_ICON: &str = r#"<svg class="w-6 h-6 text-cyan-400" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4"></path></svg>"#;

/// One entry of the side navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// Section id the link targets, without the leading `#`.
    pub section: String,
    pub text: String,
    /// Inline SVG markup, emitted verbatim.
    pub icon: String,
}

impl NavLink {
    fn new(section: &str, text: &str, icon: &str) -> Self {
        Self {
            section: section.to_string(),
            text: text.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

/// Application configuration.
///
/// The library only ever receives a `Config` value; `from_env` is used by the
/// host binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local file path or http(s) URL of the résumé JSON document.
    pub data_path: String,
    pub theme_store_path: PathBuf,
    pub output_path: PathBuf,
    pub preload: Duration,
    pub tagline_interval: Duration,
    pub counter_duration: Duration,
    pub typing_interval: Duration,
    pub viewport: Viewport,
    pub nav_links: Vec<NavLink>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: "./ultimate_resume_data.json".to_string(),
            theme_store_path: PathBuf::from(".folio/preferences.json"),
            output_path: PathBuf::from("dist/index.html"),
            preload: Duration::from_millis(1500),
            tagline_interval: Duration::from_millis(3000),
            counter_duration: Duration::from_millis(2000),
            typing_interval: Duration::from_millis(80),
            viewport: Viewport::new(1280, 800),
            nav_links: default_nav_links(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            data_path: std::env::var("DATA_PATH").unwrap_or(defaults.data_path),
            theme_store_path: std::env::var("THEME_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.theme_store_path),
            output_path: std::env::var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            preload: env_millis("PRELOAD_MS")?.unwrap_or(defaults.preload),
            tagline_interval: env_period("TAGLINE_INTERVAL_MS")?
                .unwrap_or(defaults.tagline_interval),
            counter_duration: env_millis("COUNTER_DURATION_MS")?
                .unwrap_or(defaults.counter_duration),
            typing_interval: env_period("TYPING_INTERVAL_MS")?.unwrap_or(defaults.typing_interval),
            viewport: defaults.viewport,
            nav_links: defaults.nav_links,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Ids of every section reachable from the navigation.
    pub fn nav_sections(&self) -> impl Iterator<Item = &str> {
        self.nav_links.iter().map(|l| l.section.as_str())
    }
}

pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("vision", "Home", HOME_ICON),
        NavLink::new("timeline", "Timeline", TIMELINE_ICON),
        NavLink::new("skills", "Skills", SKILLS_ICON),
        NavLink::new("projects", "Projects", PROJECTS_ICON),
    ]
}

fn env_millis(key: &str) -> Result<Option<Duration>> {
    std::env::var(key)
        .ok()
        .map(|raw| parse_millis(key, &raw))
        .transpose()
}

/// Like `env_millis`, for timer periods, which must be non-zero.
fn env_period(key: &str) -> Result<Option<Duration>> {
    std::env::var(key)
        .ok()
        .map(|raw| parse_period(key, &raw))
        .transpose()
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration> {
    let ms = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of milliseconds"))?;
    Ok(Duration::from_millis(ms))
}

fn parse_period(key: &str, raw: &str) -> Result<Duration> {
    let period = parse_millis(key, raw)?;
    if period.is_zero() {
        bail!("{key} must be greater than zero");
    }
    Ok(period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nav_links() {
        let config = Config::default();
        let sections: Vec<&str> = config.nav_sections().collect();
        assert_eq!(sections, vec!["vision", "timeline", "skills", "projects"]);
        assert_eq!(config.nav_links[1].href(), "#timeline");
    }

    #[test]
    fn test_default_timings() {
        let config = Config::default();
        assert_eq!(config.tagline_interval, Duration::from_secs(3));
        assert_eq!(config.counter_duration, Duration::from_secs(2));
        assert_eq!(config.data_path, "./ultimate_resume_data.json");
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let err = parse_period("TAGLINE_INTERVAL_MS", "0").unwrap_err();
        assert!(err.to_string().contains("TAGLINE_INTERVAL_MS"));
        assert_eq!(
            parse_period("TYPING_INTERVAL_MS", "80").unwrap(),
            Duration::from_millis(80)
        );
    }

    #[test]
    fn test_zero_millis_allowed_for_durations() {
        assert_eq!(parse_millis("PRELOAD_MS", "0").unwrap(), Duration::ZERO);
        assert!(parse_millis("PRELOAD_MS", "soon").is_err());
    }
}
