//! Startup configuration from command-line arguments and environment.
//!
//! ```text
//! mortgage_calc [FONT_PATH]
//! MORTGAGE_CALC_BANKS=offers.json      bank offers for "Choose Bank"
//! MORTGAGE_CALC_FONT_SIZE=13           body text size in points
//! ```

use std::path::PathBuf;

pub const DEFAULT_FONT_PATH: &str = "./fonts/AlBayan.ttf";
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

const BANKS_ENV: &str = "MORTGAGE_CALC_BANKS";
const FONT_SIZE_ENV: &str = "MORTGAGE_CALC_FONT_SIZE";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub font_path: PathBuf,
    pub font_size: f32,
    pub banks_path: Option<PathBuf>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            banks_path: None,
            window_size: [960.0, 600.0],
            min_window_size: [720.0, 480.0],
        }
    }
}

impl Config {
    /// Build from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::from_sources(std::env::args(), |key| std::env::var(key).ok())
    }

    /// `args` includes the program name at position 0.
    pub fn from_sources<I, F>(args: I, env: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(font) = args.into_iter().nth(1) {
            config.font_path = PathBuf::from(font);
        }

        config.banks_path = env(BANKS_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = env(FONT_SIZE_ENV) {
            match raw.trim().parse::<f32>() {
                Ok(size) if (6.0..=48.0).contains(&size) => config.font_size = size,
                _ => log::warn!(
                    "{FONT_SIZE_ENV}={raw} is not a size between 6 and 48, using {DEFAULT_FONT_SIZE}"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_args() {
        let config = Config::from_sources(args(&["mortgage_calc"]), |_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.font_path, PathBuf::from(DEFAULT_FONT_PATH));
    }

    #[test]
    fn font_from_first_argument() {
        let config = Config::from_sources(args(&["mortgage_calc", "/tmp/Inter.ttf"]), |_| None);
        assert_eq!(config.font_path, PathBuf::from("/tmp/Inter.ttf"));
    }

    #[test]
    fn env_overrides() {
        let config = Config::from_sources(args(&["mortgage_calc"]), |key| match key {
            BANKS_ENV => Some("offers.json".to_string()),
            FONT_SIZE_ENV => Some("16".to_string()),
            _ => None,
        });
        assert_eq!(config.banks_path, Some(PathBuf::from("offers.json")));
        assert_eq!(config.font_size, 16.0);
    }

    #[test]
    fn bad_font_size_is_ignored() {
        let config = Config::from_sources(args(&["mortgage_calc"]), |key| {
            (key == FONT_SIZE_ENV).then(|| "huge".to_string())
        });
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }
}
