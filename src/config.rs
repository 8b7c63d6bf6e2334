use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    // Preload the three sample check-ins the dashboard ships with
    pub seed_sample_entries: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            seed_sample_entries: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|v| parse_origin_list(&v))
                .unwrap_or_default(),
            seed_sample_entries: env::var("SEED_SAMPLE_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed_sample_entries),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 9000,
            ..Config::default()
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_parse_origin_list_skips_blanks() {
        let origins = parse_origin_list(" http://a.local , ,http://b.local,");
        assert_eq!(origins, vec!["http://a.local", "http://b.local"]);
    }
}
