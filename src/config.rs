use std::env;

/// Process-wide configuration loaded once at startup.
///
/// The store credential lives here and nowhere else. The `VITE_`-prefixed
/// spellings are accepted for compatibility with an `.env` shared with the
/// front-end tooling.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// The lookup is injected so the refusal paths stay testable without
    /// touching the process environment.
    fn from_vars(
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let supabase_url = first_of(&var, &["SUPABASE_URL", "VITE_SUPABASE_URL"])
            .ok_or("SUPABASE_URL (or VITE_SUPABASE_URL) environment variable is required")?;
        let supabase_key = first_of(&var, &["SUPABASE_KEY", "VITE_SUPABASE_ANON_KEY"])
            .ok_or("SUPABASE_KEY (or VITE_SUPABASE_ANON_KEY) environment variable is required")?;
        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("Failed to parse PORT: {e}"))?,
            None => 3000,
        };

        Ok(Self {
            supabase_url,
            supabase_key,
            port,
        })
    }
}

fn first_of(var: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| var(name).filter(|value| !value.is_empty()))
}
