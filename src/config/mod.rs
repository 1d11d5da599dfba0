use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Název session cookie, kterou backend nastavuje po nahrání kubeconfigu
pub const SESSION_COOKIE: &str = "k8s-config-session";

/// Konfigurace předávaná do fetch vrstvy při konstrukci
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub timeout: Duration,
    /// Session credential ve tvaru `name=value`
    pub session: Option<String>,
}

impl Config {
    pub fn new(backend_url: &str, timeout: Duration, session: Option<String>) -> Self {
        // Ořízni trailing slash
        let backend_url = backend_url.trim_end_matches('/').to_string();

        let session = session
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.contains('=') {
                    s
                } else {
                    format!("{}={}", SESSION_COOKIE, s)
                }
            });

        Self {
            backend_url,
            timeout,
            session,
        }
    }

    /// Pokud session nepřišla z CLI/env, zkus soubor v app adresáři
    pub fn with_stored_session(mut self) -> Result<Self> {
        if self.session.is_none() {
            if let Some(stored) = load_session()? {
                tracing::debug!("Using session from {}", get_session_path()?.display());
                self.session = Config::new(&self.backend_url, self.timeout, Some(stored)).session;
            }
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_BACKEND_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            None,
        )
    }
}

/// Vrací cestu k application data adresáři dle OS
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = if cfg!(target_os = "windows") {
        // Windows: %APPDATA%\kubedeck
        PathBuf::from(std::env::var("APPDATA").context("APPDATA environment variable not found")?)
            .join("kubedeck")
    } else {
        // Linux/macOS: ~/.kubedeck
        let home = std::env::var("HOME").context("HOME environment variable not found")?;
        PathBuf::from(home).join(".kubedeck")
    };

    Ok(base_dir)
}

/// Vrací cestu k souboru s uloženou session
pub fn get_session_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("session"))
}

/// Načte uloženou session, pokud soubor existuje
pub fn load_session() -> Result<Option<String>> {
    let path = get_session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    let session = content.trim();

    Ok((!session.is_empty()).then(|| session.to_string()))
}
