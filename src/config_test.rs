use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_lock()`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_defaults() {
    let _env = env_lock();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _env = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", " 8081 ");
        std::env::set_var("SITE_ROOT", "/srv/site");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_blank_values_use_defaults() {
    let _env = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "  ");
        std::env::set_var("SITE_ROOT", "");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.site_root, None);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_host() {
    let _env = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "localhost:3000");
    }

    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidHost("localhost:3000".to_owned())));

    unsafe { clear_server_env() };
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_accepts_valid_range() {
    assert_eq!(parse_port("1"), Ok(1));
    assert_eq!(parse_port("65535"), Ok(65535));
}

#[test]
fn parse_port_rejects_zero_overflow_and_text() {
    for raw in ["0", "65536", "http", "-1"] {
        assert_eq!(parse_port(raw), Err(ConfigError::InvalidPort(raw.to_owned())), "{raw}");
    }
}
