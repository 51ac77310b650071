use super::*;

/// # Safety
/// Env-mutating tests share process state; each one clears before and after.
unsafe fn clear_login_env() {
    unsafe {
        std::env::remove_var("LOGIN_SERVER_URL");
        std::env::remove_var("LOGIN_PATH");
        std::env::remove_var("LOGIN_HOME_ROUTE");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn new_trims_trailing_slashes_and_applies_defaults() {
    let cfg = LoginConfig::new("https://api.example.test//");
    assert_eq!(cfg.base_url, "https://api.example.test");
    assert_eq!(cfg.login_path, DEFAULT_LOGIN_PATH);
    assert_eq!(cfg.home_route, DEFAULT_HOME_ROUTE);
    assert_eq!(cfg.token_key, "token");
    assert_eq!(cfg.user_key, "user");
    assert_eq!(cfg.login_url(), "https://api.example.test/auth/login");
}

#[test]
fn empty_base_url_yields_origin_relative_url() {
    assert_eq!(LoginConfig::new("").login_url(), "/auth/login");
    assert_eq!(LoginConfig::new("/api/").login_url(), "/api/auth/login");
}

#[test]
fn with_home_route_overrides_redirect_target() {
    let cfg = LoginConfig::new("http://x").with_home_route("/dashboard");
    assert_eq!(cfg.home_route, "/dashboard");
}

#[test]
fn from_env_requires_server_url() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_login_env() };

    assert_eq!(LoginConfig::from_env(), Err(ConfigError::MissingVar("LOGIN_SERVER_URL")));
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_SERVER_URL", "http://127.0.0.1:8000/");
        std::env::set_var("LOGIN_PATH", " /v2/session ");
        std::env::set_var("LOGIN_HOME_ROUTE", "/home");
    }

    let cfg = LoginConfig::from_env().unwrap();
    assert_eq!(cfg.login_url(), "http://127.0.0.1:8000/v2/session");
    assert_eq!(cfg.home_route, "/home");

    unsafe { clear_login_env() };
}

#[test]
fn from_env_rejects_relative_paths() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_SERVER_URL", "http://127.0.0.1:8000");
        std::env::set_var("LOGIN_HOME_ROUTE", "home");
    }

    let err = LoginConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { var: "LOGIN_HOME_ROUTE", .. }));

    unsafe { clear_login_env() };
}

#[test]
fn from_env_ignores_blank_optional_values() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_SERVER_URL", "http://h");
        std::env::set_var("LOGIN_PATH", "   ");
    }

    let cfg = LoginConfig::from_env().unwrap();
    assert_eq!(cfg.login_path, DEFAULT_LOGIN_PATH);

    unsafe { clear_login_env() };
}
