use sentirs::config::file::FileConfig;
use sentirs::{resolve_credentials, KEY_ENV_VAR, TOKEN_ENV_VAR};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_env_beats_config_file() {
    // The only test in this binary that touches the process environment.
    std::env::set_var(TOKEN_ENV_VAR, "env-token");
    std::env::set_var(KEY_ENV_VAR, "env-key");

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[credentials]
token = "file-token"
key = "file-key"
"#,
    )
    .unwrap();

    let config = FileConfig::from_file(file.path()).unwrap();

    let creds = resolve_credentials(None, None, Some(&config)).unwrap();
    assert_eq!(creds.token, "env-token");
    assert_eq!(creds.key, "env-key");

    let creds = resolve_credentials(Some("flag-token"), None, Some(&config)).unwrap();
    assert_eq!(creds.token, "flag-token");
    assert_eq!(creds.key, "env-key");

    std::env::remove_var(TOKEN_ENV_VAR);
    std::env::remove_var(KEY_ENV_VAR);

    let creds = resolve_credentials(None, None, Some(&config)).unwrap();
    assert_eq!(creds.token, "file-token");
    assert_eq!(creds.key, "file-key");
}
