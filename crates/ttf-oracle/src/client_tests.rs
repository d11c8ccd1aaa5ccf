use super::*;

fn backend(name: &str) -> ChatBackend {
    ChatBackend {
        name: name.into(),
        base_url: "http://localhost:9".into(),
        api_key: "test-key".into(),
        model: "test-model".into(),
    }
}

#[test]
fn test_empty_roster_rejected() {
    assert!(FailoverOracle::new(vec![]).is_err());
}

#[test]
fn test_cooldown_bookkeeping() {
    let oracle = FailoverOracle::new(vec![backend("primary"), backend("fallback")]).unwrap();
    assert!(!oracle.in_cooldown("primary"));
    oracle.mark_cooldown("primary", Duration::from_secs(600));
    assert!(oracle.in_cooldown("primary"));
    assert!(!oracle.in_cooldown("fallback"));
}

#[test]
fn test_expired_cooldown_clears() {
    let oracle = FailoverOracle::new(vec![backend("primary")]).unwrap();
    oracle.mark_cooldown("primary", Duration::from_secs(0));
    assert!(!oracle.in_cooldown("primary"));
}

#[test]
fn test_completion_content_extracted() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"slots\": []}"}}]}"#;
    assert_eq!(completion_content(body).unwrap(), r#"{"slots": []}"#);
}

#[test]
fn test_completion_content_missing_is_error() {
    assert!(completion_content(r#"{"choices": []}"#).is_err());
    assert!(completion_content("not json").is_err());
}

#[test]
fn test_rate_error_detection() {
    assert!(is_rate_or_quota_error(StatusCode::TOO_MANY_REQUESTS, ""));
    assert!(is_rate_or_quota_error(
        StatusCode::BAD_REQUEST,
        r#"{"error": {"code": "rate_limit_exceeded"}}"#
    ));
    assert!(is_rate_or_quota_error(
        StatusCode::FORBIDDEN,
        r#"{"error": {"type": "insufficient_quota"}}"#
    ));
    assert!(!is_rate_or_quota_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
}

#[test]
fn test_parse_retry_after_seconds() {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, "30".parse().unwrap());
    assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(30)));
    assert_eq!(parse_retry_after(&HeaderMap::new()), None);
}

#[test]
fn test_from_config_skips_backends_without_keys() {
    let config = OracleConfig {
        backends: vec![
            ttf_config::OracleBackendConfig {
                name: "unset".into(),
                base_url: "http://localhost:9/v1/".into(),
                api_key_env: "TTF_TEST_KEY_THAT_IS_NEVER_SET".into(),
                model: "m".into(),
            },
            ttf_config::OracleBackendConfig {
                name: "set".into(),
                base_url: "http://localhost:9/v1/".into(),
                api_key_env: "TTF_TEST_KEY_SET".into(),
                model: "m".into(),
            },
        ],
    };

    // SAFETY: test process, no concurrent env access.
    unsafe { std::env::set_var("TTF_TEST_KEY_SET", "k") };
    let oracle = FailoverOracle::from_config(&config).unwrap();
    assert_eq!(oracle.backends.len(), 1);
    assert_eq!(oracle.backends[0].name, "set");
    // Trailing slash trimmed so the completions path joins cleanly.
    assert_eq!(oracle.backends[0].base_url, "http://localhost:9/v1");
    unsafe { std::env::remove_var("TTF_TEST_KEY_SET") };
}

#[test]
fn test_from_config_with_no_keys_is_error() {
    let config = OracleConfig {
        backends: vec![ttf_config::OracleBackendConfig {
            name: "unset".into(),
            base_url: "http://localhost:9/v1".into(),
            api_key_env: "TTF_TEST_KEY_THAT_IS_NEVER_SET".into(),
            model: "m".into(),
        }],
    };
    assert!(FailoverOracle::from_config(&config).is_err());
}
