//! End-to-end extraction scenarios through the public API.

use std::collections::HashMap;

use domain_extract::{
    domain, domain_with, extract, path, query_values, scheme, subdomain, subdomain_with,
    subdomain_www, ExtractOptions, ParseOptions,
};

#[test]
fn test_extract_subdomains_by_default() {
    assert_eq!(
        extract("http://abc.google.com", ExtractOptions::default()).as_deref(),
        Some("abc.google.com")
    );
}

#[test]
fn test_extract_domain_when_no_subdomain() {
    assert_eq!(
        extract("http://google.com", ExtractOptions::default()).as_deref(),
        Some("google.com")
    );
}

#[test]
fn test_extract_strips_www() {
    assert_eq!(
        extract("http://www.google.com", ExtractOptions::default()).as_deref(),
        Some("google.com")
    );
}

#[test]
fn test_extract_domain_flag() {
    let opts = ExtractOptions {
        domain: true,
        ..Default::default()
    };
    assert_eq!(
        extract("http://abc.google.com", opts).as_deref(),
        Some("google.com")
    );
}

#[test]
fn test_extract_www_flag() {
    let opts = ExtractOptions {
        domain: false,
        www: true,
    };
    assert_eq!(
        extract("http://www.google.com", opts).as_deref(),
        Some("www.google.com")
    );
}

#[test]
fn test_domain_scenarios() {
    assert_eq!(domain("http://www.name.com").as_deref(), Some("name.com"));
    assert_eq!(domain("http://aloha"), None);
    assert_eq!(domain("::::::::::"), None);
    assert_eq!(domain("{}"), None);
}

#[test]
fn test_subdomain_scenarios() {
    assert_eq!(subdomain("http://sam.name.com").as_deref(), Some("sam.name.com"));
    assert_eq!(subdomain("http://aloha"), None);
    assert_eq!(subdomain("::::::::::"), None);
}

#[test]
fn test_subdomain_www_scenarios() {
    assert_eq!(subdomain_www("http://www.name.com").as_deref(), Some("www.name.com"));
    assert_eq!(subdomain_www("http://aloha"), None);
    assert_eq!(subdomain_www("::::::::::"), None);
}

#[test]
fn test_www_stripping() {
    assert_eq!(subdomain_www("http://www.x.com").as_deref(), Some("www.x.com"));
    assert_eq!(subdomain("http://www.x.com").as_deref(), Some("x.com"));
    assert_eq!(subdomain_with("http://www.x.com", true), subdomain_www("http://www.x.com"));
}

#[test]
fn test_scheme_scenarios() {
    assert_eq!(scheme("http://www.name.com").as_deref(), Some("http"));
    assert_eq!(scheme("http://aloha").as_deref(), Some("http"));
    assert_eq!(scheme("::::::::::"), None);
}

#[test]
fn test_scheme_only_inputs() {
    assert_eq!(scheme("mailto:").as_deref(), Some("mailto"));
    assert_eq!(scheme("mailto:someone@example.com").as_deref(), Some("mailto"));
    assert_eq!(domain("mailto:someone@example.com"), None);
}

#[test]
fn test_malformed_hosts_yield_nothing() {
    for input in ["http://{}", "http://a b", "http://x.com:abc"] {
        assert_eq!(scheme(input), None, "{input}");
        assert_eq!(path(input), None, "{input}");
        assert_eq!(query_values(input), None, "{input}");
    }
}

#[test]
fn test_path_scenarios() {
    assert_eq!(path("http://www.name.com/custom/path").as_deref(), Some("/custom/path"));
    assert_eq!(path("www.name.com/custom/path").as_deref(), Some("/custom/path"));
    assert_eq!(path("abc.name.co.uk/custom/path").as_deref(), Some("/custom/path"));
    assert_eq!(path("name.co.nz/custom/path").as_deref(), Some("/custom/path"));
    assert_eq!(path("http://aloha").as_deref(), Some(""));
}

#[test]
fn test_query_values_scenarios() {
    let expected: HashMap<String, String> = [("params", "123"), ("other", "abc")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        query_values("http://www.name.com/custom/path?params=123&other=abc"),
        Some(expected)
    );

    let expected: HashMap<String, String> = [(String::new(), String::new())].into_iter().collect();
    assert_eq!(query_values("http://aloha?&="), Some(expected));

    assert_eq!(query_values(":::::::::?:"), None);
}

#[test]
fn test_untrusted_batch_never_aborts() {
    // A malformed entry must not stop the rest of a batch
    let inputs = [
        "https://www.rust-lang.org/learn",
        "::::::::::",
        "{}",
        "",
        "docs.rs/serde",
        "http://[::1",
        "   blog.example.co.uk   ",
    ];

    let domains: Vec<Option<String>> = inputs.iter().map(|s| domain(s)).collect();
    assert_eq!(
        domains,
        vec![
            Some("rust-lang.org".to_string()),
            None,
            None,
            None,
            Some("docs.rs".to_string()),
            None,
            Some("example.co.uk".to_string()),
        ]
    );
}

#[test]
fn test_ip_hosts_keep_other_components() {
    let input = "http://10.0.0.1:8080/status?verbose=1";
    assert_eq!(domain(input), None);
    assert_eq!(scheme(input).as_deref(), Some("http"));
    assert_eq!(path(input).as_deref(), Some("/status"));
    assert_eq!(
        query_values(input).and_then(|q| q.get("verbose").cloned()),
        Some("1".to_string())
    );
}

#[test]
fn test_options_from_json_config() {
    let opts: ParseOptions = serde_json::from_str(r#"{"strip_subdomain": false}"#).unwrap();
    assert_eq!(
        domain_with("www.api.example.com", &opts).as_deref(),
        Some("api.example.com")
    );
}
