use dnsmon_domain::{CheckResult, ServerAddress, DEFAULT_DNS_PORT};

#[test]
fn test_plain_ip_gets_default_port() {
    let v4: ServerAddress = "1.1.1.1".parse().unwrap();
    assert_eq!(v4.port(), DEFAULT_DNS_PORT);
    assert_eq!(v4.to_string(), "1.1.1.1:53");

    let v6: ServerAddress = "2001:4860:4860::8888".parse().unwrap();
    assert_eq!(v6.to_string(), "[2001:4860:4860::8888]:53");
}

#[test]
fn test_explicit_port_is_kept() {
    let addr: ServerAddress = "127.0.0.1:5353".parse().unwrap();
    assert_eq!(addr.port(), 5353);

    let v6: ServerAddress = "[::1]:5300".parse().unwrap();
    assert_eq!(v6.port(), 5300);
}

#[test]
fn test_rejects_hostnames() {
    assert!("dns.google".parse::<ServerAddress>().is_err());
    assert!("".parse::<ServerAddress>().is_err());
}

#[test]
fn test_check_result_message() {
    assert_eq!(CheckResult::Healthy.message(), "");
    assert!(CheckResult::Healthy.is_healthy());

    let failed = CheckResult::unhealthy("Timeout asking DNS question");
    assert!(!failed.is_healthy());
    assert_eq!(failed.message(), "Timeout asking DNS question");
}
