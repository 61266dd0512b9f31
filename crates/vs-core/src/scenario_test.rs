use super::*;

#[test]
fn test_migrates() {
    assert!(Scenario::Update.migrates());
    assert!(Scenario::Init {
        subdomain: "tenant-a".into()
    }
    .migrates());
    assert!(!Scenario::Test {
        subdomain: "tenant-a".into()
    }
    .migrates());
}

#[test]
fn test_subdomain() {
    assert_eq!(Scenario::Update.subdomain(), None);
    assert_eq!(
        Scenario::Init {
            subdomain: "tenant-a".into()
        }
        .subdomain(),
        Some("tenant-a")
    );
}

#[test]
fn test_display() {
    assert_eq!(Scenario::Update.to_string(), "update");
    assert_eq!(
        Scenario::Test {
            subdomain: "t".into()
        }
        .to_string(),
        "test(t)"
    );
}

#[test]
fn test_serde_tagged() {
    let scenario = Scenario::Init {
        subdomain: "tenant-a".into(),
    };
    let json = serde_json::to_string(&scenario).unwrap();
    assert_eq!(json, r#"{"scene":"init","subdomain":"tenant-a"}"#);

    let back: Scenario = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scenario);
}
