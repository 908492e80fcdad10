use fab_core::{ErrorInfo, FabError, GroupOrder, SchemaVersion, REPORT_SCHEMA};

#[test]
fn error_round_trips_through_json() {
    let err = FabError::Config(
        ErrorInfo::new("config-read", "missing file").with_context("path", "fab.yaml"),
    );
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"Config\""));
    let decoded: FabError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn group_order_serializes_as_integer() {
    let order = GroupOrder::new(36).expect("order");
    assert_eq!(serde_json::to_string(&order).expect("serialize"), "36");
    let decoded: GroupOrder = serde_json::from_str("36").expect("deserialize");
    assert_eq!(decoded, order);
    assert!(serde_json::from_str::<GroupOrder>("0").is_err());
}

#[test]
fn report_schema_reads_older_minors_only() {
    assert_eq!(REPORT_SCHEMA.to_string(), "1.0.0");
    let json = serde_json::to_string(&REPORT_SCHEMA).expect("serialize");
    let decoded: SchemaVersion = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, REPORT_SCHEMA);

    let newer = SchemaVersion::new(1, 2, 0);
    assert!(newer.reads(&REPORT_SCHEMA));
    assert!(!REPORT_SCHEMA.reads(&newer));
    assert!(!REPORT_SCHEMA.reads(&SchemaVersion::new(2, 0, 0)));
}
