use kira_pgx::schema::v1::PgxReportV1;

#[test]
fn schema_roundtrip_v1() {
    let report = PgxReportV1::empty("0.0.0-test", "0badc0de", "2024-01-01T00:00:00+00:00");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: PgxReportV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "kira-pgx");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.report_id, "0badc0de");
    assert!(decoded.results.is_empty());
}
