// Unit tests for Userdata Proxy

use chrono::{DateTime, FixedOffset};
use userdata_proxy::core::{
    filters::{filter_by_time_range, matches_time_range},
    params::{parse_result_count, parse_timestamp, ParseError},
};
use userdata_proxy::models::{QueryParameters, RandomUserPayload, UserRecord};

fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

fn create_record(name: &str, created_at: &str) -> UserRecord {
    UserRecord {
        gender: "male".to_string(),
        first_name: name.to_string(),
        last_name: "Record".to_string(),
        postcode: 54321,
        created_at: created_at.to_string(),
    }
}

#[test]
fn test_count_round_trips_non_negative_integers() {
    for n in (0..1000).step_by(37) {
        assert_eq!(parse_result_count(&n.to_string()), Ok(Some(n)));
    }
}

#[test]
fn test_count_rejects_words() {
    for raw in ["abc", "ten", "-", "+", "0x10"] {
        assert_eq!(parse_result_count(raw), Err(ParseError::InvalidCount));
    }
}

#[test]
fn test_timestamp_round_trips_to_same_instant() {
    for raw in [
        "2019-11-09T07:47:23.904Z",
        "2012-11-09T07:47:23Z",
        "2000-02-29T23:59:59.123456789-05:00",
    ] {
        let parsed = parse_timestamp(raw, "from").unwrap().unwrap();
        let reparsed = ts(&parsed.to_rfc3339());
        assert_eq!(parsed, reparsed);
        assert_eq!(parsed, ts(raw));
    }
}

#[test]
fn test_query_parameters_from_raw() {
    let params = QueryParameters::from_raw(
        "10",
        "2012-11-09T07:47:23.904Z",
        "2019-11-09T07:47:23.904Z",
    )
    .unwrap();

    assert_eq!(params.result_count, Some(10));
    assert_eq!(params.from_time, Some(ts("2012-11-09T07:47:23.904Z")));
    assert_eq!(params.to_time, Some(ts("2019-11-09T07:47:23.904Z")));
}

#[test]
fn test_filter_open_interval() {
    let t1 = ts("2012-01-01T00:00:00Z");
    let t2 = ts("2018-01-01T00:00:00Z");

    let records = vec![
        create_record("before", "2011-12-31T23:59:59Z"),
        create_record("at_t1", "2012-01-01T00:00:00Z"),
        create_record("just_after_t1", "2012-01-01T00:00:00.001Z"),
        create_record("middle", "2015-01-01T00:00:00Z"),
        create_record("at_t2", "2018-01-01T00:00:00Z"),
        create_record("after", "2019-01-01T00:00:00Z"),
    ];

    let kept: Vec<String> = filter_by_time_range(records, Some(t1), Some(t2))
        .into_iter()
        .map(|r| r.first_name)
        .collect();

    assert_eq!(kept, vec!["just_after_t1", "middle"]);
}

#[test]
fn test_filter_identity_keeps_unparseable_records() {
    // With no window there is no pass at all, so even bad timestamps survive
    let records = vec![create_record("bad", "not-a-date"), create_record("ok", "2015-01-01T00:00:00Z")];
    assert_eq!(filter_by_time_range(records.clone(), None, None), records);
}

#[test]
fn test_matches_time_range_single_bounds() {
    let bound = ts("2015-01-01T00:00:00Z");
    assert!(matches_time_range("2016-01-01T00:00:00Z", Some(bound), None));
    assert!(!matches_time_range("2014-01-01T00:00:00Z", Some(bound), None));
    assert!(matches_time_range("2014-01-01T00:00:00Z", None, Some(bound)));
    assert!(!matches_time_range("2016-01-01T00:00:00Z", None, Some(bound)));
}

#[test]
fn test_payload_ignores_unknown_fields() {
    let payload: RandomUserPayload = serde_json::from_str(
        r#"{"results": [{
            "gender": "male",
            "name": {"first": "Ann", "last": "Other", "title": "Mx"},
            "location": {"postcode": 98765, "street": {"number": 1, "name": "Main"}},
            "registered": {"date": "2011-05-05T05:05:05.555Z", "age": 13},
            "phone": "555-0100"
        }], "info": {"page": 1}}"#,
    )
    .unwrap();

    let records: Vec<UserRecord> = payload.into();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].first_name, "Ann");
    assert_eq!(records[0].last_name, "Other");
    assert_eq!(records[0].postcode, 98765);
    assert_eq!(records[0].created_at, "2011-05-05T05:05:05.555Z");
}
