use serde_json::json;

use super::*;

#[test]
fn record_type_strings() {
    assert_eq!(RecordType::Aaaa.as_str(), "AAAA");
    assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::Cname);
    assert_eq!("TXT".parse::<RecordType>().unwrap(), RecordType::Txt);
    assert_eq!(
        "SOA".parse::<RecordType>().unwrap(),
        RecordType::Other("SOA".to_string())
    );
    assert_eq!(serde_json::to_value(RecordType::Mx).unwrap(), json!("MX"));
    assert_eq!(
        serde_json::to_value(RecordType::Other("SSHFP".to_string())).unwrap(),
        json!("SSHFP")
    );
    assert_eq!(RecordType::Other("DS".to_string()).to_string(), "DS");
}

#[test]
fn unknown_record_type_is_kept() {
    let record: DomainRecord = serde_json::from_value(json!({
        "recordid": 7,
        "domainname": "sysgle.se",
        "host": "@",
        "type": "SOA",
        "data": "ns1.namesystem.se. registry.glesys.se. 2024010101 10800 2700 1814400 10800",
        "ttl": 3600
    }))
    .unwrap();

    assert_eq!(record.record_type, RecordType::Other("SOA".to_string()));
    assert_eq!(record.record_type.as_str(), "SOA");
}

#[test]
fn null_numbers_are_zero() {
    let record: DomainRecord = serde_json::from_value(json!({
        "recordid": 9,
        "type": "A",
        "ttl": null
    }))
    .unwrap();

    assert_eq!(record.ttl, 0);
}

#[test]
fn record_deserialization() {
    let record: DomainRecord = serde_json::from_value(json!({
        "recordid": 1234,
        "domainname": "sysgle.se",
        "host": "www",
        "type": "A",
        "data": "127.0.0.1",
        "ttl": 3600
    }))
    .unwrap();

    assert_eq!(
        record,
        DomainRecord {
            record_id: 1234,
            domain_name: "sysgle.se".to_string(),
            host: "www".to_string(),
            record_type: RecordType::A,
            data: "127.0.0.1".to_string(),
            ttl: 3600,
        }
    );
}

#[test]
fn record_numbers_as_strings() {
    let record: DomainRecord = serde_json::from_value(json!({
        "recordid": "42",
        "type": "TXT",
        "ttl": "300"
    }))
    .unwrap();

    assert_eq!(record.record_id, 42);
    assert_eq!(record.ttl, 300);
    assert_eq!(record.host, "");

    assert!(
        serde_json::from_value::<DomainRecord>(json!({ "recordid": "abc", "type": "A" })).is_err()
    );
}

#[test]
fn add_params_serialization() {
    let params = AddDomainRecordParams::new("sysgle.se", "www", RecordType::A, "127.0.0.1");
    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({
            "domainname": "sysgle.se",
            "host": "www",
            "type": "A",
            "data": "127.0.0.1"
        })
    );

    let params = params.ttl(600);
    assert_eq!(serde_json::to_value(&params).unwrap()["ttl"], json!(600));
}

#[test]
fn update_params_omit_unset_fields() {
    assert_eq!(
        serde_json::to_value(UpdateDomainRecordParams::new()).unwrap(),
        json!({})
    );

    let params = UpdateDomainRecordParams::new()
        .data("10 mail.sysgle.se")
        .record_type(RecordType::Mx);
    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({ "type": "MX", "data": "10 mail.sysgle.se" })
    );
}
