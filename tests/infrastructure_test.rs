//! Test to verify test infrastructure works correctly

mod common;

use bins_analyzer::record::RECORD_SIZE;
use bins_analyzer::{Notice, NoticeSink, Representation};
use common::builders::{counter_ramp, log_bytes, RecordBuilder};
use common::mock_helpers::create_notice_channel;

#[test]
fn test_infrastructure_setup() {
    let record = RecordBuilder::new(61).gyro(1.0, 2.0, 3.0).build();
    assert_eq!(record.count, 61);
    assert_eq!(record.gyro.z, 3.0);

    let records = counter_ramp(55, 64);
    assert_eq!(records.len(), 10);
    assert_eq!(
        log_bytes(&records, Representation::Binary).len(),
        10 * RECORD_SIZE
    );
    let text = String::from_utf8(log_bytes(&records, Representation::Text)).unwrap();
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn test_notice_channel() {
    let (mut tx, rx) = create_notice_channel();
    tx.append(Notice::info("ready"));
    assert_eq!(rx.recv().unwrap().message, "ready");
}

#[test]
fn test_float_comparison() {
    common::assertions::assert_float_eq(1.0, 1.0000001, 0.001);
}

#[test]
#[should_panic]
fn test_float_comparison_fails() {
    common::assertions::assert_float_eq(1.0, 2.0, 0.001);
}
