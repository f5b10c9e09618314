use ledger_core::{
    init,
    ledger::{Ledger, Period, Record, RecordKind},
};

#[test]
fn ledger_session_smoke() {
    init();

    let mut ledger = Ledger::new("SmokeTest");
    let loan = ledger.append(Record::new("Bike", RecordKind::Loan, 42.0, "Pending"));

    let summary = ledger.summarize(Period::Monthly);
    assert_eq!(summary.net_savings, 0.0);
    assert!(ledger.record(loan).is_some());
    assert_eq!(ledger.record(loan).unwrap().score.label(), "740");
}
