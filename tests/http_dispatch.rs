mod common;

use std::net::TcpListener;

use common::{ExtractorStub, connector, target};
use skim_request_machine::{DispatchOutcome, dispatch};

#[test]
fn sends_every_date_in_order_over_one_connection() {
    let stub = ExtractorStub::start(vec![200, 200, 200]);
    let dates = ["2020-01-01", "2020-01-05", "2020-01-06"];

    let report = dispatch(&connector(), &target(&stub.address, &dates));

    assert_eq!(report.requests_sent, 3);
    assert_eq!(report.outcome, DispatchOutcome::Completed);
    assert_eq!(stub.connections(), 1);

    let requests = stub.requests();
    assert_eq!(requests.len(), 3);
    for (request, date) in requests.iter().zip(dates) {
        assert_eq!(
            request.request_line,
            "GET /skim/datamart/data-extractor HTTP/1.1"
        );
        assert_eq!(request.ldate.as_deref(), Some(date));
        assert_eq!(request.datamart.as_deref(), Some("datamart_c"));
    }
}

#[test]
fn stops_at_first_non_ok_response() {
    let stub = ExtractorStub::start(vec![200, 500, 200, 200]);
    let dates = ["2020-01-01", "2020-01-02", "2020-01-03", "2020-01-04"];

    let report = dispatch(&connector(), &target(&stub.address, &dates));

    assert_eq!(report.requests_sent, 2);
    assert_eq!(
        report.outcome,
        DispatchOutcome::Stopped {
            date: "2020-01-02".to_string(),
            status: 500
        }
    );
    assert_eq!(stub.requests().len(), 2);
}

#[test]
fn refused_connection_sends_nothing() {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().to_string()
    };

    let report = dispatch(&connector(), &target(&address, &["2020-01-01", "2020-01-02"]));

    assert_eq!(report.requests_sent, 0);
    assert!(matches!(report.outcome, DispatchOutcome::Failed { .. }));
}

#[test]
fn malformed_address_fails_before_any_request() {
    let report = dispatch(&connector(), &target("localhost", &["2020-01-01"]));

    assert_eq!(report.requests_sent, 0);
    match report.outcome {
        DispatchOutcome::Failed { error } => assert!(error.contains("localhost")),
        other => panic!("unexpected outcome: {:?}", other),
    }
}
