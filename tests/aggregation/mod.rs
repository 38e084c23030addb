//! Integration tests for the transaction fold

use claims::{assert_matches, assert_ok, assert_some};
use rust_decimal_macros::dec;
use store_report_rs::{Aggregation, Error, ProductId, StoreId, aggregate};

#[test]
fn single_transaction() {
    // Arrange
    let input = "t1|2020-09-01|P100|LYON|3|12.5\n";

    // Act
    let aggregation = assert_ok!(aggregate(input.as_bytes(), 1_000_000));

    // Assert
    assert_eq!(aggregation.store_count(), 1);
    let state = assert_some!(aggregation.get(&StoreId::new("LYON")));
    assert_eq!(state.revenue(), dec!(12.5));
    assert_eq!(state.product_count(&ProductId::new("P100")), 1);
}

#[test]
fn repeated_product_accumulates_revenue_and_count() {
    // the price of the line that first creates a store counts exactly once
    let input = "\
a|b|P1|S1|c|10.0
a|b|P1|S1|c|5.0
";

    let aggregation = assert_ok!(aggregate(input.as_bytes(), 1_000_000));

    let state = assert_some!(aggregation.get(&StoreId::new("S1")));
    assert_eq!(state.revenue(), dec!(15.0));
    assert_eq!(state.product_count(&ProductId::new("P1")), 2);
    assert_eq!(state.distinct_products(), 1);
}

#[test]
fn stores_accumulate_independently() {
    let input = "\
a|b|P1|S1|c|1.0
a|b|P2|S2|c|2.0
a|b|P3|S1|c|4.0
";

    let aggregation = assert_ok!(aggregate(input.as_bytes(), 1_000_000));

    assert_eq!(aggregation.store_count(), 2);
    let s1 = assert_some!(aggregation.get(&StoreId::new("S1")));
    let s2 = assert_some!(aggregation.get(&StoreId::new("S2")));
    assert_eq!(s1.revenue(), dec!(5.0));
    assert_eq!(s2.revenue(), dec!(2.0));
    assert_eq!(s1.distinct_products(), 2);
    assert_eq!(s2.distinct_products(), 1);
}

#[test]
fn stores_iterate_in_encounter_order() {
    let input = "\
a|b|P1|S3|c|1.0
a|b|P2|S1|c|1.0
a|b|P3|S2|c|1.0
a|b|P4|S1|c|1.0
";

    let aggregation = assert_ok!(aggregate(input.as_bytes(), 1_000_000));

    let order: Vec<&str> = aggregation.stores().map(|(id, _)| id.as_str()).collect();
    assert_eq!(order, vec!["S3", "S1", "S2"]);
}

#[test]
fn batch_size_does_not_change_the_result() {
    let input = "\
a|b|P1|S1|c|1.5
a|b|P2|S2|c|2.5
a|b|P1|S1|c|3.5
a|b|P3|S2|c|4.5
a|b|P2|S1|c|5.5
";

    // one line per batch vs everything in one batch
    let tiny = assert_ok!(aggregate(input.as_bytes(), 1));
    let huge = assert_ok!(aggregate(input.as_bytes(), 1_000_000));

    assert_aggregations_equal(&tiny, &huge);
}

#[test]
fn malformed_record_aborts_the_run() {
    let input = "\
a|b|P1|S1|c|1.0
a|b|P1|S1|1.0
";

    let result = aggregate(input.as_bytes(), 1_000_000);

    assert_matches!(
        result,
        Err(Error::MalformedRecord { record: 2, fields: 5 })
    );
}

#[test]
fn unparseable_price_aborts_the_run() {
    let input = "\
a|b|P1|S1|c|1.0
a|b|P2|S1|c|2.0
a|b|P3|S1|c|not-a-price
";

    let result = aggregate(input.as_bytes(), 1_000_000);

    assert_matches!(
        result,
        Err(Error::PriceParse { record: 3, value }) if value == "not-a-price"
    );
}

#[test]
fn record_numbering_spans_batches() {
    // four one-line batches; the bad line is still reported as record 4
    let input = "\
a|b|P1|S1|c|1.0
a|b|P2|S1|c|1.0
a|b|P3|S1|c|1.0
a|b|P4|S1|c|bad
";

    let result = aggregate(input.as_bytes(), 1);

    assert_matches!(result, Err(Error::PriceParse { record: 4, .. }));
}

fn assert_aggregations_equal(left: &Aggregation, right: &Aggregation) {
    assert_eq!(left.record_count(), right.record_count());
    assert_eq!(left.store_count(), right.store_count());

    for ((left_id, left_state), (right_id, right_state)) in left.stores().zip(right.stores()) {
        assert_eq!(left_id, right_id);
        assert_eq!(left_state.revenue(), right_state.revenue());
        assert_eq!(
            left_state.products().collect::<Vec<_>>(),
            right_state.products().collect::<Vec<_>>()
        );
    }
}
