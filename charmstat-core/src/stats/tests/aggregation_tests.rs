use super::test_helpers::{counts, record, sample_records};
use crate::matcher::Fields;
use crate::record::{Record, RecordError, Severity};
use crate::stats::{MessageId, SeverityCounts, StatsAggregator};

fn as_vec(c: &SeverityCounts) -> Vec<(Severity, u64)> {
    c.iter().collect()
}

fn assert_global_sum(agg: &StatsAggregator) {
    for severity in Severity::ALL {
        let per_charm: u64 = agg.charms().map(|(_, p)| p.all().get(severity)).sum();
        assert_eq!(agg.global().all().get(severity), per_charm, "{severity}");
    }
}

fn assert_duplicates_bounded(agg: &StatsAggregator) {
    let pairs = std::iter::once(agg.global()).chain(agg.charms().map(|(_, p)| p));
    for pair in pairs {
        for severity in Severity::ALL {
            assert!(pair.duplicates().get(severity) <= pair.all().get(severity));
        }
    }
}

//-----------------------------------------------------------------------------
// Single records
//-----------------------------------------------------------------------------

#[test]
fn new_aggregator_is_empty() {
    // Act
    let agg = StatsAggregator::new();

    // Assert
    assert_eq!(as_vec(agg.global().all()), counts(0, 0, 0, 0));
    assert_eq!(as_vec(agg.global().duplicates()), counts(0, 0, 0, 0));
    assert_eq!(agg.charm_count(), 0);
    assert!(agg.seen_messages().is_empty());
}

#[test]
fn single_record_updates_global_and_charm() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let rec = &sample_records()[0];

    // Act
    agg.observe(rec);

    // Assert
    assert_eq!(as_vec(agg.global().all()), counts(1, 0, 0, 0));
    assert_eq!(as_vec(agg.global().duplicates()), counts(0, 0, 0, 0));

    let charm = agg.charm("juju.network").unwrap();
    assert_eq!(charm, agg.global());

    assert_eq!(agg.seen_messages().len(), 1);
    assert!(agg.seen_messages().contains(&MessageId::of(rec)));
}

#[test]
fn unknown_charm_is_absent() {
    // Arrange
    let mut agg = StatsAggregator::new();
    agg.observe(&sample_records()[0]);

    // Act / Assert
    assert!(agg.charm("juju.api").is_none());
}

#[test]
fn first_occurrence_is_not_a_duplicate() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let a = record("unit-1", Severity::Debug, "juju.cmd", "hello");

    // Act
    agg.observe(&a);
    agg.observe(&a);

    // Assert
    assert_eq!(agg.global().all().get(Severity::Debug), 2);
    assert_eq!(agg.global().duplicates().get(Severity::Debug), 1);
}

#[test]
fn same_severity_in_different_charms_is_not_a_duplicate() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let a = record("unit-1", Severity::Info, "juju.network", "same text");
    let b = record("unit-1", Severity::Info, "juju.api", "same text");

    // Act
    agg.observe(&a);
    agg.observe(&b);

    // Assert
    assert_eq!(agg.global().all().get(Severity::Info), 2);
    assert_eq!(agg.global().duplicates().total(), 0);
    assert_eq!(agg.charm("juju.network").unwrap().all().get(Severity::Info), 1);
    assert_eq!(agg.charm("juju.api").unwrap().all().get(Severity::Info), 1);
}

#[test]
fn unit_and_timestamp_do_not_affect_duplicate_detection() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let mut a = record("unit-1", Severity::Error, "juju.api", "boom");
    let mut b = a.clone();
    b.unit = "unit-2".into();
    b.hour = "12".into();
    a.seconds = "59".into();

    // Act
    agg.observe(&a);
    agg.observe(&b);

    // Assert
    assert_eq!(agg.global().duplicates().get(Severity::Error), 1);
    assert_eq!(agg.seen_messages().len(), 1);
}

#[test]
fn severity_is_part_of_message_identity() {
    // Arrange
    let mut agg = StatsAggregator::new();

    // Act
    agg.observe(&record("u", Severity::Info, "c", "m"));
    agg.observe(&record("u", Severity::Warning, "c", "m"));

    // Assert
    assert_eq!(agg.global().duplicates().total(), 0);
    assert_eq!(agg.seen_messages().len(), 2);
}

#[test]
fn message_id_display_joins_fields() {
    let id = MessageId::of(&record("u", Severity::Warning, "juju.api", "lost"));
    assert_eq!(id.to_string(), "WARNING juju.api lost");
}

//-----------------------------------------------------------------------------
// Batches
//-----------------------------------------------------------------------------

#[test]
fn batch_splits_counts_per_charm() {
    // Arrange
    let mut agg = StatsAggregator::new();

    // Act
    let observed = agg
        .observe_batch(sample_records().into_iter().map(Ok::<_, RecordError>))
        .unwrap();

    // Assert
    assert_eq!(observed, 3);
    assert_eq!(as_vec(agg.global().all()), counts(1, 0, 1, 1));
    assert_eq!(as_vec(agg.global().duplicates()), counts(0, 0, 0, 0));
    assert_eq!(agg.charm_count(), 2);
    assert_eq!(
        as_vec(agg.charm("juju.network").unwrap().all()),
        counts(1, 0, 0, 1)
    );
    assert_eq!(
        as_vec(agg.charm("juju.api").unwrap().all()),
        counts(0, 0, 1, 0)
    );
    assert_global_sum(&agg);
}

#[test]
fn batch_with_repeat_counts_duplicate() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let mut records = sample_records();
    records.push(records[0].clone());

    // Act
    agg.observe_batch(records.into_iter().map(Ok::<_, RecordError>))
        .unwrap();

    // Assert
    assert_eq!(as_vec(agg.global().all()), counts(2, 0, 1, 1));
    assert_eq!(as_vec(agg.global().duplicates()), counts(1, 0, 0, 0));

    let network = agg.charm("juju.network").unwrap();
    assert_eq!(as_vec(network.all()), counts(2, 0, 0, 1));
    assert_eq!(as_vec(network.duplicates()), counts(1, 0, 0, 0));

    let api = agg.charm("juju.api").unwrap();
    assert_eq!(as_vec(api.all()), counts(0, 0, 1, 0));
    assert_eq!(api.duplicates().total(), 0);

    assert_eq!(agg.seen_messages().len(), 3);
}

#[test]
fn batch_stops_at_first_error_and_keeps_earlier_records() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let records = sample_records();
    let items: Vec<Result<Record, RecordError>> = vec![
        Ok(records[0].clone()),
        Err(RecordError::MissingField { field: "message" }),
        Ok(records[1].clone()),
    ];

    // Act
    let err = agg.observe_batch(items).unwrap_err();

    // Assert
    assert_eq!(err, RecordError::MissingField { field: "message" });
    assert_eq!(as_vec(agg.global().all()), counts(1, 0, 0, 0));
    assert_eq!(agg.charm_count(), 1);
}

#[test]
fn charms_keep_first_seen_order() {
    // Arrange
    let mut agg = StatsAggregator::new();

    // Act
    for charm in ["zeta", "alpha", "zeta", "mid"] {
        agg.observe(&record("u", Severity::Info, charm, charm));
    }

    // Assert
    let names: Vec<&str> = agg.charms().map(|(n, _)| n).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn invariants_hold_while_processing() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let messages = ["a", "b", "a", "c", "a", "b"];
    let charms = ["x", "y", "x"];

    // Act / Assert
    for (i, message) in messages.iter().enumerate() {
        let severity = Severity::ALL[i % Severity::ALL.len()];
        for charm in charms {
            agg.observe(&record("u", severity, charm, message));
            assert_global_sum(&agg);
            assert_duplicates_bounded(&agg);
        }
    }
}

#[test]
fn duplicates_equal_repeats_beyond_first_occurrence() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let stream = [
        ("c1", "m1"),
        ("c1", "m1"),
        ("c1", "m1"),
        ("c2", "m1"),
        ("c1", "m2"),
        ("c2", "m1"),
    ];

    // Act
    for (charm, message) in stream {
        agg.observe(&record("u", Severity::Error, charm, message));
    }

    // Assert
    // c1/m1 x3 -> 2 repeats, c2/m1 x2 -> 1 repeat, c1/m2 x1 -> 0
    assert_eq!(agg.global().all().get(Severity::Error), 6);
    assert_eq!(agg.global().duplicates().get(Severity::Error), 3);
    assert_eq!(agg.charm("c1").unwrap().duplicates().get(Severity::Error), 2);
    assert_eq!(agg.charm("c2").unwrap().duplicates().get(Severity::Error), 1);
}

//-----------------------------------------------------------------------------
// Raw fields
//-----------------------------------------------------------------------------

#[test]
fn observe_fields_rejects_incomplete_entry() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let fields: Fields = [("severity_level", "INFO"), ("charm_name", "juju.api")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    // Act
    let err = agg.observe_fields(&fields).unwrap_err();

    // Assert
    assert_eq!(err, RecordError::MissingField { field: "unit" });
    assert_eq!(agg.global().all().total(), 0);
    assert!(agg.seen_messages().is_empty());
}

#[test]
fn observe_fields_accepts_complete_entry() {
    // Arrange
    let mut agg = StatsAggregator::new();
    let fields: Fields = [
        ("unit", "machine-0"),
        ("hour", "01"),
        ("minutes", "56"),
        ("seconds", "55"),
        ("severity_level", "WARNING"),
        ("charm_name", "juju.cmd"),
        ("message", "running jujud"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    // Act
    agg.observe_fields(&fields).unwrap();

    // Assert
    assert_eq!(agg.charm("juju.cmd").unwrap().all().get(Severity::Warning), 1);
}
