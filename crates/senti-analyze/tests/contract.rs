use proptest::prelude::*;

use senti_analyze::{AnalyzerKind, detect_text_columns};
use senti_model::{AnalyzerOptions, CellValue, DetectorOptions, Label, Table};

const ANALYZERS: [AnalyzerKind; 3] = [
    AnalyzerKind::Lexicon,
    AnalyzerKind::Pattern,
    AnalyzerKind::StarModel,
];

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Missing),
        (-1_000_000.0..1_000_000.0).prop_map(CellValue::Number),
        "[a-zA-Z !,\\.']{0,24}".prop_map(CellValue::Text),
    ]
}

fn table() -> impl Strategy<Value = Table> {
    (1usize..4).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(cell(), width..=width), 0..10).prop_map(
            move |rows| {
                let mut table = Table::new((0..width).map(|idx| format!("c{idx}")).collect());
                for row in rows {
                    table.push_row(row);
                }
                table
            },
        )
    })
}

proptest! {
    #[test]
    fn analyzer_outputs_align_with_inputs(
        texts in prop::collection::vec("[a-zA-Z !,\\.']{0,40}", 0..12)
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let options = AnalyzerOptions::default();
        for kind in ANALYZERS {
            let scored = kind.score(&refs, &options).unwrap();
            prop_assert_eq!(scored.polarities.len(), refs.len());
            prop_assert_eq!(scored.labels.len(), refs.len());
            match (kind, &scored.subjectivity) {
                (AnalyzerKind::Pattern, Some(subjectivity)) => {
                    prop_assert_eq!(subjectivity.len(), refs.len());
                    for value in subjectivity {
                        prop_assert!((0.0..=1.0).contains(value));
                    }
                }
                (AnalyzerKind::Pattern, None) => prop_assert!(false, "pattern lost subjectivity"),
                (_, other) => prop_assert!(other.is_none()),
            }
        }
    }

    #[test]
    fn labels_follow_the_threshold_rule(
        texts in prop::collection::vec("[a-zA-Z !,\\.']{0,40}", 0..12)
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let options = AnalyzerOptions::default();
        for kind in ANALYZERS {
            let scored = kind.score(&refs, &options).unwrap();
            for (polarity, label) in scored.polarities.iter().zip(&scored.labels) {
                prop_assert!((-1.0..=1.0).contains(polarity));
                prop_assert_eq!(*label, Label::from_polarity(*polarity, &options.thresholds));
            }
        }
    }

    #[test]
    fn rescoring_is_idempotent(
        texts in prop::collection::vec("[a-zA-Z !,\\.']{0,40}", 0..12)
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let options = AnalyzerOptions::default();
        for kind in ANALYZERS {
            let first = kind.score(&refs, &options).unwrap();
            let second = kind.score(&refs, &options).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn detected_profiles_reference_existing_columns(table in table()) {
        let options = DetectorOptions::default();
        let profiles = detect_text_columns(&table, &options);
        prop_assert!(profiles.len() <= table.column_count());
        let mut last_index = 0usize;
        for profile in &profiles {
            let index = table.column_index(&profile.name);
            prop_assert!(index.is_some(), "profile names a missing column");
            // Ordering follows the table's column order.
            prop_assert!(index.unwrap() >= last_index);
            last_index = index.unwrap();
            prop_assert!(profile.avg_entry_len > options.min_avg_len);
            prop_assert!(profile.unique_entries >= 1);
        }
    }

    #[test]
    fn detection_is_deterministic(table in table()) {
        let options = DetectorOptions::default();
        let first = detect_text_columns(&table, &options);
        let second = detect_text_columns(&table, &options);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn review_table_scenario() {
    let mut table = Table::new(vec!["review".to_string(), "rating".to_string()]);
    for (review, rating) in [
        ("great product", 5.0),
        ("terrible, avoid", 1.0),
        ("it's okay", 3.0),
    ] {
        table.push_row(vec![
            CellValue::Text(review.to_string()),
            CellValue::Number(rating),
        ]);
    }

    let profiles = detect_text_columns(&table, &DetectorOptions::default());
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "review");
    assert!((profiles[0].avg_entry_len - 37.0 / 3.0).abs() < 1e-9);
    assert_eq!(profiles[0].unique_entries, 3);

    let scored = AnalyzerKind::from_choice("1")
        .unwrap()
        .score(
            &["great product", "terrible, avoid", "it's okay"],
            &AnalyzerOptions::default(),
        )
        .unwrap();
    assert_eq!(scored.len(), 3);
    assert!(scored.polarities[0] > 0.0);
    assert_eq!(scored.labels[0], Label::Positive);
    assert!(scored.polarities[1] < 0.0);
    assert_eq!(scored.labels[1], Label::Negative);
}
