//! Serialization boundary: artifact schema, fixed literal content, and
//! the two-path write contract.

use chrono::NaiveDate;
use opsdash_core::{
    dataset::{generate_sample_data, Dataset, TABLE_NAMES},
    export::{dataset_to_json, write_artifact, LEGACY_PATH, PRIMARY_PATH},
    rng::SampleRng,
};
use serde_json::Value;

fn build(seed: u64) -> Dataset {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let mut rng = SampleRng::from_seed(seed);
    generate_sample_data(today, &mut rng)
}

fn artifact(seed: u64) -> Value {
    dataset_to_json(&build(seed)).expect("serializable dataset")
}

#[test]
fn artifact_has_every_table_plus_summary() {
    let root = artifact(1);
    let obj = root.as_object().expect("object root");

    assert_eq!(obj.len(), TABLE_NAMES.len() + 1);
    for name in TABLE_NAMES {
        assert!(obj.contains_key(name), "missing table '{name}'");
        assert!(obj[name].is_array(), "table '{name}' must be a JSON array");
    }
    assert!(obj["summary"].is_object(), "summary must be a scalar object");
}

#[test]
fn dates_render_as_plain_iso_strings() {
    let root = artifact(2);
    let first = &root["customers_monthly"][0];

    assert_eq!(first["date"], "2023-01-31");
    assert!(first["total_customers"].is_i64());
    assert!(first["new_customers"].is_i64());
}

#[test]
fn static_tables_match_their_fixed_literals() {
    let root = artifact(3);

    let product = root["product_df"].as_array().expect("array");
    assert_eq!(product.len(), 3);
    assert_eq!(product[0]["product"], "MUTUAL FUND");
    assert_eq!(product[0]["customers"], 2800);
    assert_eq!(product[0]["income"], 2041976.21);
    assert_eq!(product[1]["product"], "FD");
    assert_eq!(product[1]["trades"], 1564498.0);
    assert_eq!(product[2]["product"], "PORTFOLIO");
    assert_eq!(product[2]["trades"], 3369000.0);

    let aging = root["payment_aging_df"].as_array().expect("array");
    assert_eq!(aging.len(), 4);
    assert_eq!(aging[0]["range"], "0-30 Days");
    assert_eq!(aging[0]["amount"], 2679);
    assert_eq!(aging[1]["amount"], 0);
    assert_eq!(aging[2]["range"], "61-90 Days");
    assert_eq!(aging[2]["amount"], 3669666);
    assert_eq!(aging[3]["amount"], 36805);

    let tickets = root["tickets_aging_df"].as_array().expect("array");
    assert_eq!(tickets.len(), 4);
    assert_eq!(tickets[0]["range"], "0-15 days");
    assert_eq!(tickets[0]["count"], 0);
    assert_eq!(tickets[3]["range"], "45+ days");
    assert_eq!(tickets[3]["count"], 29);
}

#[test]
fn prediction_tables_cover_the_three_year_grid() {
    let root = artifact(4);

    for key in [
        "transaction_prediction_df",
        "client_prediction_df",
        "events_details_df",
        "entitlements_prediction_df",
    ] {
        let rows = root[key].as_array().expect("array");
        assert_eq!(rows.len(), 9, "'{key}' should have 9 rows");
        assert_eq!(rows[0]["month"], "Sep");
        assert_eq!(rows[0]["year"], "2023");
        assert_eq!(rows[4]["month"], "Oct");
        assert_eq!(rows[4]["year"], "2024");
        assert_eq!(rows[8]["month"], "Nov");
        assert_eq!(rows[8]["year"], "2025");
    }

    assert_eq!(root["transaction_prediction_df"][1]["count"], 3.71);
    assert_eq!(root["client_prediction_df"][7]["count"], 49.61);
    assert_eq!(root["entitlements_prediction_df"][8]["count"], 35.34);
    // Event counts stay integers, not floats.
    assert!(root["events_details_df"][0]["count"].is_i64());
    assert_eq!(root["events_details_df"][0]["count"], 240);
}

#[test]
fn summary_totals_are_constant_across_runs() {
    for seed in [5, 6, 7] {
        let summary = &artifact(seed)["summary"];
        assert_eq!(summary["total_customers"], 10000);
        assert_eq!(summary["total_income"], 5414825.28);
        assert_eq!(summary["total_trades"], 5002698);
        assert_eq!(summary["open_events"], 38);
        assert_eq!(summary["open_entitlements"], 3709150);
    }
}

#[test]
fn independent_runs_share_schema_but_not_series_values() {
    let a = artifact(10);
    let b = artifact(11);
    let (a, b) = (a.as_object().expect("object"), b.as_object().expect("object"));

    let keys_a: Vec<&String> = a.keys().collect();
    let keys_b: Vec<&String> = b.keys().collect();
    assert_eq!(keys_a, keys_b, "top-level key sets differ between runs");

    for (name, table_a) in a {
        let table_b = &b[name];
        if let (Some(rows_a), Some(rows_b)) = (table_a.as_array(), table_b.as_array()) {
            assert_eq!(rows_a.len(), rows_b.len(), "row count differs for '{name}'");
            for (ra, rb) in rows_a.iter().zip(rows_b) {
                let fields_a: Vec<&String> = ra.as_object().expect("row object").keys().collect();
                let fields_b: Vec<&String> = rb.as_object().expect("row object").keys().collect();
                assert_eq!(fields_a, fields_b, "field names differ for '{name}'");
            }
        }
    }

    // Static and prediction content is identical; drawn series are not.
    assert_eq!(a["product_df"], b["product_df"]);
    assert_eq!(a["transaction_prediction_df"], b["transaction_prediction_df"]);
    assert_ne!(
        a["customers_monthly"], b["customers_monthly"],
        "differently seeded runs produced identical series values"
    );
}

#[test]
fn round_trip_preserves_structure_and_values() {
    let root = artifact(12);
    let body = serde_json::to_string_pretty(&root).expect("pretty print");
    let parsed: Value = serde_json::from_str(&body).expect("valid JSON");
    assert_eq!(parsed, root);
}

#[test]
fn written_files_are_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = artifact(13);

    let (primary, legacy) = write_artifact(&root, dir.path()).expect("write artifact");
    assert_eq!(primary, dir.path().join(PRIMARY_PATH));
    assert_eq!(legacy, dir.path().join(LEGACY_PATH));

    let body_primary = std::fs::read(&primary).expect("read primary");
    let body_legacy = std::fs::read(&legacy).expect("read legacy");
    assert_eq!(
        body_primary, body_legacy,
        "primary and legacy artifacts must be byte-identical"
    );

    let parsed: Value = serde_json::from_slice(&body_primary).expect("valid JSON on disk");
    assert_eq!(parsed, root);
}

#[test]
fn write_fails_when_the_target_directory_cannot_be_created() {
    let dir = tempfile::tempdir().expect("temp dir");
    // A file where the `public` directory should be blocks create_dir_all.
    std::fs::write(dir.path().join("public"), b"not a directory").expect("blocker file");

    let result = write_artifact(&artifact(14), dir.path());
    assert!(result.is_err(), "write into a blocked path must fail");
}
