//! Property tests for the generation-and-serialization contract.
use bookgen::output::{DatasetOptions, Schema, write_dataset};
use bookgen::titles::ALPHABET;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generate(count: u64, title_length: usize, schema: Schema, seed: u64) -> Vec<u8> {
    let opts = DatasetOptions {
        count,
        title_length,
        schema,
    };
    write_dataset(Vec::new(), StdRng::seed_from_u64(seed), &opts)
        .expect("writing to a Vec cannot fail")
}

proptest! {
    #[test]
    fn title_datasets_hold_the_invariants(
        count in 0u64..48,
        len in 0usize..24,
        seed in any::<u64>(),
    ) {
        let out = generate(count, len, Schema::Title, seed);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        prop_assert_eq!(records.len() as u64, count);
        for record in records {
            let obj = record.as_object().unwrap();
            prop_assert_eq!(obj.len(), 1);
            let title = obj["title"].as_str().unwrap();
            prop_assert_eq!(title.len(), len);
            prop_assert!(title.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn separators_sit_between_records_only(count in 0u64..48, seed in any::<u64>()) {
        let out = generate(count, 5, Schema::Title, seed);
        let text = std::str::from_utf8(&out).unwrap();
        // Titles are alphanumeric, so every "},\n" in the byte stream is a
        // record separator.
        prop_assert_eq!(text.matches("},\n").count() as u64, count.saturating_sub(1));
        if count == 0 {
            prop_assert_eq!(text, "[\n]");
        } else {
            prop_assert!(text.ends_with("\"\n}\n]"), "dataset does not end with a closed record");
        }
    }

    #[test]
    fn catalog_datasets_hold_the_invariants(count in 0u64..32, seed in any::<u64>()) {
        let out = generate(count, 5, Schema::Catalog, seed);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        prop_assert_eq!(records.len() as u64, count);
        for record in records {
            let obj = record.as_object().unwrap();
            prop_assert_eq!(obj.len(), 5);
            for key in ["title", "author", "genre", "year", "rating"] {
                prop_assert!(obj.contains_key(key), "missing key {}", key);
            }
            let year = obj["year"].as_u64().unwrap();
            prop_assert!((1950..=2024).contains(&year));
            let rating = obj["rating"].as_f64().unwrap();
            prop_assert!((0.0..=10.0).contains(&rating));
        }
    }
}
