use clearsky::constants::{COMPARISON_EPSILON, VERSION};
use clearsky::options::{self, Options};
use clearsky::validation::OptionsDiagnostic;

mod common;
use common::{assert_options_close, sample_options};

#[test]
fn test_default_record_lifecycle() {
    let mut options = Options::new();
    assert!(!options.associated());
    assert!(options.is_valid());

    options.create(5);
    assert!(options.associated());
    assert_eq!(options.n_channels, 5);

    options.destroy();
    options.destroy();
    assert!(!options.associated());
    assert_eq!(options.n_channels, 0);
}

#[test]
fn test_validation_scenarios() {
    // No allocation but emissivity use requested.
    let mut options = Options::default();
    options.use_emissivity = true;
    assert!(!options.is_valid());
    assert_eq!(options.diagnose(), vec![OptionsDiagnostic::NotAllocated]);

    // Allocated with one out-of-range element.
    let mut options = sample_options(5);
    options.emissivity.as_mut().unwrap()[4] = 1.5;
    assert!(!options.is_valid());
    assert_eq!(
        options.diagnose(),
        vec![OptionsDiagnostic::EmissivityOutOfRange]
    );

    // Back in range.
    options.emissivity.as_mut().unwrap()[4] = 1.0;
    assert!(options.is_valid());
}

#[test]
fn test_equality_scenarios() {
    let x = sample_options(3);
    let mut y = sample_options(3);
    assert!(x.equivalent(&y));
    assert!(y.equivalent(&x));
    assert_options_close(&x, &y, COMPARISON_EPSILON);

    y.emissivity.as_mut().unwrap()[0] += 1.0e-4;
    assert!(!x.equivalent(&y));

    // Unallocated vs allocated with the use flags off: allocation state
    // participates in the comparison.
    let unallocated = Options::default();
    let mut allocated = Options::default();
    allocated.create(3);
    assert!(!unallocated.equivalent(&allocated));
}

#[test]
fn test_batch_operations_across_profiles() {
    let mut profiles = vec![Options::default(), Options::default(), Options::default()];

    options::create_all(&mut profiles, 4);
    assert_eq!(options::associated_all(&profiles), vec![true, true, true]);

    profiles[2].use_emissivity = true;
    profiles[2].emissivity.as_mut().unwrap()[0] = -0.5;
    assert_eq!(
        clearsky::validation::valid_all(&profiles),
        vec![true, true, false]
    );

    options::destroy_all(&mut profiles);
    assert_eq!(options::associated_all(&profiles), vec![false, false, false]);
}

#[test]
fn test_serde_round_trip_preserves_allocation() {
    let options = sample_options(4);

    let serialized = serde_json::to_string(&options).unwrap();
    let deserialized: Options = serde_json::from_str(&serialized).unwrap();

    assert!(deserialized.associated());
    assert_eq!(deserialized.n_channels, 4);
    assert!(options.equivalent(&deserialized));
}

#[test]
fn test_version_string() {
    assert!(VERSION.starts_with("clearsky"));
}
