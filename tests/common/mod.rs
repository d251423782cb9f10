use approx::assert_relative_eq;
use clearsky::options::Options;

/// Builds an allocated record with user emissivities enabled and a simple
/// in-range ramp in both per-channel arrays.
pub fn sample_options(n_channels: usize) -> Options {
    let mut options = Options::default();
    options.create(n_channels);
    options.use_emissivity = true;
    options.use_direct_reflectivity = true;

    let step = 1.0 / n_channels as f64;
    let emissivity = options.emissivity.as_mut().unwrap();
    for (i, value) in emissivity.iter_mut().enumerate() {
        *value = step * (i + 1) as f64;
    }
    let direct_reflectivity = options.direct_reflectivity.as_mut().unwrap();
    for (i, value) in direct_reflectivity.iter_mut().enumerate() {
        *value = 1.0 - step * (i + 1) as f64;
    }
    options
}

/// Asserts that every tolerance-compared field of two records matches.
#[allow(dead_code)]
pub fn assert_options_close(actual: &Options, expected: &Options, epsilon: f64) {
    assert_relative_eq!(
        actual.aircraft_pressure,
        expected.aircraft_pressure,
        epsilon = epsilon
    );
    if let (Some(a), Some(b)) = (&actual.emissivity, &expected.emissivity) {
        assert_relative_eq!(a, b, epsilon = epsilon);
    }
    if let (Some(a), Some(b)) = (&actual.direct_reflectivity, &expected.direct_reflectivity) {
        assert_relative_eq!(a, b, epsilon = epsilon);
    }
    assert_relative_eq!(actual.scan_input, expected.scan_input, epsilon = epsilon);
    assert_relative_eq!(
        actual.zeeman_input,
        expected.zeeman_input,
        epsilon = epsilon
    );
}
