//! Property tests for make-style freshness.

use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use ojdrive::domain::value_objects::Freshness;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A rebuild is needed exactly when the source is newer than the artifact.
    #[test]
    fn property_rebuild_iff_source_newer(
        source_secs in 0u64..1_000_000,
        artifact_secs in 0u64..1_000_000,
    ) {
        let source = SystemTime::UNIX_EPOCH + Duration::from_secs(source_secs);
        let artifact = SystemTime::UNIX_EPOCH + Duration::from_secs(artifact_secs);

        let freshness = Freshness::from_times(source, Some(artifact));
        prop_assert_eq!(freshness.needs_build(), source_secs > artifact_secs);
    }

    /// PROPERTY: A missing artifact always needs a build.
    #[test]
    fn property_missing_artifact_always_builds(source_secs in 0u64..1_000_000) {
        let source = SystemTime::UNIX_EPOCH + Duration::from_secs(source_secs);
        prop_assert_eq!(Freshness::from_times(source, None), Freshness::Missing);
    }
}
