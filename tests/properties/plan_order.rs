//! Property tests for plan construction.

use proptest::prelude::*;
use std::path::Path;

use buildprep::domain::plan::{CLEAR_FLAG, NO_INPUT_FLAG};
use buildprep::{BuildPlan, Config, Step};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9./_-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever the configuration, install runs before collect
    /// and the manifest directly follows the installer arguments.
    #[test]
    fn property_install_precedes_collect(
        program in token(),
        python in token(),
        manifest in token(),
        extra_args in proptest::collection::vec(token(), 0..3),
        clear in any::<bool>(),
        no_input in any::<bool>(),
    ) {
        let mut config = Config::default();
        config.install.program = program.clone();
        config.install.manifest = manifest.clone().into();
        config.install.extra_args = extra_args.clone();
        config.collect.python = python.clone();
        config.collect.clear = clear;
        config.collect.no_input = no_input;

        let plan = BuildPlan::from_config(&config, Path::new("/srv/app"), &[]);
        let steps: Vec<Step> = plan.steps().iter().map(|c| c.step).collect();
        prop_assert_eq!(steps, vec![Step::Install, Step::Collect]);

        let install = &plan.steps()[0];
        prop_assert_eq!(&install.program, &program);
        let mut expected = config.install.args.clone();
        expected.push(manifest);
        expected.extend(extra_args);
        prop_assert_eq!(&install.args, &expected);

        let collect = &plan.steps()[1];
        prop_assert_eq!(&collect.program, &python);
        prop_assert_eq!(collect.args.contains(&CLEAR_FLAG.to_string()), clear);
        prop_assert_eq!(collect.args.contains(&NO_INPUT_FLAG.to_string()), no_input);
    }
}
