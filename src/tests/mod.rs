mod msisdnlookup_tests;

use std::sync::{Arc, Once};

use crate::{msisdnlookup::MsisdnLookup, rules::RuleTable};

static ONCE: Once = Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

/// Lookup over the bundled rules.
pub(crate) fn get_lookup() -> MsisdnLookup {
    init_logging();
    let rules = RuleTable::bundled().expect("Bundled rules should be valid");
    MsisdnLookup::new(Arc::new(rules))
}

pub(crate) fn lookup_for_json(json: &str) -> MsisdnLookup {
    init_logging();
    let rules = RuleTable::from_json_str(json).expect("Test rules should be valid");
    MsisdnLookup::new(Arc::new(rules))
}
