pub mod config;
pub mod msisdnlookup;
pub mod rules;
pub mod web;

#[cfg(test)]
mod tests;

pub use msisdnlookup::{
    Confidence, Explain, LookupResponse, MsisdnLookup, NormalizedInput, Validity, normalize,
};
pub use rules::{RuleTable, RulesError};
