use crate::{MAX_TRACK_RULES, prelude::*};
use std::{any::Any, collections::BTreeSet};

///
/// Track
///
/// Change-tracking declaration attached to one entity.
///
/// Rule lists hold the paths of externally defined rule types; their shape
/// belongs to the tracking engine. Lists are always present, empty when the
/// declaration does not name any rule of that kind.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Track {
    pub fields: &'static [&'static str],
    pub messages: &'static [&'static str],
    pub contents: &'static [&'static str],
    pub subscribe: bool,
    pub files: bool,
    pub on: TrackEvent,
}

impl Track {
    /// A declaration with every option left at its default.
    pub const DEFAULT: Self = Self {
        fields: &[],
        messages: &[],
        contents: &[],
        subscribe: false,
        files: false,
        on: TrackEvent::Always,
    };

    /// No rules of any kind and no attachment tracking.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.fields.is_empty() && self.messages.is_empty() && self.contents.is_empty() && !self.files
    }

    #[must_use]
    pub const fn fires_on(&self, event: LifecycleEvent) -> bool {
        self.on.fires_on(event)
    }

    #[must_use]
    pub const fn rule_count(&self) -> usize {
        self.fields.len() + self.messages.len() + self.contents.len()
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MacroNode for Track {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ValidateNode for Track {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        validate_rule_list("fields", self.fields, &mut errs);
        validate_rule_list("messages", self.messages, &mut errs);
        validate_rule_list("contents", self.contents, &mut errs);

        errs.result()
    }
}

// Rule references must be non-empty, unique within their list, and bounded.
fn validate_rule_list(list: &str, rules: &[&str], errs: &mut ErrorTree) {
    if rules.len() > MAX_TRACK_RULES {
        errs.add_for(
            list,
            format!(
                "{} rules declared; maximum is {MAX_TRACK_RULES}",
                rules.len()
            ),
        );
    }

    let mut seen = BTreeSet::new();
    for rule in rules {
        if rule.is_empty() {
            errs.add_for(list, "rule path is empty");
        } else if !seen.insert(*rule) {
            errs.add_for(list, format!("duplicate rule '{rule}'"));
        }
    }
}

impl VisitableNode for Track {
    fn route_key(&self) -> String {
        "track".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_declaration_matches_documented_defaults() {
        let track = Track::default();

        assert!(track.fields.is_empty());
        assert!(track.messages.is_empty());
        assert!(track.contents.is_empty());
        assert!(!track.subscribe);
        assert!(!track.files);
        assert_eq!(track.on, TrackEvent::Always);
        assert!(track.is_inert());
    }

    #[test]
    fn files_only_declaration_is_valid_and_not_inert() {
        let track = Track {
            files: true,
            ..Track::DEFAULT
        };

        assert!(track.validate().is_ok());
        assert!(!track.is_inert());
    }

    #[test]
    fn duplicate_rules_are_reported_per_list() {
        let track = Track {
            fields: &["shop::StatusRule", "shop::StatusRule"],
            contents: &["shop::Body", ""],
            ..Track::DEFAULT
        };

        let errs = track.validate().unwrap_err();
        let flat = errs.flatten();

        assert_eq!(flat.len(), 2);
        assert!(flat.contains(&(
            "fields".to_string(),
            "duplicate rule 'shop::StatusRule'".to_string()
        )));
        assert!(flat.contains(&("contents".to_string(), "rule path is empty".to_string())));
    }

    #[test]
    fn same_rule_may_appear_in_different_lists() {
        let track = Track {
            messages: &["shop::Changed"],
            contents: &["shop::Changed"],
            ..Track::DEFAULT
        };

        assert!(track.validate().is_ok());
        assert_eq!(track.rule_count(), 2);
    }

    #[test]
    fn oversized_rule_list_is_reported() {
        static MANY: [&str; MAX_TRACK_RULES + 1] = ["shop::StatusRule"; MAX_TRACK_RULES + 1];

        let track = Track {
            fields: &MANY,
            ..Track::DEFAULT
        };

        let flat = track.validate().unwrap_err().flatten();
        assert!(flat.contains(&(
            "fields".to_string(),
            format!("33 rules declared; maximum is {MAX_TRACK_RULES}")
        )));
    }

    #[test]
    fn create_only_declaration_skips_updates() {
        let track = Track {
            on: TrackEvent::Create,
            ..Track::DEFAULT
        };

        assert!(track.fires_on(LifecycleEvent::Create));
        assert!(!track.fires_on(LifecycleEvent::Update));
    }

    #[test]
    fn empty_lists_serialize_as_empty_arrays() {
        let json = serde_json::to_value(Track::DEFAULT).unwrap();

        assert_eq!(json["fields"], serde_json::json!([]));
        assert_eq!(json["messages"], serde_json::json!([]));
        assert_eq!(json["contents"], serde_json::json!([]));
        assert_eq!(json["on"], "Always");
    }
}
