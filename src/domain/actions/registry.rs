//! Action name lookup and action list parsing.

use std::ops::Deref;

use tracing::warn;

use super::action::Action;
use crate::domain::types::prefix_matches;

/// Maximum number of actions in one list.
pub const MAX_ACTIONS: usize = 20;

/// Look up an action by name.
///
/// The comparison is case-insensitive and covers only the length of each
/// registered name, so trailing characters after a valid name are ignored.
pub fn match_action(name: &str) -> Option<Action> {
    Action::ALL
        .into_iter()
        .find(|action| prefix_matches(name, action.name()))
}

/// Ordered list of resolved actions, at most [`MAX_ACTIONS`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionList(Vec<Action>);

impl ActionList {
    /// Parse a comma separated list of action names.
    ///
    /// Unknown names are logged and dropped. The list is split into at most
    /// [`MAX_ACTIONS`] pieces; the last piece keeps whatever remains.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            warn!("Cannot parse out any actions: {}", input);
            return Self::default();
        }

        let actions = input
            .splitn(MAX_ACTIONS, ',')
            .filter_map(|token| {
                let action = match_action(token);
                if action.is_none() {
                    warn!("Unknown action: {}", token);
                }
                action
            })
            .collect();

        Self(actions)
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }
}

impl Deref for ActionList {
    type Target = [Action];

    fn deref(&self) -> &[Action] {
        &self.0
    }
}

impl FromIterator<Action> for ActionList {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().take(MAX_ACTIONS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_every_canonical_name() {
        for action in Action::ALL {
            assert_eq!(match_action(action.name()), Some(action));
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(match_action("GET_NUMBER_TYPE"), Some(Action::GetNumberType));
        assert_eq!(match_action("Is_Possible_Number"), Some(Action::IsPossibleNumber));
    }

    #[test]
    fn test_match_ignores_trailing_characters() {
        assert_eq!(match_action("FORMAT_extra"), Some(Action::Format));
        assert_eq!(match_action("get_region_codeXYZ"), Some(Action::GetRegionCode));
        assert_eq!(
            match_action("is_possible_number_with_reason"),
            Some(Action::IsPossibleNumberWithReason)
        );
        assert_eq!(
            match_action("format_out_of_country_calling_number"),
            Some(Action::FormatOutOfCountryCallingNumber)
        );
    }

    #[test]
    fn test_match_rejects_short_or_unknown_names() {
        assert_eq!(match_action("form"), None);
        assert_eq!(match_action("get_type"), None);
        assert_eq!(match_action(""), None);
    }

    #[test]
    fn test_parse_drops_unknown_tokens() {
        let list = ActionList::parse("format,bogus,get_number_type,,");
        assert_eq!(list.as_slice(), &[Action::Format, Action::GetNumberType]);
    }

    #[test]
    fn test_parse_empty_or_all_unknown_yields_empty_list() {
        assert!(ActionList::parse("").is_empty());
        assert!(ActionList::parse("nope,nada").is_empty());
    }

    #[test]
    fn test_parse_caps_list_length() {
        let input = vec!["format"; 25].join(",");
        let list = ActionList::parse(&input);
        // The twentieth piece is "format,format,..." and still prefix-matches.
        assert_eq!(list.len(), MAX_ACTIONS);
    }
}
