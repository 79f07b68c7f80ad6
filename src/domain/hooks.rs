//! Declarative call-initialization hooks.

use tracing::debug;

use super::actions::ActionList;
use super::types::{CallDirection, Configuration, DirectionFilter, Scope, Tag};

/// A rule that fires an action list when a call is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRule {
    /// Exact call context to match, `None` matches any context
    pub context: Option<String>,

    /// Call direction to match
    pub direction: DirectionFilter,

    /// Call legs to inspect
    pub scope: Scope,

    /// Configuration the actions run with
    pub config: Configuration,

    /// Actions to run for each inspected leg
    pub actions: ActionList,
}

impl HookRule {
    /// Rule matching every call, inspecting both legs.
    pub fn new(config: Configuration, actions: ActionList) -> Self {
        Self {
            context: None,
            direction: DirectionFilter::Any,
            scope: Scope::All,
            config,
            actions,
        }
    }

    /// Whether this rule applies to a call in `context` going `direction`.
    pub fn applies_to(&self, context: &str, direction: CallDirection) -> bool {
        if let Some(expected) = &self.context {
            if expected != context {
                debug!("Context {} not covered by hook", context);
                return false;
            }
        }

        if !self.direction.covers(direction) {
            debug!("Direction {:?} not covered by hook", direction);
            return false;
        }

        true
    }
}

/// One pipeline run selected by the hook matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookRun<'a> {
    pub tag: Tag,
    pub config: &'a Configuration,
    pub actions: &'a ActionList,
}

/// Ordered collection of hook rules, evaluated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookSet {
    rules: Vec<HookRule>,
}

impl HookSet {
    pub fn new(rules: Vec<HookRule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[HookRule] {
        &self.rules
    }

    /// Select the pipeline runs for a call.
    ///
    /// Every matching rule contributes, not just the first. For each rule
    /// the caller leg comes before the destination leg.
    pub fn select(&self, context: &str, direction: CallDirection) -> Vec<HookRun<'_>> {
        let mut runs = Vec::new();

        for rule in self.rules.iter().filter(|r| r.applies_to(context, direction)) {
            if rule.scope.includes_caller() {
                runs.push(HookRun {
                    tag: Tag::Caller,
                    config: &rule.config,
                    actions: &rule.actions,
                });
            }
            if rule.scope.includes_destination() {
                runs.push(HookRun {
                    tag: Tag::Destination,
                    config: &rule.config,
                    actions: &rule.actions,
                });
            }
        }

        runs
    }
}
