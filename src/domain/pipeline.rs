//! Action pipeline: parse a number once, run every action against it.

use tracing::debug;

use super::actions::ActionList;
use super::sink::ResultSink;
use super::types::{Configuration, Tag};
use crate::numbering::{Geocoder, NumberingPlan};

/// A single number to inspect, with the configuration to inspect it under.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Raw number exactly as received
    pub number: &'a str,

    /// Resolved configuration for this request
    pub config: &'a Configuration,

    /// Label the results are recorded under
    pub tag: Tag,
}

impl<'a> Request<'a> {
    pub fn new(number: &'a str, config: &'a Configuration, tag: Tag) -> Self {
        Self {
            number,
            config,
            tag,
        }
    }
}

/// Runs action lists against numbering and geocoding backends.
pub struct ActionPipeline<'a, P, G> {
    plan: &'a P,
    geocoder: &'a G,
}

impl<'a, P, G> ActionPipeline<'a, P, G>
where
    P: NumberingPlan,
    G: Geocoder<P::Number>,
{
    pub fn new(plan: &'a P, geocoder: &'a G) -> Self {
        Self { plan, geocoder }
    }

    /// Run `actions` for `request`, reporting into `sink`.
    ///
    /// The raw number is recorded first when the sink stores variables. The
    /// number is parsed once against the request's default region and the
    /// parsed form is dropped when the last action has run.
    pub fn run(&self, request: &Request<'_>, actions: &ActionList, sink: &mut ResultSink<'_>) {
        if let ResultSink::Variables(store) = sink {
            store.set_variable(&request.tag.variable("input"), request.number);
        }

        if actions.is_empty() {
            return;
        }

        let parsed = self.plan.parse(request.number, &request.config.default_region);

        for action in actions.iter() {
            let response = action.evaluate(self.plan, self.geocoder, request, &parsed);

            match sink {
                ResultSink::Variables(store) => {
                    let name = request.tag.variable(action.variable_suffix());
                    store.set_variable(&name, &response);
                    debug!("{} := {}", name, response);
                }
                ResultSink::Stream(stream) => stream.write_line(&response),
                ResultSink::Discard => {}
            }
        }
    }
}
