//! Trigger dispatch.
//!
//! Three entry points share one pipeline:
//! - `api`: administrative command, answers on a response stream
//! - `app`: call instruction, writes call variables
//! - `on_init`: automatic hooks at call initialization

use tracing::{debug, error};

use super::call::CallProfile;
use crate::config::Settings;
use crate::domain::{
    prefix_matches, ActionList, ActionPipeline, ConfigResolver, HookError, Request,
    ResponseStream, ResultSink, Tag, VariableStore,
};
use crate::numbering::{CountryNameGeocoder, Geocoder, LibPhonenumber, NumberingPlan};

/// Argument synopsis shown in usage errors.
pub const USAGE: &str = "<action(s)> <number> [argument(s)]";

/// Number keyword selecting both call legs.
const ALL_KEYWORD: &str = "all";

/// Routes triggers to the action pipeline.
pub struct Dispatcher<P = LibPhonenumber, G = CountryNameGeocoder> {
    settings: Settings,
    plan: P,
    geocoder: G,
}

impl Dispatcher {
    /// Dispatcher backed by the bundled numbering metadata and country names.
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(settings, LibPhonenumber::new(), CountryNameGeocoder::new())
    }
}

impl<P, G> Dispatcher<P, G>
where
    P: NumberingPlan,
    G: Geocoder<P::Number>,
{
    pub fn new(settings: Settings, plan: P, geocoder: G) -> Self {
        Self {
            settings,
            plan,
            geocoder,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether call initialization has anything to do.
    pub fn has_hooks(&self) -> bool {
        !self.settings.hooks.is_empty()
    }

    fn pipeline(&self) -> ActionPipeline<'_, P, G> {
        ActionPipeline::new(&self.plan, &self.geocoder)
    }

    /// Run an administrative command: `<actions> <number> [overrides]`.
    ///
    /// Writes one line per action to `stream`. Without a number or without
    /// a single recognised action, writes the usage line instead.
    pub fn api(&self, cmd: &str, stream: &mut dyn ResponseStream) -> Result<(), HookError> {
        match self.prepare_api(cmd) {
            Some((actions, number, overrides)) => {
                let config = ConfigResolver::resolve(&self.settings.defaults, overrides.as_deref());
                let request = Request::new(&number, &config, Tag::Number);
                self.pipeline()
                    .run(&request, &actions, &mut ResultSink::Stream(stream));
                Ok(())
            }
            None => {
                let err = HookError::Usage(USAGE);
                error!("{}", err);
                stream.write_line(&format!("-ERR: {}", err));
                Err(err)
            }
        }
    }

    fn prepare_api(&self, cmd: &str) -> Option<(ActionList, String, Option<String>)> {
        let mut words = split_words(cmd)?.into_iter();
        let (Some(actions), Some(number)) = (words.next(), words.next()) else {
            return None;
        };

        let actions = ActionList::parse(&actions);
        if actions.is_empty() {
            return None;
        }

        Some((actions, number, words.next()))
    }

    /// Run a call instruction: `<actions> [number|caller|destination|all] [overrides]`.
    ///
    /// Results go to `vars`. With no number the caller and destination
    /// numbers of `call` are both inspected. An action list that resolves to
    /// nothing does nothing.
    pub fn app(
        &self,
        data: &str,
        call: &CallProfile,
        vars: &mut dyn VariableStore,
    ) -> Result<(), HookError> {
        let Some(words) = split_words(data).filter(|w| !w.is_empty()) else {
            let err = HookError::Usage(USAGE);
            error!("{}", err);
            return Err(err);
        };

        let actions = ActionList::parse(&words[0]);
        if actions.is_empty() {
            debug!("No actions to run for: {}", data);
            return Ok(());
        }

        let targets = select_numbers(words.get(1).map(String::as_str), call);
        let config =
            ConfigResolver::resolve(&self.settings.defaults, words.get(2).map(String::as_str));
        let pipeline = self.pipeline();

        for (tag, number) in targets {
            if number.is_empty() {
                debug!("No {} number on call, skipping", tag);
                continue;
            }
            let request = Request::new(number, &config, tag);
            pipeline.run(&request, &actions, &mut ResultSink::Variables(&mut *vars));
        }

        Ok(())
    }

    /// Run every hook that matches `call`.
    pub fn on_init(&self, call: &CallProfile, vars: &mut dyn VariableStore) {
        if !self.has_hooks() {
            return;
        }

        let pipeline = self.pipeline();
        for run in self.settings.hooks.select(&call.context, call.direction) {
            let number = match run.tag {
                Tag::Caller => &call.caller_id_number,
                _ => &call.destination_number,
            };
            let request = Request::new(number, run.config, run.tag);
            pipeline.run(&request, run.actions, &mut ResultSink::Variables(&mut *vars));
        }
    }
}

/// Split trigger input into words, honouring quotes.
///
/// Dial strings such as `#31#6172531000` are ordinary words here, so `#`
/// never starts a comment.
fn split_words(input: &str) -> Option<Vec<String>> {
    match shell_words::split(&escape_hashes(input)) {
        Ok(words) => Some(words),
        Err(e) => {
            error!("Failed to split '{}': {}", input, e);
            None
        }
    }
}

/// Backslash every unquoted `#` that begins a word.
fn escape_hashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;

    for c in input.chars() {
        let literal = escaped;
        escaped = false;

        if let Some(q) = quote {
            match c {
                '\\' if q == '"' && !literal => escaped = true,
                _ if c == q && !literal => quote = None,
                _ => {}
            }
            word_start = false;
            out.push(c);
            continue;
        }

        if !literal {
            match c {
                '\\' => escaped = true,
                '\'' | '"' => quote = Some(c),
                '#' if word_start => out.push('\\'),
                _ => {}
            }
        }
        word_start = !literal && matches!(c, ' ' | '\t' | '\n');
        out.push(c);
    }

    out
}

/// Numbers a call instruction inspects, in run order.
fn select_numbers<'a>(token: Option<&'a str>, call: &'a CallProfile) -> Vec<(Tag, &'a str)> {
    let caller = (Tag::Caller, call.caller_id_number.as_str());
    let destination = (Tag::Destination, call.destination_number.as_str());

    match token {
        None => vec![caller, destination],
        Some(t) if prefix_matches(t, Tag::Caller.as_str()) => vec![caller],
        Some(t) if prefix_matches(t, Tag::Destination.as_str()) => vec![destination],
        Some(t) if prefix_matches(t, ALL_KEYWORD) => vec![caller, destination],
        Some(t) => vec![(Tag::Number, t)],
    }
}
