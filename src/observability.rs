use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("mindful.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("mindful.client.request_errors");
pub(crate) static CLIENT_TIMEOUTS: Counter = Counter::new("mindful.client.timeouts");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("mindful.client.request_duration_seconds");

pub(crate) static SESSION_TURNS: Counter = Counter::new("mindful.session.turns");
pub(crate) static SESSION_GUIDANCE_TURNS: Counter =
    Counter::new("mindful.session.guidance_turns");
pub(crate) static SESSION_RECOVERED_TURNS: Counter =
    Counter::new("mindful.session.recovered_turns");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_counter(&CLIENT_TIMEOUTS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_GUIDANCE_TURNS);
    collector.register_counter(&SESSION_RECOVERED_TURNS);
}
