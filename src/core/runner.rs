use crate::core::greeter::Greeter;
use crate::core::samples;
use crate::core::sink::Sink;
use crate::core::GreetConfig;
use crate::utils::error::Result;

/// Explicit entry operation: one plain greeting, a repeated greeting, then
/// a report of the recorded visit count.
pub struct GreetRunner<C: GreetConfig, S: Sink> {
    config: C,
    sink: S,
}

impl<C: GreetConfig, S: Sink> GreetRunner<C, S> {
    pub fn new(config: C, sink: S) -> Self {
        Self { config, sink }
    }

    pub async fn run(&mut self) -> Result<u32> {
        let mut greeter = match self.config.message() {
            Some(message) => Greeter::new(message.to_string()),
            None => Greeter::default(),
        };

        tracing::debug!("Greeter message: {}", greeter.message());
        tracing::debug!("Doubled sequence: {:?}", samples::doubled(&samples::NUMBERS));
        tracing::debug!("Even sequence: {:?}", samples::evens(&samples::NUMBERS));

        greeter.greet(&mut self.sink)?;
        greeter.greet_multiple(self.config.times(), &mut self.sink)?;

        self.sink
            .emit(&format!("Greeted {} times", greeter.count()))?;

        Ok(greeter.count())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
