use crate::core::sink::Sink;
use crate::utils::error::Result;
use std::time::Duration;

pub const DEFAULT_MESSAGE: &str = "Hello, Prism!";

const ASYNC_GREET_DELAY: Duration = Duration::from_millis(100);

/// Greeter with a message and a visit counter. Only the plain `greet`
/// advances the counter; the async and repeated variants leave it alone.
#[derive(Debug, Clone)]
pub struct Greeter {
    message: String,
    count: u32,
}

impl Greeter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            count: 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Emit the message once and record the visit.
    pub fn greet(&mut self, sink: &mut dyn Sink) -> Result<()> {
        sink.emit(&self.message)?;
        self.count += 1;
        Ok(())
    }

    /// Emit the message after a fixed cooperative delay. Takes `&self`:
    /// the async variant does not record a visit.
    pub async fn greet_async(&self, sink: &mut dyn Sink) -> Result<()> {
        tokio::time::sleep(ASYNC_GREET_DELAY).await;
        sink.emit(&self.message)
    }

    /// Emit the message `times` times, each line prefixed with its 1-based
    /// position. Zero times emits nothing. Does not record visits.
    pub fn greet_multiple(&self, times: u32, sink: &mut dyn Sink) -> Result<()> {
        for i in 0..times {
            sink.emit(&format!("{}: {}", i + 1, self.message))?;
        }
        Ok(())
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::MemorySink;

    #[test]
    fn test_default_message() {
        let greeter = Greeter::default();
        assert_eq!(greeter.message(), DEFAULT_MESSAGE);
        assert_eq!(greeter.count(), 0);
    }

    #[test]
    fn test_explicit_message() {
        let greeter = Greeter::new("Hi there");
        assert_eq!(greeter.message(), "Hi there");
    }

    #[test]
    fn test_greet_increments_counter() {
        let mut greeter = Greeter::default();
        let mut sink = MemorySink::new();

        for _ in 0..3 {
            greeter.greet(&mut sink).unwrap();
        }

        assert_eq!(greeter.count(), 3);
        assert_eq!(sink.lines(), &[DEFAULT_MESSAGE; 3]);
    }

    #[test]
    fn test_greet_multiple_leaves_counter_unchanged() {
        let greeter = Greeter::default();
        let mut sink = MemorySink::new();

        greeter.greet_multiple(2, &mut sink).unwrap();

        assert_eq!(greeter.count(), 0);
        assert_eq!(
            sink.lines(),
            &["1: Hello, Prism!", "2: Hello, Prism!"]
        );
    }

    #[test]
    fn test_greet_multiple_zero_emits_nothing() {
        let greeter = Greeter::default();
        let mut sink = MemorySink::new();

        greeter.greet_multiple(0, &mut sink).unwrap();

        assert!(sink.lines().is_empty());
    }
}
