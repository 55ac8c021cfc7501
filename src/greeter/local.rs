use super::{GreetError, GreetingService};
use async_trait::async_trait;

pub const DEFAULT_TEMPLATE: &str = "Hello my Lord {name} !";

/// Greets in-process by filling `{name}` in a template.
#[derive(Debug, Clone)]
pub struct LocalGreeter {
    template: String,
}

impl LocalGreeter {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn render(&self, name: &str) -> String {
        self.template.replace("{name}", name)
    }
}

impl Default for LocalGreeter {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

#[async_trait]
impl GreetingService for LocalGreeter {
    async fn greet(&self, name: &str) -> Result<String, GreetError> {
        Ok(self.render(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_template() {
        let greeter = LocalGreeter::default();
        assert_eq!(greeter.greet("Ada").await.unwrap(), "Hello my Lord Ada !");
        assert_eq!(greeter.greet("").await.unwrap(), "Hello my Lord  !");
    }

    #[test]
    fn test_name_is_not_reinterpreted() {
        let greeter = LocalGreeter::new("Hello, {name}!");
        assert_eq!(greeter.render("  {name} <b>"), "Hello,   {name} <b>!");
    }
}
