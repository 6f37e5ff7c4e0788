//! Greeting endpoint.
//! Used by: server.

pub const GREETING: &str = "Hello from Jenkins Pipeline!";

pub async fn root() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_greeting() {
        assert_eq!(root().await, "Hello from Jenkins Pipeline!");
    }
}
