//! Weather tool — stub that returns mock weather data.
//!
//! In production this would call a real weather API. The stub returns
//! deterministic, plausible data so the reasoning loop can be exercised
//! end-to-end without network access.

use async_trait::async_trait;
use groundbot_core::error::ToolError;
use groundbot_core::tool::{Tool, ToolContext};

pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Fetch the current weather for a specific country"
    }

    async fn invoke(&self, _ctx: &ToolContext, input: &str) -> Result<String, ToolError> {
        let country = input.trim();
        if country.is_empty() {
            return Err(ToolError::InvalidInput(
                "weather expects a country name as input".into(),
            ));
        }
        Ok(mock_weather(country))
    }
}

/// Deterministic mock weather based on the country name hash.
fn mock_weather(country: &str) -> String {
    let hash: u32 = country
        .to_lowercase()
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));

    let conditions = [
        "clear skies",
        "partly cloudy",
        "overcast",
        "light rain",
        "heavy rain",
        "thunderstorms",
        "snow",
        "foggy",
    ];

    let temp_c = ((hash % 40) as i32) - 5;
    let condition = conditions[(hash as usize / 7) % conditions.len()];

    format!("{country}: {condition}, {temp_c}°C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundbot_core::document::TenantId;

    fn ctx() -> ToolContext {
        ToolContext {
            tenant_id: TenantId::new("acme"),
            query: "what's the weather".into(),
            top_k: 3,
        }
    }

    #[tokio::test]
    async fn lookup_returns_weather() {
        let out = WeatherTool.invoke(&ctx(), "France").await.unwrap();
        assert!(out.contains("France"));
        assert!(out.contains("°C"));
    }

    #[tokio::test]
    async fn deterministic_results() {
        let a = WeatherTool.invoke(&ctx(), "Japan").await.unwrap();
        let b = WeatherTool.invoke(&ctx(), "Japan").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn empty_input_is_an_error() {
        let err = WeatherTool.invoke(&ctx(), "   ").await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }
}
