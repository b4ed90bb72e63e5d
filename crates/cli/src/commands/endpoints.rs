//! Print the fixed endpoints of a configuration.

use arkane_endpoints::{EndpointResolver, EndpointSet};

use super::emit;

/// Print every endpoint that does not depend on a contract.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to stdout fails.
pub fn show(resolver: &EndpointResolver, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let endpoints = resolver.endpoints();

    if json {
        emit(&serde_json::to_string_pretty(&endpoints)?)?;
    } else {
        emit(&render(&endpoints))?;
    }
    Ok(())
}

fn render(endpoints: &EndpointSet) -> String {
    let contracts = endpoints
        .contracts
        .as_deref()
        .unwrap_or("(unavailable: no app id)");
    format!(
        "environment     {}\n\
         authentication  {}\n\
         connect         {}\n\
         wallets         {}\n\
         apps            {}\n\
         contracts       {contracts}",
        endpoints.environment,
        endpoints.authentication,
        endpoints.connect,
        endpoints.wallets,
        endpoints.apps,
    )
}

#[cfg(test)]
mod tests {
    use arkane_core::AppId;
    use arkane_endpoints::ArkaneConfig;

    use super::*;

    #[test]
    fn test_render_lists_every_endpoint() {
        let resolver = EndpointResolver::new(ArkaneConfig {
            use_staging: false,
            app_id: AppId::parse("42").unwrap(),
            ..ArkaneConfig::default()
        });

        let text = render(&resolver.endpoints());
        assert!(text.contains("environment     production"));
        assert!(text.contains("https://api.arkane.network/api/wallets"));
        assert!(text.contains("https://connect-staging.arkane.network"));
        assert!(text.contains("https://business.arkane.network/api/apps/42/contracts"));
    }

    #[test]
    fn test_render_without_app_id() {
        let text = render(&EndpointResolver::default().endpoints());
        assert!(text.contains("(unavailable: no app id)"));
    }
}
