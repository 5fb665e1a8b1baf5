use reqwest::Url;

use crate::error::Error;

/// Validate the configured base URL. Only `http` and `https` are accepted.
pub(super) fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let parsed = Url::parse(base_url).map_err(|e| {
        Error::Config(format!(
            "invalid base url `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::Config(format!(
            "unsupported base url scheme `{other}`; expected http or https"
        ))),
    }
}

/// `{base_url}/{api_key}`, the endpoint every call is POSTed to.
pub(super) fn endpoint_url(base_url: &str, api_key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_accepts_https() {
        let url = parse_base_url("https://eth-mainnet.g.alchemy.com/v2").expect("should parse");
        assert_eq!(url.host_str(), Some("eth-mainnet.g.alchemy.com"));
    }

    #[test]
    fn parse_base_url_rejects_other_schemes() {
        let err = parse_base_url("ws://eth-mainnet.g.alchemy.com/v2").expect_err("must reject ws");
        assert!(err.to_string().contains("unsupported base url scheme"));
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        let err = parse_base_url("not a url").expect_err("must reject");
        assert!(err.to_string().contains("invalid base url"));
    }

    #[test]
    fn endpoint_url_appends_api_key() {
        assert_eq!(
            endpoint_url("https://eth-mainnet.g.alchemy.com/v2", "abc"),
            "https://eth-mainnet.g.alchemy.com/v2/abc"
        );
        assert_eq!(
            endpoint_url("http://127.0.0.1:8545/v2/", "abc"),
            "http://127.0.0.1:8545/v2/abc"
        );
    }
}
