use std::{
    env,
    net::{TcpStream, ToSocketAddrs},
    time::Duration,
};
use url::Url;

use crate::{DEFAULT_DEVTOOLS_URL, DEVTOOLS_CONNECT_TIMEOUT_MS, DEVTOOLS_URL_ENV};

/// Standalone Vue devtools server that renderer windows attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DevtoolsExtension {
    pub(crate) server_url: Url,
    pub(crate) hook_script: String,
}

pub(crate) fn devtools_server_url_from_env() -> String {
    env::var(DEVTOOLS_URL_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DEVTOOLS_URL.to_string())
}

pub(crate) fn install_devtools_extension() -> Result<DevtoolsExtension, String> {
    install_devtools_extension_from(&devtools_server_url_from_env(), DEVTOOLS_CONNECT_TIMEOUT_MS)
}

pub(crate) fn install_devtools_extension_from(
    raw_url: &str,
    timeout_ms: u64,
) -> Result<DevtoolsExtension, String> {
    let server_url = Url::parse(raw_url.trim())
        .map_err(|error| format!("Invalid devtools server URL '{raw_url}': {error}"))?;
    if !matches!(server_url.scheme(), "http" | "https") {
        return Err(format!(
            "Unsupported devtools server scheme '{}', only http/https are allowed.",
            server_url.scheme()
        ));
    }
    if !server_accepts_connections(&server_url, timeout_ms)? {
        return Err(format!("Devtools server {server_url} is not reachable."));
    }

    let hook_script = devtools_hook_script(&server_url)?;
    Ok(DevtoolsExtension {
        server_url,
        hook_script,
    })
}

fn server_accepts_connections(server_url: &Url, timeout_ms: u64) -> Result<bool, String> {
    let host = server_url
        .host_str()
        .ok_or_else(|| format!("Devtools server URL has no host: {server_url}"))?;
    let port = server_url.port_or_known_default().unwrap_or(80);
    let timeout = Duration::from_millis(timeout_ms.max(50));

    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|error| format!("Failed to resolve devtools server {host}:{port}: {error}"))?
        .collect::<Vec<_>>();
    Ok(addrs
        .iter()
        .any(|address| TcpStream::connect_timeout(address, timeout).is_ok()))
}

fn devtools_hook_script(server_url: &Url) -> Result<String, String> {
    let host = format!(
        "{}://{}",
        server_url.scheme(),
        server_url.host_str().unwrap_or("localhost")
    );
    let port = server_url.port_or_known_default().unwrap_or(80);
    let host_literal = serde_json::to_string(&host)
        .map_err(|error| format!("Failed to encode devtools host: {error}"))?;
    let src_literal = serde_json::to_string(server_url.as_str())
        .map_err(|error| format!("Failed to encode devtools script URL: {error}"))?;

    Ok(format!(
        r#"(function () {{
  window.__VUE_DEVTOOLS_HOST__ = {host_literal};
  window.__VUE_DEVTOOLS_PORT__ = {port};
  const attach = () => {{
    const script = document.createElement("script");
    script.src = {src_literal};
    document.head.appendChild(script);
  }};
  if (document.readyState === "loading") {{
    document.addEventListener("DOMContentLoaded", attach, {{ once: true }});
  }} else {{
    attach();
  }}
}})();"#
    ))
}
