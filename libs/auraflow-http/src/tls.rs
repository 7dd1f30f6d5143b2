//! HTTPS connector assembly.
//!
//! The OS certificate store is read at most once per process.

use crate::config::{TlsRootConfig, TransportSecurity};
use crate::error::HttpError;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use rustls::crypto::CryptoProvider;
use rustls_pki_types::CertificateDer;
use std::sync::{Arc, OnceLock};

static NATIVE_ROOTS: OnceLock<Vec<CertificateDer<'static>>> = OnceLock::new();

fn native_roots() -> &'static [CertificateDer<'static>] {
    NATIVE_ROOTS.get_or_init(|| {
        let loaded = rustls_native_certs::load_native_certs();
        for err in &loaded.errors {
            tracing::warn!(error = %err, "skipping unreadable native root certificate");
        }
        tracing::debug!(count = loaded.certs.len(), "native root certificates loaded");
        loaded.certs
    })
}

/// Installed process default, else a private aws-lc-rs provider
fn crypto_provider() -> Arc<CryptoProvider> {
    CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

fn tls_error(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> HttpError {
    HttpError::Tls(err.into())
}

/// Fails early when the OS store yields no usable root, instead of on the
/// first handshake
fn native_client_config() -> Result<rustls::ClientConfig, HttpError> {
    let mut store = rustls::RootCertStore::empty();
    let (added, ignored) = store.add_parsable_certificates(native_roots().iter().cloned());
    if added == 0 {
        return Err(tls_error(format!(
            "no usable root certificate in the OS store ({ignored} unparsable)"
        )));
    }
    if ignored > 0 {
        tracing::warn!(added, ignored, "some native root certificates were unparsable");
    }

    let builder = rustls::ClientConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()
        .map_err(tls_error)?;
    Ok(builder.with_root_certificates(store).with_no_client_auth())
}

/// Connector for the hyper pool; plain HTTP is only dialed when `transport`
/// allows it
pub fn https_connector(
    roots: TlsRootConfig,
    transport: TransportSecurity,
) -> Result<HttpsConnector<HttpConnector>, HttpError> {
    let with_roots = match roots {
        TlsRootConfig::WebPki => HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(crypto_provider())
            .map_err(tls_error)?,
        TlsRootConfig::Native => HttpsConnectorBuilder::new().with_tls_config(native_client_config()?),
    };

    let connector = if transport.allows_plain_http() {
        with_roots.https_or_http().enable_all_versions().build()
    } else {
        with_roots.https_only().enable_all_versions().build()
    };
    Ok(connector)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn native_store_read_once() {
        assert!(std::ptr::eq(native_roots(), native_roots()));
    }

    #[test]
    fn provider_has_cipher_suites() {
        assert!(!crypto_provider().cipher_suites.is_empty());
    }

    #[test]
    fn webpki_connector_builds_in_both_modes() {
        for transport in [TransportSecurity::TlsOnly, TransportSecurity::AllowInsecureHttp] {
            assert!(https_connector(TlsRootConfig::WebPki, transport).is_ok());
        }
    }
}
