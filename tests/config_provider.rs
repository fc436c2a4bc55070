//! Configuration provider against a real HTTP endpoint.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use clinic_site::site_config::{
    ConfigOrigin, ConfigProvider, ConfigSource, FetchError, HttpConfigSource, Phase, ProviderSlot,
    SiteConfig, ThemeSheet,
};
use url::Url;

use common::{start_config_backend, start_fixed_backend, REMOTE_CONFIG};

fn source_for(addr: std::net::SocketAddr) -> Arc<dyn ConfigSource> {
    let url = Url::parse(&format!("http://{addr}/site-config")).unwrap();
    Arc::new(HttpConfigSource::new(url, Duration::from_secs(2)).unwrap())
}

#[tokio::test]
async fn test_fetched_config_replaces_default() {
    let (addr, hits) = start_fixed_backend(200, REMOTE_CONFIG).await;
    let theme = Arc::new(ThemeSheet::new());
    let provider = ConfigProvider::new(Arc::clone(&theme));

    let applied = provider.mount(Some(source_for(addr))).unwrap().await.unwrap();

    assert!(applied);
    assert_eq!(provider.phase(), Phase::Ready);
    assert_eq!(provider.state().origin, ConfigOrigin::Remote);
    assert_eq!(provider.config().contact.phone, "+90 312 111 22 33");
    assert_eq!(provider.config().meta.title, "Dr. Ayşe Yılmaz Kliniği");
    assert!(theme.css().contains("--color-primary: #1d4ed8;"));
    assert!(theme.css().contains("--color-accent: #db2777;"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_server_error_keeps_default() {
    let (addr, _) = start_fixed_backend(500, "{\"error\":\"boom\"}").await;
    let source = source_for(addr);

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));

    let provider = ConfigProvider::new(Arc::new(ThemeSheet::new()));
    provider.mount(Some(source)).unwrap().await.unwrap();

    assert_eq!(provider.phase(), Phase::Ready);
    assert_eq!(provider.state().origin, ConfigOrigin::Default);
    assert_eq!(*provider.config(), SiteConfig::default());
}

#[tokio::test]
async fn test_malformed_document_keeps_default() {
    let (addr, _) = start_fixed_backend(200, "{\"meta\":{\"title\":\"only a title\"}}").await;
    let source = source_for(addr);

    assert_eq!(source.fetch().await.unwrap_err().kind(), "decode");

    let provider = ConfigProvider::new(Arc::new(ThemeSheet::new()));
    provider.mount(Some(source)).unwrap().await.unwrap();

    assert!(!provider.state().loading);
    assert_eq!(*provider.config(), SiteConfig::default());
}

#[tokio::test]
async fn test_unreachable_endpoint_keeps_default() {
    // bind then drop to get a port nobody listens on
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let source = source_for(addr);
    assert_eq!(source.fetch().await.unwrap_err().kind(), "network");

    let provider = ConfigProvider::new(Arc::new(ThemeSheet::new()));
    provider.mount(Some(source)).unwrap().await.unwrap();
    assert_eq!(provider.state().origin, ConfigOrigin::Default);
}

#[tokio::test]
async fn test_slow_response_after_dispose_is_discarded() {
    let (addr, hits) = start_config_backend(|| async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        (200, REMOTE_CONFIG.to_string())
    })
    .await;
    let theme = Arc::new(ThemeSheet::new());
    let provider = ConfigProvider::new(Arc::clone(&theme));

    let handle = provider.mount(Some(source_for(addr))).unwrap();
    provider.dispose();

    assert!(!handle.await.unwrap());
    assert_eq!(provider.phase(), Phase::Disposed);
    assert_eq!(*provider.config(), SiteConfig::default());
    assert!(!theme.css().contains("#1d4ed8"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_slot_fetches_once_per_mount() {
    let (addr, hits) = start_fixed_backend(200, REMOTE_CONFIG).await;
    let slot = ProviderSlot::mount(Some(source_for(addr)), Arc::new(ThemeSheet::new()));

    let first = slot.current();
    assert_eq!(first.ready().await, Phase::Ready);
    // reads never trigger another fetch
    for _ in 0..5 {
        let _ = slot.current().config();
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let second = slot.remount();
    assert_eq!(second.ready().await, Phase::Ready);
    assert_eq!(first.phase(), Phase::Disposed);
    assert_ne!(first.instance(), second.instance());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(second.config().contact.email, "iletisim@klinik.test");
}
