use axum::body::{Body, Bytes, to_bytes};
use http::{Request, Response};
use tower::ServiceExt;

pub mod macros;

pub struct TestClient;

impl TestClient {
    pub fn new() -> Self {
        #[cfg(feature = "test-logs")]
        tracing_init();

        Self
    }

    pub async fn send(&self, request: Request<Body>) -> Asserter {
        let response = server::server()
            .oneshot(request)
            .await
            .unwrap(/* Infallible */);
        Asserter::from(response)
    }
}

pub struct Asserter {
    response: Response<Body>,
}

impl Asserter {
    pub fn status(self, expected: u16) -> Self {
        assert_eq!(
            self.response.status().as_u16(),
            expected,
            "expected status {}, got {}",
            expected,
            self.response.status()
        );
        self
    }

    pub fn header(self, name: &str, expected: &str) -> Self {
        let actual = self
            .response
            .headers()
            .get(name)
            .unwrap_or_else(|| panic!("missing header `{name}`"))
            .to_str()
            .expect("header is not visible ascii");
        assert_eq!(actual, expected, "header `{name}`");
        self
    }

    pub fn has_header(self, name: &str) -> Self {
        assert!(
            self.response.headers().contains_key(name),
            "missing header `{name}`"
        );
        self
    }

    pub async fn json_body<T>(self, f: impl FnOnce(T))
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.into_body_bytes().await;
        f(serde_json::from_slice::<T>(&body).expect("unable to deserialize response body"))
    }

    pub async fn into_body_bytes(self) -> Bytes {
        to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body")
    }
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}

#[cfg(feature = "test-logs")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

#[cfg(feature = "test-logs")]
pub fn tracing_init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}
