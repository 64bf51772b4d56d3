// One-time server bootstrap shared by the integration tests.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use reqwest::header::{COOKIE, SET_COOKIE};

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // The server gets its own OS thread and runtime so it outlives each
        // `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                hotel_server::run(listener).await.expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Client that leaves redirects to the test so Location headers can be checked.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build test client")
}

// Visitor that carries its session cookie between requests.
pub struct Browser {
    pub base_url: &'static str,
    pub client: reqwest::Client,
    pub session: Option<String>,
}

impl Browser {
    pub fn new() -> Self {
        Self {
            base_url: ensure_server(),
            client: client(),
            session: None,
        }
    }

    pub async fn get(&mut self, path: &str) -> reqwest::Response {
        let mut request = self.client.get(format!("{}{path}", self.base_url));
        if let Some(token) = &self.session {
            request = request.header(COOKIE, format!("hotel_session={token}"));
        }
        let response = request.send().await.expect("request should succeed");
        self.remember(&response);
        response
    }

    pub async fn post_form(&mut self, path: &str, body: &str) -> reqwest::Response {
        let mut request = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body.to_string());
        if let Some(token) = &self.session {
            request = request.header(COOKIE, format!("hotel_session={token}"));
        }
        let response = request.send().await.expect("request should succeed");
        self.remember(&response);
        response
    }

    fn remember(&mut self, response: &reqwest::Response) {
        let Some(cookie) = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        else {
            return;
        };
        let value = cookie
            .split(';')
            .next()
            .and_then(|pair| pair.strip_prefix("hotel_session="))
            .unwrap_or_default();
        self.session = (!value.is_empty()).then(|| value.to_string());
    }
}

fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
