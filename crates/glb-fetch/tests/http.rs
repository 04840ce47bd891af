//! End-to-end fetches against a local HTTP server.

use glb_fetch::{
    BlobStore, Client, FetchError, GlbConfig, GlbLoader, LoadedModel, ModelLoader, ObjectUrl,
    Scene,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GLB_MAGIC: [u8; 4] = [0x47, 0x4C, 0x42, 0x00];

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn serve_model(server: &MockServer, route: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(GLB_MAGIC.to_vec()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_base64_encodes_response_body() {
    init_tracing();
    let server = MockServer::start().await;
    serve_model(&server, "/character.glb", 1).await;

    let client = Client::new();
    let payload = client
        .fetch_base64(&format!("{}/character.glb", server.uri()))
        .await
        .unwrap();

    assert_eq!(payload, "R0xCAA==");
    assert_eq!(glb_fetch::decode(&payload).unwrap(), GLB_MAGIC);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.glb"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing.glb", server.uri());
    let err = Client::new().fetch_base64(&url).await.unwrap_err();

    assert_eq!(err, FetchError::HttpStatus { url, status: 404 });
}

#[tokio::test]
async fn request_failure_is_an_error() {
    init_tracing();
    let err = Client::new().fetch_base64("not a url").await.unwrap_err();

    assert!(matches!(err, FetchError::Http { .. }));
    assert_eq!(err.url(), "not a url");
}

#[tokio::test]
async fn cached_fetch_requests_once() {
    init_tracing();
    let server = MockServer::start().await;
    serve_model(&server, "/character.glb", 1).await;

    let client = Client::new();
    let url = format!("{}/character.glb", server.uri());
    let first = client.fetch_cached_base64(&url).await.unwrap();
    let second = client.fetch_cached_base64(&url).await.unwrap();

    assert_eq!(first, second);
    // `expect(1)` is verified when the server is dropped.
}

#[tokio::test]
async fn concurrent_cached_fetches_request_once() {
    init_tracing();
    let server = MockServer::start().await;
    serve_model(&server, "/character.glb", 1).await;

    let client = Client::new();
    let url = format!("{}/character.glb", server.uri());
    let (first, second) = tokio::join!(
        client.fetch_cached_base64(&url),
        client.fetch_cached_base64(&url),
    );

    assert_eq!(first.unwrap(), "R0xCAA==");
    assert_eq!(second.unwrap(), "R0xCAA==");
    server.verify().await;
}

#[tokio::test]
async fn config_falls_back_to_raw_source() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cdn/character.glb"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    serve_model(&server, "/raw/character.glb", 1).await;

    let config = GlbConfig::new(
        format!("{}/cdn/character.glb", server.uri()),
        format!("{}/raw/character.glb", server.uri()),
    );
    let payload = Client::new().fetch_config_base64(&config).await.unwrap();

    assert_eq!(payload, "R0xCAA==");
}

struct CountingScene(usize);

impl Scene for CountingScene {
    type Node = ();

    fn add(&mut self, _node: Self::Node) {
        self.0 += 1;
    }
}

struct Model(Vec<u8>);

impl LoadedModel for Model {
    type Node = ();

    fn scene(&self) -> Self::Node {}
}

struct BytesLoader;

impl ModelLoader for BytesLoader {
    type Model = Model;
    type Error = String;

    async fn load(&self, url: &ObjectUrl) -> Result<Model, String> {
        url.blob()
            .map(|blob| Model(blob.bytes().to_vec()))
            .ok_or_else(|| format!("{url} did not resolve"))
    }
}

#[tokio::test]
async fn fetch_and_load_into_scene() {
    init_tracing();
    let server = MockServer::start().await;
    serve_model(&server, "/character.glb", 1).await;

    let client = Client::new();
    let blobs = BlobStore::new();
    let loader = GlbLoader::new(BytesLoader).with_blob_store(blobs.clone());
    let mut scene = CountingScene(0);

    let model = loader
        .load_from_url(&client, &format!("{}/character.glb", server.uri()), &mut scene)
        .await
        .unwrap();

    assert_eq!(model.0, GLB_MAGIC);
    assert_eq!(scene.0, 1);
    assert!(blobs.is_empty());
}
