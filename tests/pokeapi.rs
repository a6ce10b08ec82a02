use pokedeck::pokeapi::{id_from_url, ApiError, ListItem, PokeApiClient, PokemonDetail, PokemonPage, PokemonSource};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response on a local port and return the base URL
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}", addr)
}

#[test]
fn test_id_from_url() {
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/1/"), Some(1));
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25"), Some(25));
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/0/"), Some(0));
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
    assert_eq!(id_from_url(""), None);
}

#[test]
fn test_list_page_decodes_and_ignores_pagination() {
    let body = r#"{
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
        ]
    }"#;

    let page: PokemonPage = serde_json::from_str(body).unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0], ListItem::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"));
    assert_eq!(page.results[1].id(), Some(2));
}

#[test]
fn test_detail_decodes_with_missing_sprite() {
    let body = r#"{"id": 10, "name": "caterpie", "sprites": {"front_default": null, "back_default": null}}"#;
    let detail: PokemonDetail = serde_json::from_str(body).unwrap();
    assert_eq!(detail.name, "caterpie");
    assert!(detail.sprites.front_default.is_none());

    let detail: PokemonDetail = serde_json::from_str(r#"{"name": "ditto"}"#).unwrap();
    assert!(detail.sprites.front_default.is_none());
}

#[test]
fn test_client_urls() {
    let client = PokeApiClient::new("https://pokeapi.co/api/v2/", Some(Duration::from_secs(5))).unwrap();
    assert_eq!(client.list_url(), "https://pokeapi.co/api/v2/pokemon");
    assert_eq!(client.detail_url(25), "https://pokeapi.co/api/v2/pokemon/25");
}

#[tokio::test]
async fn test_client_decodes_successful_responses() {
    let base = serve_once("200 OK", r#"{"name": "pikachu", "sprites": {"front_default": null}}"#).await;
    let client = PokeApiClient::new(base, None).unwrap();
    let detail = client.fetch_pokemon(25).await.unwrap();
    assert_eq!(detail.name, "pikachu");

    let base = serve_once(
        "200 OK",
        r#"{"results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]}"#,
    )
    .await;
    let client = PokeApiClient::new(base, None).unwrap();
    let items = client.fetch_list().await.unwrap();
    assert_eq!(items[0].id(), Some(1));
}

#[tokio::test]
async fn test_client_maps_missing_pokemon_to_not_found() {
    let base = serve_once("404 Not Found", "Not Found").await;
    let client = PokeApiClient::new(base, None).unwrap();
    assert_eq!(client.fetch_pokemon(999_999).await, Err(ApiError::NotFound(999_999)));
}

#[tokio::test]
async fn test_client_maps_other_statuses() {
    let base = serve_once("500 Internal Server Error", "").await;
    let client = PokeApiClient::new(base, None).unwrap();
    assert_eq!(client.fetch_pokemon(1).await, Err(ApiError::Status(500)));

    let base = serve_once("503 Service Unavailable", "").await;
    let client = PokeApiClient::new(base, None).unwrap();
    assert_eq!(client.fetch_list().await, Err(ApiError::Status(503)));
}

#[tokio::test]
async fn test_client_maps_bad_body_to_invalid_data() {
    let base = serve_once("200 OK", "<html>not json</html>").await;
    let client = PokeApiClient::new(base, None).unwrap();
    assert!(matches!(client.fetch_pokemon(1).await, Err(ApiError::InvalidData(_))));

    let base = serve_once("200 OK", r#"{"results": "nope"}"#).await;
    let client = PokeApiClient::new(base, None).unwrap();
    assert!(matches!(client.fetch_list().await, Err(ApiError::InvalidData(_))));
}

#[tokio::test]
async fn test_client_maps_refused_connection_to_network() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PokeApiClient::new(format!("http://{}", addr), Some(Duration::from_secs(2))).unwrap();
    assert!(matches!(client.fetch_list().await, Err(ApiError::Network(_))));
}
