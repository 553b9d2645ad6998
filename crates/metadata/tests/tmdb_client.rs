use reelscout_metadata::provider::MetadataProvider;
use reelscout_metadata::tmdb::TmdbClient;
use reelscout_metadata::{DiscoverFilter, MetadataError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TmdbClient {
    TmdbClient::with_base_url("test-key".into(), reqwest::Client::new(), &server.uri())
}

#[tokio::test]
async fn get_movie_requests_credits_and_parses_runtime() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/27205"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("append_to_response", "credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 27205,
            "title": "Inception",
            "runtime": 148,
            "release_date": "2010-07-16",
            "genres": [{ "id": 28, "name": "Action" }],
            "credits": { "cast": [], "crew": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movie = client_for(&server).get_movie("27205").await.unwrap();
    assert_eq!(movie.summary.title, "Inception");
    assert_eq!(movie.runtime_minutes, Some(148));
    assert_eq!(movie.genres[0].id, 28);
}

#[tokio::test]
async fn missing_movie_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/999999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_movie("999999999").await.unwrap_err();
    assert!(matches!(err, MetadataError::NotFound));
}

#[tokio::test]
async fn server_errors_map_to_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).popular(1).await.unwrap_err();
    assert!(matches!(err, MetadataError::Provider(_)), "got {err:?}");
}

#[tokio::test]
async fn discover_sends_only_set_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("with_genres", "878"))
        .and(query_param("primary_release_year", "2016"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 329865, "title": "Arrival", "release_date": "2016-11-10" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = DiscoverFilter {
        genre_id: Some(878),
        year: Some(2016),
        min_rating: None,
    };
    let movies = client_for(&server).discover(&filter, 2).await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Arrival");

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap().contains("vote_average.gte"));
}

#[tokio::test]
async fn genres_are_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 35, "name": "Comedy" }
            ]
        })))
        .mount(&server)
        .await;

    let genres = client_for(&server).genres().await.unwrap();
    assert_eq!(genres.len(), 2);
    assert_eq!(genres[1].name, "Comedy");
}
