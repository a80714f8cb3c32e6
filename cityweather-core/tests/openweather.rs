use cityweather_core::{Endpoints, FetchError, OpenWeatherClient, PartOfDay, WeatherSource};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const CURRENT: &str = include_str!("fixtures/current_london.json");
const FORECAST: &str = include_str!("fixtures/forecast_london.json");

fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::with_options(
        "TEST_KEY".to_string(),
        Endpoints::with_base_url(&server.uri()),
        None,
    )
    .expect("client")
}

#[tokio::test]
async fn current_weather_decodes_every_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CURRENT, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let report = client_for(&server)
        .fetch_current("London")
        .await
        .expect("current weather");

    assert_eq!(report.name, "London");
    assert_eq!(report.id, 2643743);
    assert_eq!(report.cod, 200);
    assert_eq!(report.base, "stations");
    assert_eq!(report.coord.lon, -0.1257);
    assert_eq!(report.coord.lat, 51.5085);
    assert_eq!(report.main.temp, 15.2);
    assert_eq!(report.main.feels_like, 14.6);
    assert_eq!(report.main.temp_min, 13.9);
    assert_eq!(report.main.temp_max, 16.1);
    assert_eq!(report.main.pressure, 1012);
    assert_eq!(report.main.humidity, 82);
    assert_eq!(report.visibility, 10000);
    assert_eq!(report.wind.speed, 4.1);
    assert_eq!(report.wind.deg, 240);
    assert_eq!(report.clouds.all, 100);
    assert_eq!(report.dt, 1714561200);
    assert_eq!(report.sys.kind, 2);
    assert_eq!(report.sys.id, 2075535);
    assert_eq!(report.sys.country, "GB");
    assert_eq!(report.sys.sunrise, 1714537920);
    assert_eq!(report.sys.sunset, 1714591500);
    assert_eq!(report.timezone, 3600);

    let condition = report.primary_condition().expect("one condition");
    assert_eq!(condition.id, 804);
    assert_eq!(condition.main, "Clouds");
    assert_eq!(condition.description, "overcast clouds");
    assert_eq!(condition.icon, "04d");
}

#[tokio::test]
async fn forecast_decodes_entries_and_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FORECAST, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let report = client.forecast("London").await.expect("forecast");

    assert_eq!(report.cod, "200");
    assert_eq!(report.cnt, 3);
    assert_eq!(report.list.len(), 3);
    assert_eq!(report.city.name, "London");
    assert_eq!(report.city.population, 1_000_000);

    let first = &report.list[0];
    assert_eq!(first.pop, 0.5);
    assert_eq!(first.sys.pod, PartOfDay::Day);
    assert_eq!(first.dt_txt, "2024-05-01 12:00:00");
    assert_eq!(first.primary_condition().map(|c| c.main.as_str()), Some("Rain"));

    assert!(report.list[1].weather.is_empty());
    assert_eq!(report.list[2].sys.pod, PartOfDay::Night);
}

#[tokio::test]
async fn city_with_spaces_reaches_provider_intact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CURRENT, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .fetch_current("New York")
        .await
        .expect("current weather");
}

#[tokio::test]
async fn non_200_status_carries_code_and_body() {
    let server = MockServer::start().await;
    let body = r#"{"cod":"404","message":"city not found"}"#;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_current("Atlantis")
        .await
        .unwrap_err();

    match &err {
        FetchError::RequestFailed { status, body: got } => {
            assert_eq!(*status, 404);
            assert_eq!(got, body);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    assert!(err.to_string().contains("404"));
    assert!(err.to_string().contains("city not found"));
}

#[tokio::test]
async fn other_success_codes_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(202).set_body_raw(CURRENT, "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_current("London")
        .await
        .unwrap_err();
    assert!(
        matches!(err, FetchError::RequestFailed { status: 202, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unauthorized_key_is_a_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_forecast("London")
        .await
        .unwrap_err();
    assert!(
        matches!(err, FetchError::RequestFailed { status: 401, .. }),
        "got {err:?}"
    );
    assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"cod\": 200", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_current("London")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn shape_mismatch_is_a_decode_error() {
    let server = MockServer::start().await;

    // A current-weather body where a forecast is expected.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CURRENT, "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_forecast("London")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = OpenWeatherClient::with_options(
        "TEST_KEY".to_string(),
        Endpoints::with_base_url("http://127.0.0.1:9"),
        None,
    )
    .expect("client");

    let err = client.fetch_current("London").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}
