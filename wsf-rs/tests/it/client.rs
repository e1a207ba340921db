use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wsf_rs::{ApiConfig, Error, VesselId, WsfClient};

fn client(server: &MockServer) -> WsfClient {
    WsfClient::new(ApiConfig {
        base_url: server.uri(),
        access_code: "secret".to_owned(),
    })
    .unwrap()
}

#[tokio::test]
async fn vessel_locations_are_fetched_with_the_access_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels/rest/vessellocations"))
        .and(query_param("apiaccesscode", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "VesselID": 17,
                "VesselName": "Walla Walla",
                "VesselAbbrev": "WAL",
                "DepartingTerminalAbbrev": "MUK",
                "ArrivingTerminalAbbrev": "CLI",
                "Latitude": 47.951,
                "Longitude": -122.305,
                "Speed": 12.5,
                "Heading": 180.0,
                "InService": true,
                "AtDock": false,
                "LeftDock": "/Date(1693228200000-0700)/",
                "Eta": null,
                "ScheduledDeparture": "/Date(1693227600000-0700)/",
                "TimeStamp": "/Date(1693228260000-0700)/"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let locations = client(&server).vessel_locations().await.unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].vessel_id, VesselId::new(17));
    assert_eq!(locations[0].vessel_abbrev, "WAL");
    assert!(!locations[0].at_dock);
    assert!(locations[0].left_dock.is_some());
}

#[tokio::test]
async fn non_ok_response_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels/rest/vessellocations"))
        .respond_with(ResponseTemplate::new(403).set_body_string("bad access code"))
        .mount(&server)
        .await;

    let err = client(&server).vessel_locations().await.unwrap_err();

    match err {
        Error::FailedRequest { status, body, .. } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "bad access code");
        }
        other => panic!("expected FailedRequest, got {other:?}"),
    }
}
