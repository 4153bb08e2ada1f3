use restnow::{Connection, Method, QueryParameter, RestClient, RestError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn connected(server: &MockServer) -> Connection {
    let mut con = Connection::new(&format!("{}/api/now", server.uri())).expect("base URL");
    con.connect("admin", "secret");
    con
}

#[tokio::test]
async fn test_execute_sends_auth_and_query() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/now/incident/42"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .and(header("Accept", "application/json"))
        .and(query_param("sysparm_limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let con = connected(&server);
    let client = RestClient::new().expect("client");
    let params = vec![QueryParameter::new("sysparm_limit", "1")];
    let response = client
        .execute(&con, Method::Get, "incident", Some("42"), &params)
        .await
        .expect("execute");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_execute_sends_custom_headers() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/now/incident/42"))
        .and(header("X-Trace", "abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut con = connected(&server);
    con.set_header("X-Trace", "abc");
    let client = RestClient::new().expect("client");
    let response = client
        .execute(&con, Method::Delete, "incident", Some("42"), &[])
        .await
        .expect("execute");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_execute_preserves_duplicate_parameters() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/now/incident"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let con = connected(&server);
    let client = RestClient::new().expect("client");
    let params = vec![
        QueryParameter::new("b", "2"),
        QueryParameter::new("a", "1"),
        QueryParameter::new("b", "3"),
    ];
    client
        .execute(&con, Method::Get, "incident", None, &params)
        .await
        .expect("execute");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("b=2&a=1&b=3"));
}

#[tokio::test]
async fn test_execute_requires_connect() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    let con = Connection::new(&format!("{}/api/now", server.uri())).expect("base URL");
    let client = RestClient::new().expect("client");
    let err = client
        .execute(&con, Method::Get, "incident", None, &[])
        .await
        .expect_err("should fail before connect");

    assert!(matches!(err, RestError::NotConnected));
    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty(), "no request should reach the server");
}

#[tokio::test]
async fn test_execute_does_not_interpret_status() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/now/incident"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let con = connected(&server);
    let client = RestClient::new().expect("client");
    let response = client
        .execute(&con, Method::Get, "incident", None, &[])
        .await
        .expect("non-2xx is still a response");

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_ping_carries_auth() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/now"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let con = connected(&server);
    let client = RestClient::new().expect("client");
    client.ping(&con).await.expect("ping");
}

#[tokio::test]
async fn test_ping_requires_connect() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    let con = Connection::new(&format!("{}/api/now", server.uri())).expect("base URL");
    let client = RestClient::new().expect("client");
    let err = client.ping(&con).await.expect_err("should fail");
    assert!(matches!(err, RestError::NotConnected));
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    if !can_bind_localhost() {
        return;
    }

    // Grab a free port, then close the listener so the connect is refused.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let mut con = Connection::new(&format!("http://127.0.0.1:{}/api/now", port)).expect("base URL");
    con.connect("admin", "secret");
    let client = RestClient::new().expect("client");
    let err = client
        .execute(&con, Method::Get, "incident", None, &[])
        .await
        .expect_err("unreachable host should fail");
    assert!(matches!(err, RestError::Http(_)));
}
