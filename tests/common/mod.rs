//! Shared fixtures for the integration tests: a mock user directory and a
//! controller wired to mock terminal streams.

#![allow(dead_code)]

use serde_json::{json, Value};
use userline::browser::io::{MockEventStream, MockOutput, MockRenderStream};
use userline::cmd_args::CommandLineArgs;
use userline::{AppController, HttpUserSource};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestController = AppController<MockEventStream, MockRenderStream, HttpUserSource>;

/// One user object as the directory returns it, with fields the list ignores
pub fn user_json(id: u32, first_name: &str, gender: &str, state: &str, country: &str) -> Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": "Example",
        "maidenName": "",
        "age": 20 + id,
        "gender": gender,
        "email": format!("user{id}@example.com"),
        "image": format!("https://dummyjson.com/icon/user{id}/128"),
        "address": {
            "address": "1 Main Street",
            "city": "Springfield",
            "state": state,
            "country": country
        }
    })
}

/// 25 users: ids 1-15 male, 16-25 female, all in the United States
pub fn directory_of_25() -> Vec<Value> {
    (1..=25)
        .map(|id| {
            let gender = if id <= 15 { "male" } else { "female" };
            user_json(id, &format!("Person{id:02}"), gender, "Ohio", "United States")
        })
        .collect()
}

/// Start a mock directory serving `users` at `/users`
pub async fn directory_server(users: Vec<Value>) -> MockServer {
    let server = MockServer::start().await;
    let total = users.len();
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": users,
            "total": total,
            "skip": 0,
            "limit": 30
        })))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Start a mock directory answering every request with `status`
pub async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

pub fn args_for(server: &MockServer, extra: &[&str]) -> CommandLineArgs {
    let url = format!("{}/users", server.uri());
    let mut argv = vec!["userline".to_string(), "--url".to_string(), url];
    argv.extend(extra.iter().map(|s| s.to_string()));
    CommandLineArgs::parse_from(argv)
}

pub fn source_for(args: &CommandLineArgs) -> HttpUserSource {
    HttpUserSource::new(args.url(), Duration::from_secs(5)).expect("http source")
}

/// Controller with mock streams, plus a handle to everything it draws
pub fn controller_for(
    args: &CommandLineArgs,
    events: MockEventStream,
) -> (TestController, MockOutput) {
    let render_stream = MockRenderStream::with_size((120, 30));
    let output = render_stream.output();
    let controller =
        AppController::with_io_streams(args, source_for(args), events, render_stream)
            .expect("controller");
    (controller, output)
}
