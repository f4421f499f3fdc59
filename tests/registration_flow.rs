use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use unidades_geradoras::api::HttpUnitApi;
use unidades_geradoras::app::{AppState, Notice, UnitsPage};
use unidades_geradoras::navigation::Route;
use unidades_geradoras::requests::BackgroundDispatcher;
use unidades_geradoras::unit_form::Field;

/// Drain completions into the state until nothing is in flight.
fn settle(app: &mut AppState, dispatcher: &BackgroundDispatcher) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while dispatcher.in_flight() > 0 && Instant::now() < deadline {
        for resp in dispatcher.pump() {
            app.handle_response(resp, dispatcher);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn dispatcher_for(server: &MockServer) -> BackgroundDispatcher {
    let api = HttpUnitApi::new(&server.base_url(), Some(Duration::from_secs(5))).unwrap();
    BackgroundDispatcher::new(Arc::new(api))
}

#[test]
fn saving_a_new_unit_posts_it_and_refreshes_the_list() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/unidades");
        then.status(200).json_body(json!([
            { "id": 1, "apelido": "Unidade 1", "local": "Local 1", "marca": "Marca 1", "modelo": "Modelo 1" },
            { "id": 2, "apelido": "Unidade 2", "local": "Local 2", "marca": "Marca 2", "modelo": "Modelo 2" }
        ]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/unidades").json_body(json!({
            "apelido": "Painel 1",
            "local": "Rua Alberto 430",
            "marca": "marca",
            "modelo": "155w",
            "ativa": false
        }));
        then.status(201).json_body(json!({
            "id": 3, "apelido": "Painel 1", "local": "Rua Alberto 430",
            "marca": "marca", "modelo": "155w", "ativa": false
        }));
    });
    let dispatcher = dispatcher_for(&server);
    let mut app = AppState::new();

    app.navigate(Route::Unidades, &dispatcher);
    settle(&mut app, &dispatcher);
    let rows = app.unit_list.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], ["1", "Unidade 1", "Local 1", "Marca 1", "Modelo 1"]);

    app.mudar_formulario(&dispatcher);
    assert_eq!(app.units_page(), UnitsPage::Form);
    *app.unit_form.field_mut(Field::Apelido) = "Painel 1".into();
    *app.unit_form.field_mut(Field::Local) = "Rua Alberto 430".into();
    *app.unit_form.field_mut(Field::Marca) = "marca".into();
    *app.unit_form.field_mut(Field::Modelo) = "155w".into();
    app.submit_unit_form(&dispatcher);

    // Cleared before the POST has answered.
    for field in Field::ALL {
        assert_eq!(app.unit_form.field(field), "");
    }
    assert_eq!(app.units_page(), UnitsPage::List);

    settle(&mut app, &dispatcher);
    create.assert();
    assert!(list.hits() >= 2);
    assert!(app
        .take_notices()
        .contains(&Notice::Success("Unidade Painel 1 cadastrada".into())));
    assert_eq!(app.banner(), None);
}

#[test]
fn server_error_on_remove_shows_a_banner() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/unidades");
        then.status(200).json_body(json!([
            { "id": 1, "apelido": "Unidade 1", "local": "Local 1", "marca": "Marca 1", "modelo": "Modelo 1" }
        ]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/unidades/1");
        then.status(500);
    });
    let dispatcher = dispatcher_for(&server);
    let mut app = AppState::new();

    app.navigate(Route::Unidades, &dispatcher);
    settle(&mut app, &dispatcher);
    let intent = app.unit_list.remove(0).unwrap();
    app.handle_list_intent(intent, &dispatcher);
    settle(&mut app, &dispatcher);

    let banner = app.banner().expect("banner after failed delete");
    assert!(banner.contains("remover a unidade 1"), "{banner}");
    assert!(banner.contains("500"), "{banner}");
    assert_eq!(app.unit_list.rows().len(), 1);
}

#[test]
fn unreachable_api_leaves_an_empty_table_with_an_error() {
    // Nothing listens on port 9 on test machines.
    let api = HttpUnitApi::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
    let dispatcher = BackgroundDispatcher::new(Arc::new(api));
    let mut app = AppState::new();

    app.navigate(Route::Unidades, &dispatcher);
    settle(&mut app, &dispatcher);

    assert!(app.unit_list.rows().is_empty());
    assert!(app.unit_list.state().error().is_some());
}

#[test]
fn created_status_with_empty_body_counts_as_saved() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/unidades");
        then.status(200).json_body(json!([]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/unidades");
        then.status(201);
    });
    let dispatcher = dispatcher_for(&server);
    let mut app = AppState::new();

    app.navigate(Route::Unidades, &dispatcher);
    settle(&mut app, &dispatcher);
    app.mudar_formulario(&dispatcher);
    *app.unit_form.field_mut(Field::Apelido) = "Painel 1".into();
    *app.unit_form.field_mut(Field::Local) = "Rua Alberto 430".into();
    *app.unit_form.field_mut(Field::Marca) = "marca".into();
    *app.unit_form.field_mut(Field::Modelo) = "155w".into();
    app.submit_unit_form(&dispatcher);
    settle(&mut app, &dispatcher);

    create.assert();
    assert_eq!(app.banner(), None);
    assert!(app
        .take_notices()
        .contains(&Notice::Success("Unidade Painel 1 cadastrada".into())));
    // Initial load, the load started on returning to the list, and the refresh after 201.
    assert_eq!(list.hits(), 3);
}
