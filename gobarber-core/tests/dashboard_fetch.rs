mod common;

use std::time::Duration;

use chrono::NaiveDate;
use gobarber_core::availability::DisabledDay;
use gobarber_core::dashboard::Dashboard;
use gobarber_core::month::Month;
use gobarber_core::route::Route;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 7, 6).unwrap()
}

async fn mount_month(server: &MockServer, month: u32, unavailable_day: u32, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/providers/provider-1/month-availability"))
        .and(query_param("year", "2020"))
        .and(query_param("month", month.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([
                    {"day": unavailable_day, "available": false},
                    {"day": unavailable_day + 1, "available": true}
                ]))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn slow_response_for_previous_month_is_discarded() {
    let server = MockServer::start().await;
    mount_month(&server, 8, 10, Duration::from_millis(300)).await;
    mount_month(&server, 9, 15, Duration::ZERO).await;

    let (app, _dir) = common::app(&server, true);
    let mut dashboard = Dashboard::new("provider-1", monday());

    let august = dashboard.change_month(Month::new(2020, 8).unwrap()).unwrap();
    let september = dashboard.change_month(Month::new(2020, 9).unwrap()).unwrap();

    // Both fetches are in flight at once; responses are applied in arrival order.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for request in [august, september] {
        let api = app.api.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = api.month_availability(&request).await;
            let _ = tx.send((request, result));
        });
    }
    drop(tx);

    let mut applied = Vec::new();
    while let Some((request, result)) = rx.recv().await {
        let accepted = dashboard.apply_availability(&request, result.unwrap());
        applied.push((request.month.month(), accepted));
    }

    assert_eq!(applied, vec![(9, true), (8, false)]);
    assert_eq!(
        dashboard.disabled_days(),
        &[DisabledDay::Date(NaiveDate::from_ymd_opt(2020, 9, 15).unwrap())]
    );
}

#[tokio::test]
async fn app_loads_month_and_schedule_for_signed_in_provider() {
    let server = MockServer::start().await;
    mount_month(&server, 7, 8, Duration::ZERO).await;

    Mock::given(method("GET"))
        .and(path("/appointments/me"))
        .and(query_param("day", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "a1",
                "date": "2020-07-06T14:00:00.000Z",
                "user": {"id": "c1", "name": "Carlos", "email": "carlos@example.com"}
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (app, _dir) = common::app(&server, true);
    assert_eq!(app.navigate(Route::SignIn), Route::Dashboard);

    let mut dashboard = Dashboard::new(app.auth.require_user().unwrap().id.clone(), monday());

    let request = dashboard.refresh();
    assert!(app.load_month(&mut dashboard, request).await.unwrap());
    assert!(!dashboard.select_date(NaiveDate::from_ymd_opt(2020, 7, 8).unwrap()));

    let request = dashboard.schedule_request();
    assert!(app.load_schedule(&mut dashboard, request).await.unwrap());
    assert_eq!(dashboard.schedule().len(), 1);
}

#[tokio::test]
async fn signed_out_app_has_no_dashboard() {
    let server = MockServer::start().await;
    let (app, _dir) = common::app(&server, false);

    assert!(app.dashboard().is_err());
    assert_eq!(app.navigate(Route::Dashboard), Route::SignIn);
}
