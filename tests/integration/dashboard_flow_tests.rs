//! Full dashboard journeys against a scripted API

use vora::api::ApiError;
use vora::controller::PlatformController;
use vora::render::RecordingRenderer;
use vora::session::SessionStore;
use vora::state::{ActiveTab, AppState, ToastType};
use vora::validation::LoginForm;

use crate::common::{
    clean_ok, forecast_ok, login_ok, scratch_path, upload_ok, Call, MockApi, SALES_CSV,
};

fn scripted_api() -> MockApi {
    MockApi {
        login: Some(Ok(login_ok("ana@example.com", Some("Ana")))),
        upload: Some(Ok(upload_ok("1700000000_sales.csv", SALES_CSV.len() as u64))),
        clean: Some(Ok(clean_ok("1700000000_sales_clean.csv"))),
        forecast: Some(Ok(forecast_ok("1700000000_sales_clean.csv", 1000, 120))),
        ..Default::default()
    }
}

#[test]
fn test_full_session() {
    let store = SessionStore::at(scratch_path("session.json"));
    let mut ctrl =
        PlatformController::new(scripted_api(), AppState::default()).with_session_store(store.clone());
    let mut out = RecordingRenderer::default();

    // Locked until login
    assert!(!ctrl.state.is_platform_unlocked());
    let form = LoginForm {
        email: "ana@example.com".into(),
        password: "secret".into(),
    };
    assert!(ctrl.run_login(&form, &mut out));
    assert!(ctrl.state.is_platform_unlocked());

    // Select and upload
    ctrl.run_select_and_upload("sales.csv", Ok(SALES_CSV.as_bytes().to_vec()), &mut out);
    assert_eq!(ctrl.state.active_tab, ActiveTab::Clean);
    assert_eq!(ctrl.state.preview.headers, vec!["date", "store", "units", "price", "region"]);
    assert_eq!(ctrl.state.preview.row_count(), 3);
    assert_eq!(ctrl.state.last_uploaded_file(), Some("1700000000_sales.csv"));

    // Clean
    ctrl.run_cleaning(&mut out);
    assert_eq!(
        ctrl.state.dataset_for_forecast(),
        Some("1700000000_sales_clean.csv")
    );
    assert_eq!(ctrl.state.preview.headers, vec!["date", "units"]);

    // Forecast
    ctrl.run_forecast(&mut out);
    assert_eq!(ctrl.state.active_tab, ActiveTab::Graph);
    let view = ctrl.state.forecast.as_ref().unwrap();
    assert_eq!(view.filename, "1700000000_sales_clean.csv");
    assert_eq!(view.charts.history_values.len(), 500);
    assert_eq!(view.charts.forecast_values.len(), 60);

    assert_eq!(
        ctrl.api().calls(),
        vec![
            Call::Login("ana@example.com".into()),
            Call::Upload {
                file_name: "sales.csv".into(),
                size: SALES_CSV.len(),
                user_email: Some("ana@example.com".into()),
            },
            Call::Clean("1700000000_sales.csv".into()),
            Call::Forecast("1700000000_sales_clean.csv".into()),
        ]
    );
    assert_eq!(out.previews.len(), 2);
    assert_eq!(out.charts.len(), 1);
    assert!(out
        .notifications
        .iter()
        .all(|(_, kind)| *kind != ToastType::Error && *kind != ToastType::Warning));

    // Logout wipes the session but no server call is made
    ctrl.logout(&mut out);
    assert!(!ctrl.state.is_platform_unlocked());
    assert!(ctrl.state.forecast.is_none());
    assert!(ctrl.state.dataset_for_forecast().is_none());
    assert!(out.previews.last().unwrap().is_empty());
    assert!(store.load().unwrap().is_none());
    assert_eq!(ctrl.api().call_count(), 4);
}

#[test]
fn test_failed_forecast_keeps_cleaned_dataset() {
    let api = MockApi {
        forecast: Some(Err(ApiError::Status {
            status: 500,
            detail: Some("model crashed".into()),
        })),
        ..scripted_api()
    };
    let mut ctrl = PlatformController::new(api, AppState::default());
    let mut out = RecordingRenderer::default();
    ctrl.login_demo(&mut out);

    ctrl.run_select_and_upload("sales.csv", Ok(SALES_CSV.as_bytes().to_vec()), &mut out);
    ctrl.run_cleaning(&mut out);
    ctrl.run_forecast(&mut out);

    assert!(ctrl.state.forecast.is_none());
    assert_eq!(ctrl.state.active_tab, ActiveTab::Terminal);
    assert_eq!(
        ctrl.state.dataset_for_forecast(),
        Some("1700000000_sales_clean.csv")
    );
    assert_eq!(out.last_kind(), Some(ToastType::Error));
}

#[test]
fn test_second_upload_replaces_cleaned_dataset() {
    let mut ctrl = PlatformController::new(scripted_api(), AppState::default());
    let mut out = RecordingRenderer::default();
    ctrl.login_demo(&mut out);

    ctrl.run_select_and_upload("sales.csv", Ok(SALES_CSV.as_bytes().to_vec()), &mut out);
    ctrl.run_cleaning(&mut out);
    assert!(ctrl.state.last_cleaned_file().is_some());

    ctrl.run_select_and_upload("more.json", Ok(br#"[{"a":1}]"#.to_vec()), &mut out);

    // Scripted server answers with the same stored name
    assert_eq!(ctrl.state.last_uploaded_file(), Some("1700000000_sales.csv"));
    assert!(ctrl.state.last_cleaned_file().is_none());
    assert_eq!(ctrl.state.preview.headers, vec!["a"]);
}

#[test]
fn test_offline_session_keeps_local_preview() {
    let mut ctrl = PlatformController::new(MockApi::default(), AppState::default());
    let mut out = RecordingRenderer::default();
    ctrl.login_demo(&mut out);

    ctrl.run_select_and_upload("sales.csv", Ok(SALES_CSV.as_bytes().to_vec()), &mut out);
    ctrl.run_cleaning(&mut out);

    // The upload failed but the local selection can still be cleaned
    assert_eq!(ctrl.state.preview.row_count(), 3);
    assert_eq!(
        ctrl.api().calls().last(),
        Some(&Call::Clean("sales.csv".into()))
    );
    assert!(ctrl.state.last_cleaned_file().is_none());
    assert_eq!(out.last_kind(), Some(ToastType::Error));
}
