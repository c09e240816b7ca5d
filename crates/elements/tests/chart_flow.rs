//! End-to-end flow through one session: login redirect followed by a chart
//! with live selections, observed on the forward-message channel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use slate_elements::{Chart, Figure, OnSelect};
use slate_runtime::config::{AuthSecrets, Secrets};
use slate_runtime::message::Element;
use slate_runtime::{ForwardMessage, SessionContext, UserInfo};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn login_then_chart_through_one_queue() {
    init_tracing();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let ctx = SessionContext::new(tx);

    let mut info = HashMap::new();
    info.insert("email".to_string(), Some("test@example.com".to_string()));
    ctx.set_user_info(info);

    let secrets = Arc::new(Secrets {
        auth: Some(AuthSecrets {
            redirect_uri: Some("http://localhost:8501/oauth2callback".to_string()),
            client_id: Some("client-1".to_string()),
        }),
        ..Default::default()
    });

    let user = UserInfo::new(Some(Arc::clone(&ctx)), Some(secrets));
    assert_eq!(user.email(), Some("test@example.com".to_string()));
    user.login(false).unwrap();

    let state = Chart::new(Figure::scatter(&[1.0, 2.0], &[3.0, 4.0]))
        .with_on_select(OnSelect::Rerun)
        .with_key("lifespan")
        .show(&ctx)
        .unwrap();
    assert!(state.select.point_indices.is_empty());

    // First message: the login redirect
    match rx.try_recv().unwrap() {
        ForwardMessage::AuthRedirect(redirect) => {
            assert_eq!(redirect.action_type, "login");
            assert!(redirect.url.contains("response_type=code"));
            assert!(redirect.url.contains("scope=profile+email"));
        }
        _ => panic!("expected auth redirect first"),
    }

    // Second message: the chart element with all selection modes active
    let msg = rx.try_recv().unwrap();
    match msg.as_new_element() {
        Some(Element::Chart(proto)) => {
            assert_eq!(proto.id, "lifespan");
            assert_eq!(proto.selection_mode, vec![0, 1, 2]);
            assert_eq!(proto.theme, "streamlit");
        }
        _ => panic!("expected chart element"),
    }

    assert!(rx.try_recv().is_err());

    // The widget state landed in session state and round-trips as JSON
    let raw = ctx.session_state().get_raw("lifespan").unwrap();
    assert_eq!(raw["select"]["point_indices"], serde_json::json!([]));
}
