//! Unit tests for request dispatch and envelope resolution

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::application::dispatch::Dispatcher;
    use crate::domain::envelope::EnvelopeConvention;
    use crate::error::DispatchError;
    use crate::port::transport::mocks::ScriptedTransport;
    use crate::port::transport::{Method, RequestBody, RequestSpec, TransportError};

    fn dispatcher(transport: Arc<ScriptedTransport>) -> Dispatcher {
        Dispatcher::new(transport, EnvelopeConvention::ResultKeyed)
    }

    #[tokio::test]
    async fn test_zero_result_resolves_to_payload() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(json!({"result": 0, "id": "abc123"}));

        let payload = dispatcher(transport.clone())
            .dispatch(RequestSpec::new(Method::Get, "api/task"))
            .await
            .unwrap();

        assert_eq!(payload["id"], "abc123");
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_nonzero_result_is_application_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(json!({"result": 2, "task": null}));

        let err = dispatcher(transport)
            .dispatch(RequestSpec::new(Method::Get, "api/task"))
            .await
            .unwrap_err();

        match err {
            DispatchError::Application(code) => assert_eq!(code, 2),
            other => panic!("expected application error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through_with_status() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_error(TransportError::Status {
            status: 500,
            detail: "internal server error".to_string(),
        });

        let err = dispatcher(transport)
            .dispatch(RequestSpec::new(Method::Post, "api/task"))
            .await
            .unwrap_err();

        match err {
            DispatchError::Transport { status, .. } => assert_eq!(status, 500),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_has_status_zero() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_error(TransportError::Connect("refused".to_string()));

        let err = dispatcher(transport)
            .dispatch(RequestSpec::new(Method::Get, "api/executors"))
            .await
            .unwrap_err();

        match err {
            DispatchError::Transport { status, .. } => assert_eq!(status, 0),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_error_status_fails_even_with_json_body() {
        // A 500 whose body is JSON without a code field must not slip
        // through the falsy-code success rule.
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_reply(500, br#"{"error": "internal"}"#.to_vec());

        let err = dispatcher(transport)
            .dispatch(RequestSpec::new(Method::Delete, "api/task"))
            .await
            .unwrap_err();

        match err {
            DispatchError::Transport { status, detail } => {
                assert_eq!(status, 500);
                assert!(detail.contains("500"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_2xx_statuses_other_than_200_still_resolve() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_reply(201, serde_json::to_vec(&json!({"result": 0, "id": "a"})).unwrap());

        let payload = dispatcher(transport)
            .dispatch(RequestSpec::new(Method::Post, "api/task"))
            .await
            .unwrap();
        assert_eq!(payload["id"], "a");
    }

    #[tokio::test]
    async fn test_json_body_reaches_transport_intact() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(json!({"result": 0}));

        let body = json!({"user": 0, "priority": 5});
        let spec = RequestSpec::new(Method::Post, "api/task").with_json(body.clone());
        dispatcher(transport.clone()).dispatch(spec).await.unwrap();

        let seen = transport.requests();
        assert_eq!(seen[0].body, RequestBody::Json(body));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_transport_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_reply(200, b"<html>gateway timeout</html>".to_vec());

        let err = dispatcher(transport)
            .dispatch(RequestSpec::new(Method::Get, "api/task"))
            .await
            .unwrap_err();

        match err {
            DispatchError::Transport { status, detail } => {
                assert_eq!(status, 200);
                assert!(detail.contains("invalid envelope"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_spec_reaches_transport_unchanged() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(json!({"result": 0}));

        let spec = RequestSpec::new(Method::Delete, "api/task").with_query("id", "42");
        dispatcher(transport.clone()).dispatch(spec).await.unwrap();

        let seen = transport.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::Delete);
        assert_eq!(seen[0].endpoint, "api/task");
        assert_eq!(seen[0].query, vec![("id".to_string(), "42".to_string())]);
        assert_eq!(seen[0].body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_code_keyed_convention_unwraps_res_payload() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(json!({"code": 0, "res": {"value": 7}}));

        let dispatcher = Dispatcher::new(transport, EnvelopeConvention::CodeKeyed);
        let payload = dispatcher
            .dispatch(RequestSpec::new(Method::Get, "api/value"))
            .await
            .unwrap();

        assert_eq!(payload, json!({"value": 7}));
    }
}
