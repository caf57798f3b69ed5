//! Action runner: lookup, authorization check and invocation for one pack

use crate::error::{DispatchError, DispatchResult};
use actionpack_core::{ActionPack, JsonObject};
use actionpack_schema::{synthesize, OpenApiDocument};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Orchestrates description and guarded invocation against one pack
/// instance. Holds no state of its own beyond the pack reference; each
/// call is a self-contained synchronous computation plus, for
/// `run_action`, the underlying operation's own work.
pub struct ActionRunner {
    pack: Arc<dyn ActionPack>,
}

impl ActionRunner {
    pub fn new(pack: Arc<dyn ActionPack>) -> Self {
        Self { pack }
    }

    /// The pack's API description, recomputed on every call so manifest
    /// changes are always reflected.
    pub fn get_actions(&self) -> OpenApiDocument {
        synthesize(self.pack.name(), self.pack.manifest())
    }

    /// Invoke a named action with named arguments.
    ///
    /// Order of checks: existence, then the secure gate, then required
    /// arguments, then invocation. The auth context is only consulted for
    /// secure actions, and the underlying operation is never reached when
    /// any check fails.
    pub async fn run_action(
        &self,
        name: &str,
        args: &JsonObject,
    ) -> DispatchResult<JsonValue> {
        let spec = self
            .pack
            .manifest()
            .get(name)
            .filter(|spec| !spec.is_private())
            .ok_or_else(|| DispatchError::ActionNotFound(name.to_string()))?;

        if spec.secure {
            let missing = self.pack.auth().missing_keys(self.pack.auth_keys());
            if !missing.is_empty() {
                tracing::debug!(
                    pack = self.pack.name(),
                    action = name,
                    ?missing,
                    "secure action rejected"
                );
                return Err(DispatchError::Unauthorized { missing });
            }
        }

        let missing: Vec<String> = spec
            .params
            .iter()
            .filter(|param| param.required && !args.contains_key(&param.name))
            .map(|param| param.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(DispatchError::InvalidArgument { missing });
        }

        tracing::debug!(pack = self.pack.name(), action = name, "invoking action");
        self.pack
            .call(name, args)
            .await
            .map_err(|err| DispatchError::Execution(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionpack_core::{
        ActionSpec, AuthContext, CoreError, CoreResult, PackManifest, ParamSpec,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Pack that records every auth-context read and every invocation.
    struct RecordingPack {
        manifest: PackManifest,
        auth: AuthContext,
        auth_keys: Vec<String>,
        auth_reads: AtomicUsize,
        calls: AtomicUsize,
        last_args: Mutex<Option<JsonObject>>,
        fail_with: Option<&'static str>,
    }

    impl RecordingPack {
        fn new(auth: AuthContext) -> Self {
            let manifest = PackManifest::new()
                .with(
                    ActionSpec::new("fetch_report", "Fetch a report.")
                        .secure()
                        .param(ParamSpec::required("report_id", "string", "Report id")),
                )
                .with(
                    ActionSpec::new("echo", "Echo a message.")
                        .param(ParamSpec::required("message", "string", "Message"))
                        .param(ParamSpec::optional("times", "u64", "Repetitions")),
                )
                .with(ActionSpec::new("_rotate", "Internal."));
            Self {
                manifest,
                auth,
                auth_keys: vec!["API_KEY".to_string()],
                auth_reads: AtomicUsize::new(0),
                calls: AtomicUsize::new(0),
                last_args: Mutex::new(None),
                fail_with: None,
            }
        }

        fn failing(auth: AuthContext, message: &'static str) -> Self {
            Self { fail_with: Some(message), ..Self::new(auth) }
        }
    }

    #[async_trait]
    impl ActionPack for RecordingPack {
        fn name(&self) -> &str {
            "Recording"
        }

        fn manifest(&self) -> &PackManifest {
            &self.manifest
        }

        fn auth(&self) -> &AuthContext {
            self.auth_reads.fetch_add(1, Ordering::SeqCst);
            &self.auth
        }

        fn auth_keys(&self) -> &[String] {
            &self.auth_keys
        }

        async fn call(&self, action: &str, args: &JsonObject) -> CoreResult<JsonValue> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_args.lock().unwrap() = Some(args.clone());
            if let Some(message) = self.fail_with {
                return Err(CoreError::Execution(message.to_string()));
            }
            Ok(json!({"action": action}))
        }
    }

    fn args(value: JsonValue) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn unknown_action_is_not_found_and_auth_untouched() {
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack.clone());

        let err = runner.run_action("nope", &args(json!({}))).await.unwrap_err();
        assert!(matches!(err, DispatchError::ActionNotFound(name) if name == "nope"));
        assert_eq!(pack.auth_reads.load(Ordering::SeqCst), 0);
        assert_eq!(pack.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn private_action_is_not_invocable() {
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack.clone());

        let err = runner.run_action("_rotate", &args(json!({}))).await.unwrap_err();
        assert!(matches!(err, DispatchError::ActionNotFound(_)));
        assert_eq!(pack.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn secure_action_with_missing_key_is_unauthorized_and_never_invoked() {
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack.clone());

        let err = runner
            .run_action("fetch_report", &args(json!({"report_id": "r1"})))
            .await
            .unwrap_err();
        match err {
            DispatchError::Unauthorized { missing } => {
                assert_eq!(missing, vec!["API_KEY".to_string()])
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
        assert_eq!(pack.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn secure_action_with_all_keys_invokes_exactly_once_with_args() {
        let pack =
            Arc::new(RecordingPack::new(AuthContext::from_pairs([("API_KEY", "x")])));
        let runner = ActionRunner::new(pack.clone());

        let supplied = args(json!({"report_id": "r1"}));
        let result = runner.run_action("fetch_report", &supplied).await.unwrap();
        assert_eq!(result, json!({"action": "fetch_report"}));
        assert_eq!(pack.calls.load(Ordering::SeqCst), 1);
        assert_eq!(pack.last_args.lock().unwrap().as_ref(), Some(&supplied));
    }

    #[tokio::test]
    async fn non_secure_action_never_consults_the_auth_context() {
        // Declared keys are absent, which would fail the secure gate if it ran
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack.clone());

        runner.run_action("echo", &args(json!({"message": "hi"}))).await.unwrap();
        assert_eq!(pack.auth_reads.load(Ordering::SeqCst), 0);
        assert_eq!(pack.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_required_arguments_are_listed_before_invocation() {
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack.clone());

        let err = runner.run_action("echo", &args(json!({"times": 2}))).await.unwrap_err();
        match err {
            DispatchError::InvalidArgument { missing } => {
                assert_eq!(missing, vec!["message".to_string()])
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
        assert_eq!(pack.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn optional_arguments_may_be_omitted() {
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack.clone());
        runner.run_action("echo", &args(json!({"message": "hi"}))).await.unwrap();
        assert_eq!(pack.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pack_failures_surface_as_execution_errors() {
        let pack = Arc::new(RecordingPack::failing(AuthContext::new(), "boom"));
        let runner = ActionRunner::new(pack.clone());

        let err =
            runner.run_action("echo", &args(json!({"message": "hi"}))).await.unwrap_err();
        match err {
            DispatchError::Execution(message) => assert!(message.contains("boom")),
            other => panic!("expected Execution, got {other:?}"),
        }
        // Invoked once, no retry
        assert_eq!(pack.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_actions_mirrors_the_manifest() {
        let pack = Arc::new(RecordingPack::new(AuthContext::new()));
        let runner = ActionRunner::new(pack);

        let doc = runner.get_actions();
        assert_eq!(doc.operation_ids(), vec!["fetch_report", "echo"]);
        assert_eq!(doc, runner.get_actions());
    }
}
