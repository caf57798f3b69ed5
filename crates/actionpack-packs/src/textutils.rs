//! TextUtils pack: non-secure, pure text operations

use actionpack_core::{
    args::{str_arg, u64_arg_or},
    ActionPack, ActionSpec, AuthContext, CoreError, CoreResult, JsonObject, PackFactory,
    PackManifest, ParamSpec,
};
use actionpack_registry::{PackRegistrar, PackRegistry};
use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

/// Upper bound for `repeat`; larger values would let one request allocate
/// arbitrary memory.
const MAX_REPEAT_TIMES: u64 = 1_000;

pub struct TextUtilsPack {
    auth: AuthContext,
    manifest: PackManifest,
}

impl TextUtilsPack {
    fn new(auth: AuthContext) -> Self {
        let manifest = PackManifest::new()
            .with(
                ActionSpec::new("echo", "Echo a message back.")
                    .param(ParamSpec::required("message", "string", "Message to echo")),
            )
            .with(
                ActionSpec::new("word_count", "Count whitespace-separated words.")
                    .param(ParamSpec::required("text", "string", "Text to count")),
            )
            .with(
                ActionSpec::new(
                    "repeat",
                    "Repeat a message.\n\nJoins the repetitions with single spaces.",
                )
                .param(ParamSpec::required("message", "string", "Message to repeat"))
                .param(ParamSpec::optional("times", "u64", "Repetitions, defaults to 1")),
            );
        Self { auth, manifest }
    }
}

#[async_trait]
impl ActionPack for TextUtilsPack {
    fn name(&self) -> &str {
        "TextUtils"
    }

    fn manifest(&self) -> &PackManifest {
        &self.manifest
    }

    fn auth(&self) -> &AuthContext {
        &self.auth
    }

    async fn call(&self, action: &str, args: &JsonObject) -> CoreResult<JsonValue> {
        match action {
            "echo" => Ok(json!({ "message": str_arg(args, "message")? })),
            "word_count" => {
                let text = str_arg(args, "text")?;
                Ok(json!({ "words": text.split_whitespace().count() }))
            }
            "repeat" => {
                let message = str_arg(args, "message")?;
                let times = u64_arg_or(args, "times", 1)?;
                if times > MAX_REPEAT_TIMES {
                    return Err(CoreError::InvalidArgument(format!(
                        "'times' must be at most {}",
                        MAX_REPEAT_TIMES
                    )));
                }
                let repeated = vec![message; times as usize].join(" ");
                Ok(json!({ "message": repeated }))
            }
            other => Err(CoreError::UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct TextUtilsFactory;

impl TextUtilsFactory {
    pub fn new() -> Self {
        Self
    }
}

impl PackFactory for TextUtilsFactory {
    fn pack_name(&self) -> &str {
        "TextUtils"
    }

    fn create(&self, auth: AuthContext) -> Arc<dyn ActionPack> {
        Arc::new(TextUtilsPack::new(auth))
    }
}

/// Returns a registrar function for the TextUtils pack.
pub fn registrar() -> PackRegistrar {
    |registry: &mut PackRegistry| {
        registry.register(Arc::new(TextUtilsFactory::new()));
        tracing::debug!("Registered TextUtils pack via registrar");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionpack_runtime::{ActionRunner, DispatchError};

    fn pack() -> Arc<dyn ActionPack> {
        TextUtilsFactory::new().create(AuthContext::new())
    }

    fn args(value: JsonValue) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn echo_and_word_count() {
        let pack = pack();
        let echoed = pack.call("echo", &args(json!({"message": "hi"}))).await.unwrap();
        assert_eq!(echoed, json!({"message": "hi"}));

        let counted =
            pack.call("word_count", &args(json!({"text": "one  two three"}))).await.unwrap();
        assert_eq!(counted, json!({"words": 3}));
    }

    #[tokio::test]
    async fn repeat_defaults_to_one() {
        let pack = pack();
        let once = pack.call("repeat", &args(json!({"message": "go"}))).await.unwrap();
        assert_eq!(once, json!({"message": "go"}));

        let thrice =
            pack.call("repeat", &args(json!({"message": "go", "times": 3}))).await.unwrap();
        assert_eq!(thrice, json!({"message": "go go go"}));
    }

    #[tokio::test]
    async fn runner_accepts_the_pack_without_credentials() {
        // No secure actions, so an empty auth context is never a problem
        let runner = ActionRunner::new(pack());
        let doc = runner.get_actions();
        assert_eq!(doc.operation_ids(), vec!["echo", "word_count", "repeat"]);

        let result =
            runner.run_action("echo", &args(json!({"message": "hi"}))).await.unwrap();
        assert_eq!(result, json!({"message": "hi"}));
    }

    #[tokio::test]
    async fn repeat_rejects_counts_above_the_cap() {
        let pack = pack();
        let err = pack
            .call("repeat", &args(json!({"message": "go", "times": u64::MAX})))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(message) if message.contains("times")));

        let err = pack
            .call("repeat", &args(json!({"message": "go", "times": MAX_REPEAT_TIMES + 1})))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));

        // The cap itself is still serviced
        pack.call("repeat", &args(json!({"message": "go", "times": MAX_REPEAT_TIMES})))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn oversized_repeat_surfaces_as_a_structured_execution_error() {
        let runner = ActionRunner::new(pack());
        let err = runner
            .run_action("repeat", &args(json!({"message": "go", "times": u64::MAX})))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Execution(_)));
    }

    #[tokio::test]
    async fn missing_required_argument_is_caught_by_the_runner() {
        let runner = ActionRunner::new(pack());
        let err = runner.run_action("repeat", &args(json!({"times": 2}))).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidArgument { missing } if missing == ["message"]));
    }
}
