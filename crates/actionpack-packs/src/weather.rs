//! OpenWeatherMap pack: secure weather lookups over the OpenWeatherMap API

use actionpack_core::{
    args::str_arg, ActionPack, ActionSpec, AuthContext, CoreError, CoreResult, JsonObject,
    PackFactory, PackManifest, ParamSpec,
};
use actionpack_registry::{PackRegistrar, PackRegistry};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Credential key the pack's secure actions require.
pub const OPENWEATHERMAP_AUTH_KEY: &str = "X-Key-OpenWeatherMap-API";

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

pub struct OpenWeatherMapPack {
    auth: AuthContext,
    auth_keys: Vec<String>,
    manifest: PackManifest,
    client: reqwest::Client,
    base_url: String,
}

impl OpenWeatherMapPack {
    fn new(auth: AuthContext, base_url: String) -> Self {
        let manifest = PackManifest::new()
            .with(
                ActionSpec::new(
                    "get_current_weather",
                    "Get current weather for a city.\n\n\
                     Resolves the city to coordinates first, then fetches the current \
                     conditions; the upstream payload is returned verbatim.",
                )
                .secure()
                .param(ParamSpec::required("city_name", "string", "Name of the city")),
            )
            .with(
                ActionSpec::new("get_lat_lon", "Get latitude and longitude for a city.")
                    .secure()
                    .param(ParamSpec::required("city_name", "string", "Name of the city")),
            );

        Self {
            auth,
            auth_keys: vec![OPENWEATHERMAP_AUTH_KEY.to_string()],
            manifest,
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn api_key(&self) -> CoreResult<&str> {
        self.auth.get(OPENWEATHERMAP_AUTH_KEY).ok_or_else(|| {
            CoreError::Execution(format!("credential '{}' not present", OPENWEATHERMAP_AUTH_KEY))
        })
    }

    async fn get_lat_lon(&self, city_name: &str) -> CoreResult<Coordinates> {
        let api_key = self.api_key()?;
        let url = format!("{}/weather", self.base_url);
        let data: JsonValue = self
            .client
            .get(&url)
            .query(&[("q", city_name), ("appid", api_key)])
            .send()
            .await
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)?;

        // The API reports errors in-band; `cod` is 200 on success but a
        // string on failure
        if status_code(&data) != Some(200) {
            let message =
                data.get("message").and_then(JsonValue::as_str).unwrap_or("unknown error");
            return Err(CoreError::Upstream(format!(
                "geocoding '{}' failed: {}",
                city_name, message
            )));
        }

        let coord = &data["coord"];
        match (coord["lat"].as_f64(), coord["lon"].as_f64()) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(CoreError::Upstream("geocoding response missing coordinates".to_string())),
        }
    }

    async fn get_current_weather(&self, city_name: &str) -> CoreResult<JsonValue> {
        let coordinates = self.get_lat_lon(city_name).await?;
        let api_key = self.api_key()?;
        let url = format!("{}/weather", self.base_url);
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        self.client
            .get(&url)
            .query(&[("appid", api_key), ("lat", lat.as_str()), ("lon", lon.as_str())])
            .send()
            .await
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)
    }
}

#[async_trait]
impl ActionPack for OpenWeatherMapPack {
    fn name(&self) -> &str {
        "OpenWeatherMap"
    }

    fn manifest(&self) -> &PackManifest {
        &self.manifest
    }

    fn auth(&self) -> &AuthContext {
        &self.auth
    }

    fn auth_keys(&self) -> &[String] {
        &self.auth_keys
    }

    async fn call(&self, action: &str, args: &JsonObject) -> CoreResult<JsonValue> {
        match action {
            "get_current_weather" => {
                self.get_current_weather(str_arg(args, "city_name")?).await
            }
            "get_lat_lon" => {
                let coordinates = self.get_lat_lon(str_arg(args, "city_name")?).await?;
                Ok(serde_json::to_value(coordinates)?)
            }
            other => Err(CoreError::UnknownAction(other.to_string())),
        }
    }
}

fn upstream(err: reqwest::Error) -> CoreError {
    CoreError::Upstream(err.to_string())
}

/// `cod` is a number on success and a quoted number on error.
fn status_code(data: &JsonValue) -> Option<i64> {
    match data.get("cod")? {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Factory with an injectable base URL so tests can point at a mock server.
pub struct OpenWeatherMapFactory {
    base_url: String,
}

impl OpenWeatherMapFactory {
    pub fn new() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Default for OpenWeatherMapFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PackFactory for OpenWeatherMapFactory {
    fn pack_name(&self) -> &str {
        "OpenWeatherMap"
    }

    fn create(&self, auth: AuthContext) -> Arc<dyn ActionPack> {
        Arc::new(OpenWeatherMapPack::new(auth, self.base_url.clone()))
    }
}

/// Returns a registrar function for the OpenWeatherMap pack.
pub fn registrar() -> PackRegistrar {
    |registry: &mut PackRegistry| {
        registry.register(Arc::new(OpenWeatherMapFactory::new()));
        tracing::debug!("Registered OpenWeatherMap pack via registrar");
    }
}
