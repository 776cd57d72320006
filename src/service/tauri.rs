// Grid service reached through the Tauri IPC bridge (`window.__TAURI__.core.invoke`).

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use super::GridService;
use crate::config::{CMD_GET_GRID, CMD_WORD_LIST_OPTIONS};
use crate::model::Puzzle;
use crate::util::js_error_message;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct GetGridArgs<'a> {
    list: &'a str,
    size: u32,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&raw).map_err(|e| js_error_message(&e))
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, String> {
    let raw = js_sys::JSON::stringify(value)
        .map_err(|e| js_error_message(&e))?
        .as_string()
        .ok_or_else(|| "response is not serializable".to_string())?;
    serde_json::from_str(&raw).map_err(|e| format!("malformed response: {e}"))
}

async fn call<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> Result<T, String> {
    let args = to_js(args)?;
    let value = invoke(cmd, args).await.map_err(|e| js_error_message(&e))?;
    from_js(&value)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TauriGridService;

impl GridService for TauriGridService {
    async fn word_list_options(&self) -> Result<Vec<String>, String> {
        call(CMD_WORD_LIST_OPTIONS, &NoArgs {}).await
    }

    async fn grid(&self, list: &str, size: u32) -> Result<Puzzle, String> {
        call(CMD_GET_GRID, &GetGridArgs { list, size }).await
    }
}
