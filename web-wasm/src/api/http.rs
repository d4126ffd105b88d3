//! 解析API呼び出し（fetch + FormData）

use cellscan_common::{interpret_analysis_response, AnalysisError, AnalysisResult, Analyzer, IMAGE_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpAnalyzer {
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Analyzer for HttpAnalyzer {
    type Upload = File;

    async fn analyze(&self, upload: File) -> Result<AnalysisResult, AnalysisError> {
        let (status, body) = post_image(&self.endpoint, &upload)
            .await
            .map_err(|e| AnalysisError::Other(js_error_message(&e)))?;
        interpret_analysis_response(status, &body)
    }
}

/// multipartで画像を送信し、ステータスとボディを返す
async fn post_image(endpoint: &str, file: &File) -> Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form.into());

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JSの例外からメッセージを取り出す（Errorオブジェクトまたは文字列）
fn js_error_message(value: &JsValue) -> Option<String> {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return Some(String::from(err.message()));
    }
    value.as_string()
}
