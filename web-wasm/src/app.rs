//! メインアプリケーションコンポーネント

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use cellscan_common::{AnalysisSession, Analyzer};
use crate::api::Backend;
use crate::components::{
    disclaimer::Disclaimer,
    results::Results,
    upload_area::UploadArea,
};

const APP_TITLE: &str = "Cancer Cell Detection Analysis";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // ローディング・エラー・結果はセッション1つにまとめて持つ
    let session = RwSignal::new(AnalysisSession::new());
    let backend = StoredValue::new(Backend::from_build_env());
    backend.with_value(|b| match b {
        Backend::Http(a) => log!("Analysis endpoint: {}", a.endpoint()),
        Backend::Mock(_) => log!("Analysis backend: mock"),
    });

    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));

    // 解析ハンドラ
    let handle_analysis = move |image_file: File| {
        let Some(ticket) = session.try_update(|s| s.begin()) else {
            return;
        };
        log!("Analyzing image: {} ({} bytes)", image_file.name(), image_file.size());

        let backend = backend.get_value();
        spawn_local(async move {
            let outcome = backend.analyze(image_file).await;
            if let Err(e) = &outcome {
                error!("Analysis error: {}", e);
            }
            session.update(|s| {
                s.finish(ticket, outcome);
            });
        });
    };

    view! {
        <div class="app-container">
            <header class="header">
                <h1>{APP_TITLE}</h1>
            </header>
            <Disclaimer />

            <UploadArea on_upload=handle_analysis is_loading=is_loading />

            {move || session.with(|s| s.error().map(|message| {
                let message = message.to_string();
                view! { <div class="error-message">{message}</div> }
            }))}

            {move || session.with(|s| s.results().cloned()).map(|data| view! { <Results data=data /> })}
        </div>
    }
}
