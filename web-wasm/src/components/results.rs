//! 解析結果表示コンポーネント
//!
//! 入力だけで描画が決まる。状態は持たない。

use cellscan_common::format::{DETAILS_LABEL, PROBABILITIES_TITLE, RESULTS_TITLE};
use cellscan_common::{AnalysisResult, ResultsView};
use leptos::prelude::*;

#[component]
pub fn Results(data: AnalysisResult) -> impl IntoView {
    let view_model = ResultsView::new(&data);

    let rows = view_model
        .rows
        .into_iter()
        .map(|row| {
            let value = if row.label == DETAILS_LABEL {
                view! { <p>{row.value}</p> }.into_any()
            } else {
                view! { <strong>{row.value}</strong> }.into_any()
            };
            view! {
                <div class="result-item">
                    <span>{row.label}</span>
                    {value}
                </div>
            }
        })
        .collect_view();

    let probabilities = (!view_model.probabilities.is_empty()).then(|| {
        let items = view_model
            .probabilities
            .into_iter()
            .map(|(label, p)| view! { <li><span>{label}</span><strong>{p}</strong></li> })
            .collect_view();
        view! {
            <div class="result-probabilities">
                <h3>{PROBABILITIES_TITLE}</h3>
                <ul>{items}</ul>
            </div>
        }
    });

    view! {
        <div class="results-container">
            <h2>{RESULTS_TITLE}</h2>
            {rows}
            {probabilities}
        </div>
    }
}
