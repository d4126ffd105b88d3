use leptos::prelude::*;

#[component]
pub fn Disclaimer() -> impl IntoView {
    view! {
        <div class="disclaimer">
            <strong>"Medical Disclaimer:"</strong>
            " This tool is for research and preliminary screening purposes only. \
            It should not be used as a primary diagnostic tool. Always consult with qualified healthcare professionals \
            for medical diagnosis and advice."
        </div>
    }
}
