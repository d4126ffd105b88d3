//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップで画像を1枚受け取り `on_upload` に渡す。
//! 解析中は受け付けない。

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement, Url};

#[component]
pub fn UploadArea<F>(on_upload: F, is_loading: Signal<bool>) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (file_name, set_file_name) = signal(None::<String>);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let handle_file = move |file: File| {
        // 前回のプレビューURLを解放
        if let Some(old) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        set_preview_url.set(Url::create_object_url_with_blob(&file).ok());
        set_file_name.set(Some(file.name()));
        on_upload(file);
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if is_loading.get_untracked() {
                return;
            }

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_loading.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // 同じファイルを再選択しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_loading.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                accept="image/*"
                class="file-input"
                node_ref=input_ref
                disabled=move || is_loading.get()
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
            <Show
                when=move || !is_loading.get()
                fallback=|| view! {
                    <div class="upload-icon">"⏳"</div>
                    <p>"Analyzing..."</p>
                }
            >
                <div class="upload-icon">"🔬"</div>
                <p>"Drag & drop a cell image here, or click to select"</p>
                <p class="text-muted">"Supported formats: JPEG, PNG, TIFF"</p>
            </Show>
            {move || preview_url.get().map(|url| view! {
                <div class="upload-preview">
                    <img src=url alt="Selected image" />
                    <p class="text-muted">{file_name.get().unwrap_or_default()}</p>
                </div>
            })}
        </div>
    }
}
