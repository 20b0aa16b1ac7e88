use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

const TOAST_MS: i32 = 4000;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Runs `f` once after `ms`; returns the timer handle.
fn schedule(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let win = web_sys::window()?;
    let cb = Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref::<js_sys::Function>(), ms)
        .ok()
}

#[function_component]
pub fn Toast(props: &ToastProps) -> Html {
    // Auto-dismiss; a newer message cancels the older timer.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |msg| {
            let handle = msg
                .as_ref()
                .and_then(|_| schedule(TOAST_MS, move || on_dismiss.emit(())));
            move || {
                if let (Some(win), Some(id)) = (web_sys::window(), handle) {
                    win.clear_timeout_with_handle(id);
                }
            }
        });
    }

    let Some(message) = props.message.clone() else {
        return html! {};
    };
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; left:50%; bottom:24px; transform:translateX(-50%); background:#1c2128; border:1px solid #da3633; border-radius:8px; padding:8px 12px; display:flex; gap:10px; align-items:center; font-size:13px; z-index:70;">
            <span>{ message }</span>
            <button onclick={dismiss_cb} style="padding:2px 8px;">{"OK"}</button>
        </div>
    }
}
