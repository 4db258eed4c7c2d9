use super::queue::{Toast, ToastId};
use crate::components::imports::*;

use gloo_timers::callback::Timeout;

pub static TOASTER_CLASS: &str = "toaster";

// Fixed region in the bottom right corner. Always rendered, even when empty,
// so toasts raised during navigation have somewhere to go.
#[styled_component]
pub fn Toaster() -> Html {
    let toasts = use_toast();
    let theme = use_theme();
    let palette = theme.palette();

    let style = css!(
        "
            position: fixed;
            right: 1em;
            bottom: 1em;
            z-index: 100;
            display: flex;
            flex-direction: column;
            gap: .5em;
            width: min(420px, calc(100vw - 2em));
            margin: 0;
            padding: 0;
            list-style: none;

            li {
                background-color: ${contrast_bg_color};
                border: 1px solid ${box_border_color};
                border-radius: 8px;
                padding: 1em 2.5em 1em 1em;
                position: relative;
                transition: opacity .2s ease-out;
            }

            li.closed {
                opacity: 0;
            }

            li.toast-success {
                border-color: #22c55e;
            }

            li.toast-destructive {
                background-color: #7f1d1d;
                color: #fef2f2;
            }

            .toast-description {
                color: ${muted_text_color};
                font-size: .9em;
                margin-top: .25em;
            }

            .toast-close {
                position: absolute;
                top: .5em;
                right: .5em;
                background: none;
                border: none;
                color: inherit;
                cursor: pointer;
            }
        ",
        contrast_bg_color = palette.contrast_bg_color.clone(),
        box_border_color = palette.box_border_color.clone(),
        muted_text_color = palette.muted_text_color.clone(),
    );

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: ToastId| toasts.dismiss(id))
    };
    let on_remove = {
        let toasts = toasts.clone();
        Callback::from(move |id: ToastId| toasts.remove(id))
    };
    let conf = toasts.conf();

    html! {
        <ol class={ classes!(TOASTER_CLASS, style) } aria-label="Notifications">
            { for toasts.toasts().iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    duration_ms={conf.duration_ms}
                    remove_delay_ms={conf.remove_delay_ms}
                    on_dismiss={on_dismiss.clone()}
                    on_remove={on_remove.clone()}
                />
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub duration_ms: u32,
    pub remove_delay_ms: u32,
    pub on_dismiss: Callback<ToastId>,
    pub on_remove: Callback<ToastId>,
}

// An open toast closes itself after `duration_ms`; a closed one is removed
// after `remove_delay_ms`. The pending timer is dropped on unmount.
#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let ToastItemProps {
        toast,
        duration_ms,
        remove_delay_ms,
        on_dismiss,
        on_remove,
    } = props;

    {
        let on_dismiss = on_dismiss.clone();
        let on_remove = on_remove.clone();
        let (duration_ms, remove_delay_ms) = (*duration_ms, *remove_delay_ms);
        use_effect_with_deps(
            move |&(id, open)| {
                let timeout = if open {
                    Timeout::new(duration_ms, move || on_dismiss.emit(id))
                } else {
                    Timeout::new(remove_delay_ms, move || on_remove.emit(id))
                };
                move || drop(timeout)
            },
            (toast.id, toast.open),
        );
    }

    let onclick = {
        let on_dismiss = on_dismiss.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = classes!(
        "toast",
        toast.kind.class(),
        (!toast.open).then_some("closed")
    );

    html! {
        <li {class} role="status">
            <div class="toast-title">{ toast.title.clone() }</div>
            if let Some(description) = toast.description.clone() {
                <div class="toast-description">{ description }</div>
            }
            <button class="toast-close" aria-label="Close" {onclick}>{ "×" }</button>
        </li>
    }
}
