use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

/// Context for the transient notice raised by unimplemented actions.
///
/// A single message is visible at a time; showing a new one replaces both
/// the current message and its pending auto-clear timer.
#[derive(Clone, PartialEq)]
pub struct NoticeContext {
    pub show: Callback<String>,
    pub clear: Callback<()>,
}

impl NoticeContext {
    /// Convenience for the unimplemented-action stubs.
    pub fn coming_soon(&self, feature: &str) {
        self.show.emit(format!("{} is coming soon.", feature));
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Children,
}

#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let message = use_state(|| None::<String>);
    // Owning handle for the pending auto-clear; dropping it cancels the
    // callback, so rapid re-triggers never leave stale timers behind.
    let pending_clear = use_mut_ref(|| None::<Timeout>);

    let clear = {
        let message = message.clone();
        let pending_clear = pending_clear.clone();
        Callback::from(move |_| {
            pending_clear.borrow_mut().take();
            message.set(None);
        })
    };

    let show = {
        let message = message.clone();
        let pending_clear = pending_clear.clone();
        Callback::from(move |text: String| {
            log::info!("Showing notice: {}", text);
            message.set(Some(text));

            let duration = settings::get_settings().notice_duration_ms;
            let message = message.clone();
            let timeout = Timeout::new(duration, move || {
                message.set(None);
            });
            // Replacing the previous handle cancels its pending callback.
            *pending_clear.borrow_mut() = Some(timeout);
        })
    };

    let context = NoticeContext { show, clear };

    html! {
        <ContextProvider<NoticeContext> context={context}>
            {props.children.clone()}
            {if let Some(text) = &*message {
                html! {
                    <div class="toast toast-top toast-center z-50">
                        <div class="alert alert-warning shadow-lg">
                            <i class="fas fa-info-circle"></i>
                            <span>{text}</span>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </ContextProvider<NoticeContext>>
    }
}
