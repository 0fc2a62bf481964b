use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A message for the visitor: title, body and how alarming it should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Anything that can put a notice in front of the visitor.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Visible toasts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn push(&mut self, toast: Toast, limit: usize) {
        self.toasts.insert(0, toast);
        self.toasts.truncate(limit);
    }

    fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.push(toast, config::TOAST_LIMIT),
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

/// Shared through context so any component can raise a toast.
#[derive(Clone)]
pub struct ToastHandle {
    list: UseReducerHandle<ToastList>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.list == *other.list
    }
}

impl ToastHandle {
    pub fn new(list: UseReducerHandle<ToastList>) -> Self {
        Self { list }
    }

    pub fn dismiss(&self, id: u32) {
        self.list.dispatch(ToastAction::Dismiss(id));
    }
}

impl Notifier for ToastHandle {
    fn notify(&self, notice: Notice) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        debug!("Showing toast {}: {}", id, notice.title);
        self.list.dispatch(ToastAction::Push(Toast { id, notice }));

        // Dismissal goes through the reducer so it sees whatever is on screen then.
        let list = self.list.clone();
        Timeout::new(config::toast_duration_ms(), move || {
            list.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[function_component(ToastViewport)]
pub fn toast_viewport() -> Html {
    let handle = use_context::<ToastHandle>();
    let Some(handle) = handle else {
        return html! {};
    };

    html! {
        <div class="toast-viewport">
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        width: min(420px, calc(100vw - 2rem));
                    }
                    .toast {
                        position: relative;
                        background: #fff;
                        color: #111827;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.75rem;
                        padding: 1rem 2.5rem 1rem 1rem;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.25s ease-out;
                    }
                    .toast.destructive {
                        background: #dc2626;
                        color: #fff;
                        border-color: #b91c1c;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for handle.list.toasts().iter().map(|toast| {
                let id = toast.id;
                let on_close = {
                    let handle = handle.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        handle.dismiss(id);
                    })
                };
                let variant = match toast.notice.variant {
                    ToastVariant::Default => None,
                    ToastVariant::Destructive => Some("destructive"),
                };
                html! {
                    <div key={id} class={classes!("toast", variant)} role="status">
                        <div class="toast-title">{ &toast.notice.title }</div>
                        <div class="toast-description">{ &toast.notice.description }</div>
                        <button class="toast-close" onclick={on_close}>{ "✕" }</button>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast { id, notice: Notice::new(format!("toast {}", id), "") }
    }

    #[test]
    fn newest_toast_comes_first() {
        let mut list = ToastList::default();
        list.push(toast(1), 3);
        list.push(toast(2), 3);

        let ids: Vec<u32> = list.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn oldest_toast_dropped_past_limit() {
        let mut list = ToastList::default();
        for id in 1..=4 {
            list.push(toast(id), 3);
        }

        let ids: Vec<u32> = list.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut list = ToastList::default();
        list.push(toast(1), 3);
        list.push(toast(2), 3);

        list.dismiss(1);
        list.dismiss(42);

        assert_eq!(list.toasts(), &[toast(2)]);
    }

    #[test]
    fn reducer_applies_actions() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast(7)));
        assert_eq!(list.toasts().len(), 1);

        let list = list.reduce(ToastAction::Dismiss(7));
        assert!(list.toasts().is_empty());
    }

    #[function_component(SeededViewport)]
    fn seeded_viewport() -> Html {
        let list = use_reducer(|| {
            let mut list = ToastList::default();
            list.push(
                Toast { id: 9, notice: Notice::destructive("Please fill in all fields", "Both needed") },
                3,
            );
            list
        });

        html! {
            <ContextProvider<ToastHandle> context={ToastHandle::new(list)}>
                <ToastViewport />
            </ContextProvider<ToastHandle>>
        }
    }

    #[tokio::test]
    async fn viewport_renders_toasts_from_context() {
        let html = yew::ServerRenderer::<SeededViewport>::new().render().await;

        assert!(html.contains("toast-viewport"));
        assert!(html.contains("toast destructive"));
        assert!(html.contains("Please fill in all fields"));
        assert!(html.contains("Both needed"));
    }

    #[tokio::test]
    async fn viewport_outside_provider_renders_nothing() {
        let html = yew::ServerRenderer::<ToastViewport>::new().render().await;

        assert!(!html.contains("toast-viewport"));
    }

    #[test]
    fn destructive_notice_keeps_text() {
        let notice = Notice::destructive("Oops", "Try again");
        assert_eq!(notice.variant, ToastVariant::Destructive);
        assert_eq!(notice.title, "Oops");
        assert_eq!(notice.description, "Try again");
    }
}
