//! Notification banner
//!
//! One banner in the top-right corner, shared through context. Showing a new
//! notification replaces the visible one; each notification schedules its
//! own dismissal, which is ignored once it has been replaced.

use leptos::prelude::*;

use crate::core::NotificationKind;
use crate::core::notification::NotificationSlot;
#[cfg(not(feature = "ssr"))]
use crate::core::notification::{AUTO_DISMISS_MS, EXIT_ANIMATION_MS};
use crate::ui::icon::{Icon, icons};

/// Handle for raising notifications from any component
#[derive(Clone, Copy)]
pub struct NotificationContext {
    slot: RwSignal<NotificationSlot>,
}

impl NotificationContext {
    /// Show a notification and schedule its dismissal
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let Some(id) = self.slot.try_update(|slot| slot.show(kind, message)) else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let ctx = *self;
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                ctx.dismiss(id).await;
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
        }
    }

    /// Play the exit animation of notification `id`, then remove it
    #[cfg(not(feature = "ssr"))]
    async fn dismiss(&self, id: u64) {
        use gloo_timers::future::TimeoutFuture;

        let leaving = self.slot.try_update(|slot| slot.begin_dismiss(id));
        if leaving != Some(true) {
            return;
        }

        TimeoutFuture::new(EXIT_ANIMATION_MS).await;
        self.slot.update(|slot| {
            slot.remove(id);
        });
    }

    /// Close button: same exit as the timer, just earlier
    fn close(&self, id: u64) {
        #[cfg(not(feature = "ssr"))]
        {
            let ctx = *self;
            wasm_bindgen_futures::spawn_local(async move { ctx.dismiss(id).await });
        }
        #[cfg(feature = "ssr")]
        {
            self.slot.update(|slot| {
                slot.remove(id);
            });
        }
    }
}

/// Provide the notification context to the application
pub fn provide_notification_context() -> NotificationContext {
    let ctx = NotificationContext {
        slot: RwSignal::new(NotificationSlot::new()),
    };
    provide_context(ctx);
    ctx
}

/// Use the notification context from anywhere in the component tree
pub fn use_notification_context() -> NotificationContext {
    use_context::<NotificationContext>().expect("NotificationContext should be provided")
}

/// The visible notification, if any
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let ctx = use_notification_context();
    let current = move || ctx.slot.with(|slot| slot.current().cloned());

    view! {
        {move || {
            current().map(|notification| {
                let id = notification.id;
                let icon = match notification.kind {
                    NotificationKind::Error => icons::ALERT_CIRCLE,
                    NotificationKind::Success | NotificationKind::Info => icons::CHECK,
                };

                view! {
                    <div
                        class=format!("notification notification-{}", notification.kind.as_str())
                        class:notification-exiting=notification.exiting
                        style:background=notification.kind.background()
                        role="status"
                        aria-live="polite"
                    >
                        <Icon name=icon class="notification-icon"/>
                        <span class="notification-message">{notification.message}</span>
                        <button
                            class="notification-close"
                            aria-label="Zamknij powiadomienie"
                            on:click=move |_| ctx.close(id)
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
