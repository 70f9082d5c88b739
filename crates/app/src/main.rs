use dioxus::prelude::*;
use input_core::Notification;
use input_ui::{IconInput, NotificationListener};

mod config;

/// Most recent notifications kept on screen.
const LOG_LIMIT: usize = 12;

fn main() {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG) {
        eprintln!("[app] logger already initialised: {e}");
    }
    config::load_config();
    dioxus::launch(App);
}

/// One line of the event log: `event-name value`.
fn log_line(notification: &Notification) -> String {
    format!("{} {}", notification.event_name(), notification.detail())
}

/// Push `line` to the front of `log`, dropping the oldest beyond the limit.
fn push_log(log: &mut Vec<String>, line: String) {
    log.insert(0, line);
    log.truncate(LOG_LIMIT);
}

#[component]
fn App() -> Element {
    let defaults = config::input_config();
    let mut log = use_signal(Vec::<String>::new);
    let mut submitted = use_signal(String::new);

    rsx! {
        main { class: "demo",
            h1 { "icon-input" }

            // Host listens once, at the container level.
            NotificationListener {
                on_notification: move |n: Notification| push_log(&mut log.write(), log_line(&n)),

                section {
                    IconInput {
                        placeholder: defaults.placeholder.clone(),
                        icon: defaults.icon.clone(),
                        icon_right: true,
                        vars: defaults.style.clone(),
                        on_enter_pressed: move |n: Notification| submitted.set(n.value),
                    }
                }
                section {
                    IconInput {
                        placeholder: "Pick a headset",
                        icon: "hardware:headset",
                        icon_left: true,
                        text_right: true,
                        vars: defaults.style.clone(),
                    }
                }
                section {
                    IconInput {
                        placeholder: "No icon",
                        vars: defaults.style.clone(),
                    }
                }
            }

            p { "Submitted: {submitted}" }
            ul { class: "demo-log",
                for line in log.read().iter() {
                    li { "{line}" }
                }
            }
        }
    }
}
