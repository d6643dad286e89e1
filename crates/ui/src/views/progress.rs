use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::state::use_quiz;
use crate::vm::{AttemptRowVm, map_progress};

#[component]
pub fn ProgressView() -> Element {
    let quiz = use_quiz();
    let vm = map_progress(quiz.state().history());

    rsx! {
        div { class: "page progress-page",
            Card {
                CardHeader {
                    CardTitle { "Progress" }
                    p { class: "progress-summary", "{vm.summary_label}" }
                }
                CardContent {
                    if !vm.rows.is_empty() {
                        ul { class: "attempt-list",
                            for (index, row) in vm.rows.into_iter().enumerate() {
                                AttemptRow { key: "{index}", row }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttemptRow(row: AttemptRowVm) -> Element {
    let class = if row.is_correct {
        "attempt attempt--correct"
    } else {
        "attempt attempt--incorrect"
    };
    rsx! {
        li { class,
            p { class: "attempt-question", "{row.question}" }
            p { class: "attempt-meta",
                span { "{row.scope_label}" }
                span { " · {row.answered_at_str}" }
            }
            p { class: "attempt-answer", "Answered {row.answer}: {row.result_label}" }
        }
    }
}
