use dioxus::prelude::*;
use services::{QuizController, QuizStore};
use tutor_core::model::{Difficulty, Topic};

use crate::components::{
    Alert, AlertDescription, AlertVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Label, RadioGroup, RadioGroupItem,
};
use crate::context::AppContext;
use crate::state::{QuizSignal, use_quiz};
use crate::toast::{ToastService, use_toast};
use crate::vm::map_feedback;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

type TutorController = QuizController<QuizSignal, ToastService>;

#[component]
pub fn MathTutorView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_quiz();
    let toasts = use_toast();

    let controller = use_hook(|| {
        TutorController::new(ctx.tutor_api(), quiz, toasts)
            .with_feedback_reveal_delay(ctx.config().feedback_reveal_delay())
            .with_clock(ctx.clock())
    });

    // Tasks spawned here belong to this component and are dropped with it.
    let request_question = use_callback({
        let controller = controller.clone();
        move |()| {
            let controller = controller.clone();
            spawn(async move {
                let _ = controller.request_question().await;
            });
        }
    });
    let submit_answer = use_callback({
        let controller = controller.clone();
        move |()| {
            let controller = controller.clone();
            spawn(async move {
                let _ = controller.submit_answer().await;
            });
        }
    });
    let next_question = use_callback(move |()| {
        let controller = controller.clone();
        spawn(async move {
            let _ = controller.next_question().await;
        });
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<TutorTestHandles>() {
            handles.register(request_question, submit_answer, next_question);
        }
    }

    let state = quiz.state();
    let loading = state.is_loading();
    let selection = state.selection();
    let topic_value = selection.topic.map_or("", Topic::as_str);
    let difficulty_value = selection.difficulty.map_or("", Difficulty::as_str);
    let selected_answer = state.selected_answer().map(str::to_string);
    let feedback = state.feedback().map(map_feedback);
    let answered = feedback.is_some();

    rsx! {
        div { class: "page tutor-page",
            Card {
                CardHeader {
                    CardTitle { "Math Tutor" }
                    p { class: "view-subtitle", "Pick a topic and level, then test yourself." }
                }
                CardContent {
                    div { class: "tutor-controls",
                        select {
                            class: "select",
                            id: "topic-select",
                            value: "{topic_value}",
                            disabled: loading,
                            onchange: move |evt| {
                                if let Ok(topic) = evt.value().parse::<Topic>() {
                                    quiz.update(|state| state.select_topic(topic));
                                }
                            },
                            option { value: "", disabled: true, "Select topic" }
                            for topic in Topic::ALL {
                                option { value: topic.as_str(), "{topic.label()}" }
                            }
                        }
                        select {
                            class: "select",
                            id: "difficulty-select",
                            value: "{difficulty_value}",
                            disabled: loading,
                            onchange: move |evt| {
                                if let Ok(difficulty) = evt.value().parse::<Difficulty>() {
                                    quiz.update(|state| state.select_difficulty(difficulty));
                                }
                            },
                            option { value: "", disabled: true, "Select difficulty" }
                            for difficulty in Difficulty::ALL {
                                option { value: difficulty.as_str(), "{difficulty.label()}" }
                            }
                        }
                        Button {
                            id: "generate-question",
                            disabled: loading,
                            onclick: move |_| request_question.call(()),
                            if loading { "Loading..." } else { "Generate Question" }
                        }
                    }

                    if let Some(question) = state.question() {
                        div { class: "tutor-question",
                            p { class: "tutor-question-text", "{question.text()}" }
                            RadioGroup {
                                for (index, option) in question.options().iter().enumerate() {
                                    div { class: "radio-row", key: "{index}",
                                        RadioGroupItem {
                                            id: "option-{index}",
                                            value: option.text().to_string(),
                                            checked: selected_answer.as_deref() == Some(option.text()),
                                            disabled: loading || answered,
                                            on_select: move |text: String| {
                                                quiz.update(|state| {
                                                    state.select_answer(&text);
                                                });
                                            },
                                        }
                                        Label { html_for: "option-{index}", "{option.text()}" }
                                    }
                                }
                            }
                            if !answered {
                                Button {
                                    id: "submit-answer",
                                    disabled: loading || selected_answer.is_none(),
                                    onclick: move |_| submit_answer.call(()),
                                    if loading { "Checking..." } else { "Submit Answer" }
                                }
                            }
                        }
                    }

                    if let Some(feedback) = feedback {
                        div { class: "tutor-feedback",
                            Alert {
                                variant: if feedback.is_correct { AlertVariant::Default } else { AlertVariant::Destructive },
                                AlertDescription {
                                    p { class: "feedback-title", "{feedback.title}" }
                                    if !feedback.explanation.is_empty() {
                                        p { class: "feedback-explanation", "{feedback.explanation}" }
                                    }
                                    if !feedback.steps.is_empty() {
                                        div { class: "feedback-steps",
                                            h4 { "Solution Steps:" }
                                            ol {
                                                for step in feedback.steps.iter() {
                                                    li { "{step}" }
                                                }
                                            }
                                        }
                                    }
                                    if let Some(stats) = feedback.stats_label.as_ref() {
                                        p { class: "feedback-stats", "{stats}" }
                                    }
                                }
                            }
                            Button {
                                id: "next-question",
                                variant: ButtonVariant::Secondary,
                                disabled: loading,
                                onclick: move |_| next_question.call(()),
                                "Next Question"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TutorTestHandles {
    request_question: Rc<RefCell<Option<Callback<()>>>>,
    submit_answer: Rc<RefCell<Option<Callback<()>>>>,
    next_question: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl TutorTestHandles {
    pub(crate) fn register(
        &self,
        request_question: Callback<()>,
        submit_answer: Callback<()>,
        next_question: Callback<()>,
    ) {
        *self.request_question.borrow_mut() = Some(request_question);
        *self.submit_answer.borrow_mut() = Some(submit_answer);
        *self.next_question.borrow_mut() = Some(next_question);
    }

    pub(crate) fn request_question(&self) -> Callback<()> {
        (*self.request_question.borrow()).expect("request registered")
    }

    pub(crate) fn submit_answer(&self) -> Callback<()> {
        (*self.submit_answer.borrow()).expect("submit registered")
    }

    pub(crate) fn next_question(&self) -> Callback<()> {
        (*self.next_question.borrow()).expect("next registered")
    }
}
