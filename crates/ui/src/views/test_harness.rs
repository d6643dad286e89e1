use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, QuizStore, StubReply, StubTutorApi, TutorApi, TutorConfig};
use tutor_core::model::QuizState;
use tutor_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::state::{QuizSignal, use_quiz_provider};
use crate::toast::{Toaster, use_toast_provider};
use crate::views::{MathTutorView, ProgressView, TutorTestHandles};

struct TestApp {
    api: Arc<StubTutorApi>,
    config: TutorConfig,
}

impl UiApp for TestApp {
    fn tutor_api(&self) -> Arc<dyn TutorApi> {
        self.api.clone()
    }

    fn config(&self) -> TutorConfig {
        self.config.clone()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Tutor,
    Progress,
}

#[derive(Clone, Default)]
struct RootHandles {
    quiz: Rc<RefCell<Option<QuizSignal>>>,
    view: Rc<RefCell<Option<Signal<ViewKind>>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    root: RootHandles,
    tutor_handles: TutorTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_toast_provider(ctx.config().toast_duration());
    let quiz = use_quiz_provider();
    let view = use_signal(|| props.view);
    *props.root.quiz.borrow_mut() = Some(quiz);
    *props.root.view.borrow_mut() = Some(view);
    use_context_provider(|| props.tutor_handles.clone());

    rsx! {
        match *view.read() {
            ViewKind::Tutor => rsx! { MathTutorView {} },
            ViewKind::Progress => rsx! { ProgressView {} },
        }
        Toaster {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<StubTutorApi>,
    root: RootHandles,
    tutor_handles: TutorTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Swap the mounted view, as navigating between routes would.
    pub fn show(&mut self, kind: ViewKind) {
        let mut view = (*self.root.view.borrow()).expect("view provided");
        self.dom.in_runtime(|| view.set(kind));
        drive_dom(&mut self.dom);
    }

    /// Mutate quiz state as a user interaction would.
    pub fn update_quiz<R>(&mut self, f: impl FnOnce(&mut QuizState) -> R) -> R {
        let quiz = (*self.root.quiz.borrow()).expect("quiz provided");
        let out = self.dom.in_runtime(|| quiz.update(f));
        drive_dom(&mut self.dom);
        out
    }

    pub fn snapshot(&self) -> QuizState {
        let quiz = (*self.root.quiz.borrow()).expect("quiz provided");
        self.dom.in_runtime(|| quiz.snapshot())
    }

    pub fn click_generate(&mut self) {
        let callback = self.tutor_handles.request_question();
        self.dom.in_runtime(|| callback.call(()));
    }

    pub fn click_submit(&mut self) {
        let callback = self.tutor_handles.submit_answer();
        self.dom.in_runtime(|| callback.call(()));
    }

    pub fn click_next(&mut self) {
        let callback = self.tutor_handles.next_question();
        self.dom.in_runtime(|| callback.call(()));
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness with feedback shown immediately and toasts kept for
/// `toast_duration`.
pub fn setup_view_harness(
    view: ViewKind,
    question: StubReply,
    feedback: StubReply,
    toast_duration: Duration,
) -> ViewHarness {
    setup_view_harness_with_delay(view, question, feedback, toast_duration, Duration::ZERO)
}

pub fn setup_view_harness_with_delay(
    view: ViewKind,
    question: StubReply,
    feedback: StubReply,
    toast_duration: Duration,
    feedback_reveal_delay: Duration,
) -> ViewHarness {
    let api = Arc::new(StubTutorApi::new(question, feedback));
    let config = TutorConfig::default()
        .with_feedback_reveal_delay(feedback_reveal_delay)
        .with_toast_duration(toast_duration);
    let app = Arc::new(TestApp {
        api: Arc::clone(&api),
        config,
    });
    let root = RootHandles::default();
    let tutor_handles = TutorTestHandles::default();

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewHarnessRoot,
            ViewHarnessProps {
                app,
                view,
                root: root.clone(),
                tutor_handles: tutor_handles.clone(),
            },
        ),
        api,
        root,
        tutor_handles,
    };
    harness.rebuild();
    harness
}
