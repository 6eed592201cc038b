use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::Clock;
use quiz_core::model::{
    Answer, DocumentId, Question, QuizType, UploadedDocument,
};
use quiz_core::time::fixed_now;
use services::{ApiError, QuizBackend, RestartPolicy};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizFlowView, QuizRunnerView, ResultsView, SetupView};

/// Canned in-process backend; never touches the network.
pub struct FakeBackend {
    questions: Vec<Question>,
}

impl FakeBackend {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuizBackend for FakeBackend {
    async fn upload_pdf(
        &self,
        filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<UploadedDocument, ApiError> {
        Ok(UploadedDocument {
            id: DocumentId::new("doc123"),
            filename: filename.to_string(),
        })
    }

    async fn generate(
        &self,
        _quiz_type: QuizType,
        _topic: &str,
        _count: u32,
        _doc_id: &DocumentId,
    ) -> Result<Vec<Question>, ApiError> {
        Ok(self.questions.clone())
    }
}

struct TestApp {
    backend: Arc<dyn QuizBackend>,
    restart_policy: RestartPolicy,
}

impl UiApp for TestApp {
    fn backend(&self) -> Arc<dyn QuizBackend> {
        Arc::clone(&self.backend)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn restart_policy(&self) -> RestartPolicy {
        self.restart_policy
    }

    fn default_question_count(&self) -> u32 {
        5
    }

    fn default_quiz_type(&self) -> Option<QuizType> {
        None
    }
}

/// Which view the harness mounts under the test route.
#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Flow,
    Setup,
    Runner(Vec<Question>),
    Results {
        quiz_type: QuizType,
        questions: Vec<Question>,
        answers: Vec<Answer>,
        score: u32,
    },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let document = use_signal(|| None::<UploadedDocument>);
    match view {
        ViewKind::Flow => rsx! { QuizFlowView {} },
        ViewKind::Setup => rsx! {
            SetupView {
                document,
                generating: false,
                on_setup: move |_| {},
            }
        },
        ViewKind::Runner(questions) => rsx! {
            QuizRunnerView { questions, on_complete: move |_| {} }
        },
        ViewKind::Results {
            quiz_type,
            questions,
            answers,
            score,
        } => rsx! {
            ResultsView {
                quiz_type,
                questions,
                answers,
                score,
                duration: Some("1:30".to_string()),
                on_restart: move |()| {},
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: FakeBackend) -> ViewHarness {
    let app = Arc::new(TestApp {
        backend: Arc::new(backend),
        restart_policy: RestartPolicy::KeepDocument,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}
