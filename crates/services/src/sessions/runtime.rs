use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info};

use quiz_core::model::{Question, UserIdentity};
use quiz_core::{Direction, Outcome, QuizController, QuizError, TimerStep};

use super::handle::SessionHandle;
use super::snapshot::{Notice, SessionSnapshot};
use crate::choices::ChoiceCache;
use crate::config::QuizConfig;
use crate::error::FetchError;
use crate::question_source::QuestionSource;
use crate::timer::{TICK_PERIOD, TimerDriver};

//
// ─── COMMANDS ─────────────────────────────────────────────────────────────────
//

/// Everything that can change a session, user- or timer-driven alike.
pub(crate) enum Command {
    Begin {
        identity: UserIdentity,
        reply: oneshot::Sender<Outcome>,
    },
    Load {
        reply: oneshot::Sender<Outcome>,
    },
    Loaded {
        generation: u64,
        result: Result<Vec<Question>, FetchError>,
    },
    Navigate {
        index: usize,
        reply: oneshot::Sender<Result<Outcome, QuizError>>,
    },
    Step {
        direction: Direction,
        reply: oneshot::Sender<Outcome>,
    },
    Answer {
        index: usize,
        answer: String,
        reply: oneshot::Sender<Result<Outcome, QuizError>>,
    },
    Submit {
        reply: oneshot::Sender<Outcome>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    DismissNotice {
        reply: oneshot::Sender<()>,
    },
    TimerElapsed {
        epoch: u64,
        reply: oneshot::Sender<TimerStep>,
    },
}

//
// ─── SPAWN ────────────────────────────────────────────────────────────────────
//

/// Start a session runtime on the current tokio runtime.
///
/// One task owns the controller and applies commands strictly in arrival
/// order; the returned handle is the only way to reach it. The task ends once
/// every handle is dropped, taking any running countdown with it.
#[must_use]
pub fn spawn_session(source: Arc<dyn QuestionSource>, config: &QuizConfig) -> SessionHandle {
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let controller = QuizController::new(config.time_limit_secs());
    let choice_orders: Arc<[Vec<String>]> = Arc::from(Vec::new());
    let (snapshots_tx, snapshots_rx) = watch::channel(SessionSnapshot::capture(
        &controller,
        Arc::clone(&choice_orders),
        false,
        None,
    ));

    let actor = SessionActor {
        controller,
        source,
        choices: ChoiceCache::new(),
        choice_orders,
        loading: false,
        generation: 0,
        notice: None,
        timer: None,
        timer_epoch: 0,
        commands: commands_rx,
        mailbox: commands_tx.downgrade(),
        snapshots: snapshots_tx,
    };

    tokio::spawn(actor.run());
    SessionHandle::new(commands_tx, snapshots_rx)
}

//
// ─── ACTOR ────────────────────────────────────────────────────────────────────
//

struct SessionActor {
    controller: QuizController,
    source: Arc<dyn QuestionSource>,
    choices: ChoiceCache,
    choice_orders: Arc<[Vec<String>]>,
    loading: bool,
    // Bumped on reset so a fetch started before it is discarded.
    generation: u64,
    notice: Option<Notice>,
    timer: Option<TimerDriver>,
    // Identifies the running driver; ticks from an older one are stale.
    timer_epoch: u64,
    commands: mpsc::UnboundedReceiver<Command>,
    mailbox: mpsc::WeakUnboundedSender<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl SessionActor {
    async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            self.handle(command);
        }
        debug!("quiz session runtime stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Begin { identity, reply } => {
                let outcome = self.controller.begin(identity);
                if outcome.is_applied() {
                    self.notice = None;
                    info!("quiz attempt started");
                }
                self.respond(reply, outcome);
            }
            Command::Load { reply } => {
                let outcome = self.start_load();
                self.respond(reply, outcome);
            }
            Command::Loaded { generation, result } => {
                self.finish_load(generation, result);
                self.publish();
            }
            Command::Navigate { index, reply } => {
                let outcome = self.controller.navigate_to(index);
                self.respond(reply, outcome);
            }
            Command::Step { direction, reply } => {
                let outcome = self.controller.step(direction);
                self.respond(reply, outcome);
            }
            Command::Answer {
                index,
                answer,
                reply,
            } => {
                let outcome = self.controller.record_answer(index, answer);
                self.respond(reply, outcome);
            }
            Command::Submit { reply } => {
                let outcome = self.controller.submit();
                if outcome.is_applied() {
                    info!(
                        answered = self.controller.session().answered_count(),
                        remaining_secs = self.controller.session().time_remaining_secs(),
                        "quiz submitted"
                    );
                }
                self.timer = None;
                self.respond(reply, outcome);
            }
            Command::Reset { reply } => {
                self.reset();
                self.notice = None;
                info!("quiz reset");
                self.respond(reply, ());
            }
            Command::DismissNotice { reply } => {
                self.notice = None;
                self.respond(reply, ());
            }
            Command::TimerElapsed { epoch, reply } => {
                let step = self.on_timer_elapsed(epoch);
                self.respond(reply, step);
            }
        }
    }

    fn start_load(&mut self) -> Outcome {
        if self.loading || self.controller.is_loaded() || self.controller.identity().is_none() {
            debug!(
                loading = self.loading,
                loaded = self.controller.is_loaded(),
                "dropping question load request"
            );
            return Outcome::Ignored;
        }

        self.loading = true;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let mailbox = self.mailbox.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            if let Some(commands) = mailbox.upgrade() {
                let _ = commands.send(Command::Loaded { generation, result });
            }
        });
        Outcome::Applied
    }

    fn finish_load(&mut self, generation: u64, result: Result<Vec<Question>, FetchError>) {
        if generation != self.generation || !self.loading {
            debug!(generation, "discarding stale question batch");
            return;
        }
        self.loading = false;

        match result {
            Ok(questions) => {
                let count = questions.len();
                if self.controller.load_questions(questions).is_applied() {
                    self.choice_orders = Arc::from(
                        self.choices
                            .fill(self.controller.questions(), &mut rand::rng()),
                    );
                    if !self.controller.is_submitted() {
                        self.start_timer();
                    }
                    info!(count, "questions loaded");
                }
            }
            Err(err) => {
                error!(error = %err, "failed to load quiz questions");
                self.reset();
                self.notice = Some(Notice::LoadFailed);
            }
        }
    }

    fn on_timer_elapsed(&mut self, epoch: u64) -> TimerStep {
        if self.timer.is_none() || epoch != self.timer_epoch {
            return TimerStep::Stopped;
        }
        let step = self.controller.on_timer_elapsed();
        match step {
            TimerStep::Continue(_) => {}
            TimerStep::Expired => {
                info!("time expired, quiz submitted automatically");
                self.timer = None;
            }
            TimerStep::Stopped => self.timer = None,
        }
        step
    }

    fn start_timer(&mut self) {
        self.timer_epoch += 1;
        let epoch = self.timer_epoch;
        let mailbox = self.mailbox.clone();
        self.timer = Some(TimerDriver::start(TICK_PERIOD, move || {
            let mailbox = mailbox.clone();
            async move {
                let Some(commands) = mailbox.upgrade() else {
                    return TimerStep::Stopped;
                };
                let (reply, step) = oneshot::channel();
                if commands.send(Command::TimerElapsed { epoch, reply }).is_err() {
                    return TimerStep::Stopped;
                }
                drop(commands);
                step.await.unwrap_or(TimerStep::Stopped)
            }
        }));
    }

    fn reset(&mut self) {
        self.timer = None;
        self.controller.reset();
        self.choices.clear();
        self.choice_orders = Arc::from(Vec::new());
        self.loading = false;
        self.generation += 1;
    }

    fn publish(&self) {
        self.snapshots.send_replace(SessionSnapshot::capture(
            &self.controller,
            Arc::clone(&self.choice_orders),
            self.loading,
            self.notice,
        ));
    }

    // Publish before replying so callers observe the new state once they resume.
    fn respond<T>(&self, reply: oneshot::Sender<T>, value: T) {
        self.publish();
        let _ = reply.send(value);
    }
}
