use crate::core::scheduler::TokioScheduler;
use crate::core::view::{Cmd, Msg, PortfolioView, ViewState};
use crate::domain::model::NavSection;
use crate::domain::node::Node;
use crate::domain::ports::{Fired, Scheduler};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Event loop for one view instance.
///
/// User messages go through [`ViewRuntime::dispatch`]; fired timers arrive on
/// the instance's own channel and are applied by [`ViewRuntime::next_event`].
/// Dropping the runtime cancels every pending timer.
///
/// Timers need a tokio runtime. Started outside one, the view still mounts
/// but its reveals are never scheduled and the bars stay at zero.
pub struct ViewRuntime {
    view: PortfolioView,
    scheduler: TokioScheduler<Msg>,
    rx: UnboundedReceiver<Fired<Msg>>,
    scroll_target: Option<NavSection>,
}

impl ViewRuntime {
    pub fn new(view: PortfolioView) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            view,
            scheduler: TokioScheduler::new(tx),
            rx,
            scroll_target: None,
        }
    }

    /// Mounts the view and starts the skill reveal timers. Safe to call more
    /// than once; only the first call schedules anything. Does not panic
    /// outside a tokio runtime, it mounts and logs a warning per skill.
    pub fn start(&mut self) {
        let cmd = self.view.initialize();
        self.execute(cmd);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let cmd = self.view.update(msg);
        self.execute(cmd);
    }

    fn execute(&mut self, cmd: Cmd) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::RevealAfter { skill, delay } => {
                    let msg = Msg::RevealSkill(skill.clone());
                    self.scheduler.schedule(&skill, delay, msg);
                }
                Cmd::ScrollTo(section) => {
                    tracing::debug!(anchor = section.anchor(), "scroll requested");
                    self.scroll_target = Some(section);
                }
                Cmd::None | Cmd::Batch(_) => {}
            }
        }
    }

    /// Waits for the next fired timer and applies it. Returns `false` when no
    /// timer is pending.
    pub async fn next_event(&mut self) -> bool {
        while self.scheduler.pending() > 0 {
            let Some(fired) = self.rx.recv().await else {
                return false;
            };
            if let Some(msg) = self.scheduler.accept(fired) {
                self.dispatch(msg);
                return true;
            }
        }
        false
    }

    /// Applies every timer that has already fired without waiting for more.
    /// Returns how many were applied.
    pub fn apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(fired) = self.rx.try_recv() {
            if let Some(msg) = self.scheduler.accept(fired) {
                self.dispatch(msg);
                applied += 1;
            }
        }
        applied
    }

    /// Runs until every scheduled reveal has been applied.
    pub async fn settle(&mut self) {
        let mut applied = 0usize;
        while self.next_event().await {
            applied += 1;
        }
        tracing::debug!(applied, "view settled");
    }

    pub fn pending_reveals(&self) -> usize {
        self.scheduler.pending()
    }

    /// Last section a navigation asked to scroll to.
    pub fn scroll_target(&self) -> Option<NavSection> {
        self.scroll_target
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn view(&self) -> &PortfolioView {
        &self.view
    }

    pub fn render(&self, year: i32) -> Option<Node> {
        self.view.view(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentTables;
    use std::sync::Arc;
    use std::time::Duration;

    fn runtime() -> ViewRuntime {
        ViewRuntime::new(PortfolioView::new(Arc::new(ContentTables::builtin())))
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_schedules_one_reveal_per_skill() {
        let mut rt = runtime();
        rt.start();
        rt.start();
        assert_eq!(rt.pending_reveals(), 9);
        assert!(rt.state().is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_converges() {
        let mut rt = runtime();
        rt.start();
        rt.settle().await;

        assert_eq!(rt.pending_reveals(), 0);
        assert!(rt.view().fully_revealed());
        assert!(!rt.next_event().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_progress_before_delay() {
        let mut rt = runtime();
        rt.start();
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(299)).await;
        tokio::task::yield_now().await;

        assert_eq!(rt.apply_ready(), 0);
        assert!(rt.state().skill_progress().is_empty());
        assert_eq!(rt.pending_reveals(), 9);
    }

    #[test]
    fn test_start_outside_tokio_mounts_without_timers() {
        let mut rt = runtime();
        rt.start();

        assert!(rt.state().is_mounted());
        assert!(rt.render(2024).is_some());
        assert_eq!(rt.pending_reveals(), 0);
        assert_eq!(rt.apply_ready(), 0);
        assert!(rt.state().skill_progress().is_empty());
    }

    #[tokio::test]
    async fn test_navigation_closes_menu() {
        let mut rt = runtime();
        rt.start();
        rt.dispatch(Msg::ToggleMobileMenu);
        assert!(rt.state().mobile_menu_open());

        rt.dispatch(Msg::Navigate(NavSection::Contact));
        assert!(!rt.state().mobile_menu_open());
        assert_eq!(rt.scroll_target(), Some(NavSection::Contact));
    }
}
