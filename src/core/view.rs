//! The portfolio view's state machine.
//!
//! [`PortfolioView`] owns one instance's [`ViewState`] and its shared content.
//! Transitions happen through [`PortfolioView::update`], which returns a
//! [`Cmd`] describing effects for the runtime to carry out, so the state
//! machine itself never touches timers.

use crate::core::render;
use crate::domain::content::ContentTables;
use crate::domain::model::NavSection;
use crate::domain::node::Node;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Transient state of one view instance.
///
/// `skill_progress` only ever holds names from the skill table, and each value
/// stays at or below that skill's level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    mobile_menu_open: bool,
    mounted: bool,
    skill_progress: BTreeMap<String, u8>,
}

impl ViewState {
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Displayed progress for a skill; absent entries read as 0.
    pub fn progress(&self, skill: &str) -> u8 {
        self.skill_progress.get(skill).copied().unwrap_or(0)
    }

    pub fn skill_progress(&self) -> &BTreeMap<String, u8> {
        &self.skill_progress
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    ToggleMobileMenu,
    CloseMobileMenu,
    Navigate(NavSection),
    RevealSkill(String),
}

/// Effects requested by a transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    #[default]
    None,
    Batch(Vec<Cmd>),
    /// Deliver `Msg::RevealSkill(skill)` once `delay` has elapsed.
    RevealAfter { skill: String, delay: Duration },
    ScrollTo(NavSection),
}

impl Cmd {
    pub fn none() -> Self {
        Cmd::None
    }

    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Flattens nested batches in execution order.
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioView {
    state: ViewState,
    content: Arc<ContentTables>,
    reveal_delay: Duration,
}

impl PortfolioView {
    pub fn new(content: Arc<ContentTables>) -> Self {
        Self {
            state: ViewState::default(),
            content,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn content(&self) -> &Arc<ContentTables> {
        &self.content
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Opens the render gate and requests one reveal per skill, all with the
    /// same delay so the bars fill together. Later calls return `Cmd::None`.
    pub fn initialize(&mut self) -> Cmd {
        if self.state.mounted {
            tracing::debug!("view already mounted; skipping reveal scheduling");
            return Cmd::none();
        }
        self.state.mounted = true;

        let reveals = self
            .content
            .skills
            .iter()
            .map(|skill| Cmd::RevealAfter {
                skill: skill.name.clone(),
                delay: self.reveal_delay,
            })
            .collect();

        tracing::debug!(
            skills = self.content.skills.len(),
            delay_ms = self.reveal_delay.as_millis() as u64,
            "view mounted"
        );
        Cmd::batch(reveals)
    }

    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::ToggleMobileMenu => {
                self.toggle_mobile_menu();
                Cmd::none()
            }
            Msg::CloseMobileMenu => {
                self.close_mobile_menu();
                Cmd::none()
            }
            Msg::Navigate(section) => Cmd::ScrollTo(self.navigate(section)),
            Msg::RevealSkill(name) => {
                self.reveal_skill(&name);
                Cmd::none()
            }
        }
    }

    /// Returns the new menu state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
        tracing::debug!(open = self.state.mobile_menu_open, "mobile menu toggled");
        self.state.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        if self.state.mobile_menu_open {
            tracing::debug!("mobile menu closed");
        }
        self.state.mobile_menu_open = false;
    }

    /// Activating a nav link always closes the mobile menu.
    pub fn navigate(&mut self, section: NavSection) -> NavSection {
        self.close_mobile_menu();
        tracing::debug!(anchor = section.anchor(), "navigate");
        section
    }

    /// Moves a skill's progress to its target level. Returns whether anything
    /// changed; names outside the skill table are ignored.
    pub fn reveal_skill(&mut self, name: &str) -> bool {
        let Some(skill) = self.content.skill(name) else {
            tracing::warn!(skill = name, "reveal for unknown skill ignored");
            return false;
        };
        let target = skill.level.min(100);

        let current = self.state.skill_progress.entry(skill.name.clone()).or_insert(0);
        if *current >= target {
            return false;
        }
        *current = target;
        tracing::debug!(skill = name, level = target, "skill revealed");
        true
    }

    /// Whether every skill has reached its target level.
    pub fn fully_revealed(&self) -> bool {
        self.content
            .skills
            .iter()
            .all(|s| self.state.progress(&s.name) == s.level.min(100))
    }

    /// Renders the current frame. `None` until the view has been initialized.
    pub fn view(&self, year: i32) -> Option<Node> {
        render::render(&self.state, &self.content, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> PortfolioView {
        PortfolioView::new(Arc::new(ContentTables::builtin()))
    }

    #[test]
    fn test_starts_unmounted_and_closed() {
        let view = view();
        assert!(!view.state().is_mounted());
        assert!(!view.state().mobile_menu_open());
        assert!(view.state().skill_progress().is_empty());
        assert!(view.view(2024).is_none());
    }

    #[test]
    fn test_initialize_mounts_and_requests_one_reveal_per_skill() {
        let mut view = view();
        let cmds = view.initialize().into_vec();

        assert!(view.state().is_mounted());
        assert_eq!(cmds.len(), view.content().skills.len());
        for (cmd, skill) in cmds.iter().zip(&view.content().skills) {
            assert_eq!(
                cmd,
                &Cmd::RevealAfter {
                    skill: skill.name.clone(),
                    delay: DEFAULT_REVEAL_DELAY,
                }
            );
        }
        assert!(view.view(2024).is_some());
    }

    #[test]
    fn test_initialize_twice_does_not_reschedule() {
        let mut view = view();
        assert!(!view.initialize().is_none());
        assert!(view.initialize().is_none());
        assert!(view.state().is_mounted());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut view = view();
        for _ in 0..2 {
            let before = view.state().mobile_menu_open();
            view.update(Msg::ToggleMobileMenu);
            assert_ne!(view.state().mobile_menu_open(), before);
            view.update(Msg::ToggleMobileMenu);
            assert_eq!(view.state().mobile_menu_open(), before);
            view.toggle_mobile_menu();
        }
    }

    #[test]
    fn test_close_from_any_state() {
        let mut view = view();
        view.close_mobile_menu();
        assert!(!view.state().mobile_menu_open());

        view.toggle_mobile_menu();
        view.update(Msg::CloseMobileMenu);
        assert!(!view.state().mobile_menu_open());
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let mut view = view();
        view.toggle_mobile_menu();
        let cmd = view.update(Msg::Navigate(NavSection::Skills));
        assert_eq!(cmd, Cmd::ScrollTo(NavSection::Skills));
        assert!(!view.state().mobile_menu_open());
    }

    #[test]
    fn test_reveal_converges_to_level() {
        let mut view = view();
        view.initialize();
        assert_eq!(view.state().progress("WordPress"), 0);

        let names: Vec<String> = view.content().skills.iter().map(|s| s.name.clone()).collect();
        for name in names {
            view.update(Msg::RevealSkill(name));
        }

        assert!(view.fully_revealed());
        for skill in &view.content().skills {
            assert_eq!(view.state().progress(&skill.name), skill.level);
        }
    }

    #[test]
    fn test_reveal_is_bounded_and_ignores_unknown_names() {
        let mut view = view();
        assert!(view.reveal_skill("PHP"));
        assert!(!view.reveal_skill("PHP"));
        assert_eq!(view.state().progress("PHP"), 85);

        assert!(!view.reveal_skill("COBOL"));
        assert!(!view.state().skill_progress().contains_key("COBOL"));
    }

    #[test]
    fn test_custom_reveal_delay() {
        let mut view = view().with_reveal_delay(Duration::from_millis(50));
        let cmds = view.initialize().into_vec();
        assert!(cmds.iter().all(|c| matches!(
            c,
            Cmd::RevealAfter { delay, .. } if *delay == Duration::from_millis(50)
        )));
    }

    #[test]
    fn test_cmd_batch_drops_none() {
        assert!(Cmd::batch(vec![Cmd::None, Cmd::None]).is_none());
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::Batch(vec![Cmd::ScrollTo(NavSection::About)]),
            Cmd::ScrollTo(NavSection::Contact),
        ]);
        assert_eq!(
            cmd.into_vec(),
            vec![Cmd::ScrollTo(NavSection::About), Cmd::ScrollTo(NavSection::Contact)]
        );
    }
}
