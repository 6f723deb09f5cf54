//! Terminal presentation: maps severities to `console` styles.
//!
//! The engine only speaks in [`Severity`]; this is the one place that picks
//! colours for it.

use console::Style;

use statusflow::engine::{RegistryDefect, Severity, StateBadge, TransitionAction};

/// One `console` style per severity, plus a muted style for secondary text.
pub struct Palette {
    // Unknown and closed-out states.
    neutral: Style,
    // Work under way.
    info: Style,
    // Waiting on someone.
    warning: Style,
    // Finished or ready.
    success: Style,
    // Failed, cancelled or suspended.
    danger: Style,
    // Transition arrows, prompts and markers.
    dim: Style,
}

impl Palette {
    /// Styles that follow `console`'s terminal detection.
    ///
    /// `color = false` turns styling off even on a terminal. `color = true`
    /// never turns it on for pipes or files.
    pub fn new(color: bool) -> Self {
        Self::with_styling(if color { None } else { Some(false) })
    }

    /// `None` leaves the decision to `console`; `Some` overrides it.
    fn with_styling(force: Option<bool>) -> Self {
        let style = |base: Style| match force {
            Some(force) => base.force_styling(force),
            None => base,
        };
        Self {
            neutral: style(Style::new()),
            info: style(Style::new().cyan()),
            warning: style(Style::new().yellow()),
            success: style(Style::new().green().bold()),
            danger: style(Style::new().red().bold()),
            dim: style(Style::new().dim()),
        }
    }

    /// The style for a badge or action of the given severity.
    pub fn style(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Neutral => &self.neutral,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Success => &self.success,
            Severity::Danger => &self.danger,
        }
    }

    /// `[Ready to Work]`, coloured by severity.
    pub fn badge(&self, badge: &StateBadge) -> String {
        let text = format!("[{}]", badge.label);
        self.style(badge.severity).apply_to(text).to_string()
    }

    /// One action per line: label, target, then the confirmation prompt.
    pub fn action(&self, action: &TransitionAction) -> String {
        format!(
            "  {} {} {}",
            self.style(action.severity).apply_to(&action.label),
            self.dim.apply_to(format!("({} → {})", action.from, action.to)),
            self.dim.apply_to(format!("\"{}\"", action.confirm_message)),
        )
    }

    /// `✓` or `✗` followed by `detail`.
    pub fn verdict(&self, allowed: bool, detail: &str) -> String {
        if allowed {
            format!("{} {detail}", self.success.apply_to("✓"))
        } else {
            format!("{} {detail}", self.danger.apply_to("✗"))
        }
    }

    /// One line of `statusflow audit` output.
    pub fn defect(&self, defect: &RegistryDefect) -> String {
        format!("  {} {defect}", self.danger.apply_to("✗"))
    }

    /// Secondary text such as "no actions".
    pub fn muted(&self, text: &str) -> String {
        self.dim.apply_to(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusflow::engine::{EntityKind, available_actions, badge};

    #[test]
    fn plain_badge_without_color() {
        let palette = Palette::new(false);
        assert_eq!(palette.badge(&badge("ready_to_work")), "[Ready to Work]");
        assert_eq!(palette.badge(&badge("odd_state")), "[odd state]");
    }

    #[test]
    fn colored_badge_has_escape_codes() {
        let palette = Palette::with_styling(Some(true));
        let rendered = palette.badge(&badge("failed"));
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("[Failed]"));
    }

    #[test]
    fn enabled_color_does_not_force_escapes() {
        // Escapes only when console itself detects a colour terminal.
        let palette = Palette::new(true);
        let rendered = palette.badge(&badge("failed"));
        assert_eq!(console::strip_ansi_codes(&rendered), "[Failed]");
        if !console::colors_enabled() {
            assert_eq!(rendered, "[Failed]");
        }
    }

    #[test]
    fn disabled_color_strips_escapes() {
        let palette = Palette::new(false);
        let rendered = palette.badge(&badge("cancelled"));
        assert!(!rendered.contains('\u{1b}'));
        assert_eq!(palette.muted(" (terminal)"), " (terminal)");
    }

    #[test]
    fn action_line_shows_label_and_prompt() {
        let palette = Palette::new(false);
        let actions = available_actions(EntityKind::Order, "in_progress");
        let completed = actions.iter().find(|a| a.to == "completed").unwrap();
        assert_eq!(
            palette.action(completed),
            "  Mark Completed (in_progress → completed) \"Mark this order as completed?\""
        );
    }

    #[test]
    fn verdict_marks() {
        let palette = Palette::new(false);
        assert_eq!(palette.verdict(true, "ok"), "✓ ok");
        assert_eq!(palette.verdict(false, "nope"), "✗ nope");
    }
}
