//! Narrative text
//!
//! Turns notifications and the final report into the lines shown to
//! the player. Front-ends only decide where the lines go.

use crate::data::{Severity, Suspect};
use crate::game::deduction::{Conclusion, Verdict};
use crate::game::io::{Choice, Notification, Prompt};
use crate::game::InvestigationReport;

pub const TITLE: &str = "=== DETECTIVE QUEST: THE MANSION MYSTERY ===";
pub const INTRO: &str = "Explore the mansion, collect clues and find out who did it.";
pub const NO_EVIDENCE: &str = "(No clues found... not your finest hour, detective!)";

/// Severity used when showing a notification
pub fn severity(notification: &Notification) -> Severity {
    match notification {
        Notification::EnteredRoom { .. } | Notification::LeftMansion { .. } => Severity::Info,
        Notification::ClueFound { .. } => Severity::Discovery,
        Notification::DeadEnd { .. } | Notification::InvalidChoice { .. } => Severity::Warning,
        Notification::Verdict(_) => Severity::Verdict,
    }
}

/// Text lines for one notification
pub fn describe(notification: &Notification) -> Vec<String> {
    match notification {
        Notification::EnteredRoom { room } => vec![format!("📍 You are in: [{}]", room)],
        Notification::ClueFound { clue, .. } => vec![format!("🔎 You found a clue: '{}'!", clue)],
        Notification::DeadEnd { .. } => {
            vec!["This room is a dead end. The trail stops here.".to_string()]
        }
        Notification::InvalidChoice { choice, .. } => match choice {
            Choice::Invalid(key) => vec![format!("Invalid path! ('{}' is not an option)", key)],
            _ => vec!["Invalid path! There is no room that way.".to_string()],
        },
        Notification::LeftMansion { .. } => vec!["You leave the mansion.".to_string()],
        Notification::Verdict(report) => report_lines(report),
    }
}

/// Menu shown while waiting for a choice
pub fn prompt_lines(prompt: &Prompt<'_>) -> Vec<String> {
    let mut lines = vec!["Where do you want to go?".to_string()];
    if let Some(left) = prompt.left {
        lines.push(format!("[e] Left: {}", left));
    }
    if let Some(right) = prompt.right {
        lines.push(format!("[d] Right: {}", right));
    }
    lines.push("[s] Leave the mansion".to_string());
    lines
}

/// Tally, scores and verdict, or the no-evidence line
pub fn conclusion_lines(conclusion: &Conclusion) -> Vec<String> {
    let deduction = match conclusion {
        Conclusion::NoEvidence => return vec![NO_EVIDENCE.to_string()],
        Conclusion::Deduced(d) => d,
    };

    let mut lines = vec!["--- SUSPECT ANALYSIS ---".to_string()];
    for a in &deduction.attributions {
        lines.push(format!("Evidence '{}' points to: {}", a.clue, a.suspect));
    }
    lines.push(String::new());
    lines.push("--- INVESTIGATION RESULT ---".to_string());
    lines.push("Suspicion points:".to_string());
    for suspect in Suspect::ALL {
        lines.push(format!("{}: {}", suspect, deduction.tally.count(suspect)));
    }
    lines.push(verdict_line(&deduction.verdict));
    lines
}

pub fn verdict_line(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Culprit(suspect) => format!(
            ">> THE CULPRIT IS {} ({})! <<",
            suspect.role().to_uppercase(),
            suspect.name()
        ),
        Verdict::Inconclusive => {
            ">> The evidence is inconclusive (tie). Keep exploring! <<".to_string()
        }
    }
}

/// Full end-of-game text
pub fn report_lines(report: &InvestigationReport) -> Vec<String> {
    let mut lines = vec![
        "--- END OF EXPLORATION ---".to_string(),
        "Clues collected (alphabetical order):".to_string(),
    ];
    if !report.clues.is_empty() {
        lines.extend(report.clues.iter().map(|c| format!("- {}", c)));
        lines.push(String::new());
    }
    lines.extend(conclusion_lines(&report.conclusion));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::deduction::{Attribution, Deduction, Tally};

    #[test]
    fn prompt_lists_only_available_exits() {
        let prompt = Prompt { room: "Cozinha", left: Some("Porao Escuro"), right: None };
        let lines = prompt_lines(&prompt);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Porao Escuro"));
        assert!(lines[2].contains("Leave"));
    }

    #[test]
    fn verdict_text() {
        assert!(verdict_line(&Verdict::Culprit(Suspect::Mordomo)).contains("THE BUTLER"));
        assert!(verdict_line(&Verdict::Inconclusive).contains("inconclusive"));
    }

    #[test]
    fn conclusion_lists_attributions_and_scores() {
        let conclusion = Conclusion::Deduced(Deduction {
            attributions: vec![Attribution { clue: "Faca".into(), suspect: "Cozinheira".into() }],
            tally: Tally::new(0, 0, 1),
            verdict: Verdict::Culprit(Suspect::Cozinheira),
        });
        let lines = conclusion_lines(&conclusion);
        assert!(lines.contains(&"Evidence 'Faca' points to: Cozinheira".to_string()));
        assert!(lines.contains(&"Cozinheira: 1".to_string()));
        assert_eq!(conclusion_lines(&Conclusion::NoEvidence), vec![NO_EVIDENCE.to_string()]);
    }

    #[test]
    fn notification_severity() {
        let found = Notification::ClueFound { room: "Cozinha".into(), clue: "Faca".into() };
        assert_eq!(severity(&found), Severity::Discovery);
        assert_eq!(describe(&found), vec!["🔎 You found a clue: 'Faca'!".to_string()]);
    }
}
