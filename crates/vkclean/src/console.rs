//! The operator-facing side of a run.

use std::io;

use vkclean_core::GroupRecord;

/// Question asked before processing.
pub const CONFIRM_QUESTION: &str = "Do you want to proceed? (yes/no): ";

/// Console interaction the cleaner needs.
///
/// All calls are synchronous; `ask` blocks until the operator answers.
pub trait Console {
    /// Show the groups that are about to be processed.
    fn show_groups(&mut self, groups: &[GroupRecord]);

    /// Tell the operator whether the run is a simulation.
    fn show_mode(&mut self, dry_run: bool, count: usize);

    /// Ask a question and return the raw answer.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// `yes` or `y`, any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// One line of the pending list: `- Name (Community) (Admin)`.
pub fn group_line(group: &GroupRecord) -> String {
    let admin = if group.is_admin { " (Admin)" } else { "" };
    format!("- {} ({}){}", group.name, group.kind, admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkclean_core::GroupKind;

    #[test]
    fn affirmative_answers() {
        for answer in ["yes", "y", "YES", "Y", "  Yes\n", "yEs"] {
            assert!(is_affirmative(answer), "{:?} should confirm", answer);
        }
    }

    #[test]
    fn everything_else_declines() {
        for answer in ["", "no", "n", "yess", "ye", "sure", "y e s"] {
            assert!(!is_affirmative(answer), "{:?} should decline", answer);
        }
    }

    #[test]
    fn group_line_labels_kind_and_admin() {
        let page = GroupRecord::new(2, "News", GroupKind::Community).with_admin(true);
        assert_eq!(group_line(&page), "- News (Community) (Admin)");

        let group = GroupRecord::new(1, "Chess Club", GroupKind::Group);
        assert_eq!(group_line(&group), "- Chess Club (Group)");
    }
}
