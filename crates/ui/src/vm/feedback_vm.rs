use tutor_core::model::Feedback;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub title: &'static str,
    pub explanation: String,
    pub steps: Vec<String>,
    pub stats_label: Option<String>,
}

#[must_use]
pub fn map_feedback(feedback: &Feedback) -> FeedbackVm {
    let title = if feedback.is_correct() {
        "Correct! 🎉"
    } else {
        "Not quite right"
    };

    let stats_label = feedback.stats().map(|stats| {
        format!(
            "{} of {} attempts correct ({:.0}%)",
            stats.correct_attempts, stats.total_attempts, stats.success_rate
        )
    });

    FeedbackVm {
        is_correct: feedback.is_correct(),
        title,
        explanation: feedback.explanation().to_string(),
        steps: feedback.solution_steps().to_vec(),
        stats_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::model::PerformanceStats;

    #[test]
    fn correct_feedback_celebrates() {
        let vm = map_feedback(&Feedback::new(true, "", vec!["Add 2 and 2".into()]));
        assert_eq!(vm.title, "Correct! 🎉");
        assert_eq!(vm.steps, vec!["Add 2 and 2".to_string()]);
        assert!(vm.stats_label.is_none());
    }

    #[test]
    fn stats_are_summarised() {
        let feedback = Feedback::new(false, "Check the sign.", vec![]).with_stats(PerformanceStats {
            total_attempts: 3,
            correct_attempts: 1,
            success_rate: 33.33,
        });
        let vm = map_feedback(&feedback);
        assert_eq!(vm.title, "Not quite right");
        assert_eq!(vm.stats_label.as_deref(), Some("1 of 3 attempts correct (33%)"));
    }
}
