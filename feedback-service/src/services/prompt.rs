//! Prompt rendering for the tutoring model.

use crate::dtos::FeedbackRequest;

/// Render the fixed tutoring instruction for one validated request.
///
/// Deterministic: the same request always yields the same prompt. The
/// average is rendered with its original precision (`9` stays "9",
/// `9.5` stays "9.5").
pub fn build_prompt(request: &FeedbackRequest) -> String {
    format!(
        "You are an academic tutor for medical students. Generate concrete, \
         actionable study recommendations personalized for the student {name}, \
         with average {average} (0-20 scale) and status {status}.\n\
         Consider that:\n\
         - If the average is below 11 (failing), focus on recovery: daily \
         micro-habits, study techniques and prioritization of weak areas.\n\
         - If the average is at least 11 and below 14, reinforce guided \
         practice, mock exams and error review.\n\
         - If the average is 14 or higher, keep the pace: periodic mock exams \
         and consolidation.\n\
         Return exclusively a JSON array of strings (3 to 4 items), with no \
         additional text.\n\
         Example format:\n\
         [\"20 questions/day from the cardiology bank\", \"Review mistakes in \
         a notebook\", \"Short mock exam every 3 days\"]",
        name = request.name,
        average = request.average,
        status = request.status.label(),
    )
}
