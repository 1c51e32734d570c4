//! Offline advisor: canned advice selected by keyword.
//!
//! Classifies the message by case-insensitive substring match against a
//! fixed keyword set and returns one of five multi-line advice blocks
//! after an artificial delay, so the UI behaves like a real round trip.
//! No keyword match falls through to a generic menu reply.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::advisor::{ProviderError, ResponseProvider};

/// Fixed artificial delay before every reply.
const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

const RESUME_ADVICE: &str = "Great question about resume advice! Here are some key tips:\n\n\
• Use action verbs like \"developed,\" \"managed,\" or \"implemented\"\n\
• Quantify your achievements with numbers and percentages\n\
• Keep it to 1-2 pages maximum\n\
• Tailor it to each specific job application\n\
• Include relevant coursework and projects\n\n\
Would you like me to help you with a specific section of your resume?";

const JOB_SEARCH_ADVICE: &str = "I'd be happy to help with your job search strategy! Here's what I recommend:\n\n\
• Start with UTD's Handshake platform for internships and jobs\n\
• Network through LinkedIn and attend career fairs\n\
• Research companies that align with your major and interests\n\
• Prepare a 30-second elevator pitch about yourself\n\
• Follow up on applications within 1-2 weeks\n\n\
What field are you most interested in? I can provide more targeted advice!";

const COURSE_PLANNING_ADVICE: &str = "Course planning is crucial for your academic success! Here's my advice:\n\n\
• Meet with your academic advisor each semester\n\
• Check degree requirements in your catalog\n\
• Balance difficult courses with easier ones\n\
• Consider prerequisites and course availability\n\
• Plan for internships, study abroad, or research opportunities\n\n\
What's your major? I can help you create a semester-by-semester plan!";

const INTERVIEW_ADVICE: &str = "Interview preparation is key to landing that job! Here are my top tips:\n\n\
• Research the company and role thoroughly\n\
• Practice the STAR method for behavioral questions\n\
• Prepare thoughtful questions to ask them\n\
• Dress professionally and arrive 10 minutes early\n\
• Follow up with a thank-you email within 24 hours\n\n\
Would you like to practice some common interview questions?";

const GENERIC_MENU: &str = "I'm here to help with all your academic and career needs! I can assist with:\n\n\
• Resume and cover letter writing\n\
• Job search strategies and networking\n\
• Course planning and degree requirements\n\
• Interview preparation and practice\n\
• Internship and research opportunities\n\n\
What specific area would you like to explore? I'm here to guide you through your UTD journey!";

/// Picks the advice block for a message. Keywords are checked in the same
/// order the original widget used; first match wins.
fn classify(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    if lower.contains("resume") {
        RESUME_ADVICE
    } else if lower.contains("job search") {
        JOB_SEARCH_ADVICE
    } else if lower.contains("course planning") {
        COURSE_PLANNING_ADVICE
    } else if lower.contains("interview") {
        INTERVIEW_ADVICE
    } else {
        GENERIC_MENU
    }
}

/// Keyword-heuristic advisor with no network dependency.
pub struct OfflineAdvisor {
    delay: Duration,
}

impl OfflineAdvisor {
    pub fn new() -> Self {
        Self {
            delay: RESPONSE_DELAY,
        }
    }
}

impl Default for OfflineAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseProvider for OfflineAdvisor {
    fn name(&self) -> &str {
        "offline"
    }

    async fn reply(&self, message: &str) -> Result<String, ProviderError> {
        tokio::time::sleep(self.delay).await;
        let advice = classify(message);
        debug!("Offline advisor matched a reply ({} bytes)", advice.len());
        Ok(advice.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_keywords_case_insensitively() {
        assert_eq!(classify("Help me with my RESUME please"), RESUME_ADVICE);
        assert_eq!(classify("how do I start a Job Search?"), JOB_SEARCH_ADVICE);
        assert_eq!(
            classify("I need course planning for next fall"),
            COURSE_PLANNING_ADVICE
        );
        assert_eq!(classify("any Interview tips?"), INTERVIEW_ADVICE);
    }

    #[test]
    fn classify_falls_back_to_generic_menu() {
        assert_eq!(classify("what's the weather like"), GENERIC_MENU);
        assert_eq!(classify(""), GENERIC_MENU);
    }

    #[test]
    fn resume_wins_over_later_keywords() {
        // "resume" is checked first, matching the original branch order.
        assert_eq!(
            classify("should my resume mention interview skills?"),
            RESUME_ADVICE
        );
    }

    // Paused time lets the 1.5s artificial delay elapse instantly.
    #[tokio::test(start_paused = true)]
    async fn reply_returns_the_matched_block_after_the_delay() {
        let advisor = OfflineAdvisor::new();
        let reply = advisor.reply("resume help").await.unwrap();
        assert_eq!(reply, RESUME_ADVICE);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_never_fails() {
        let advisor = OfflineAdvisor::new();
        assert!(advisor.reply("anything at all").await.is_ok());
    }
}
