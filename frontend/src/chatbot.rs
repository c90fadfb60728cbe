use rand::seq::SliceRandom;
use rand::Rng;

pub const GREETING: &str = "Hi! How can I help you today? You can ask me about the event, schedule, prizes, registration, eligibility, team formation, theme, submission, or judging criteria!";
pub const FALLBACK_RESPONSE: &str = "Sorry, I didn't understand that. Can you ask something else?";

/// A bucket of lowercase keywords and the canned answers for it.
#[derive(Debug, PartialEq)]
pub struct Topic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
}

// Declaration order is the match priority.
pub const FAQ_TOPICS: &[Topic] = &[
    Topic {
        name: "event",
        keywords: &["event", "vibeathon", "hackathon"],
        responses: &[
            "The Vibeathon is a 6-hour hackathon happening on September 27, 2025, at SAP Labs, Whitefield.",
            "Vibeathon is a 6-hour event on September 27, 2025, at SAP Labs, Whitefield.",
            "Join us for the Vibeathon on September 27, 2025, at SAP Labs, Whitefield!",
        ],
    },
    Topic {
        name: "schedule",
        keywords: &["schedule", "time", "timing"],
        responses: &[
            "The event starts at 9:00 AM and ends at 3:00 PM. Make sure to arrive early!",
            "Vibeathon runs from 9:00 AM to 3:00 PM on September 27, 2025.",
            "Be ready! The event begins at 9:00 AM sharp and concludes at 3:00 PM.",
        ],
    },
    Topic {
        name: "prizes",
        keywords: &["prizes", "prize", "reward", "rewards"],
        responses: &[
            "The total prize pool is ₹50,000, distributed across multiple categories.",
            "1st Place: ₹25,000, 2nd Place: ₹15,000, 3rd Place: ₹5,000.",
            "Special prizes include ₹3,000 + goodies for Best Innovation and ₹2,000 + goodies for People's Choice.",
        ],
    },
    Topic {
        name: "registration",
        keywords: &["register", "registration", "sign up"],
        responses: &[
            "You can register for the Vibeathon through the official registration link shared with your college.",
            "Registration is open until September 20, 2025. Don't miss out!",
            "Make sure to complete your registration before the deadline on September 20, 2025.",
        ],
    },
    Topic {
        name: "eligibility",
        keywords: &["eligibility", "eligible", "who can participate"],
        responses: &[
            "The Vibeathon is open to all college students with a valid ID.",
            "Participants must be enrolled in a college or university to be eligible.",
            "Ensure you have a valid college ID to participate in the event.",
        ],
    },
    Topic {
        name: "team",
        keywords: &["team", "members", "group"],
        responses: &[
            "Teams can have up to 4 members.",
            "You can participate individually or form a team of up to 4 members.",
            "Collaborate with your friends and form a team of up to 4 participants.",
        ],
    },
    Topic {
        name: "theme",
        keywords: &["theme", "topics", "focus"],
        responses: &[
            "The theme for this year's Vibeathon is \"Innovation for a Better Tomorrow.\"",
            "Focus on projects that align with the theme \"Innovation for a Better Tomorrow.\"",
            "This year's theme encourages solutions that drive innovation and positive impact.",
        ],
    },
    Topic {
        name: "submission",
        keywords: &["submission", "submit", "deadline"],
        responses: &[
            "All projects must be submitted by 3:00 PM on September 27, 2025.",
            "Ensure your project is submitted before the deadline to be eligible for judging.",
            "Late submissions will not be accepted, so plan accordingly.",
        ],
    },
    Topic {
        name: "judging",
        keywords: &["judging", "criteria", "evaluation"],
        responses: &[
            "Judging criteria include innovation, impact, and presentation.",
            "Projects will be evaluated based on creativity, technical implementation, and alignment with the theme.",
            "Make sure your presentation highlights the key features and impact of your project.",
        ],
    },
];

/// First topic (in table order) with a keyword contained in the input.
pub fn match_topic<'a>(input: &str, table: &'a [Topic]) -> Option<&'a Topic> {
    let normalized = input.to_lowercase();
    table.iter().find(|topic| {
        topic
            .keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
    })
}

pub fn respond<R: Rng + ?Sized>(input: &str, table: &[Topic], rng: &mut R) -> &'static str {
    match match_topic(input, table) {
        Some(topic) => topic
            .responses
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_RESPONSE),
        None => FALLBACK_RESPONSE,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Messages exchanged in one widget session, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.push(Speaker::Bot, GREETING);
        log
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            speaker,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn topic(name: &str) -> &'static Topic {
        FAQ_TOPICS
            .iter()
            .find(|t| t.name == name)
            .expect("topic exists")
    }

    #[test]
    fn shipped_table_is_well_formed() {
        for topic in FAQ_TOPICS {
            assert!(!topic.responses.is_empty(), "{} has no responses", topic.name);
            for keyword in topic.keywords {
                assert!(!keyword.is_empty());
                assert_eq!(*keyword, keyword.to_lowercase(), "{keyword} is not lowercase");
            }
        }
    }

    #[test]
    fn registration_question_matches_registration() {
        let matched = match_topic("when does registration close", FAQ_TOPICS);
        assert_eq!(matched.map(|t| t.name), Some("registration"));

        let mut rng = StdRng::seed_from_u64(7);
        let answer = respond("when does registration close", FAQ_TOPICS, &mut rng);
        assert!(topic("registration").responses.contains(&answer));
    }

    #[test]
    fn gibberish_and_empty_input_fall_back() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(respond("asdfghjkl", FAQ_TOPICS, &mut rng), FALLBACK_RESPONSE);
        assert_eq!(respond("", FAQ_TOPICS, &mut rng), FALLBACK_RESPONSE);
        assert_eq!(respond("   ", FAQ_TOPICS, &mut rng), FALLBACK_RESPONSE);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(match_topic("WHAT ARE THE PRIZES?", FAQ_TOPICS).map(|t| t.name), Some("prizes"));
        assert_eq!(match_topic("How do I Sign Up", FAQ_TOPICS).map(|t| t.name), Some("registration"));
    }

    #[test]
    fn earlier_topic_wins_when_several_match() {
        // "hackathon" (event) and "prize" (prizes) both occur
        let input = "what is the prize for the hackathon";
        assert_eq!(match_topic(input, FAQ_TOPICS).map(|t| t.name), Some("event"));

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let answer = respond(input, FAQ_TOPICS, &mut rng);
            assert!(topic("event").responses.contains(&answer));
            assert!(!topic("prizes").responses.contains(&answer));
        }
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "time" sits inside "sometimes"
        assert_eq!(match_topic("sometimes I wonder", FAQ_TOPICS).map(|t| t.name), Some("schedule"));
    }

    #[test]
    fn repeated_answers_stay_within_topic() {
        let mut rng = StdRng::seed_from_u64(2024);
        let judging = topic("judging");
        let mut seen = Vec::new();
        for _ in 0..200 {
            let answer = respond("what are the judging criteria", FAQ_TOPICS, &mut rng);
            assert!(judging.responses.contains(&answer));
            if !seen.contains(&answer) {
                seen.push(answer);
            }
        }
        assert!(seen.len() > 1, "200 draws never varied");
    }

    #[test]
    fn custom_table_is_respected() {
        const TABLE: &[Topic] = &[
            Topic { name: "a", keywords: &["foo"], responses: &["first"] },
            Topic { name: "b", keywords: &["foo", "bar"], responses: &["second"] },
        ];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(respond("foo bar", TABLE, &mut rng), "first");
        assert_eq!(respond("just bar", TABLE, &mut rng), "second");
        assert_eq!(respond("nothing", TABLE, &mut rng), FALLBACK_RESPONSE);
    }

    #[test]
    fn log_appends_in_order() {
        let mut log = ConversationLog::with_greeting();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].speaker, Speaker::Bot);

        log.push(Speaker::User, "when is the event?");
        log.push(Speaker::Bot, "soon");
        let speakers: Vec<Speaker> = log.messages().iter().map(|m| m.speaker).collect();
        assert_eq!(speakers, vec![Speaker::Bot, Speaker::User, Speaker::Bot]);
        assert_eq!(log.messages()[2].text, "soon");
        assert!(ConversationLog::default().is_empty());
    }
}
