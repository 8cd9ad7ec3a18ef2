use super::{Question, QuestionId, QuestionKind, SubQuestion};

const SATISFACTION_SCALE: [&str; 5] = [
    "1 - Highly Dissatisfied",
    "2 - Dissatisfied",
    "3 - Neutral",
    "4 - Satisfied",
    "5 - Highly Satisfied",
];

const LIKELIHOOD_SCALE: [&str; 5] = [
    "1 - Not at all likely",
    "2 - Unlikely",
    "3 - Neutral / Unsure",
    "4 - Likely",
    "5 - Extremely likely",
];

pub(super) fn client_questions() -> Vec<Question> {
    vec![
        Question {
            id: QuestionId::top_level(1),
            text: "Which of the following best describes your engagement with our team?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "Executive Search (CXO/ Board)",
                "Talent Advisory",
                "Leadership Coaching and Development",
            ],
            weight: None,
            qualifying_answers: Vec::new(),
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(2),
            text: "How did you first hear about us?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "Director",
                "Industry Referral",
                "Employee/Internal Leader",
                "Existing Client",
                "Web/Search",
                "Other (specify)",
            ],
            weight: None,
            qualifying_answers: Vec::new(),
            sub_question: Some(Box::new(SubQuestion {
                trigger_value: "Other (specify)",
                question: Question {
                    id: QuestionId::nested(2, 1),
                    text: "Please specify the other source",
                    kind: QuestionKind::ShortText,
                    options: Vec::new(),
                    weight: None,
                    qualifying_answers: Vec::new(),
                    sub_question: None,
                },
            })),
        },
        Question {
            id: QuestionId::top_level(3),
            text: "How would you describe the outcome of your engagement with us?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "1 - Not at all achieved",
                "2 - Slightly achieved",
                "3 - Partially achieved",
                "4 - Mostly achieved",
                "5 - Fully achieved",
            ],
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Mostly achieved", "5 - Fully achieved"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(4),
            text: "How satisfied are you with your overall experience of working with our team?",
            kind: QuestionKind::SingleChoice,
            options: SATISFACTION_SCALE.to_vec(),
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Satisfied", "5 - Highly Satisfied"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(5),
            text: "Did we follow a formal cadence to review engagement progress?",
            kind: QuestionKind::SingleChoice,
            options: vec!["Yes", "No"],
            weight: Some(0.1),
            qualifying_answers: vec!["Yes"],
            sub_question: Some(Box::new(SubQuestion {
                trigger_value: "Yes",
                question: Question {
                    id: QuestionId::nested(5, 1),
                    text: "How frequently was this progress communicated to you and other stakeholders?",
                    kind: QuestionKind::SingleChoice,
                    options: vec![
                        "No formal review process was followed",
                        "Weekly",
                        "Bi-weekly",
                        "Monthly",
                        "Quarterly",
                        "As needed/ ad-hoc",
                    ],
                    weight: None,
                    qualifying_answers: Vec::new(),
                    sub_question: None,
                },
            })),
        },
        Question {
            id: QuestionId::top_level(6),
            text: "To what extent did we adhere to the agreed delivery milestones and timelines?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "1 - Significant delays / major deviations",
                "2 - Moderate delays / some deviations",
                "3 - Minor delays / largely on track",
                "4 - On time with minimal deviation",
                "5 - Fully on time / exceeded expectations",
            ],
            weight: Some(0.1),
            qualifying_answers: vec![
                "4 - On time with minimal deviation",
                "5 - Fully on time / exceeded expectations",
            ],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(7),
            text: "How likely are you to engage with us again in the future?",
            kind: QuestionKind::SingleChoice,
            options: LIKELIHOOD_SCALE.to_vec(),
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Likely", "5 - Extremely likely"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(8),
            text: "How likely are you to recommend us to your associates or industry peers?",
            kind: QuestionKind::SingleChoice,
            options: LIKELIHOOD_SCALE.to_vec(),
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Likely", "5 - Extremely likely"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(9),
            text: "How satisfied are you with the engagement progress reports, MIS, candidate reports, and other updates we shared?",
            kind: QuestionKind::SingleChoice,
            options: SATISFACTION_SCALE.to_vec(),
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Satisfied", "5 - Highly Satisfied"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(10),
            text: "What was the primary reason you chose to engage with us?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "Reputation and brand credibility",
                "Expertise in leadership search (CXO / Board level)",
                "Depth and quality of advisory services",
                "Leadership coaching quality and methodology",
                "Prior relationship or referral trust",
                "Value for cost / ROI considerations",
                "Comprehensive service offering (end-to-end support)",
                "Other (please specify)",
            ],
            weight: None,
            qualifying_answers: Vec::new(),
            sub_question: Some(Box::new(SubQuestion {
                trigger_value: "Other (please specify)",
                question: Question {
                    id: QuestionId::nested(10, 1),
                    text: "Please specify the other reason",
                    kind: QuestionKind::ShortText,
                    options: Vec::new(),
                    weight: None,
                    qualifying_answers: Vec::new(),
                    sub_question: None,
                },
            })),
        },
        Question {
            id: QuestionId::top_level(11),
            text: "How clearly were the goals and expectations defined at the beginning of your engagement?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "1 - Not clear at all",
                "2 - Slightly clear",
                "3 - Moderately clear",
                "4 - Very clear",
                "5 - Extremely clear",
            ],
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Very clear", "5 - Extremely clear"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(12),
            text: "To what extent did we meet the objectives agreed upon at the start of the engagement?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "1 - Did not meet objectives at all",
                "2 - Met a few objectives",
                "3 - Met some objectives",
                "4 - Met most objectives",
                "5 - Fully met all objectives",
            ],
            weight: Some(0.1),
            qualifying_answers: vec!["4 - Met most objectives", "5 - Fully met all objectives"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(13),
            text: "Are there any areas where our team could have improved your overall engagement experience?",
            kind: QuestionKind::SingleChoice,
            options: vec!["Yes", "No"],
            weight: Some(0.1),
            qualifying_answers: vec!["No"],
            sub_question: Some(Box::new(SubQuestion {
                trigger_value: "Yes",
                question: Question {
                    id: QuestionId::nested(13, 1),
                    text: "Please specify the areas for improvement",
                    kind: QuestionKind::ShortText,
                    options: Vec::new(),
                    weight: None,
                    qualifying_answers: Vec::new(),
                    sub_question: None,
                },
            })),
        },
        Question {
            id: QuestionId::top_level(14),
            text: "Do you have any additional feedback, suggestions, or comments you'd like to share with us?",
            kind: QuestionKind::LongText,
            options: Vec::new(),
            weight: None,
            qualifying_answers: Vec::new(),
            sub_question: None,
        },
    ]
}

pub(super) fn candidate_questions() -> Vec<Question> {
    vec![
        Question {
            id: QuestionId::top_level(1),
            text: "Who from our team reached out to you for the first time?",
            kind: QuestionKind::ShortText,
            options: Vec::new(),
            weight: None,
            qualifying_answers: Vec::new(),
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(2),
            text: "What source was used to reach out to you?",
            kind: QuestionKind::SingleChoice,
            options: vec![
                "LinkedIn",
                "Job portal",
                "Cold call",
                "Email",
                "Via a reference",
                "Other (specify)",
            ],
            weight: None,
            qualifying_answers: Vec::new(),
            sub_question: Some(Box::new(SubQuestion {
                trigger_value: "Other (specify)",
                question: Question {
                    id: QuestionId::nested(2, 1),
                    text: "Please specify the other source",
                    kind: QuestionKind::ShortText,
                    options: Vec::new(),
                    weight: None,
                    qualifying_answers: Vec::new(),
                    sub_question: None,
                },
            })),
        },
        Question {
            id: QuestionId::top_level(3),
            text: "How would you rate the quality of your discussions with our team?",
            kind: QuestionKind::SingleChoice,
            options: SATISFACTION_SCALE.to_vec(),
            weight: Some(0.2),
            qualifying_answers: vec!["4 - Satisfied", "5 - Highly Satisfied"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(4),
            text: "Did our team keep you posted on a regular basis on the progress of your candidature?",
            kind: QuestionKind::SingleChoice,
            options: vec!["Yes", "No", "Sometimes"],
            weight: Some(0.1),
            qualifying_answers: vec!["Yes"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(5),
            text: "Did we assist you during your preparations for your discussions with the client?",
            kind: QuestionKind::SingleChoice,
            options: vec!["Yes", "No", "Sometimes"],
            weight: Some(0.1),
            qualifying_answers: vec!["Yes"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(6),
            text: "Did we provide you clarity about the process at the client's end?",
            kind: QuestionKind::SingleChoice,
            options: vec!["Yes", "No", "Sometimes"],
            weight: Some(0.1),
            qualifying_answers: vec!["Yes"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(7),
            text: "How was our post-offer engagement with you, from offer acceptance to the date you onboarded?",
            kind: QuestionKind::SingleChoice,
            options: SATISFACTION_SCALE.to_vec(),
            weight: Some(0.2),
            qualifying_answers: vec!["4 - Satisfied", "5 - Highly Satisfied"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(8),
            text: "Would you refer us to any of your friends / anyone in your network?",
            kind: QuestionKind::SingleChoice,
            options: vec!["Yes", "No", "Maybe"],
            weight: Some(0.1),
            qualifying_answers: vec!["Yes"],
            sub_question: None,
        },
        Question {
            id: QuestionId::top_level(9),
            text: "How would you rate your overall experience and engagement with our team?",
            kind: QuestionKind::SingleChoice,
            options: SATISFACTION_SCALE.to_vec(),
            weight: Some(0.2),
            qualifying_answers: vec!["4 - Satisfied", "5 - Highly Satisfied"],
            sub_question: None,
        },
    ]
}
