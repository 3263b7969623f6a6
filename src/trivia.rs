//! Multiple-choice quiz, partly generated from the loaded dataset.

use crate::data::model::Row;
use crate::data::stats::{category_means, yearly_totals};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    pub explanation: String,
}

impl Question {
    fn new(prompt: &str, options: [&str; 4], correct: usize, explanation: &str) -> Self {
        Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
            explanation: explanation.to_string(),
        }
    }
}

/// Build the quiz. Two questions are answered from `rows`: the category
/// with the highest mean and the year with the largest total.
pub fn generate_questions(rows: &[Row]) -> Vec<Question> {
    let means = category_means(rows);
    let top_drug = means.first().map_or("Unknown", |(c, _)| c.as_str());
    let second_drug = means.get(1).map_or("Unknown", |(c, _)| c.as_str());

    let top_year = yearly_totals(rows)
        .first()
        .map_or_else(|| "2020".to_string(), |(year, _)| year.to_string());

    vec![
        Question::new(
            "What is the primary purpose of the 'Chocolate Opioid Initiative'?",
            [
                "To build tolerance through micro-doses in chocolate",
                "To ban all opioids nationwide",
                "To increase chocolate sales",
                "To create new drug policies",
            ],
            0,
            "According to the satirical proposal, micro-dosing in chocolate would build tolerance!",
        ),
        Question::new(
            "Based on the data, which drug shows the highest average overdose deaths?",
            [top_drug, second_drug, "Aspirin", "Caffeine"],
            0,
            &format!("{top_drug} shows the highest average in the dataset."),
        ),
        Question::new(
            "What's the REAL helpline for substance abuse?",
            [
                "1-800-CHOCOLATE",
                "1-800-662-4357 (SAMHSA)",
                "911 only",
                "No help is available",
            ],
            1,
            "SAMHSA National Helpline: 1-800-662-4357 provides 24/7 free help!",
        ),
        Question::new(
            "Is the Chocolate Opioid Initiative real?",
            [
                "Yes, it's FDA approved",
                "Yes, in 5 states",
                "No, it's complete satire",
                "It's pending approval",
            ],
            2,
            "This is 100% SATIRE! No drug-infused chocolate exists or should ever exist.",
        ),
        Question::new(
            "What should you do if someone is experiencing an overdose?",
            [
                "Give them chocolate",
                "Wait and see if it gets better",
                "Call 911 immediately and administer Narcan if available",
                "Take them to the Chocolate Haven shop",
            ],
            2,
            "Always call 911 immediately! Narcan (naloxone) can reverse opioid overdoses.",
        ),
        Question::new(
            "According to the data, which year had the most recorded overdose deaths?",
            [top_year.as_str(), "1995", "2000", "2010"],
            0,
            &format!("{top_year} shows the highest total in the available data."),
        ),
        Question::new(
            "What makes this website satirical?",
            [
                "Drug-infused chocolate is dangerous and illegal",
                "It uses real CDC data for a fake solution",
                "Multiple warnings say it's not real",
                "All of the above",
            ],
            3,
            "Everything about the 'initiative' is fake - but the data and crisis are very real.",
        ),
        Question::new(
            "What's the best way to prevent drug overdoses?",
            [
                "Eat chocolate daily",
                "Evidence-based treatment, harm reduction, and education",
                "Ignore the problem",
                "Just say no",
            ],
            1,
            "Real solutions include addiction treatment, Narcan distribution, safe injection sites, and education.",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Quiz progress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    /// Answer picked for the current question, if any.
    selected: Option<usize>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Quiz {
            questions,
            current: 0,
            score: 0,
            selected: None,
        }
    }

    /// The question being asked, or `None` once the quiz is over.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Pick an answer. Only the first pick per question counts; later picks
    /// return `None` and change nothing.
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        if self.selected.is_some() {
            return None;
        }
        let correct = self.current()?.correct == option;
        self.selected = Some(option);
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Move past an answered question.
    pub fn advance(&mut self) {
        if self.selected.take().is_some() {
            self.current += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Score as a whole-number percentage.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (f64::from(self.score) * 100.0 / f64::from(self.total())).round() as u32
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
        self.selected = None;
    }
}
