//! Logarithmic scale quiz questions

use serde::Serialize;

/// One multiple-choice option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    /// Option letter, `a` to `d`
    pub value: &'static str,
    pub text: &'static str,
}

/// A multiple-choice question with its answer key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [QuizOption; 4],
    pub correct: &'static str,
    pub explanation: &'static str,
}

impl QuizQuestion {
    /// Option with letter `value`
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn correct_option(&self) -> &QuizOption {
        // Every built-in question keys one of its own options
        self.option(self.correct).unwrap_or(&self.options[0])
    }

    pub fn is_correct(&self, value: &str) -> bool {
        self.correct == value
    }
}

const fn opt(value: &'static str, text: &'static str) -> QuizOption {
    QuizOption { value, text }
}

pub(super) static QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        question: "If a sound increases by 20 dB, by how much does its energy intensity increase?",
        options: [
            opt("a", "2 times"),
            opt("b", "20 times"),
            opt("c", "100 times"),
            opt("d", "1000 times"),
        ],
        correct: "c",
        explanation: "Each 10 dB increase represents a 10× energy increase. So 20 dB = 10² = 100× increase.",
    },
    QuizQuestion {
        id: 2,
        question: "What is the reference intensity (I₀) for the decibel scale?",
        options: [
            opt("a", "1 × 10⁻¹² W/m²"),
            opt("b", "1 × 10⁻⁶ W/m²"),
            opt("c", "1 × 10⁻³ W/m²"),
            opt("d", "1 W/m²"),
        ],
        correct: "a",
        explanation: "The reference intensity is 1 × 10⁻¹² W/m², which represents the threshold of human hearing.",
    },
    QuizQuestion {
        id: 3,
        question: "Why do we use a logarithmic scale for measuring sound?",
        options: [
            opt("a", "It makes calculations easier"),
            opt("b", "Human hearing perceives sound logarithmically"),
            opt("c", "The range of sound intensities is enormous"),
            opt("d", "Both B and C"),
        ],
        correct: "d",
        explanation: "Both human perception and the enormous range of sound intensities make logarithmic scale practical.",
    },
    QuizQuestion {
        id: 4,
        question: "At what decibel level does sound become physically impossible in air?",
        options: [
            opt("a", "140 dB"),
            opt("b", "160 dB"),
            opt("c", "194 dB"),
            opt("d", "220 dB"),
        ],
        correct: "c",
        explanation: "At around 194 dB, sound waves can no longer propagate through air and become shock waves.",
    },
    QuizQuestion {
        id: 5,
        question: "If Sound A is 90 dB and Sound B is 60 dB, how much more energy does Sound A have?",
        options: [
            opt("a", "30 times more"),
            opt("b", "100 times more"),
            opt("c", "1000 times more"),
            opt("d", "10,000 times more"),
        ],
        correct: "c",
        explanation: "The difference is 30 dB. Each 10 dB = 10× energy, so 30 dB = 10³ = 1000× more energy.",
    },
];
