pub const CORRECT_FEEDBACK: &str = "✅ Resposta correta!";
pub const WRONG_FEEDBACK: &str = "❌ Tente novamente!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`.
    pub correct: usize,
}

pub const QUESTIONS: [QuizQuestion; 2] = [
    QuizQuestion {
        question: "Qual fórmula representa o cálculo da velocidade final no MRUV?",
        options: [
            "v = v₀ + a·t",
            "s = v₀·t + ½·a·t²",
            "a = Δv / Δt",
            "v² = v₀² + 2·a·Δs",
        ],
        correct: 0,
    },
    QuizQuestion {
        question: "Em um MRUV com aceleração negativa:",
        options: [
            "A velocidade aumenta constantemente",
            "O movimento é sempre progressivo",
            "A velocidade diminui com o tempo",
            "O deslocamento é sempre positivo",
        ],
        correct: 2,
    },
];

impl QuizQuestion {
    /// Maps a 1-based answer token onto an option index.
    pub fn parse_answer(&self, token: &str) -> Option<usize> {
        let choice = token.trim().parse::<usize>().ok()?;
        let index = choice.checked_sub(1)?;
        (index < self.options.len()).then_some(index)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}
