//! Line-based interactive loop over stdin/stdout.
//!
//! The shell is generic over its input, output and chart surface so a whole
//! session can be scripted in memory.

mod error;
pub mod history;
pub mod input;
pub mod menu;
pub mod session;

use std::io::{BufRead, Write};

use crate::core::kinematics::{acceleration, displacement, final_velocity, time};
use crate::core::presets::{PRESETS, preset_by_number};
use crate::core::quiz::{CORRECT_FEEDBACK, QUESTIONS, QuizQuestion, WRONG_FEEDBACK};
use crate::core::trajectory::sample_trajectory;
use crate::display::{ChartPresenter, VelocityChart, write_table};
use crate::settings::Settings;

pub use error::ShellError;
pub use history::History;
pub use menu::MenuChoice;
pub use session::{drive, run_session};

use input::{read_f64, read_token};
use menu::{MENU_PROMPT, write_menu};

const PROMPT_V0: &str = "Velocidade inicial (v0) em m/s: ";
const PROMPT_V: &str = "Velocidade final (v) em m/s: ";
const PROMPT_A: &str = "Aceleração (a) em m/s²: ";
const PROMPT_T: &str = "Tempo (t) em segundos: ";
const PROMPT_TOTAL_T: &str = "Tempo total (t) em segundos: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellState {
    AwaitingMenuChoice,
    Running(MenuChoice),
    /// A chart is ready and waits for a surface to show it.
    Displaying,
    Finished,
}

pub struct Shell<R, W, P> {
    input: R,
    output: W,
    presenter: P,
    settings: Settings,
    history: History,
    state: ShellState,
    chart: Option<VelocityChart>,
}

impl<R: BufRead, W: Write, P: ChartPresenter> Shell<R, W, P> {
    pub fn new(input: R, output: W, presenter: P, settings: Settings) -> Self {
        Self {
            input,
            output,
            presenter,
            history: History::new(settings.history_capacity),
            settings,
            state: ShellState::AwaitingMenuChoice,
            chart: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the banner.
    pub fn begin(&mut self) -> Result<(), ShellError> {
        log::info!("session started");
        writeln!(self.output, "\n{}", "=".repeat(50))?;
        writeln!(
            self.output,
            "SIMULADOR DE MRUV - MOVIMENTO RETILÍNEO UNIFORMEMENTE VARIADO"
        )?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        Ok(())
    }

    /// Runs the whole session, handing every chart to the presenter.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.begin()?;
        while self.state != ShellState::Finished {
            self.step()?;
        }
        log::info!("session finished");
        Ok(())
    }

    /// Advances the state machine by one transition.
    pub fn step(&mut self) -> Result<(), ShellError> {
        match self.state {
            ShellState::AwaitingMenuChoice => self.await_menu_choice(),
            ShellState::Running(choice) => self.run_choice(choice),
            ShellState::Displaying => self.present_chart(),
            ShellState::Finished => Ok(()),
        }
    }

    /// Takes the chart waiting in [`ShellState::Displaying`] and returns the
    /// shell to the menu. The caller becomes responsible for showing it.
    pub fn take_chart(&mut self) -> Option<VelocityChart> {
        if self.state != ShellState::Displaying {
            return None;
        }
        self.state = ShellState::AwaitingMenuChoice;
        self.chart.take()
    }

    fn present_chart(&mut self) -> Result<(), ShellError> {
        let Some(chart) = self.take_chart() else {
            return Ok(());
        };
        if let Err(err) = self.presenter.present(&chart) {
            log::warn!("chart not shown: {err}");
            writeln!(self.output, "\nOcorreu um erro: {err}")?;
        }
        Ok(())
    }

    fn await_menu_choice(&mut self) -> Result<(), ShellError> {
        write_menu(&mut self.output)?;
        let token = match read_token(&mut self.input, &mut self.output, MENU_PROMPT) {
            Ok(token) => token,
            Err(ShellError::InputClosed) => return self.finish(),
            Err(err) => return Err(err),
        };

        match MenuChoice::from_token(&token) {
            Some(choice) => {
                log::debug!("menu token '{token}' -> {choice:?}");
                self.state = ShellState::Running(choice);
            }
            None => {
                log::warn!("unrecognized menu token '{token}'");
                writeln!(self.output, "\nOpção inválida. Tente novamente!")?;
            }
        }
        Ok(())
    }

    fn run_choice(&mut self, choice: MenuChoice) -> Result<(), ShellError> {
        self.state = ShellState::AwaitingMenuChoice;

        match self.execute(choice) {
            Ok(()) => Ok(()),
            Err(ShellError::InputClosed) => self.finish(),
            Err(ShellError::Io(err)) => Err(ShellError::Io(err)),
            Err(ShellError::InvalidInput(err)) => {
                log::warn!("{choice:?} rejected: {err}");
                writeln!(self.output, "\nErro: {err}")?;
                Ok(())
            }
            Err(err) => {
                log::warn!("{choice:?} failed: {err}");
                writeln!(self.output, "\nOcorreu um erro: {err}")?;
                Ok(())
            }
        }
    }

    fn finish(&mut self) -> Result<(), ShellError> {
        self.state = ShellState::Finished;
        self.chart = None;
        writeln!(self.output, "\nEncerrando o simulador...")?;
        self.output.flush()?;
        Ok(())
    }

    fn number(&mut self, prompt: &str) -> Result<f64, ShellError> {
        read_f64(&mut self.input, &mut self.output, prompt)
    }

    fn execute(&mut self, choice: MenuChoice) -> Result<(), ShellError> {
        match choice {
            MenuChoice::Acceleration => {
                let v0 = self.number(PROMPT_V0)?;
                let v = self.number(PROMPT_V)?;
                let t = self.number(PROMPT_T)?;
                let a = acceleration(v0, v, t)?;
                self.report(
                    "Aceleração",
                    format!("a = {a:.2} m/s²"),
                    format!("a = (v - v0) / t = ({v:?} - {v0:?}) / {t:?}"),
                )
            }
            MenuChoice::FinalVelocity => {
                let v0 = self.number(PROMPT_V0)?;
                let a = self.number(PROMPT_A)?;
                let t = self.number(PROMPT_T)?;
                let v = final_velocity(v0, a, t);
                self.report(
                    "Velocidade final",
                    format!("v = {v:.2} m/s"),
                    format!("v = v0 + a*t = {v0:?} + {a:?}*{t:?}"),
                )
            }
            MenuChoice::Time => {
                let v0 = self.number(PROMPT_V0)?;
                let v = self.number(PROMPT_V)?;
                let a = self.number(PROMPT_A)?;
                let t = time(v0, v, a)?;
                self.report(
                    "Tempo",
                    format!("t = {t:.2} s"),
                    format!("t = (v - v0) / a = ({v:?} - {v0:?}) / {a:?}"),
                )
            }
            MenuChoice::Displacement => {
                let v0 = self.number(PROMPT_V0)?;
                let a = self.number(PROMPT_A)?;
                let t = self.number(PROMPT_T)?;
                let s = displacement(v0, a, t);
                self.report(
                    "Deslocamento",
                    format!("s = {s:.2} m"),
                    format!("s = v0*t + 0.5*a*t² = {v0:?}*{t:?} + 0.5*{a:?}*{t:?}²"),
                )
            }
            MenuChoice::Table => self.show_table(),
            MenuChoice::Plot => self.show_plot(),
            MenuChoice::Presets => self.show_preset(),
            MenuChoice::History => {
                self.history.write_to(&mut self.output)?;
                Ok(())
            }
            MenuChoice::Quiz => self.run_quiz(),
            MenuChoice::Exit => self.finish(),
        }
    }

    fn report(
        &mut self,
        operation: &'static str,
        result: String,
        formula: String,
    ) -> Result<(), ShellError> {
        log::debug!("{operation}: {result}");
        writeln!(self.output, "\nResultado: {result}")?;
        writeln!(self.output, "Fórmula: {formula}")?;
        self.history.record(operation, result);
        Ok(())
    }

    fn show_table(&mut self) -> Result<(), ShellError> {
        let v0 = self.number(PROMPT_V0)?;
        let a = self.number(PROMPT_A)?;
        let t = self.number(PROMPT_TOTAL_T)?;

        let samples = sample_trajectory(v0, a, t, self.settings.table_points);
        writeln!(self.output)?;
        write_table(&mut self.output, &samples)?;
        Ok(())
    }

    fn show_plot(&mut self) -> Result<(), ShellError> {
        let v0 = self.number(PROMPT_V0)?;
        let a = self.number(PROMPT_A)?;
        let t = self.number(PROMPT_TOTAL_T)?;

        let chart = VelocityChart::new(v0, a, t, self.settings.plot_points);
        writeln!(
            self.output,
            "\nAbrindo gráfico (feche a janela ou pressione Esc para continuar)..."
        )?;
        self.output.flush()?;
        self.chart = Some(chart);
        self.state = ShellState::Displaying;
        Ok(())
    }

    /// Asks every question in turn. A question is repeated until it is
    /// answered correctly; an empty answer leaves the quiz.
    fn run_quiz(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nQuiz de MRUV")?;
        for (number, question) in QUESTIONS.iter().enumerate() {
            if !self.ask(number + 1, question)? {
                writeln!(self.output, "\nQuiz interrompido.")?;
                return Ok(());
            }
        }
        writeln!(self.output, "\nQuiz concluído!")?;
        Ok(())
    }

    fn ask(&mut self, number: usize, question: &QuizQuestion) -> Result<bool, ShellError> {
        writeln!(self.output, "\n{number}. {}", question.question)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.output, "   {}) {option}", i + 1)?;
        }

        let prompt = format!("Sua resposta (1-{}): ", question.options.len());
        loop {
            let token = read_token(&mut self.input, &mut self.output, &prompt)?;
            if token.is_empty() {
                return Ok(false);
            }
            match question.parse_answer(&token) {
                Some(index) if question.is_correct(index) => {
                    log::debug!("quiz question {number} answered");
                    writeln!(self.output, "{CORRECT_FEEDBACK}")?;
                    return Ok(true);
                }
                Some(_) => writeln!(self.output, "{WRONG_FEEDBACK}")?,
                None => writeln!(
                    self.output,
                    "Escolha uma alternativa de 1 a {}.",
                    question.options.len()
                )?,
            }
        }
    }

    fn show_preset(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nExemplos pré-definidos:")?;
        for (i, preset) in PRESETS.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} ({})",
                i + 1,
                preset.name,
                preset.describe_given()
            )?;
        }

        let prompt = format!("\nEscolha um exemplo (1-{}): ", PRESETS.len());
        let token = read_token(&mut self.input, &mut self.output, &prompt)?;
        let Some(preset) = preset_by_number(&token) else {
            log::warn!("unrecognized preset token '{token}'");
            writeln!(self.output, "\nExemplo inválido.")?;
            return Ok(());
        };

        let summary = preset.solve()?;
        writeln!(self.output, "\nExemplo: {}", preset.name)?;
        writeln!(self.output, "  v0 = {:.2} m/s", summary.v0)?;
        writeln!(self.output, "  v  = {:.2} m/s", summary.v)?;
        writeln!(self.output, "  a  = {:.2} m/s²", summary.a)?;
        writeln!(self.output, "  t  = {:.2} s", summary.t)?;
        writeln!(self.output, "  s  = {:.2} m", summary.s)?;
        Ok(())
    }
}
