use crate::{
    cli::{answers::AnswerCollector, messages, Args},
    config::{QuestionSet, SETUP_STAGES},
    constants::exit_codes,
    error::Result,
    ioutils::{copy_file, read_file, write_file},
    merge::merge_content,
    prompt::{get_prompt_provider, TextPrompter},
    types::AnswerSet,
};
use std::io::Write;

/// How a run ended when no error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The env-file was created from the template and filled in.
    Configured,
    /// The env-file was already there; nothing was asked or written.
    AlreadyConfigured,
    /// Check mode found the env-file.
    CheckPassed,
    /// Check mode found no env-file.
    CheckFailed,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::CheckFailed => exit_codes::FAILURE,
            _ => exit_codes::SUCCESS,
        }
    }
}

/// Drives the env-file lifecycle: check, first-time setup, or the
/// already-configured notice
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the mode selected by the arguments, writing user-facing messages to `out`.
    pub fn run<P, W>(&self, prompter: &P, out: &mut W) -> Result<Outcome>
    where
        P: TextPrompter + ?Sized,
        W: Write,
    {
        if self.args.check {
            return self.check(out);
        }

        if self.env_file_exists() {
            log::info!("{} already exists, skipping setup", self.args.env_file.display());
            writeln!(out, "{}", messages::already_exists(&self.args.env_file))?;
            return Ok(Outcome::AlreadyConfigured);
        }

        self.setup(prompter, out)?;
        Ok(Outcome::Configured)
    }

    /// Existence probe; never touches the filesystem beyond a metadata lookup.
    fn check<W: Write>(&self, out: &mut W) -> Result<Outcome> {
        if self.env_file_exists() {
            log::debug!("{} found", self.args.env_file.display());
            Ok(Outcome::CheckPassed)
        } else {
            writeln!(out, "{}", messages::missing_env_file())?;
            Ok(Outcome::CheckFailed)
        }
    }

    fn setup<P, W>(&self, prompter: &P, out: &mut W) -> Result<()>
    where
        P: TextPrompter + ?Sized,
        W: Write,
    {
        writeln!(out, "{}", messages::intro(&self.args.env_file))?;

        self.create_env_file()?;

        for stage in &SETUP_STAGES {
            let answers = self.prompt_stage(stage, prompter, out)?;
            self.merge_and_persist(&answers)?;
        }

        writeln!(out, "{}", messages::created(&self.args.env_file))?;
        Ok(())
    }

    fn create_env_file(&self) -> Result<()> {
        log::info!(
            "Creating {} from {}",
            self.args.env_file.display(),
            self.args.template.display()
        );
        copy_file(&self.args.template, &self.args.env_file)
    }

    fn prompt_stage<P, W>(
        &self,
        stage: &QuestionSet,
        prompter: &P,
        out: &mut W,
    ) -> Result<AnswerSet>
    where
        P: TextPrompter + ?Sized,
        W: Write,
    {
        writeln!(out, "{}", messages::stage_heading(stage.title))?;
        out.flush()?;
        AnswerCollector::new(prompter).collect_answers(stage.questions)
    }

    /// Rewrites the env-file with `answers` merged in.
    pub fn merge_and_persist(&self, answers: &AnswerSet) -> Result<()> {
        let env_file = &self.args.env_file;
        let content = read_file(env_file)?;
        let outcome = merge_content(answers, &content);

        for key in &outcome.unmatched {
            log::warn!("{key} is not present in {}, answer dropped", env_file.display());
        }

        write_file(&outcome.content(), env_file)?;
        log::info!(
            "Updated {} line(s) in {}",
            outcome.replaced,
            env_file.display()
        );
        Ok(())
    }

    fn env_file_exists(&self) -> bool {
        self.args.env_file.exists()
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Outcome> {
    let prompter = get_prompt_provider();
    let mut stdout = std::io::stdout();
    Runner::new(args).run(prompter.as_ref(), &mut stdout)
}
