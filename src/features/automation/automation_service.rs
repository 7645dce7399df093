use std::fmt;
use std::time::Duration;

use crate::domain::config::AutomationConfig;
use crate::domain::models::{
    Cancelled, ClickPoint, Modifier, NamedKey, ScreenSize, Step, StepFailure,
};
use crate::features::automation::pacer::Pacer;
use crate::features::messages::MessageSource;
use crate::input::InputSimulator;
use crate::sound::SoundService;
use crate::utils;

/// How a single pass through the sequence ended
#[derive(Debug)]
pub enum CycleOutcome {
    Completed,
    Failed(StepFailure),
    Interrupted,
}

/// Cycle counts reported when the loop stops
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: u64,
    pub failed: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Automation terminated by user ({} completed, {} failed)",
            self.completed, self.failed
        )
    }
}

enum CycleError {
    Step(StepFailure),
    Cancelled,
}

impl From<StepFailure> for CycleError {
    fn from(failure: StepFailure) -> Self {
        CycleError::Step(failure)
    }
}

impl From<Cancelled> for CycleError {
    fn from(_: Cancelled) -> Self {
        CycleError::Cancelled
    }
}

/// Drives the click, type, wait and new-conversation sequence until interrupted
pub struct AutomationService<I, S, M> {
    input: I,
    sound: S,
    messages: M,
    typing_interval: Duration,
    pacer: Pacer,
}

impl<I, S, M> AutomationService<I, S, M>
where
    I: InputSimulator,
    S: SoundService,
    M: MessageSource,
{
    pub fn new(input: I, sound: S, messages: M, typing_interval: Duration, pacer: Pacer) -> Self {
        Self {
            input,
            sound,
            messages,
            typing_interval,
            pacer,
        }
    }

    /// Runs cycles back to back; a failed cycle is logged and the next one starts.
    pub async fn run(&mut self) -> RunSummary {
        log_sequence_banner();

        let mut summary = RunSummary::default();
        loop {
            match self.run_cycle().await {
                CycleOutcome::Completed => summary.completed += 1,
                CycleOutcome::Failed(failure) => {
                    summary.failed += 1;
                    log::error!("An error occurred during automation sequence: {}", failure);
                    log::error!("{}", AutomationConfig::SCREEN_ACCESS_HINT);
                }
                CycleOutcome::Interrupted => break,
            }
        }

        log::info!("{}", summary);
        summary
    }

    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.execute_cycle().await {
            Ok(()) => CycleOutcome::Completed,
            Err(CycleError::Step(failure)) => CycleOutcome::Failed(failure),
            Err(CycleError::Cancelled) => CycleOutcome::Interrupted,
        }
    }

    async fn execute_cycle(&mut self) -> Result<(), CycleError> {
        self.pacer.checkpoint()?;
        self.notify().await;

        self.pacer.checkpoint()?;
        let screen = self.read_screen().await?;

        self.pacer.checkpoint()?;
        let first = AutomationConfig::FIRST_CLICK.resolve(screen);
        log::info!("Moving mouse to first position: {}", first);
        self.click_at(first, Step::FirstClick).await?;
        self.wait(AutomationConfig::AFTER_FIRST_CLICK).await?;

        let message = self.messages.next_message().ok_or_else(|| {
            StepFailure::new(Step::TypeMessage, anyhow::anyhow!("message source is empty"))
        })?;
        log::info!("Typing '{}'", message);
        self.type_message(&message).await?;

        self.pacer.checkpoint()?;
        log::info!("Pressing Enter");
        self.input
            .press_key(NamedKey::Enter)
            .await
            .map_err(StepFailure::at(Step::PressEnter))?;
        self.wait(AutomationConfig::AFTER_SUBMIT).await?;

        log::info!(
            "Waiting {} minutes... will continue at approximately {}",
            AutomationConfig::IDLE_WINDOW.as_secs() / 60,
            utils::clock_time_after(AutomationConfig::IDLE_WINDOW)
        );
        self.pacer.pause(AutomationConfig::IDLE_WINDOW).await?;

        self.pacer.checkpoint()?;
        let second = AutomationConfig::SECOND_CLICK.resolve(screen);
        log::info!("Moving mouse to second position: {}", second);
        self.click_at(second, Step::SecondClick).await?;
        self.wait(AutomationConfig::AFTER_SECOND_CLICK).await?;

        log::info!("Pressing {}+N", Modifier::Ctrl);
        self.input
            .press_hotkey(Modifier::Ctrl, 'n')
            .await
            .map_err(StepFailure::at(Step::NewConversation))?;
        self.wait(AutomationConfig::COOLDOWN).await?;

        Ok(())
    }

    async fn notify(&self) {
        let result = self
            .sound
            .beep(AutomationConfig::BEEP_FREQUENCY_HZ, AutomationConfig::BEEP_DURATION)
            .await;
        match result {
            Ok(()) => log::info!("Sound notification played"),
            Err(e) => log::warn!("{}", StepFailure::new(Step::Notify, e)),
        }
    }

    async fn read_screen(&self) -> Result<ScreenSize, StepFailure> {
        let screen = self
            .input
            .screen_size()
            .await
            .map_err(StepFailure::at(Step::ReadScreen))?;
        if screen.is_empty() {
            return Err(StepFailure::new(
                Step::ReadScreen,
                anyhow::anyhow!("display reported an empty size {}", screen),
            ));
        }
        log::debug!("Screen size {}", screen);
        Ok(screen)
    }

    async fn click_at(&self, point: ClickPoint, step: Step) -> Result<(), StepFailure> {
        self.input.move_to(point).await.map_err(StepFailure::at(step))?;
        self.input.click().await.map_err(StepFailure::at(step))
    }

    /// Types one character at a time; an interrupt between characters stops typing.
    async fn type_message(&self, message: &str) -> Result<(), CycleError> {
        for (index, ch) in message.chars().enumerate() {
            if index > 0 && !self.typing_interval.is_zero() {
                self.pacer.pause(self.typing_interval).await?;
            }
            self.pacer.checkpoint()?;
            self.input
                .type_char(ch)
                .await
                .map_err(StepFailure::at(Step::TypeMessage))?;
        }
        Ok(())
    }

    async fn wait(&self, duration: Duration) -> Result<(), Cancelled> {
        log::info!("Waiting {} seconds...", duration.as_secs());
        self.pacer.pause(duration).await
    }
}

fn log_sequence_banner() {
    let first = AutomationConfig::FIRST_CLICK;
    let second = AutomationConfig::SECOND_CLICK;
    log::info!("Automation started. Press Ctrl+C to stop.");
    log::info!("Click positions are computed from your screen size every cycle:");
    log::info!("  1. Beep, then click at x={:.1}%, y={:.1}%", first.x * 100.0, first.y * 100.0);
    log::info!("  2. Wait {} seconds", AutomationConfig::AFTER_FIRST_CLICK.as_secs());
    log::info!("  3. Type a message and press Enter");
    log::info!("  4. Wait {} seconds", AutomationConfig::AFTER_SUBMIT.as_secs());
    log::info!("  5. Wait {} minutes", AutomationConfig::IDLE_WINDOW.as_secs() / 60);
    log::info!("  6. Click at x={:.1}%, y={:.1}%", second.x * 100.0, second.y * 100.0);
    log::info!("  7. Wait {} seconds", AutomationConfig::AFTER_SECOND_CLICK.as_secs());
    log::info!("  8. Press {}+N", Modifier::Ctrl);
    log::info!("  9. Wait {} seconds", AutomationConfig::COOLDOWN.as_secs());
    log::info!(" 10. Repeat from step 1");
    log::info!(
        "One cycle takes about {} minutes",
        AutomationConfig::NOMINAL_CYCLE.as_secs() / 60
    );
}
