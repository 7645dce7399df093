mod domain;
mod features;
mod input;
mod sound;
mod utils;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::domain::config::AutomationConfig;
use crate::domain::models::Profile;
use crate::features::automation::{AutomationService, Pacer};
use crate::features::messages::RandomMessages;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile_name = std::env::var(AutomationConfig::PROFILE_ENV_VAR).ok();
    let profile = Profile::resolve(profile_name.as_deref())?;
    log::info!("Starting AutoNext with profile {:?}", profile);

    let input_handler = input::InputHandler::new()?;
    let sound_player = sound::SoundPlayer::new();
    let messages = RandomMessages::new(profile.messages());

    let cancel = CancellationToken::new();
    spawn_interrupt_listener(cancel.clone());

    let mut service = AutomationService::new(
        input_handler,
        sound_player,
        messages,
        profile.typing_interval(),
        Pacer::new(cancel),
    );
    service.run().await;

    Ok(())
}

fn spawn_interrupt_listener(cancel: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Interrupt listener error: {}", e);
            return;
        }
        log::info!("Interrupt received, stopping after the current keystroke");
        cancel.cancel();

        // tokio keeps handling SIGINT after the first interrupt.
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Second interrupt received, exiting immediately");
            std::process::exit(130);
        }
    });
}
