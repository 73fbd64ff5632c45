// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `stagehand config`.

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use stagehand_config_fs::FsConfigStore;
use stagehand_core::{ConfigService, SdkSettings};
use stagehand_port::HostVersion;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective settings as JSON
    Show,
    /// Change one setting
    Set {
        /// Setting to change
        key: SettingKey,
        /// New value (`none` clears the timeout)
        value: String,
    },
    /// Restore defaults
    Reset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SettingKey {
    ItemListMinVersion,
    GlobalSourceMinVersion,
    HostCallTimeoutMs,
}

fn apply(settings: &mut SdkSettings, key: SettingKey, value: &str) -> Result<()> {
    match key {
        SettingKey::ItemListMinVersion | SettingKey::GlobalSourceMinVersion => {
            value
                .parse::<HostVersion>()
                .with_context(|| format!("`{value}` is not a host version"))?;
            let slot = if matches!(key, SettingKey::ItemListMinVersion) {
                &mut settings.item_list_min_version
            } else {
                &mut settings.global_source_min_version
            };
            *slot = value.to_string();
        }
        SettingKey::HostCallTimeoutMs => {
            settings.host_call_timeout_ms = match value {
                "none" | "" => None,
                ms => match ms.parse::<u64>() {
                    Ok(0) => bail!("timeout must be positive; use `none` to disable"),
                    Ok(ms) => Some(ms),
                    Err(_) => bail!("`{ms}` is not a number of milliseconds"),
                },
            };
        }
    }
    Ok(())
}

pub fn run(store: &FsConfigStore, cmd: ConfigCommand) -> Result<()> {
    let service = ConfigService::new(store.clone());
    match cmd {
        ConfigCommand::Show => {
            let settings = service.load_settings()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigCommand::Set { key, value } => {
            let mut settings = service.load_settings()?;
            apply(&mut settings, key, &value)?;
            settings.thresholds()?;
            service.save_settings(&settings)?;
            info!(?key, %value, "setting updated");
        }
        ConfigCommand::Reset => {
            store.remove(SdkSettings::KEY)?;
            info!(dir = %store.base_dir().display(), "settings reset");
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn timeout_accepts_none_and_rejects_zero() {
        let mut s = SdkSettings::default();
        apply(&mut s, SettingKey::HostCallTimeoutMs, "250").unwrap();
        assert_eq!(s.host_call_timeout_ms, Some(250));
        apply(&mut s, SettingKey::HostCallTimeoutMs, "none").unwrap();
        assert_eq!(s.host_call_timeout_ms, None);
        assert!(apply(&mut s, SettingKey::HostCallTimeoutMs, "0").is_err());
    }

    #[test]
    fn versions_must_parse() {
        let mut s = SdkSettings::default();
        assert!(apply(&mut s, SettingKey::GlobalSourceMinVersion, "2.x").is_err());
        apply(&mut s, SettingKey::GlobalSourceMinVersion, "3.0").unwrap();
        assert_eq!(s.global_source_min_version, "3.0");
    }
}
