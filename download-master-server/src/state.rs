/* This file is part of the Download Master project - https://github.com/download-master/download-master
*
*  Copyright (C) 2025 Download Master contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::{fs, io, path::{Path, PathBuf}, time::Duration};

use cloneable_errors::{bail, ErrContext, ErrorContext, ResContext};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub static_content_path: PathBuf,
    /// Where yt-dlp writes files before they are sent to the client
    pub tmp_path: PathBuf,
    pub listen: ListenConfig,
    pub ytdlp: YtDlpConfig,
}

impl AppConfig {
    /// Reads the config at `path`, writing the defaults there first if the file does not exist
    pub fn load_or_create(path: &Path) -> Result<AppConfig, ErrorContext> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to deserialize contents of {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                let serialized = toml::to_string(&config).context("Failed to serialize the default config as TOML")?;
                fs::write(path, serialized).with_context(|| format!("Failed to write the default config to {}", path.display()))?;
                config
            },
            Err(e) => return Err(e.context(format!("Failed to read {}", path.display()))),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ErrorContext> {
        if self.listen.tcp.is_none() && self.listen.unix.is_none() {
            bail!("Invalid configuration - no tcp port or unix socket path specified");
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            static_content_path: PathBuf::from("./static"),
            tmp_path: PathBuf::from("./tmp"),
            listen: ListenConfig::default(),
            ytdlp: YtDlpConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct YtDlpConfig {
    pub path: PathBuf,
    /// Pass `-4` to yt-dlp, which avoids broken IPv6 routes on some cloud hosts
    pub force_ipv4: bool,
    pub info_timeout_secs: u64,
    pub download_timeout_secs: u64,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("yt-dlp"),
            force_ipv4: true,
            info_timeout_secs: 30,
            download_timeout_secs: 300,
        }
    }
}

impl YtDlpConfig {
    pub fn info_timeout(&self) -> Duration {
        Duration::from_secs(self.info_timeout_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}

#[derive(Serialize, Deserialize)]
pub struct ListenConfig {
    pub tcp: Option<(String, u16)>,
    pub unix: Option<String>,
    pub unix_mode: Option<u32>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            tcp: Some(("0.0.0.0".to_owned(), 10000)),
            unix: None,
            unix_mode: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str(r#"
            tmp_path = "/var/tmp/dm"

            [ytdlp]
            force_ipv4 = false
        "#).unwrap();
        assert_eq!(cfg.tmp_path, PathBuf::from("/var/tmp/dm"));
        assert_eq!(cfg.static_content_path, PathBuf::from("./static"));
        assert!(!cfg.ytdlp.force_ipv4);
        assert_eq!(cfg.ytdlp.info_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.ytdlp.download_timeout(), Duration::from_secs(300));
        assert_eq!(cfg.listen.tcp, Some(("0.0.0.0".to_owned(), 10000)));
    }

    #[test]
    fn default_config_roundtrips_through_toml() {
        let serialized = toml::to_string(&AppConfig::default()).unwrap();
        let cfg: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(cfg.ytdlp.path, PathBuf::from("yt-dlp"));
        assert_eq!(cfg.listen.unix, None);
    }

    #[test]
    fn missing_config_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(cfg.tmp_path, PathBuf::from("./tmp"));
        let written: AppConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.ytdlp.download_timeout_secs, 300);
    }

    #[test]
    fn config_without_listeners_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[listen]\n").unwrap();
        assert!(AppConfig::load_or_create(&path).is_err());
    }
}
