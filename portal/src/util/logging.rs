// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use env_logger::Logger;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

/// Rewrites the level of records whose target starts with `target_prefix`.
#[derive(Debug, Clone)]
pub struct LevelRewrite {
    pub target_prefix: String,
    pub from: Level,
    pub to: Level,
}

impl LevelRewrite {
    pub fn new(target_prefix: &str, from: Level, to: Level) -> Self {
        Self {
            target_prefix: target_prefix.to_string(),
            from,
            to,
        }
    }
}

/// Worker start/stop chatter from the actix server is demoted to DEBUG.
pub fn default_rewrites() -> Vec<LevelRewrite> {
    vec![LevelRewrite::new("actix_server", Level::Info, Level::Debug)]
}

struct RewritingLogger {
    inner: Logger,
    rewrites: Vec<LevelRewrite>,
}

impl RewritingLogger {
    fn effective_level(&self, target: &str, level: Level) -> Level {
        effective_level(&self.rewrites, target, level)
    }
}

fn effective_level(rewrites: &[LevelRewrite], target: &str, level: Level) -> Level {
    rewrites
        .iter()
        .find(|rule| rule.from == level && target.starts_with(&rule.target_prefix))
        .map(|rule| rule.to)
        .unwrap_or(level)
}

impl Log for RewritingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let rewritten = Metadata::builder()
            .level(self.effective_level(metadata.target(), metadata.level()))
            .target(metadata.target())
            .build();
        self.inner.enabled(&rewritten)
    }

    fn log(&self, record: &Record) {
        let rewritten = Record::builder()
            .level(self.effective_level(record.target(), record.level()))
            .target(record.target())
            .args(*record.args())
            .module_path(record.module_path())
            .file(record.file())
            .line(record.line())
            .build();
        self.inner.log(&rewritten);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn build_logger(level: LevelFilter) -> Logger {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .build()
}

pub fn init_logger(level: LevelFilter, rewrites: Vec<LevelRewrite>) -> Result<(), SetLoggerError> {
    let logger = RewritingLogger {
        inner: build_logger(level),
        rewrites,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
