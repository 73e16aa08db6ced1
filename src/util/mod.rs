/*
 * Copyright (c) 2003-2003-2023. Trevor Campbell and others.
 *
 * This file is part of Kelpie Flight Planner.
 *
 * Kelpie Flight Planner is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Flight Planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Flight Planner; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

use log::LevelFilter;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;

pub mod distance_format;
pub mod units;

const LOG_FILE: &str = "kelpie-route-tracker.log";

/// Process logger for applications embedding the tracker. Warnings go to the
/// terminal, everything from `file_level` up goes to a daily rolled file in
/// the home directory. Create it once at start up and keep it alive.
pub struct Logger;

impl Logger {
    pub fn new(file_level: LevelFilter) -> Self {
        Self::init_logger(file_level);
        Logger
    }

    fn init_logger(file_level: LevelFilter) {
        if let Some(home_path) = home::home_dir() {
            let log_path = home_path.join(LOG_FILE);
            let condition = RollingConditionBasic::new()
                .daily()
                .max_size(1024 * 1024);
            let file_appender =
                BasicRollingFileAppender::new(log_path, condition, 2);
            match file_appender {
                Ok(file) => {
                    let config = Self::local_config(ConfigBuilder::new());
                    let mut builder = ConfigBuilder::new();
                    builder
                        .set_location_level(LevelFilter::Error)
                        .set_time_format_rfc3339();
                    let config2 = Self::local_config(builder);
                    CombinedLogger::init(vec![
                        TermLogger::new(
                            LevelFilter::Warn,
                            config,
                            TerminalMode::Mixed,
                            ColorChoice::Auto,
                        ),
                        WriteLogger::new(
                            file_level,
                            config2,
                            file,
                        ),
                    ]).unwrap_or_else(|e| {
                        Self::print_error(&e);
                    });
                    return;
                }
                Err(e) => {
                    Self::print_error(&e);
                }
            }
        }
        TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ).unwrap_or_else(|e| {
            Self::print_error(&e);
        });
    }

    // The local offset cannot always be determined, keep UTC then
    fn local_config(mut builder: ConfigBuilder) -> Config {
        match builder.set_time_offset_to_local() {
            Ok(b) => b.build(),
            Err(b) => b.build(),
        }
    }

    fn print_error(e: &dyn Error) {
        println!("Unable to initiate logger: {}", e);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        log::logger().flush();
    }
}
