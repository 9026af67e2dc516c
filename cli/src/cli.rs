// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taqvim_core::{APP_NAME, CalendarSystem, DateKey, Direction, StringTable, Taqvim};

use crate::config::parse_config;
use crate::event_formatter::EventFormatter;
use crate::grid_formatter::GridFormatter;

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version)]
#[command(about = "A dual Persian/Gregorian calendar with day events")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show a month grid
    Show {
        /// Calendar system to display; switches (and saves) the active one
        #[arg(short, long, value_name = "SYSTEM")]
        system: Option<CalendarSystem>,

        /// Months to move from the current one, negative for the past
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Hide the other system's day numbers
        #[arg(long)]
        no_secondary: bool,
    },

    /// Show today in both systems, with today's events
    Today,

    /// Manage the events of a day
    #[command(subcommand)]
    Event(EventCommands),

    /// Switch the active calendar system
    Switch {
        system: CalendarSystem,
    },

    /// Show or hide the secondary calendar in the grid
    Secondary {
        #[arg(action = clap::ArgAction::Set)]
        show: bool,
    },
}

#[derive(Debug, Subcommand)]
enum EventCommands {
    /// Add an event to a day
    Add {
        /// Day key in the active system, e.g. 1403-5-14
        date: DateKey,

        title: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List a day's events
    List {
        date: DateKey,
    },

    /// Delete an event by id
    Delete {
        date: DateKey,
        id: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let mut config = parse_config(self.config.as_deref())?;
        config.normalize()?;
        let strings = match &config.strings_path {
            Some(path) => StringTable::load(path),
            None => StringTable::default(),
        };

        let mut app = Taqvim::new(config)?;
        let events_fmt = EventFormatter::new(strings);
        let mut out = io::stdout();

        match self.command.unwrap_or(Commands::Show {
            system: None,
            offset: 0,
            no_secondary: false,
        }) {
            Commands::Show {
                system,
                offset,
                no_secondary,
            } => {
                if let Some(system) = system {
                    app.switch_calendar(system)?;
                }
                let direction = if offset < 0 {
                    Direction::PrevMonth
                } else {
                    Direction::NextMonth
                };
                for _ in 0..offset.unsigned_abs() {
                    app.navigate(direction);
                }

                let secondary = app.show_secondary_calendar() && !no_secondary;
                let formatter = GridFormatter::new(app.active_system()).with_secondary(secondary);
                let current = app.current_date(app.active_system());
                formatter.write(&mut out, &current, app.day_grid())?;
            }

            Commands::Today => {
                app.navigate(Direction::Today);
                let persian = app.current_date(CalendarSystem::Persian);
                let gregorian = app.current_date(CalendarSystem::Gregorian);
                println!(
                    "{} {} {}",
                    persian.day(),
                    CalendarSystem::Persian.month_name(persian.month()),
                    persian.year()
                );
                println!(
                    "{} {} {}",
                    gregorian.day(),
                    CalendarSystem::Gregorian.month_name(gregorian.month()),
                    gregorian.year()
                );

                let key = app.today_key();
                println!();
                events_fmt.write(&mut out, &key, app.events_for_date(&key))?;
            }

            Commands::Event(EventCommands::Add {
                date,
                title,
                description,
            }) => {
                let event = app.add_event(&date, &title, &description)?;
                println!("Added \"{}\" on {date}", event.title);
            }

            Commands::Event(EventCommands::List { date }) => {
                events_fmt.write(&mut out, &date, app.events_for_date(&date))?;
            }

            Commands::Event(EventCommands::Delete { date, id }) => {
                app.delete_event(&date, &id)?;
                println!("Deleted {id} from {date}");
            }

            Commands::Switch { system } => {
                app.switch_calendar(system)?;
                println!("Active calendar: {system}");
            }

            Commands::Secondary { show } => {
                app.set_show_secondary(show)?;
                println!(
                    "Secondary calendar {}",
                    if show { "shown" } else { "hidden" }
                );
            }
        }

        Ok(())
    }
}
