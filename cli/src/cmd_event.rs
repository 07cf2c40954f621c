// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::ToSpan;
use rota_core::{Category, EventDraft, ListSource, Rota};

use crate::event_formatter::EventFormatter;
use crate::util::parse_datetime;

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdEventList {
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List appointments")
            .arg(arg!(-v --verbose "Show contact and staff details"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
        }
    }

    pub async fn run(self, rota: &Rota) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing appointments...");
        let listing = rota.list_events().await;

        match listing.source {
            ListSource::Remote => {}
            ListSource::Cache => {
                println!("{}", "Backend unreachable, showing saved appointments".italic());
            }
            ListSource::Seed => {
                println!("{}", "Backend unreachable, showing sample appointments".italic());
            }
        }

        if listing.events.is_empty() {
            println!("{}", "No appointments found".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(self.verbose);
        print!("{}", formatter.format(&listing.events));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub category: Option<Category>,
    pub patient: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub staff: Option<String>,
    pub health_card: Option<String>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub color: Option<String>,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Book a new appointment")
            .arg(arg!(<TITLE> "Appointment title"))
            .arg(arg!(-s --start <START> "Start time, e.g. \"2026-10-05 10:00\""))
            .arg(arg!(-e --end [END] "End time; defaults to one hour after start"))
            .arg(arg!(-c --category [CATEGORY] "urgent, regular, check-up or consultation"))
            .arg(arg!(-p --patient [PATIENT] "Patient name"))
            .arg(arg!(--email [EMAIL] "Patient contact email"))
            .arg(arg!(--phone [PHONE] "Patient contact phone"))
            .arg(arg!(--staff [STAFF] "Assigned staff member"))
            .arg(arg!(--"health-card" [HEALTH_CARD] "Patient health card number"))
            .arg(arg!(--notes [NOTES] "Free-text notes"))
            .arg(arg!(--location [LOCATION] "Room number or video link"))
            .arg(arg!(--color [COLOR] "Display color hint"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            title: matches
                .get_one::<String>("TITLE")
                .cloned()
                .ok_or("Title is required for a new appointment")?,
            start: matches
                .get_one::<String>("start")
                .cloned()
                .ok_or("Start time is required for a new appointment")?,
            end: matches.get_one::<String>("end").cloned(),
            category: matches
                .get_one::<String>("category")
                .map(|c| parse_category(c))
                .transpose()?,
            patient: matches.get_one::<String>("patient").cloned(),
            email: matches.get_one::<String>("email").cloned(),
            phone: matches.get_one::<String>("phone").cloned(),
            staff: matches.get_one::<String>("staff").cloned(),
            health_card: matches.get_one::<String>("health-card").cloned(),
            notes: matches.get_one::<String>("notes").cloned(),
            location: matches.get_one::<String>("location").cloned(),
            color: matches.get_one::<String>("color").cloned(),
        })
    }

    pub async fn run(self, rota: &Rota) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "booking appointment...");
        let start = parse_datetime(&self.start)?;
        let end = match &self.end {
            Some(end) => parse_datetime(end)?,
            None => start.saturating_add(1.hour())?,
        };

        let draft = EventDraft {
            title: self.title,
            color: self.color,
            category: self.category.unwrap_or_default(),
            patient_name: self.patient,
            contact_email: self.email,
            contact_phone: self.phone,
            start,
            end,
            staff_name: self.staff,
            health_card: self.health_card,
            notes: self.notes,
            meeting_details: self.location,
        };

        let event = rota.create_event(draft).await?;
        if event.id.starts_with("local-") {
            println!(
                "{}",
                "Backend unreachable, appointment saved locally".italic()
            );
        }
        print!("{}", EventFormatter::new(true).format(&[event]));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<String>,
    pub patient: Option<String>,
    pub staff: Option<String>,
    pub notes: Option<String>,
    pub location: Option<String>,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an appointment")
            .arg(arg!(<ID> "Appointment id"))
            .arg(arg!(-t --title [TITLE] "Appointment title"))
            .arg(arg!(-s --start [START] "Start time"))
            .arg(arg!(-e --end [END] "End time"))
            .arg(arg!(-c --category [CATEGORY] "urgent, regular, check-up or consultation"))
            .arg(arg!(-p --patient [PATIENT] "Patient name"))
            .arg(arg!(--staff [STAFF] "Assigned staff member"))
            .arg(arg!(--notes [NOTES] "Free-text notes"))
            .arg(arg!(--location [LOCATION] "Room number or video link"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("ID").cloned().unwrap_or_default(),
            title: matches.get_one::<String>("title").cloned(),
            start: matches.get_one::<String>("start").cloned(),
            end: matches.get_one::<String>("end").cloned(),
            category: matches.get_one::<String>("category").cloned(),
            patient: matches.get_one::<String>("patient").cloned(),
            staff: matches.get_one::<String>("staff").cloned(),
            notes: matches.get_one::<String>("notes").cloned(),
            location: matches.get_one::<String>("location").cloned(),
        }
    }

    pub async fn run(self, rota: &Rota) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing appointment...");
        let listing = rota.list_events().await;
        let mut event = listing
            .events
            .into_iter()
            .find(|e| e.id == self.id)
            .ok_or_else(|| format!("No appointment found with id: {}", self.id))?;

        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(start) = &self.start {
            event.start = parse_datetime(start)?;
        }
        if let Some(end) = &self.end {
            event.end = parse_datetime(end)?;
        }
        if let Some(category) = &self.category {
            event.category = parse_category(category)?;
        }
        if let Some(patient) = self.patient {
            event.patient_name = Some(patient);
        }
        if let Some(staff) = self.staff {
            event.staff_name = Some(staff);
        }
        if let Some(notes) = self.notes {
            event.notes = Some(notes);
        }
        if let Some(location) = self.location {
            event.meeting_details = Some(location);
        }

        let event = rota.update_event(event).await?;
        print!("{}", EventFormatter::new(true).format(&[event]));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventRm {
    pub ids: Vec<String>,
}

impl CmdEventRm {
    pub const NAME: &str = "rm";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cancel")
            .about("Cancel appointments")
            .arg(arg!(<ID>... "Appointment ids"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: matches
                .get_many::<String>("ID")
                .map(|ids| ids.cloned().collect())
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, rota: &Rota) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "cancelling appointments...");
        for id in &self.ids {
            rota.delete_event(id).await?;
            println!("Cancelled appointment {id}");
        }
        Ok(())
    }
}

fn parse_category(value: &str) -> Result<Category, Box<dyn Error>> {
    value.parse().map_err(|()| {
        format!("Unknown category '{value}', expected urgent, regular, check-up or consultation")
            .into()
    })
}
