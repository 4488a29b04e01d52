pub mod command;
pub mod prompt;
pub mod render;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use color_print::cstr;
use command::{choose, Command};
use crossterm::style::Stylize;
use eyre::Result;
use prompt::generate_prompt;
use tracing::{debug, info};

use crate::assistant::{self, ChatSession, Transcript, TurnInFlight, TurnOutcome, CHAT_ERROR_MESSAGE};
use crate::content::{self, ContentItem};
use crate::planner::{Interest, PlanForm, TravelStyle, TripDuration, TripPlanner};
use crate::provider::{LanguageModel, Role};
use crate::search::search;

const WELCOME_TEXT: &str = cstr!(
    "
<bold>Stille, Natur und Geschichte. Willkommen in Bad Belzig.</bold>
Kurort im Naturpark Hoher Fläming: Burg Eisenhardt, SteinTherme und weite Wälder.

Schreiben Sie einfach eine Frage, um einen Local zu fragen,
oder erkunden Sie die Seite:

/discover     Sehen & Entdecken
/plan         KI-Reiseplaner (siehe /form)
/search       Inhalte durchsuchen
/help         Alle Befehle
"
);

const HELP_TEXT: &str = cstr!(
    "
<bold>Bad Belzig Guide</bold>

<cyan>Seite</cyan>
/home              Willkommen und Highlights
/discover          Sehen & Entdecken
/show <<id>         Details zu einem Ort (z.B. /show altstadt)
/food              Gastronomie
/stay              Planen & Buchen
/history           Stadtgeschichte
/info              Tourist-Information
/map               Karte
/gallery           Impressionen
/search <<text>     Inhalte durchsuchen

<cyan>Reiseplaner</cyan>
/form              Auswahl anzeigen
/interest <<n>      Interesse an- oder abwählen
/duration <<n>      Aufenthaltsdauer wählen
/style <<n>         Reisestil wählen
/plan              Plan erstellen

<cyan>Frag einen Local</cyan>
<<Frage>            Nachricht an den Chat-Assistenten
/clear             Neues Gespräch beginnen

/quit              Beenden
"
);

/// The interactive page: static sections, search, planner and chat.
pub struct PageContext {
    output: Box<dyn Write>,
    interactive: bool,
    section: Option<&'static str>,
    pool: Vec<ContentItem>,
    form: PlanForm,
    model: Arc<dyn LanguageModel>,
    planner: TripPlanner,
    session: ChatSession,
    transcript: Transcript,
}

impl PageContext {
    pub fn new(output: Box<dyn Write>, model: Arc<dyn LanguageModel>, interactive: bool) -> Self {
        Self {
            output,
            interactive,
            section: None,
            pool: content::search_pool(),
            form: PlanForm::default(),
            planner: TripPlanner::new(model.clone()),
            session: assistant::start_session(model.clone()),
            model,
            transcript: Transcript::new(),
        }
    }

    pub async fn run(&mut self) -> Result<ExitCode> {
        if self.interactive {
            self.print_welcome()?;
            self.run_interactive().await?;
        }

        Ok(ExitCode::SUCCESS)
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "{}", WELCOME_TEXT)?;
        render::highlights(&mut *self.output)?;
        for message in self.transcript.get_messages() {
            writeln!(self.output)?;
            render::chat_message(&mut *self.output, message)?;
        }
        Ok(())
    }

    async fn run_interactive(&mut self) -> Result<()> {
        let mut rl = prompt::rl()?;

        loop {
            let prompt_text = generate_prompt(self.section);
            let readline = rl.readline(&prompt_text);

            match readline {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    rl.add_history_entry(line.as_str());

                    if matches!(Command::parse(&line), Ok(Command::Quit)) {
                        break;
                    }

                    if let Err(e) = self.handle_input(&line).await {
                        writeln!(self.output, "Fehler: {}", e)?;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "readline finished");
                    break;
                }
            }
        }

        info!("leaving the page");
        Ok(())
    }

    pub async fn handle_input(&mut self, input: &str) -> Result<()> {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(e) => {
                writeln!(self.output, "{}", e.to_string().red())?;
                return Ok(());
            }
        };
        debug!(?command, "handling page command");

        match command {
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Quit => {}
            Command::Home => {
                self.section = None;
                self.print_welcome()?;
            }
            Command::Discover => self.show_section("sehen", render::discover)?,
            Command::Show(id) => match content::attraction(&id) {
                Some(attraction) => {
                    self.section = Some("sehen");
                    render::attraction_detail(&mut *self.output, attraction)?;
                }
                None => {
                    let ids: Vec<_> = content::ATTRACTIONS.iter().map(|a| a.id).collect();
                    writeln!(self.output, "Unbekannter Ort \"{id}\". Verfügbar: {}", ids.join(", "))?;
                }
            },
            Command::Food => self.show_section("gastronomie", render::gastronomy)?,
            Command::Stay => self.show_section("planen", render::offers)?,
            Command::History => self.show_section("geschichte", render::timeline)?,
            Command::Info => self.show_section("info", render::tourist_info)?,
            Command::Map => self.show_section("karte", render::map)?,
            Command::Gallery => self.show_section("impressionen", render::gallery)?,
            Command::Search(query) => self.search(&query)?,
            Command::Interest(arg) => match choose(&arg, &Interest::ALL, Interest::label) {
                Some(interest) => {
                    self.form.toggle_interest(interest);
                    self.show_form()?;
                }
                None => writeln!(self.output, "Unbekanntes Interesse \"{arg}\" (1-{}).", Interest::ALL.len())?,
            },
            Command::Duration(arg) => match choose(&arg, &TripDuration::ALL, TripDuration::label) {
                Some(duration) => {
                    self.form.duration = duration;
                    self.show_form()?;
                }
                None => writeln!(self.output, "Unbekannte Dauer \"{arg}\" (1-{}).", TripDuration::ALL.len())?,
            },
            Command::Style(arg) => match choose(&arg, &TravelStyle::ALL, TravelStyle::label) {
                Some(style) => {
                    self.form.style = style;
                    self.show_form()?;
                }
                None => writeln!(self.output, "Unbekannter Reisestil \"{arg}\" (1-{}).", TravelStyle::ALL.len())?,
            },
            Command::Form => self.show_form()?,
            Command::Plan => self.plan().await?,
            Command::Clear => {
                self.session = assistant::start_session(self.model.clone());
                self.transcript.clear();
                writeln!(self.output, "Neues Gespräch gestartet.")?;
            }
            Command::Chat(message) => self.ask(&message).await?,
        }

        Ok(())
    }

    fn show_section(
        &mut self,
        section: &'static str,
        draw: fn(&mut dyn Write) -> std::io::Result<()>,
    ) -> Result<()> {
        self.section = Some(section);
        draw(&mut *self.output)?;
        Ok(())
    }

    fn show_form(&mut self) -> Result<()> {
        self.section = Some("planer");
        render::plan_form(&mut *self.output, &self.form)?;
        Ok(())
    }

    pub fn search(&mut self, query: &str) -> Result<()> {
        let results = search(&self.pool, query);
        debug!(query, hits = results.len(), "search");
        render::search_results(&mut *self.output, query, &results)?;
        Ok(())
    }

    pub fn set_form(&mut self, form: PlanForm) {
        self.form = form;
    }

    pub async fn plan(&mut self) -> Result<()> {
        let Some(request) = self.form.request() else {
            writeln!(self.output, "{}", "Bitte wählen Sie mindestens ein Interesse aus (/interest <n>).".yellow())?;
            return Ok(());
        };

        writeln!(self.output, "{}", "Plan wird erstellt...".dark_grey())?;
        self.output.flush()?;

        let plan = self.planner.generate_plan(&request).await;
        writeln!(self.output)?;
        render::markup(&mut *self.output, &plan)?;
        Ok(())
    }

    pub async fn ask(&mut self, message: &str) -> Result<()> {
        let Self { output, session, transcript, .. } = self;

        render::speaker(&mut **output, Role::Model)?;
        output.flush()?;

        let mut write_error = None;
        let outcome = assistant::send_and_record(session, transcript, message, |fragment| {
            let written = write!(output, "{}", fragment.text).and_then(|_| output.flush());
            if let Err(e) = written {
                write_error.get_or_insert(e);
            }
        })
        .await;

        match outcome {
            Ok(TurnOutcome::Completed) => {
                writeln!(output)?;
                if let Some(reply) = transcript.last().filter(|m| m.role == Role::Model) {
                    render::sources(&mut **output, &reply.sources)?;
                }
            }
            Ok(TurnOutcome::Failed) => {
                writeln!(output)?;
                writeln!(output, "{}", CHAT_ERROR_MESSAGE.red())?;
            }
            Err(TurnInFlight) => {
                writeln!(output, "{}", "Bitte warten, die letzte Antwort läuft noch.".yellow())?;
            }
        }

        if let Some(e) = write_error {
            return Err(e.into());
        }
        Ok(())
    }
}
