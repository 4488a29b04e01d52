//! AI itinerary planner.

use std::sync::Arc;

use clap::ValueEnum;
use tracing::{debug, error, warn};

use crate::markup::Markup;
use crate::provider::LanguageModel;

pub const PLAN_EMPTY_MESSAGE: &str = "Leider konnte kein Plan erstellt werden. Die Antwort war leer.";
pub const PLAN_ERROR_MESSAGE: &str = "Ein Fehler ist aufgetreten. Bitte überprüfen Sie das Protokoll für weitere Details und versuchen Sie es später erneut.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Interest {
    HistoryCulture,
    NatureActive,
    RelaxationWellness,
    CulinaryRegional,
    FamilyActivities,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::HistoryCulture,
        Interest::NatureActive,
        Interest::RelaxationWellness,
        Interest::CulinaryRegional,
        Interest::FamilyActivities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::HistoryCulture => "Geschichte & Kultur",
            Interest::NatureActive => "Natur & Aktiv",
            Interest::RelaxationWellness => "Entspannung & Wellness",
            Interest::CulinaryRegional => "Kulinarik & Regionales",
            Interest::FamilyActivities => "Familienaktivitäten",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TripDuration {
    #[default]
    OneDay,
    Weekend,
    LongWeekend,
}

impl TripDuration {
    pub const ALL: [TripDuration; 3] = [
        TripDuration::OneDay,
        TripDuration::Weekend,
        TripDuration::LongWeekend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TripDuration::OneDay => "Ein Tag",
            TripDuration::Weekend => "Wochenende (2 Tage)",
            TripDuration::LongWeekend => "Langes Wochenende (3 Tage)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TravelStyle {
    #[default]
    Balanced,
    Relaxed,
    Active,
    Budget,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 4] = [
        TravelStyle::Balanced,
        TravelStyle::Relaxed,
        TravelStyle::Active,
        TravelStyle::Budget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TravelStyle::Balanced => "Ausgeglichen",
            TravelStyle::Relaxed => "Entspannt",
            TravelStyle::Active => "Aktiv & vollgepackt",
            TravelStyle::Budget => "Budget-freundlich",
        }
    }
}

/// A validated plan request. Interests keep the order they were chosen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlanRequest {
    interests: Vec<Interest>,
    duration: TripDuration,
    style: TravelStyle,
}

impl TripPlanRequest {
    /// Returns `None` when no interest is selected.
    pub fn new(interests: Vec<Interest>, duration: TripDuration, style: TravelStyle) -> Option<Self> {
        if interests.is_empty() {
            return None;
        }
        let mut unique = Vec::with_capacity(interests.len());
        for interest in interests {
            if !unique.contains(&interest) {
                unique.push(interest);
            }
        }
        Some(Self { interests: unique, duration, style })
    }

    pub fn prompt(&self) -> String {
        let interests = self
            .interests
            .iter()
            .map(Interest::label)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Du bist ein freundlicher und sachkundiger Reiseführer für Bad Belzig, einen Kurort im Naturpark Hoher Fläming in Deutschland. Erstelle einen Vorschlag für einen Reiseplan für einen Besucher.
- Interessen des Besuchers: {interests}.
- Aufenthaltsdauer: {duration}.
- Bevorzugter Reisestil: {style}.

Der Plan sollte klar gegliedert sein (z.B. nach Vormittag, Nachmittag, Abend oder Tag 1, Tag 2). Erwähne konkrete Orte wie die Burg Eisenhardt, die SteinTherme und den Naturpark Hoher Fläming. Gib auch Empfehlungen für Restaurants oder Cafés, wenn es passt. Halte den Ton einladend und begeisternd. Antworte auf Deutsch. Formatiere die Antwort mit Markdown für Überschriften, Listen und Fettdruck.",
            duration = self.duration.label(),
            style = self.style.label(),
        )
    }
}

/// Selection state behind the plan form.
#[derive(Debug, Clone, Default)]
pub struct PlanForm {
    pub interests: Vec<Interest>,
    pub duration: TripDuration,
    pub style: TravelStyle,
}

impl PlanForm {
    /// Select the interest, or deselect it when already chosen.
    pub fn toggle_interest(&mut self, interest: Interest) -> bool {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
            false
        } else {
            self.interests.push(interest);
            true
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.interests.is_empty()
    }

    pub fn request(&self) -> Option<TripPlanRequest> {
        TripPlanRequest::new(self.interests.clone(), self.duration, self.style)
    }
}

#[derive(Clone)]
pub struct TripPlanner {
    model: Arc<dyn LanguageModel>,
}

impl TripPlanner {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Ask the model for an itinerary.
    ///
    /// Never fails: an empty reply or a provider error is turned into a fixed
    /// message for the visitor and logged.
    pub async fn generate_plan(&self, request: &TripPlanRequest) -> Markup {
        let prompt = request.prompt();
        debug!(interests = request.interests.len(), duration = ?request.duration, style = ?request.style, "generating trip plan");

        match self.model.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("model returned an empty trip plan");
                Markup::parse(PLAN_EMPTY_MESSAGE)
            }
            Ok(text) => Markup::parse(&text),
            Err(e) => {
                error!(error = %e, "error generating itinerary");
                Markup::parse(PLAN_ERROR_MESSAGE)
            }
        }
    }
}
