//! Terminal rendering of the page sections.

use std::io::{Result, Write};

use crossterm::style::Stylize;

use crate::assistant::ChatMessage;
use crate::content::{
    self, Attraction, ContentItem, ATTRACTIONS, GALLERY, HIGHLIGHTS, MAP_CENTER, MAP_LOCATIONS,
    MAP_ZOOM, OFFERS, RESTAURANTS, TIMELINE, TOURIST_INFO,
};
use crate::markup::{Inline, Markup};
use crate::planner::{Interest, PlanForm, TravelStyle, TripDuration};
use crate::provider::{Role, Source};

/// The REPL command that shows the section behind a page anchor.
pub fn link_hint(href: &str) -> Option<String> {
    if let Some(attraction) = content::attraction(href) {
        return Some(format!("/show {}", attraction.id));
    }
    let command = match href {
        "#gastgeber" | "#stellplatz" | "#steintherme" => "/stay",
        "#geschichte" => "/history",
        "#info" => "/info",
        "#gastronomie" => "/food",
        "#karte" => "/map",
        _ => return None,
    };
    Some(command.to_string())
}

pub fn osm_link(lat: f64, lng: f64, zoom: u8) -> String {
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map={zoom}/{lat}/{lng}")
}

fn heading(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold().cyan())?;
    writeln!(out, "{}", "─".repeat(title.chars().count()).dark_grey())
}

fn hint(out: &mut dyn Write, href: &str) -> Result<()> {
    if let Some(command) = link_hint(href) {
        writeln!(out, "   {} {}", "→".dark_grey(), command.dark_grey())?;
    }
    Ok(())
}

pub fn highlights(out: &mut dyn Write) -> Result<()> {
    heading(out, "Highlights")?;
    for h in HIGHLIGHTS {
        writeln!(out, " {} {}", "•".cyan(), h.title.bold())?;
        writeln!(out, "   {}", h.body)?;
        writeln!(out, "   {}", h.cta_label.underlined())?;
        hint(out, h.cta_href)?;
    }
    Ok(())
}

pub fn discover(out: &mut dyn Write) -> Result<()> {
    heading(out, "Sehen & Entdecken")?;
    for a in ATTRACTIONS {
        writeln!(out, " {} {} {}", "•".cyan(), a.title.bold(), format!("[{}]", a.id).dark_grey())?;
        writeln!(out, "   {}", a.text)?;
        writeln!(out, "   {}", a.chips.join(" · ").italic())?;
    }
    writeln!(out)?;
    writeln!(out, "Details: /show <id>")
}

/// The detail view of an attraction.
pub fn attraction_detail(out: &mut dyn Write, attraction: &Attraction) -> Result<()> {
    heading(out, attraction.title)?;
    writeln!(out, "{}", attraction.details)?;
    writeln!(out)?;
    writeln!(out, "{} {}", "Bild:".dark_grey(), attraction.image.dark_grey())
}

pub fn gastronomy(out: &mut dyn Write) -> Result<()> {
    heading(out, "Gastronomie")?;
    for r in RESTAURANTS {
        writeln!(out, " {} {}", "•".cyan(), r.name.bold())?;
        writeln!(out, "   {}", r.desc)?;
    }
    Ok(())
}

pub fn offers(out: &mut dyn Write) -> Result<()> {
    heading(out, "Planen & Buchen")?;
    for offer in OFFERS {
        writeln!(out, " {} {}", "•".cyan(), offer.title.bold())?;
        writeln!(out, "   {}", offer.text)?;
        for item in offer.items {
            if item.price.is_empty() {
                writeln!(out, "     - {} ({})", item.name, item.note.dark_grey())?;
            } else {
                writeln!(out, "     - {} ({}) {}", item.name, item.note.dark_grey(), item.price.green())?;
            }
        }
    }
    Ok(())
}

pub fn timeline(out: &mut dyn Write) -> Result<()> {
    heading(out, "Stadtgeschichte")?;
    let width = TIMELINE.iter().map(|t| t.year.chars().count()).max().unwrap_or(0);
    for entry in TIMELINE {
        writeln!(out, " {:>width$}  {}", entry.year, entry.text, width = width)?;
    }
    Ok(())
}

pub fn tourist_info(out: &mut dyn Write) -> Result<()> {
    let info = &TOURIST_INFO;
    heading(out, "Tourist-Information")?;
    writeln!(out, "{}", info.office.name.bold())?;
    writeln!(out, "{}, {}", info.office.street, info.office.zip)?;
    writeln!(out, "Tel. {}  ·  {}", info.office.phone, info.office.email)?;
    writeln!(out)?;
    for hours in info.hours {
        writeln!(out, "  {:<22} {}", hours.label, hours.value)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", info.station.name.bold())?;
    writeln!(out, "{}, {}", info.station.street, info.station.zip)?;
    writeln!(out, "Tel. {}  ·  {}", info.station.phone, info.station.email)?;
    for hours in info.station.hours {
        writeln!(out, "  {hours}")?;
    }
    Ok(())
}

pub fn map(out: &mut dyn Write) -> Result<()> {
    heading(out, "Karte")?;
    for loc in MAP_LOCATIONS {
        writeln!(out, " {} {} ({:.3}, {:.3})", "📍", loc.name.bold(), loc.lat, loc.lng)?;
        writeln!(out, "   {}", loc.desc)?;
        writeln!(out, "   {}", osm_link(loc.lat, loc.lng, 16).underlined())?;
        hint(out, loc.href)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Übersicht: {}",
        osm_link(MAP_CENTER.0, MAP_CENTER.1, MAP_ZOOM).underlined()
    )?;
    writeln!(out, "{}", "© OpenStreetMap contributors".dark_grey())
}

pub fn gallery(out: &mut dyn Write) -> Result<()> {
    heading(out, "Impressionen")?;
    for image in GALLERY {
        writeln!(out, " {} {}", "•".cyan(), image.alt)?;
        writeln!(out, "   {}", image.src.dark_grey())?;
    }
    Ok(())
}

pub fn search_results(out: &mut dyn Write, query: &str, results: &[&ContentItem]) -> Result<()> {
    if results.is_empty() {
        return writeln!(out, "Keine Treffer für \"{query}\".");
    }
    writeln!(out, "{} Treffer für \"{query}\":", results.len())?;
    for item in results {
        writeln!(out, " {} {} {}", "•".cyan(), item.title.bold(), format!("({})", item.section).dark_grey())?;
        writeln!(out, "   {}", item.text)?;
        hint(out, &item.href)?;
    }
    Ok(())
}

pub fn plan_form(out: &mut dyn Write, form: &PlanForm) -> Result<()> {
    heading(out, "Reiseplaner")?;
    writeln!(out, "Interessen (/interest <n>):")?;
    for (i, interest) in Interest::ALL.iter().enumerate() {
        let mark = if form.interests.contains(interest) { "[x]" } else { "[ ]" };
        writeln!(out, "  {mark} {}. {}", i + 1, interest.label())?;
    }
    writeln!(out, "Dauer (/duration <n>):")?;
    for (i, duration) in TripDuration::ALL.iter().enumerate() {
        let mark = if form.duration == *duration { "(•)" } else { "( )" };
        writeln!(out, "  {mark} {}. {}", i + 1, duration.label())?;
    }
    writeln!(out, "Reisestil (/style <n>):")?;
    for (i, style) in TravelStyle::ALL.iter().enumerate() {
        let mark = if form.style == *style { "(•)" } else { "( )" };
        writeln!(out, "  {mark} {}. {}", i + 1, style.label())?;
    }
    if form.can_submit() {
        writeln!(out, "{}", "Plan erstellen mit /plan".green())
    } else {
        writeln!(out, "{}", "Wählen Sie mindestens ein Interesse, um einen Plan zu erstellen.".dark_grey())
    }
}

pub fn markup(out: &mut dyn Write, markup: &Markup) -> Result<()> {
    write_inlines(out, markup.nodes(), false, false)?;
    writeln!(out)
}

fn write_inlines(out: &mut dyn Write, nodes: &[Inline], bold: bool, italic: bool) -> Result<()> {
    for node in nodes {
        match node {
            Inline::Text(text) => {
                let mut styled = text.as_str().stylize();
                if bold {
                    styled = styled.bold();
                }
                if italic {
                    styled = styled.italic();
                }
                write!(out, "{styled}")?;
            }
            Inline::Strong(children) => write_inlines(out, children, true, italic)?,
            Inline::Emphasis(children) => write_inlines(out, children, bold, true)?,
            Inline::LineBreak => writeln!(out)?,
        }
    }
    Ok(())
}

pub fn speaker(out: &mut dyn Write, role: Role) -> Result<()> {
    match role {
        Role::User => write!(out, "{} ", "Du:".bold().green()),
        Role::Model => write!(out, "{} ", "Local:".bold().cyan()),
    }
}

pub fn chat_message(out: &mut dyn Write, message: &ChatMessage) -> Result<()> {
    write!(out, "{} ", message.sent_at.format("%H:%M").to_string().dark_grey())?;
    speaker(out, message.role)?;
    markup(out, &Markup::with_line_breaks(&message.text))?;
    sources(out, &message.sources)
}

pub fn sources(out: &mut dyn Write, sources: &[Source]) -> Result<()> {
    if sources.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", "Quellen:".bold())?;
    for source in sources {
        writeln!(out, "  🔗 {} {}", source.title, format!("<{}>", source.uri).dark_grey())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Transcript;
    use crate::content::search_pool;
    use crate::search::search;

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn link_hints_resolve_page_anchors() {
        assert_eq!(link_hint("#altstadt").as_deref(), Some("/show altstadt"));
        assert_eq!(link_hint("#steintherme").as_deref(), Some("/stay"));
        assert_eq!(link_hint("#geschichte").as_deref(), Some("/history"));
        assert_eq!(link_hint("#nirgendwo"), None);
    }

    #[test]
    fn map_lists_every_pin_with_a_link() {
        let text = render(|out| map(out));
        for loc in MAP_LOCATIONS {
            assert!(text.contains(loc.name));
            assert!(text.contains(&osm_link(loc.lat, loc.lng, 16)));
        }
        assert!(text.contains("map=13/52.14/12.55"));
    }

    #[test]
    fn osm_link_format() {
        assert_eq!(
            osm_link(52.141, 12.592, 16),
            "https://www.openstreetmap.org/?mlat=52.141&mlon=12.592#map=16/52.141/12.592"
        );
    }

    #[test]
    fn search_results_show_hits_or_notice() {
        let pool = search_pool();
        let hits = search(&pool, "luther");
        let text = render(|out| search_results(out, "luther", &hits));
        assert!(text.contains("1 Treffer"));
        assert!(text.contains("1530"));
        assert!(text.contains("/history"));

        let text = render(|out| search_results(out, "ostsee", &[]));
        assert!(text.contains("Keine Treffer"));
    }

    #[test]
    fn plan_form_marks_selection() {
        let mut form = PlanForm::default();
        form.toggle_interest(Interest::NatureActive);
        let text = render(|out| plan_form(out, &form));
        assert!(text.contains("[x] 2. Natur & Aktiv"));
        assert!(text.contains("[ ] 1. Geschichte & Kultur"));
        assert!(text.contains("(•) 1. Ein Tag"));
        assert!(text.contains("/plan"));
    }

    #[test]
    fn markup_renders_text_and_breaks() {
        let text = render(|out| markup(out, &Markup::parse("**Tag 1**\nBurg")));
        assert!(text.contains("Tag 1"));
        assert!(!text.contains("**"));
        assert!(text.contains("Burg"));
        assert!(text.contains('\n'));
    }

    #[test]
    fn chat_message_lists_sources() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("Frage").unwrap();
        transcript.apply_fragment(crate::provider::Fragment {
            text: "Antwort".into(),
            sources: Some(vec![Source { uri: "https://bad-belzig.de".into(), title: "Bad Belzig".into() }]),
        });
        let reply = transcript.last().unwrap();
        let text = render(|out| chat_message(out, reply));
        assert!(text.contains("Antwort"));
        assert!(text.contains("Quellen:"));
        assert!(text.contains("https://bad-belzig.de"));
    }

    #[test]
    fn sections_render_their_content() {
        assert!(render(|out| highlights(out)).contains("SteinTherme"));
        assert!(render(|out| discover(out)).contains("[wandern]"));
        assert!(render(|out| gastronomy(out)).contains("Springbach-Mühle"));
        assert!(render(|out| offers(out)).contains("ab 87 €"));
        assert!(render(|out| timeline(out)).contains("Eröffnung der SteinTherme."));
        assert!(render(|out| tourist_info(out)).contains("Marktplatz 1"));
        assert!(render(|out| gallery(out)).contains("Radtour im Fläming"));
        let detail = content::attraction("naturpark").unwrap();
        assert!(render(|out| attraction_detail(out, detail)).contains("Rabenstein"));
    }
}
