use super::{
    Attraction, GalleryImage, Highlight, MapLocation, Offer, Office, OpeningHours, PriceItem,
    Restaurant, StationOffice, TimelineEntry, TouristInfo,
};

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Burg Eisenhardt",
        body: "Die Burg ragt über der Altstadt. Vom Butterturm hat man einen weiten Blick in den Hohen Fläming.",
        cta_label: "Mehr zur Altstadt",
        cta_href: "#altstadt",
        image: "https://source.unsplash.com/random/800x600?castle,germany",
    },
    Highlight {
        title: "SteinTherme",
        body: "Thermalsole stärkt Herz und Kreislauf und entlastet Muskeln und Gelenke. BadeWelt und SaunaWelt laden ein.",
        cta_label: "Öffnungszeiten",
        cta_href: "#steintherme",
        image: "https://source.unsplash.com/random/800x600?spa,wellness",
    },
    Highlight {
        title: "Naturpark Hoher Fläming",
        body: "827 km² Schutzgebiet, davon über 90% Landschaftsschutz. Wiesen, Wälder, Felder, Obstbaumalleen und Burgen.",
        cta_label: "Zum Naturpark",
        cta_href: "#naturpark",
        image: "https://source.unsplash.com/random/800x600?forest,hiking",
    },
];

pub static ATTRACTIONS: &[Attraction] = &[
    Attraction {
        id: "altstadt",
        title: "Historische Altstadt",
        text: "Gepflegte Gassen, Feldsteinkirchen und das prägende Wahrzeichen Burg Eisenhardt.",
        chips: &["Stadtgeschichte", "Sehenswürdigkeiten", "Rundgänge"],
        image: "https://source.unsplash.com/random/800x600?old-town,germany",
        details: "Die Altstadt von Bad Belzig schmiegt sich an den Fuß der Burg Eisenhardt. Entdecken Sie die Marienkirche, das historische Rathaus und die liebevoll restaurierten Fachwerkhäuser. Ein Spaziergang durch die engen Gassen fühlt sich an wie eine Reise in die Vergangenheit.",
    },
    Attraction {
        id: "naturpark",
        title: "Naturpark Hoher Fläming",
        text: "Hügelige, waldreiche Landschaft mit Burgenviereck, Obstbaumalleen und weiten Blicken.",
        chips: &["827 km²", ">90% LSG", "Ausflugsziele"],
        image: "https://source.unsplash.com/random/800x600?brandenburg,nature",
        details: "Der Naturpark Hoher Fläming ist der drittgrößte in Brandenburg. Er bietet ein Netz aus Wander-, Rad- und Reitwegen. Entdecken Sie die 'vier Burgen' (Eisenhardt, Rabenstein, Ziesar, Wiesenburg) und genießen Sie die unberührte Natur.",
    },
    Attraction {
        id: "rad",
        title: "Radfahren",
        text: "Europaradweg R1 und Tour Brandenburg verlaufen durch Bad Belzig. Leichtes Profil mit dem Hagelberg als höchstem Punkt.",
        chips: &["Fernradwege", "Fahrradboxen", "Familienfreundlich"],
        image: "https://source.unsplash.com/random/800x600?cycling,path",
        details: "Die Region ist ein Paradies für Radfahrer. Neben den großen Fernradwegen gibt es zahlreiche lokale Rundtouren, die zu Mühlen, Burgen und durch idyllische Dörfer führen. E-Bike-Ladestationen sind ebenfalls verfügbar.",
    },
    Attraction {
        id: "wandern",
        title: "Wandern",
        text: "Panoramawanderweg, Terrainkurwege und der Internationale Kunstwanderweg zwischen Bad Belzig und Wiesenburg/Mark.",
        chips: &["17,7 km Panorama", "Kunst & Burgen", "Barrierearme Wege"],
        image: "https://source.unsplash.com/random/800x600?hiking,trail",
        details: "Der 17,7 km lange Panoramawanderweg 'Burgenstieg' bietet fantastische Ausblicke. Der Kunstwanderweg kombiniert Naturerlebnis mit über 20 Kunstinstallationen. Für Gesundheitsbewusste gibt es Terrainkurwege mit verschiedenen Schwierigkeitsgraden.",
    },
    Attraction {
        id: "events",
        title: "Veranstaltungen",
        text: "Von Burg- und Stadtführungen bis Volksfesten. Gäste sind herzlich willkommen.",
        chips: &["Jeden Sonntag 11 Uhr: Führung", "Bad Belzig APP"],
        image: "https://source.unsplash.com/random/800x600?festival,market",
        details: "Das ganze Jahr über finden in Bad Belzig Veranstaltungen statt. Höhepunkte sind das Altstadtsommer-Festival, der Burgenlauf und der traditionelle Weihnachtsmarkt auf dem Burghof. Die Tourist-Information hält einen aktuellen Veranstaltungskalender bereit.",
    },
];

pub static RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        name: "Restaurant Kurpark15",
        desc: "Direkt an der SteinTherme, moderne deutsche Küche.",
        image: "https://source.unsplash.com/random/800x600?modern,restaurant",
    },
    Restaurant {
        name: "Burg-Gasthof Eisenhardt",
        desc: "Regionale Spezialitäten im historischen Ambiente des Burghofs.",
        image: "https://source.unsplash.com/random/800x600?historic,inn",
    },
    Restaurant {
        name: "Springbach-Mühle",
        desc: "Restaurant mit Forellenteichen und eigener Mühle im Grünen.",
        image: "https://source.unsplash.com/random/800x600?country,restaurant",
    },
];

pub static GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "https://source.unsplash.com/random/800x600?brandenburg,landscape",
        alt: "Landschaft im Hohen Fläming",
    },
    GalleryImage {
        src: "https://source.unsplash.com/random/800x600?burg-eisenhardt,castle",
        alt: "Burg Eisenhardt bei Tag",
    },
    GalleryImage {
        src: "https://source.unsplash.com/random/800x600?thermal,pool",
        alt: "Entspannung in der SteinTherme",
    },
    GalleryImage {
        src: "https://source.unsplash.com/random/800x600?german,village",
        alt: "Gasse in der Altstadt",
    },
    GalleryImage {
        src: "https://source.unsplash.com/random/800x600?hiking,couple",
        alt: "Wanderer im Naturpark",
    },
    GalleryImage {
        src: "https://source.unsplash.com/random/800x600?bicycle,tour",
        alt: "Radtour im Fläming",
    },
];

pub static MAP_LOCATIONS: &[MapLocation] = &[
    MapLocation {
        lat: 52.141,
        lng: 12.592,
        name: "Burg Eisenhardt",
        desc: "Historische Burg und Wahrzeichen.",
        href: "#altstadt",
    },
    MapLocation {
        lat: 52.146,
        lng: 12.583,
        name: "SteinTherme",
        desc: "Thermalbad und Wellness.",
        href: "#steintherme",
    },
    MapLocation {
        lat: 52.142,
        lng: 12.589,
        name: "Marktplatz / T-Info",
        desc: "Zentrum der Altstadt.",
        href: "#info",
    },
    MapLocation {
        lat: 52.115,
        lng: 12.65,
        name: "Hagelberg",
        desc: "Höchste Erhebung im Fläming.",
        href: "#wandern",
    },
];

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry { year: "9. Jh.", text: "Heveller besiedeln das Belziger Land und errichten eine Burg." },
    TimelineEntry { year: "997", text: "Erste Erwähnung als \"burgwardium belizi\" in einer Kaiserurkunde Ottos III." },
    TimelineEntry { year: "1465", text: "Kurfürst Ernst verleiht der Burg den Namen \"Eisenhardt\"." },
    TimelineEntry { year: "1530", text: "Evangelische Visitation unter Leitung Martin Luthers." },
    TimelineEntry { year: "1636", text: "Zerstörungen im Dreißigjährigen Krieg, späterer Wiederaufbau." },
    TimelineEntry { year: "1702", text: "Volle Stadtrechte." },
    TimelineEntry { year: "1815", text: "Belzig wird preußisch." },
    TimelineEntry { year: "1914", text: "Sandberg und Schloss Eisenhardt werden eingemeindet." },
    TimelineEntry { year: "1995", text: "Staatlich anerkannter Luftkurort." },
    TimelineEntry { year: "1996", text: "Erschließung einer Thermalsolequelle in 775 m Tiefe." },
    TimelineEntry { year: "2002", text: "Eröffnung der SteinTherme." },
    TimelineEntry { year: "2009", text: "Anerkennung zum Thermalsole-Heilbad." },
    TimelineEntry { year: "2010", text: "Die Stadt führt den Namen Bad Belzig." },
];

pub static OFFERS: &[Offer] = &[
    Offer {
        title: "Ihre Gastgeber",
        text: "Hotels, Pensionen, Ferienwohnungen, Privatzimmer und Gruppenhäuser.",
        items: &[
            PriceItem { name: "Springbach Mühle", note: "Hotel", price: "ab 45 €" },
            PriceItem { name: "Landhaus Alte Schmiede", note: "Hotel", price: "ab 80 €" },
            PriceItem { name: "Paulinen Hof Seminarhotel", note: "Hotel", price: "ab 87 €" },
            PriceItem { name: "Pension Zum Waldblick", note: "Pension", price: "ab 40 €" },
        ],
        href: "#gastgeber",
    },
    Offer {
        title: "Reisemobilstellplatz",
        text: "12 Stellplätze an der SteinTherme. Strom, Wasser und Abwasser gegen Gebühr.",
        items: &[
            PriceItem { name: "Stellplatz 24h", note: "inkl. Kurbeitrag für Fahrer", price: "11 €" },
            PriceItem { name: "Strom", note: "pro kWh", price: "1 €" },
            PriceItem { name: "Frischwasser", note: "10 Liter", price: "1 €" },
        ],
        href: "#stellplatz",
    },
    Offer {
        title: "Unsere Thermalsole",
        text: "Wohltuend für Herz, Kreislauf und Bewegungsapparat. SteinTherme täglich ab 10 Uhr geöffnet.",
        items: &[
            PriceItem { name: "BadeWelt & SaunaWelt", note: "Entspannung", price: "" },
            PriceItem { name: "Kurpark15", note: "Restaurant täglich ab 12 Uhr", price: "" },
        ],
        href: "#steintherme",
    },
];

pub static TOURIST_INFO: TouristInfo = TouristInfo {
    office: Office {
        name: "Tourist-Information Bad Belzig",
        street: "Marktplatz 1",
        zip: "14806 Bad Belzig",
        phone: "(033841) 94900",
        email: "tourist.information@bad-belzig.de",
    },
    hours: &[
        OpeningHours { label: "April bis September", value: "Mo - Fr 9 - 17 Uhr" },
        OpeningHours { label: "Oktober bis März", value: "Mo - Fr 10 - 17 Uhr" },
        OpeningHours { label: "Ganzjährig Samstag", value: "10 - 15 Uhr" },
        OpeningHours { label: "Sonn- & Feiertag", value: "10 - 13 Uhr" },
    ],
    station: StationOffice {
        name: "T-Info Punkt am Fläming-Bahnhof",
        street: "Am Bahnhof 11",
        zip: "14806 Bad Belzig",
        phone: "(033841) 798553",
        hours: &["Mo - Fr 05:30 - 18:00", "Sa, So, Feiertag 07:30 - 17:00"],
        email: "info@flaeming-bahnhof.de",
    },
};
