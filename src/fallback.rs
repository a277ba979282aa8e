//! Deterministic fallback copy.
//!
//! When the upstream path cannot complete (no credential, network fault,
//! malformed reply), the client serves copy rendered from these fixed
//! templates. End users see this text on a live site, so every variant is
//! complete, correctly worded prose in the requested language, not a stub.
//! Pure function of the request: no randomness, no I/O.

use crate::types::{ContentRequest, ContentType, GeneratedContent, Language};

/// Render presentable copy for `request` without calling the model.
pub fn render(request: &ContentRequest) -> GeneratedContent {
    let topic = request.topic.trim();
    match request.language {
        Language::De => render_de(topic, request.content_type),
        Language::En => render_en(topic, request.content_type),
    }
}

fn render_de(topic: &str, content_type: ContentType) -> GeneratedContent {
    let (title, content, excerpt) = match content_type {
        ContentType::BlogPost => (
            format!("{topic}: Was Vereine jetzt wissen sollten"),
            format!(
                "# {topic}\n\n\
                 {topic} beschäftigt derzeit viele Vereine und Organisationen. \
                 Wer sich frühzeitig mit dem Thema auseinandersetzt, verschafft \
                 sich Handlungsspielraum und vermeidet teure Schnellschüsse.\n\n\
                 ## Warum das Thema wichtig ist\n\n\
                 Ehrenamtliche Strukturen stehen unter Druck: knappe Zeit, \
                 wechselnde Zuständigkeiten und steigende Erwartungen der \
                 Mitglieder. {topic} bietet hier konkrete Ansatzpunkte, um \
                 Abläufe zu vereinfachen und Engagement zu entlasten.\n\n\
                 ## Erste Schritte\n\n\
                 Beginnen Sie mit einer ehrlichen Bestandsaufnahme: Wo kostet \
                 der Status quo heute Zeit und Nerven? Priorisieren Sie ein bis \
                 zwei Bereiche und sammeln Sie dort Erfahrungen, bevor Sie \
                 breiter ausrollen.\n\n\
                 ## Fazit\n\n\
                 {topic} ist kein Selbstzweck. Mit einem klaren Ziel, kleinen \
                 Schritten und eingebundenen Mitgliedern wird daraus ein \
                 spürbarer Gewinn für Ihren Verein."
            ),
            format!("{topic} verständlich erklärt: Einordnung, erste Schritte und Praxistipps für Vereine."),
        ),
        ContentType::ServiceDescription => (
            format!("{topic} – unser Angebot für Ihren Verein"),
            format!(
                "# {topic}\n\n\
                 Wir unterstützen Vereine und Organisationen rund um {topic} – \
                 von der ersten Einschätzung bis zur Umsetzung im Alltag.\n\n\
                 ## Was wir leisten\n\n\
                 Gemeinsam klären wir Ausgangslage und Ziele, entwickeln ein \
                 passendes Vorgehen und begleiten die Umsetzung. Schulungen für \
                 Haupt- und Ehrenamtliche gehören ebenso dazu wie praxisnahe \
                 Dokumentation.\n\n\
                 ## Für wen das Angebot gedacht ist\n\n\
                 Für Vorstände, Geschäftsstellen und engagierte Mitglieder, die \
                 {topic} strukturiert angehen möchten, ohne sich in technischen \
                 Details zu verlieren.\n\n\
                 ## So starten Sie\n\n\
                 Vereinbaren Sie ein unverbindliches Erstgespräch. Wir hören zu, \
                 ordnen ein und schlagen konkrete nächste Schritte vor."
            ),
            format!("Beratung und Schulung zu {topic}: strukturiert, praxisnah und auf Vereine zugeschnitten."),
        ),
        ContentType::AboutSection => (
            format!("Über uns: Erfahrung mit {topic}"),
            format!(
                "# Über uns\n\n\
                 Seit vielen Jahren begleiten wir Vereine und gemeinnützige \
                 Organisationen bei Veränderungsvorhaben – mit einem klaren \
                 Schwerpunkt auf {topic}.\n\n\
                 ## Unsere Arbeitsweise\n\n\
                 Wir arbeiten zugewandt, verständlich und auf Augenhöhe. Statt \
                 fertiger Konzepte aus der Schublade entwickeln wir Lösungen, \
                 die zu Ihren Strukturen und Ihrem Ehrenamt passen.\n\n\
                 ## Was uns antreibt\n\n\
                 Engagement verdient gute Rahmenbedingungen. Deshalb machen wir \
                 {topic} zugänglich – ohne Fachjargon und mit Blick auf das, \
                 was im Vereinsalltag wirklich trägt."
            ),
            format!("Wer wir sind und wie wir Vereine bei {topic} begleiten: zugewandt, verständlich, praxisnah."),
        ),
        ContentType::CaseStudy => (
            format!("Praxisbericht: {topic} erfolgreich umgesetzt"),
            format!(
                "# Praxisbericht: {topic}\n\n\
                 Ein Verein stand vor der Aufgabe, {topic} in den laufenden \
                 Betrieb zu integrieren – mit begrenzter Zeit und vielen \
                 Beteiligten.\n\n\
                 ## Ausgangslage\n\n\
                 Gewachsene Abläufe, verteilte Zuständigkeiten und wenig \
                 dokumentiertes Wissen machten Veränderungen schwer planbar.\n\n\
                 ## Vorgehen\n\n\
                 In kurzen Arbeitsphasen wurden Prioritäten geklärt, Lösungen \
                 erprobt und Verantwortliche geschult. Entscheidungen fielen \
                 gemeinsam mit dem Vorstand.\n\n\
                 ## Ergebnis\n\n\
                 Nach wenigen Monaten war {topic} fester Bestandteil des \
                 Vereinsalltags: klarere Abläufe, entlastete Ehrenamtliche und \
                 eine Grundlage, auf der sich weiter aufbauen lässt."
            ),
            format!("Wie ein Verein {topic} eingeführt hat: Ausgangslage, Vorgehen und Ergebnis im Überblick."),
        ),
    };

    GeneratedContent::new(title, content, excerpt, keywords_de(topic, content_type))
}

fn render_en(topic: &str, content_type: ContentType) -> GeneratedContent {
    let (title, content, excerpt) = match content_type {
        ContentType::BlogPost => (
            format!("{topic}: What Associations Should Know Now"),
            format!(
                "# {topic}\n\n\
                 {topic} is on the agenda of many associations and non-profits. \
                 Engaging with it early creates room to act and avoids costly \
                 quick fixes.\n\n\
                 ## Why it matters\n\n\
                 Volunteer-run structures are under pressure: limited time, \
                 changing responsibilities and rising member expectations. \
                 {topic} offers concrete levers to simplify routines and ease \
                 the load on volunteers.\n\n\
                 ## First steps\n\n\
                 Start with an honest stocktake: where does the status quo cost \
                 time and energy today? Pick one or two areas, gather \
                 experience there, and only then roll out more broadly.\n\n\
                 ## Conclusion\n\n\
                 {topic} is not an end in itself. With a clear goal, small \
                 steps and involved members it becomes a tangible gain for your \
                 organisation."
            ),
            format!("{topic} explained: context, first steps and practical guidance for associations."),
        ),
        ContentType::ServiceDescription => (
            format!("{topic} – Our Service for Your Organisation"),
            format!(
                "# {topic}\n\n\
                 We support associations and non-profits with {topic} – from an \
                 initial assessment through to everyday implementation.\n\n\
                 ## What we deliver\n\n\
                 Together we clarify your starting point and goals, develop a \
                 fitting approach and accompany the rollout. Training for staff \
                 and volunteers is part of the package, as is practical \
                 documentation.\n\n\
                 ## Who it is for\n\n\
                 Boards, offices and committed members who want to approach \
                 {topic} in a structured way without getting lost in technical \
                 detail.\n\n\
                 ## How to start\n\n\
                 Book a no-obligation first conversation. We listen, assess and \
                 propose concrete next steps."
            ),
            format!("Consulting and training on {topic}: structured, practical and tailored to associations."),
        ),
        ContentType::AboutSection => (
            format!("About Us: Experience with {topic}"),
            format!(
                "# About us\n\n\
                 For many years we have accompanied associations and \
                 non-profits through change – with a clear focus on {topic}.\n\n\
                 ## How we work\n\n\
                 We work approachably, plainly and at eye level. Rather than \
                 off-the-shelf concepts, we develop solutions that fit your \
                 structures and your volunteers.\n\n\
                 ## What drives us\n\n\
                 Commitment deserves good conditions. That is why we make \
                 {topic} accessible – free of jargon and focused on what \
                 actually holds up in day-to-day operations."
            ),
            format!("Who we are and how we support organisations with {topic}: approachable, plain, practical."),
        ),
        ContentType::CaseStudy => (
            format!("Case Study: Implementing {topic}"),
            format!(
                "# Case study: {topic}\n\n\
                 An association faced the task of integrating {topic} into \
                 ongoing operations – with limited time and many stakeholders.\n\n\
                 ## Starting point\n\n\
                 Organically grown routines, distributed responsibilities and \
                 little documented knowledge made change hard to plan.\n\n\
                 ## Approach\n\n\
                 In short working phases, priorities were clarified, solutions \
                 trialled and owners trained. Decisions were taken jointly with \
                 the board.\n\n\
                 ## Outcome\n\n\
                 Within a few months, {topic} was part of everyday operations: \
                 clearer routines, relieved volunteers and a foundation to \
                 build on."
            ),
            format!("How one association introduced {topic}: starting point, approach and outcome at a glance."),
        ),
    };

    GeneratedContent::new(title, content, excerpt, keywords_en(topic, content_type))
}

fn keywords_de(topic: &str, content_type: ContentType) -> Vec<String> {
    let type_keyword = match content_type {
        ContentType::BlogPost => "ratgeber",
        ContentType::ServiceDescription => "beratung",
        ContentType::AboutSection => "über uns",
        ContentType::CaseStudy => "praxisbericht",
    };
    vec![
        topic.to_lowercase(),
        type_keyword.to_string(),
        "verein".to_string(),
        "ehrenamt".to_string(),
        "digitalisierung".to_string(),
    ]
}

fn keywords_en(topic: &str, content_type: ContentType) -> Vec<String> {
    let type_keyword = match content_type {
        ContentType::BlogPost => "guide",
        ContentType::ServiceDescription => "consulting",
        ContentType::AboutSection => "about us",
        ContentType::CaseStudy => "case study",
    };
    vec![
        topic.to_lowercase(),
        type_keyword.to_string(),
        "association".to_string(),
        "volunteering".to_string(),
        "digitalisation".to_string(),
    ]
}
