//! Prompt templates for the upstream chat-completion call.
//!
//! Two-part prompts: a fixed persona/style instruction per content type and
//! language (system role) and an interpolated task instruction ending in a
//! strict-JSON reply contract (user role). Unknown content types never reach
//! this layer as anything other than the blog-post variant.

use crate::types::{ContentRequest, ContentType, Language, Tone};

/// Persona/style instruction for the system role.
pub fn system_prompt(content_type: ContentType, language: Language) -> &'static str {
    match (language, content_type) {
        (Language::De, ContentType::BlogPost) => {
            "Du bist ein erfahrener Fachautor für einen Beratungs- und \
             Schulungsanbieter im Vereinswesen. Du schreibst fundierte, gut \
             strukturierte Blogartikel in Markdown mit Zwischenüberschriften, \
             die praktische Orientierung geben, ohne werblich zu klingen."
        }
        (Language::De, ContentType::ServiceDescription) => {
            "Du bist Texter für die Leistungsseiten eines Beratungs- und \
             Schulungsanbieters. Du beschreibst Angebote klar, nutzenorientiert \
             und konkret: was geleistet wird, für wen und mit welchem Ergebnis. \
             Du formatierst in Markdown mit Zwischenüberschriften."
        }
        (Language::De, ContentType::AboutSection) => {
            "Du bist Texter für die Über-uns-Seite eines Beratungs- und \
             Schulungsanbieters. Du schreibst persönlich und glaubwürdig über \
             Erfahrung, Haltung und Arbeitsweise, in Markdown, ohne Floskeln."
        }
        (Language::De, ContentType::CaseStudy) => {
            "Du bist Fachautor für Praxisberichte eines Beratungs- und \
             Schulungsanbieters. Du beschreibst Ausgangslage, Vorgehen und \
             messbares Ergebnis eines Projekts sachlich und nachvollziehbar, \
             in Markdown mit Zwischenüberschriften."
        }
        (Language::En, ContentType::BlogPost) => {
            "You are an experienced writer for a consulting and training \
             provider serving non-profit associations. You write well-founded, \
             clearly structured blog articles in markdown with subheadings, \
             offering practical guidance without sounding promotional."
        }
        (Language::En, ContentType::ServiceDescription) => {
            "You are a copywriter for the service pages of a consulting and \
             training provider. You describe offerings clearly and concretely: \
             what is delivered, for whom, and with what outcome. You format in \
             markdown with subheadings."
        }
        (Language::En, ContentType::AboutSection) => {
            "You are a copywriter for the about page of a consulting and \
             training provider. You write personally and credibly about \
             experience, values and ways of working, in markdown, without \
             clichés."
        }
        (Language::En, ContentType::CaseStudy) => {
            "You are a writer of case studies for a consulting and training \
             provider. You describe a project's starting point, approach and \
             measurable outcome factually, in markdown with subheadings."
        }
    }
}

/// Task instruction for the user role, ending in the JSON reply contract.
pub fn user_prompt(request: &ContentRequest) -> String {
    let tone = tone_instruction(request.tone, request.language);
    match request.language {
        Language::De => format!(
            "Schreibe einen Text zum Thema \"{topic}\". {tone} Der Text soll \
             300 bis 500 Wörter umfassen und in Markdown formatiert sein.\n\n\
             Antworte ausschließlich mit einem JSON-Objekt in genau dieser \
             Form, ohne weiteren Text:\n\
             {{\"title\": \"Titel (max. 60 Zeichen)\", \
             \"content\": \"Markdown-Text\", \
             \"excerpt\": \"Kurzbeschreibung (max. 150 Zeichen)\", \
             \"keywords\": [\"fünf\", \"passende\", \"Schlagwörter\"]}}",
            topic = request.topic,
            tone = tone,
        ),
        Language::En => format!(
            "Write a piece about \"{topic}\". {tone} The text should run 300 \
             to 500 words and be formatted in markdown.\n\n\
             Reply with nothing but a JSON object in exactly this shape:\n\
             {{\"title\": \"title (max 60 chars)\", \
             \"content\": \"markdown body\", \
             \"excerpt\": \"short description (max 150 chars)\", \
             \"keywords\": [\"five\", \"fitting\", \"keywords\"]}}",
            topic = request.topic,
            tone = tone,
        ),
    }
}

fn tone_instruction(tone: Tone, language: Language) -> &'static str {
    match (language, tone) {
        (Language::De, Tone::Professional) => "Schreibe sachlich und professionell.",
        (Language::De, Tone::Conversational) => {
            "Schreibe locker und ansprechbar, in direkter Anrede."
        }
        (Language::De, Tone::Academic) => {
            "Schreibe präzise und wissenschaftlich fundiert, mit klarer Argumentation."
        }
        (Language::En, Tone::Professional) => "Write in a factual, professional register.",
        (Language::En, Tone::Conversational) => {
            "Write in a relaxed, approachable register, addressing the reader directly."
        }
        (Language::En, Tone::Academic) => {
            "Write precisely and rigorously, with a clear line of argument."
        }
    }
}
