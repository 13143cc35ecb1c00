//! Section labels for exported plans, per output language.
//!
//! Only Latin-script languages are offered: exports are set in the standard
//! PDF fonts with WinAnsi encoding, which cannot draw other scripts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the exporter can label sections in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

/// Fixed text the paginator places around plan content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub learning_plan: &'static str,
    pub duration: &'static str,
    pub weeks: &'static str,
    pub hours_per_week: &'static str,
    pub topics: &'static str,
    pub time_to_master: &'static str,
    pub weekly_schedule: &'static str,
    pub week: &'static str,
    pub goals: &'static str,
    pub daily_breakdown: &'static str,
    pub milestones: &'static str,
    pub assessment_methods: &'static str,
    pub additional_tips: &'static str,
}

const ENGLISH: Labels = Labels {
    learning_plan: "Learning Plan",
    duration: "Duration",
    weeks: "weeks",
    hours_per_week: "hours per week",
    topics: "Topics",
    time_to_master: "Time to master",
    weekly_schedule: "Weekly Schedule",
    week: "Week",
    goals: "Goals",
    daily_breakdown: "Daily Breakdown",
    milestones: "Milestones",
    assessment_methods: "Assessment Methods",
    additional_tips: "Additional Tips",
};

const SPANISH: Labels = Labels {
    learning_plan: "Plan de aprendizaje",
    duration: "Duración",
    weeks: "semanas",
    hours_per_week: "horas por semana",
    topics: "Temas",
    time_to_master: "Tiempo para dominarlo",
    weekly_schedule: "Horario semanal",
    week: "Semana",
    goals: "Objetivos",
    daily_breakdown: "Desglose diario",
    milestones: "Hitos",
    assessment_methods: "Métodos de evaluación",
    additional_tips: "Consejos adicionales",
};

const FRENCH: Labels = Labels {
    learning_plan: "Plan d'apprentissage",
    duration: "Durée",
    weeks: "semaines",
    hours_per_week: "heures par semaine",
    topics: "Sujets",
    time_to_master: "Temps de maîtrise",
    weekly_schedule: "Programme hebdomadaire",
    week: "Semaine",
    goals: "Objectifs",
    daily_breakdown: "Répartition quotidienne",
    milestones: "Étapes clés",
    assessment_methods: "Méthodes d'évaluation",
    additional_tips: "Conseils supplémentaires",
};

const GERMAN: Labels = Labels {
    learning_plan: "Lernplan",
    duration: "Dauer",
    weeks: "Wochen",
    hours_per_week: "Stunden pro Woche",
    topics: "Themen",
    time_to_master: "Zeit bis zur Beherrschung",
    weekly_schedule: "Wochenplan",
    week: "Woche",
    goals: "Ziele",
    daily_breakdown: "Tagesplan",
    milestones: "Meilensteine",
    assessment_methods: "Bewertungsmethoden",
    additional_tips: "Zusätzliche Tipps",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Spanish => &SPANISH,
            Locale::French => &FRENCH,
            Locale::German => &GERMAN,
        }
    }

    /// BCP 47 language tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
            Locale::French => "fr",
            Locale::German => "de",
        }
    }

    /// Recognise a language tag ("es-MX") or name ("Spanish", "Español").
    pub fn from_language(language: &str) -> Option<Locale> {
        let language = language.trim().to_lowercase();
        let primary = language.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" | "english" => Some(Locale::English),
            "es" | "spanish" | "español" | "espanol" => Some(Locale::Spanish),
            "fr" | "french" | "français" | "francais" => Some(Locale::French),
            "de" | "german" | "deutsch" => Some(Locale::German),
            _ => None,
        }
    }

    /// The explicit choice if there is one, else whatever the plan was
    /// written in, else English.
    pub fn resolve(explicit: Option<Locale>, response_language: Option<&str>) -> Locale {
        explicit
            .or_else(|| response_language.and_then(Locale::from_language))
            .unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_language(s).ok_or_else(|| {
            format!("unsupported language '{}', expected one of: en, es, fr, de", s)
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
