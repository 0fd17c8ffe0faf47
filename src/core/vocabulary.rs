//! The static vocabulary table and topic filtering.
//!
//! Every entry is compiled in; the table is never mutated.  Filtering hands
//! out `&'static Word` references so questions and flashcards can borrow
//! straight from the table.

use std::fmt;
use std::str::FromStr;

use super::error::StudyError;

// ───────────────────────────────────────── types ─────────────

/// The economics subtopic a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Climate,
    Labor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
        })
    }
}

/// A single vocabulary entry: English/French term pair plus definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Word {
    pub id: &'static str,
    pub english: &'static str,
    pub french: &'static str,
    pub definition: &'static str,
    pub category: Category,
    pub part_of_speech: Option<PartOfSpeech>,
}

// ───────────────────────────────────────── filter ────────────

/// Topic selection on the menu.  `All` passes the whole table through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Climate,
    Labor,
}

impl CategoryFilter {
    /// Display order on the menu.
    pub const ALL: &[CategoryFilter] = &[
        CategoryFilter::All,
        CategoryFilter::Climate,
        CategoryFilter::Labor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Topics",
            CategoryFilter::Climate => "Climate Change",
            CategoryFilter::Labor => "Labor Relations",
        }
    }

    /// Key used in the config file and on the command line.
    pub fn config_key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Climate => "climate",
            CategoryFilter::Labor => "labor",
        }
    }

    /// Next topic in menu order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn matches(self, word: &Word) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Climate => word.category == Category::Climate,
            CategoryFilter::Labor => word.category == Category::Labor,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "climate" => Ok(CategoryFilter::Climate),
            "labor" | "labour" => Ok(CategoryFilter::Labor),
            other => Err(StudyError::UnknownCategory(other.to_string())),
        }
    }
}

/// The active word list for `filter`, in table order.
pub fn filter_words(filter: CategoryFilter) -> Vec<&'static Word> {
    VOCABULARY.iter().filter(|w| filter.matches(w)).collect()
}

/// Look a word up by its stable id (e.g. `"c3"`).
#[cfg(test)]
pub(crate) fn find(id: &str) -> Option<&'static Word> {
    VOCABULARY.iter().find(|w| w.id == id)
}

// ───────────────────────────────────────── data ──────────────

pub static VOCABULARY: &[Word] = &[
    // ── climate change ───────────────────────────────────────
    Word {
        id: "c1",
        english: "Climate Change",
        french: "Changement climatique",
        definition: "Long-term shifts in temperature and weather patterns.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c2",
        english: "Greenhouse Effect",
        french: "Effet de serre",
        definition: "Warming caused by gases trapping heat in the atmosphere.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c3",
        english: "Externality",
        french: "Externalité",
        definition: "A cost or benefit imposed on third parties not reflected in market prices.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c4",
        english: "Negative Externality",
        french: "Externalité négative",
        definition: "A harmful side effect of economic activity, such as pollution.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c5",
        english: "Carbon Pricing",
        french: "Tarification du carbone",
        definition: "Policy that assigns a cost to carbon emissions.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c6",
        english: "Carbon Tax",
        french: "Taxe carbone",
        definition: "A tax levied on the carbon content of fossil fuels.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c7",
        english: "Trade-off",
        french: "Compromis / Arbitrage",
        definition: "An opportunity cost.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c8",
        english: "Cap-and-Trade System",
        french: "Système de plafonnement et d'échange",
        definition: "Market-based policy limiting total emissions through tradable permits.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c9",
        english: "Mitigation",
        french: "Atténuation",
        definition: "Efforts to reduce the magnitude of climate change.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c10",
        english: "Adaptation",
        french: "Adaptation",
        definition: "Adjustments to reduce vulnerability to climate impacts.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c11",
        english: "Free-Rider Problem",
        french: "Problème du passager clandestin",
        definition: "Incentive to benefit from others’ efforts without contributing.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c12",
        english: "Cost–Benefit Analysis",
        french: "Analyse coûts-avantages",
        definition: "Comparison of costs and benefits of a policy.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c13",
        english: "Discount Rate",
        french: "Taux d'actualisation",
        definition: "Rate used to compare present and future costs and benefits.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c14",
        english: "Social Cost of Carbon",
        french: "Coût social du carbone",
        definition: "Estimated economic damage caused by one additional ton of CO₂ emissions.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c15",
        english: "Renewable Energy",
        french: "Énergie renouvelable",
        definition: "Energy from sources that are naturally replenished.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c16",
        english: "Sustainable Development",
        french: "Développement durable",
        definition: "Economic growth that meets present needs without harming future generations.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c17",
        english: "International Climate Agreement",
        french: "Accord international sur le climat",
        definition: "Cooperative treaties aimed at reducing global emissions.",
        category: Category::Climate,
        part_of_speech: None,
    },
    Word {
        id: "c18",
        english: "Emit",
        french: "Émettre",
        definition: "To release greenhouse gases into the atmosphere.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c19",
        english: "Internalize",
        french: "Internaliser",
        definition: "To incorporate external costs into economic decision-making.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c20",
        english: "Mitigate",
        french: "Atténuer",
        definition: "To reduce the magnitude or rate of climate change.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c21",
        english: "Adapt",
        french: "S'adapter",
        definition: "To adjust behavior or systems to climate impacts.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c22",
        english: "Decarbonize",
        french: "Décarboner",
        definition: "To reduce carbon dependence in production or consumption.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c23",
        english: "Abate",
        french: "Réduire / Diminuer (les émissions)",
        definition: "To reduce emissions or environmental damage.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c24",
        english: "Discount",
        french: "Actualiser",
        definition: "To value future costs and benefits in present terms.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c25",
        english: "Accumulate",
        french: "Accumuler",
        definition: "To build up over time (e.g., emissions or carbon stock).",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "c26",
        english: "Stabilize",
        french: "Stabiliser",
        definition: "To prevent further increases in temperature or emissions.",
        category: Category::Climate,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    // ── labor relations ──────────────────────────────────────
    Word {
        id: "l1",
        english: "Labor Contract",
        french: "Contrat de travail",
        definition: "Formal agreement specifying employment terms.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l2",
        english: "Implicit Contract",
        french: "Contrat implicite",
        definition: "Unwritten expectations between employer and employee.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l3",
        english: "Human Capital",
        french: "Capital humain",
        definition: "Skills and knowledge embodied in workers.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l4",
        english: "Monitoring",
        french: "Surveillance / Contrôle",
        definition: "Observation or measurement of employee performance.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l5",
        english: "Oversight",
        french: "Supervision",
        definition: "Supervision or review to ensure compliance and performance.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l6",
        english: "Incentive Scheme",
        french: "Système d'incitation",
        definition: "Structured rewards and penalties guiding behavior.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l7",
        english: "Job Match Quality",
        french: "Qualité de l'appariement",
        definition: "Degree of fit between worker skills and job requirements.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l8",
        english: "Wage Premium",
        french: "Prime salariale",
        definition: "Pay above the market-clearing level.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l9",
        english: "Turnover",
        french: "Rotation du personnel",
        definition: "Rate at which employees leave the firm.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l10",
        english: "Bargaining Power",
        french: "Pouvoir de négociation",
        definition: "Ability to influence wage or contract outcomes.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l11",
        english: "Trade Union / Labor Union",
        french: "Syndicat",
        definition: "Organization of workers to represent and protect employees.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l12",
        english: "Field",
        french: "Domaine / Secteur",
        definition: "An industry or occupational domain.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Noun),
    },
    Word {
        id: "l13",
        english: "Hire",
        french: "Embaucher",
        definition: "To employ a worker in exchange for compensation.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l14",
        english: "Dismiss / Lay off / Sack / Fire",
        french: "Licencier / Renvoyer",
        definition: "To terminate an employment relationship.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l15",
        english: "Negotiate",
        french: "Négocier",
        definition: "To discuss and agree on employment terms.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l16",
        english: "Shirk",
        french: "Tirer au flanc / Se dérober",
        definition: "To supply less effort than agreed or expected.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l17",
        english: "Monitor",
        french: "Surveiller",
        definition: "To observe employee effort or performance.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l18",
        english: "Incentivize",
        french: "Inciter / Motiver",
        definition: "To motivate behavior through rewards or penalties.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l19",
        english: "Oversee",
        french: "Superviser",
        definition: "To supervise activities to ensure compliance and performance.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l20",
        english: "Retain",
        french: "Retenir / Fidéliser",
        definition: "To keep workers within the firm over time.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l21",
        english: "Invest (in)",
        french: "Investir (dans)",
        definition: "To devote resources to developing human capital.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l22",
        english: "Comply",
        french: "Se conformer / Respecter",
        definition: "To act in accordance with contracts or workplace rules.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l23",
        english: "Bargain",
        french: "Négocier / Marchander",
        definition: "To engage in wage or contract negotiations.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l24",
        english: "Screen",
        french: "Sélectionner / Filtrer",
        definition: "To evaluate worker characteristics before hiring.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
    Word {
        id: "l25",
        english: "Downsize",
        french: "Réduire les effectifs",
        definition: "To reduce the size of a company’s workforce.",
        category: Category::Labor,
        part_of_speech: Some(PartOfSpeech::Verb),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_both_topics() {
        assert_eq!(VOCABULARY.len(), 51);
        assert_eq!(filter_words(CategoryFilter::Climate).len(), 26);
        assert_eq!(filter_words(CategoryFilter::Labor).len(), 25);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = VOCABULARY.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), VOCABULARY.len());
    }

    #[test]
    fn filter_only_yields_matching_category() {
        for w in filter_words(CategoryFilter::Climate) {
            assert_eq!(w.category, Category::Climate);
        }
        for w in filter_words(CategoryFilter::Labor) {
            assert_eq!(w.category, Category::Labor);
        }
    }

    #[test]
    fn filter_all_is_the_whole_table_in_order() {
        let all = filter_words(CategoryFilter::All);
        assert_eq!(all.len(), VOCABULARY.len());
        for (a, b) in all.iter().zip(VOCABULARY.iter()) {
            assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn category_filter_parses_and_cycles() {
        assert_eq!("Climate".parse::<CategoryFilter>(), Ok(CategoryFilter::Climate));
        assert_eq!(" labor ".parse::<CategoryFilter>(), Ok(CategoryFilter::Labor));
        assert!(matches!(
            "space".parse::<CategoryFilter>(),
            Err(StudyError::UnknownCategory(_))
        ));
        assert_eq!(CategoryFilter::All.next(), CategoryFilter::Climate);
        assert_eq!(CategoryFilter::Labor.next(), CategoryFilter::All);
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("c19").map(|w| w.french), Some("Internaliser"));
        assert!(find("x1").is_none());
    }
}
